//! Command handlers. `init-kata` has exactly one.

pub mod init;
