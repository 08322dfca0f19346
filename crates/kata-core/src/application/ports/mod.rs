//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `kata-adapters` (and the terminal prompter in `kata-cli`)
//! implement them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application
//!   - `Filesystem`: existence checks, reads and writes
//!   - `Prompter`: asking the user a question

pub mod output;

pub use output::{Filesystem, Prompter};

#[cfg(test)]
pub use output::MockFilesystem;
