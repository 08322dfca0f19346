//! Application layer for kata scaffolding.
//!
//! This layer contains:
//! - **Services**: the init workflow (`KataService`) and the safe writer
//! - **Ports**: interface definitions (traits) for the filesystem and prompts
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming or templating rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{KataService, Prompts, safe_write};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, Prompter};

pub use error::ApplicationError;
