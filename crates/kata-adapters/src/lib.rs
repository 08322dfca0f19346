//! Infrastructure adapters for kata.
//!
//! This crate implements the ports defined in `kata-core::application::ports`.
//! It contains the filesystem access and non-interactive prompting.

pub mod filesystem;
pub mod prompter;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompter::{PipedPrompter, ScriptedPrompter, Transcript};
