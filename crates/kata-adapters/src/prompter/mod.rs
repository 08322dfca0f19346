//! Prompter adapters.
//!
//! The interactive terminal prompter lives in `kata-cli`, next to the
//! `dialoguer` dependency it needs.

mod piped;
mod scripted;

pub use piped::PipedPrompter;
pub use scripted::{ScriptedPrompter, Transcript};
