//! Application services - orchestrate use cases.

pub mod kata_service;
pub mod safe_write;

pub use kata_service::{KataService, Prompts};
pub use safe_write::safe_write;
