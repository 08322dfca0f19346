//! Kata Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for `init-kata`,
//! the interactive scaffolder that adds a new kata (source stub, vitest
//! test, `KATA.md`) to a TypeScript practice project.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            kata-cli (init-kata)         │
//! │   (args, config, logging, terminal IO)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │        (KataService, safe_write)        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │          (Filesystem, Prompter)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     kata-adapters (Infrastructure)      │
//! │ (LocalFilesystem, PipedPrompter, etc.)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │(KataName, Session, templates, WritePlan)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kata_core::prelude::*;
//!
//! fn init(fs: Box<dyn Filesystem>, prompter: &mut dyn Prompter) -> KataResult<InitReport> {
//!     let service = KataService::new(fs, ProjectLayout::new("."));
//!     service.run(prompter)
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        KataService, Prompts, safe_write,
        ports::{Filesystem, Prompter},
    };
    pub use crate::domain::{
        ArtifactKind, FunctionName, InitReport, KataName, PlannedWrite, ProjectLayout,
        RelativePath, Session, WriteOutcome, WritePlan,
    };
    pub use crate::error::{KataError, KataResult};
}
