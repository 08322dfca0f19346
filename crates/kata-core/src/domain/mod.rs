//! Core domain layer for kata scaffolding.
//!
//! This module contains pure logic with no I/O: naming rules, case
//! conversions, the validated answer types, file templates and the
//! `index.html` marker rewrite. Filesystem and prompting are reached only
//! through the ports in `crate::application`.
//!
//! ## Constraints
//!
//! - **No I/O**: no filesystem, terminal, or network access
//! - **Total functions**: validators and renderers never fail or panic
//! - **Validated newtypes**: `KataName` / `FunctionName` carry the proof
//!   that a naming rule was checked
pub mod case;
pub mod dom;
pub mod entities;
pub mod error;
pub mod templates;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use case::{to_camel_case, to_title_case};
pub use dom::{COMMENTED_SCRIPT_TAG, SCRIPT_TAG, enable_script_tag};
pub use entities::{
    ArtifactKind, InitReport, PlannedWrite, ProjectLayout, RelativePath, Session, WriteOutcome,
    WritePlan, parse_yes,
};
pub use error::{DomainError, ErrorCategory};
pub use validation::{is_valid_identifier, is_valid_kata_name};
pub use value_objects::{FunctionName, KataName};
