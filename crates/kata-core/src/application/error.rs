//! Application layer errors.
//!
//! These errors represent failures talking to the outside world, not
//! naming-rule violations. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Reading an answer failed.
    #[error("Failed to read answer: {reason}")]
    PromptFailed { reason: String },

    /// The user interrupted a prompt.
    #[error("Operation cancelled")]
    Cancelled,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Run the tool from the project root or pass --root".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Answers can also be piped, one per line:".into(),
                "  printf 'fizzbuzz\\n\\n\\nn\\n' | init-kata".into(),
            ],
            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "Files already created are kept; re-run to finish".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::Cancelled,
        }
    }
}
