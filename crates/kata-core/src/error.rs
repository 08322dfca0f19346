//! Unified error handling for kata-core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for kata-core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KataError {
    /// A naming rule was violated.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Talking to the filesystem or the user failed.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl KataError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Cancelled,
    Internal,
}

/// Convenient result type alias.
pub type KataResult<T> = Result<T, KataError>;
