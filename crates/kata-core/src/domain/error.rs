// ============================================================================
// domain/error.rs - NAMING RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid kata name '{name}'")]
    InvalidKataName { name: String },

    #[error("Invalid function name '{name}'")]
    InvalidFunctionName { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidKataName { .. } => vec![
                "Use lowercase letters, numbers, and hyphens".into(),
                "Start with a lowercase letter".into(),
                "Examples: fizzbuzz, roman-numerals".into(),
            ],
            Self::InvalidFunctionName { .. } => vec![
                "Must be a valid JavaScript identifier".into(),
                "Start with a letter, '_' or '$'; continue with letters, digits, '_' or '$'".into(),
                "Leave the answer empty to accept the suggested default".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidKataName { .. } | Self::InvalidFunctionName { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
