//! Domain value objects: KataName, FunctionName.
//!
//! # Design
//!
//! These are validated newtypes. Holding one proves the naming rule in
//! `validation.rs` was checked; the rest of the crate never re-validates.

use crate::domain::{
    case::{to_camel_case, to_title_case},
    error::DomainError,
    validation::{is_valid_identifier, is_valid_kata_name},
};
use std::fmt;
use std::str::FromStr;

// ── KataName ──────────────────────────────────────────────────────────────────

/// Kebab-case name of a kata, e.g. `roman-numerals`.
///
/// Used verbatim as the file stem of the generated source and test files.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KataName(String);

impl KataName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if is_valid_kata_name(&raw) {
            Ok(Self(raw))
        } else {
            Err(DomainError::InvalidKataName { name: raw })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Camel-case suggestion for the exported function.
    ///
    /// Not always a valid identifier (`game-2` stays `game-2`), so callers
    /// still validate it through [`FunctionName::parse`].
    pub fn default_function_name(&self) -> String {
        to_camel_case(&self.0)
    }

    /// Human-readable heading, e.g. `Roman Numerals`.
    pub fn title(&self) -> String {
        to_title_case(&self.0)
    }
}

impl fmt::Display for KataName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for KataName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for KataName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── FunctionName ──────────────────────────────────────────────────────────────

/// Identifier of the exported function stub, e.g. `romanNumerals`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionName(String);

impl FunctionName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if is_valid_identifier(&raw) {
            Ok(Self(raw))
        } else {
            Err(DomainError::InvalidFunctionName { name: raw })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FunctionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for FunctionName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
