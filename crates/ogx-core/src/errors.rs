//! Cross-cutting error types for ogx.
//!
//! Transport errors live in `ogx-client`, configuration errors in
//! `ogx-config`. This module only covers input validation shared by the
//! client and the CLI.

use thiserror::Error;

/// Errors raised while validating caller input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A request is missing the fields the read API needs.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A string could not be parsed into a known value.
    #[error("Invalid {field}: '{value}'")]
    InvalidValue { field: String, value: String },
}
