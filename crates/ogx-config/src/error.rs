//! Configuration loading errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `OGX_*` variable could not be parsed into [`crate::OgxConfig`].
    #[error("failed to load ogx configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A section is present but cannot be used as-is.
    #[error("[{section}] is not configured: {hint}")]
    NotConfigured { section: String, hint: String },

    /// A field holds a value outside its accepted range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
