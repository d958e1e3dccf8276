//! Centralized error handling.
//!
//! Every failure to produce a usable configuration is a [`ConfigError`],
//! raised at startup before any collaborator reads the record.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    // Presence
    #[error("missing required configuration field `{field}`")]
    Missing { field: &'static str },

    #[error("configuration field `{field}` must not be empty")]
    Empty { field: &'static str },

    // Format
    #[error("configuration field `{field}` is not a valid URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("configuration field `{field}` is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },

    // Selection
    #[error("unknown deployment target `{0}` (expected one of: development, production)")]
    UnknownTarget(String),

    // Sources
    #[error("failed to read configuration file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Name of the offending field, when the error concerns a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigError::Missing { field }
            | ConfigError::Empty { field }
            | ConfigError::InvalidUrl { field, .. }
            | ConfigError::Invalid { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience constructors
impl ConfigError {
    pub fn invalid_url(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidUrl {
            field,
            reason: reason.into(),
        }
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
