//! Error types for gillito-core.
//!
//! Lookup misses, empty listings and no-op substitutions are NOT errors; they
//! are variants of the result types in `lookup`, `listing` and `substitution`.
//! This enum only covers configuration and wiring failures.

use thiserror::Error;

/// Top-level error type for gillito-core.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {field} - {message}")]
    ValidationError { field: String, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::ConfigError(format!("Failed to parse config file: {}", err))
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
