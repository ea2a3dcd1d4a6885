//! Error types for the shard simulator
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Every failure is local to input validation; nothing here is retryable.

use thiserror::Error;

/// The main error type for the shard simulator
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Invalid ID range: min_id ({min}) is greater than max_id ({max})")]
    InvalidRange { min: i64, max: i64 },

    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Invalid ID token '{token}' at position {position}: expected an integer")]
    InvalidIdToken { token: String, position: usize },

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid ID token error
    pub fn invalid_token(token: impl Into<String>, position: usize) -> Self {
        Self::InvalidIdToken {
            token: token.into(),
            position,
        }
    }

    /// Check if this error is a user input/validation error
    ///
    /// Validation errors are recoverable by resubmitting corrected input and
    /// map to HTTP 422 in server mode.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::Config { .. }
                | Error::InvalidConfigValue { .. }
                | Error::InvalidRange { .. }
                | Error::InvalidIdToken { .. }
        )
    }
}

/// Result type alias for the shard simulator
pub type Result<T> = std::result::Result<T, Error>;
