//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A configuration value that loaded but makes no sense
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: &'static str,
        min: u64,
        max: u64,
        actual: u64,
    },

    #[error("server.host must be an IP address, got '{0}'")]
    InvalidHost(String),

    #[error("database.url must be a sqlite: URL, got '{0}'")]
    UnsupportedDatabaseUrl(String),

    #[error("database.min_connections ({min}) exceeds database.max_connections ({max})")]
    PoolBounds { min: u32, max: u32 },

    #[error("server.cors_origins entry '{0}' is not a valid header value")]
    InvalidCorsOrigin(String),
}

/// Check `actual` against an inclusive range.
pub(crate) fn check_range(
    field: &'static str,
    actual: u64,
    min: u64,
    max: u64,
) -> Result<(), ValidationError> {
    if (min..=max).contains(&actual) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            actual,
        })
    }
}
