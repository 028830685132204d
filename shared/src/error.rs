//! Unified error handling
//!
//! Application error type shared across crates:
//! - [`AppError`] - application error enum
//! - [`AppResult`] - result alias
//!
//! # Error classification
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration errors | `InvalidTimezone`, `Configuration` |
//! | Business logic errors | `NotFound`, `Validation` |
//! | System errors | `Internal` |
//!
//! # Usage example
//!
//! ```ignore
//! // Return an error
//! Err(AppError::validation("party_size must be at least 1"))
//! ```

use thiserror::Error;

/// Result alias using [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

/// Application error enum
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    // ========== Configuration errors ==========
    /// Business timezone identifier cannot be resolved (fatal, fix the profile)
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Contradictory settings rows (e.g. two defaults for the same weekday)
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ========== Business logic errors ==========
    /// Resource does not exist
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Structurally invalid input, rejected at the function boundary
    #[error("Validation failed: {0}")]
    Validation(String),

    // ========== System errors ==========
    /// Unexpected internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create an invalid timezone error
    pub fn invalid_timezone(tz: impl Into<String>) -> Self {
        Self::InvalidTimezone(tz.into())
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error indicates broken configuration rather than bad input
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidTimezone(_) | Self::Configuration(_))
    }
}
