//! Centralized error types for the relay.

use thiserror::Error;

/// Main error type for relay operations.
///
/// Every failure inside the relay is translated into one of these variants
/// before it crosses the service boundary; raw upstream or transport error
/// types never leak to clients.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelayError {
    #[error("{0}")]
    Validation(String),

    #[error("Sentiment service returned an error: {detail}")]
    Upstream { status: u16, detail: String },

    #[error("Invalid response from sentiment service: {0}")]
    UpstreamFormat(String),

    #[error("Request to sentiment service timed out")]
    UpstreamTimeout,

    #[error("Could not connect to sentiment service")]
    UpstreamUnavailable,

    #[error("An unexpected error occurred: {0}")]
    Internal(String),
}

/// Result type for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;

impl RelayError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The HTTP status this error maps to at the service boundary.
    ///
    /// Upstream errors pass the upstream status through unchanged.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Upstream { status, .. } => *status,
            Self::UpstreamFormat(_) => 500,
            Self::UpstreamTimeout => 504,
            Self::UpstreamUnavailable => 503,
            Self::Internal(_) => 500,
        }
    }
}
