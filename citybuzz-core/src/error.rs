//! Error types for City Buzz.

use std::time::Duration;

use thiserror::Error;

use crate::submission::ValidationError;

/// Errors that can occur in City Buzz operations.
///
/// Nothing here is fatal: every variant is recoverable by the caller.
#[derive(Error, Debug)]
pub enum CityBuzzError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Failed to load events: {0}")]
    LoadFailure(String),

    #[error("Loading events timed out after {0:?}")]
    LoadTimeout(Duration),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Event store error: {0}")]
    Store(String),
}

impl CityBuzzError {
    /// Load failures are surfaced to the user with a "Retry" action.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CityBuzzError::LoadFailure(_) | CityBuzzError::LoadTimeout(_)
        )
    }
}

impl From<serde_json::Error> for CityBuzzError {
    fn from(e: serde_json::Error) -> Self {
        CityBuzzError::Serialization(e.to_string())
    }
}

/// Result type alias for City Buzz operations.
pub type CityBuzzResult<T> = Result<T, CityBuzzError>;
