//! Error types for the rating service
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating service scenarios
#[derive(Debug, thiserror::Error)]
pub enum RatingsError {
    #[error("Results feed request for {tour} failed: {message}")]
    FeedRequestFailed { tour: String, message: String },

    #[error("Invalid results feed response: {message}")]
    FeedResponseInvalid { message: String },

    #[error("Rating storage error at {path}: {message}")]
    StorageError { path: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
