//! Error types for the nldas-atlas crate.
//!
//! This module defines a single error enum covering every error condition
//! the crate can produce, plus a convenience `Result` alias.

use thiserror::Error;

/// The main error type for nldas-atlas operations.
#[derive(Error, Debug)]
pub enum AtlasError {
    /// Bounds requested over zero sample points
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// Legend value range is inverted (min > max)
    #[error("Invalid value range: min ({min}) must be <= max ({max})")]
    InvalidRange { min: f64, max: f64 },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid coordinate errors
    #[error("Invalid coordinates: {message}")]
    InvalidCoordinates { message: String },

    /// A response from the query/search endpoint is missing a required field
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// HTTP transport errors from the external endpoints
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with AtlasError
pub type Result<T> = std::result::Result<T, AtlasError>;
