//! Error types for the Concord library.
//!
//! All errors are represented by the [`ConcordError`] enum. Lookup operations
//! on words that were never observed are *not* errors; they return empty or
//! zero results instead.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Concord operations.
#[derive(Error, Debug)]
pub enum ConcordError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A document path that does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// A malformed argument rejected at the boundary (bad interval, zero limit)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Analysis-related errors (tokenization, segmentation)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ConcordError.
pub type Result<T> = std::result::Result<T, ConcordError>;

impl ConcordError {
    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        ConcordError::NotFound(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ConcordError::InvalidArgument(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ConcordError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ConcordError::Other(msg.into())
    }
}
