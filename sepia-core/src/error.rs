//! Structured error types for the Sepia toolkit.

use thiserror::Error;

/// Unified error type for all Sepia operations.
#[derive(Debug, Error)]
pub enum SepiaError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed job file)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bytes outside the DNA alphabet, bad arguments)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the Sepia crates.
pub type Result<T> = std::result::Result<T, SepiaError>;
