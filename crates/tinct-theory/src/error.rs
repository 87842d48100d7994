//! Error types for tinct-theory

use thiserror::Error;

/// Errors that can occur during color relationship operations
#[derive(Debug, Error)]
pub enum TheoryError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] tinct_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// RGBA buffer length is not a whole number of pixels
    #[error("ragged RGBA buffer: {0} bytes is not a multiple of 4")]
    RaggedBuffer(usize),
}

/// Result type for color relationship operations
pub type TheoryResult<T> = Result<T, TheoryError>;
