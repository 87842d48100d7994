//! Extraction error types
//!
//! Decoding maps `image` crate errors into [`ExtractError`] variants so
//! that callers only need to handle one error type.

use thiserror::Error;

/// Error type for image decoding and color extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image data could not be decoded
    #[error("decode error: {0}")]
    Decode(String),

    /// A parameter was outside its documented range
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// An error from the core color library
    #[error("core error: {0}")]
    Core(#[from] tinct_core::Error),

    /// An error from the gradient model
    #[error("gradient error: {0}")]
    Gradient(#[from] tinct_gradient::GradientError),
}

impl From<image::ImageError> for ExtractError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(err) => ExtractError::Io(err),
            other => ExtractError::Decode(other.to_string()),
        }
    }
}

/// Convenience alias for extraction results.
pub type ExtractResult<T> = Result<T, ExtractError>;
