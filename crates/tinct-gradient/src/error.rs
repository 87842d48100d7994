//! Error types for tinct-gradient

use thiserror::Error;

/// Errors that can occur when building or editing gradients
#[derive(Debug, Error)]
pub enum GradientError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] tinct_core::Error),

    /// Fewer stops than a renderable gradient needs
    #[error("gradient needs at least 2 color stops, got {0}")]
    TooFewStops(usize),

    /// More stops than the editor supports
    #[error("gradient allows at most 10 color stops, got {0}")]
    TooManyStops(usize),

    /// Stop position or opacity outside its range
    #[error("invalid color stop: {0}")]
    InvalidStop(String),

    /// Stop index outside the current stop list
    #[error("stop index out of bounds: {index} >= {len}")]
    StopIndexOutOfBounds { index: usize, len: usize },
}

/// Result type for gradient operations
pub type GradientResult<T> = Result<T, GradientError>;
