//! Error types for tinct-core
//!
//! Conversion routines are total over their value types: out-of-range
//! numeric inputs are normalized or clamped, never rejected. Errors
//! arise only at the parsing boundary, so the hex parser is currently
//! the sole source of this type.

use thiserror::Error;

/// Tinct error type
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed hex color string
    #[error("invalid hex color: {0:?} (expected #RRGGBB)")]
    InvalidHex(String),
}

/// Result type alias for tinct operations
pub type Result<T> = std::result::Result<T, Error>;
