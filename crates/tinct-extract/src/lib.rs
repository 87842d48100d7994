//! Tinct Extract - Palettes and gradients from images
//!
//! This crate pulls dominant colors out of images by k-means
//! clustering in RGB space:
//!
//! - **Decoding** ([`decode`]): file or byte input via the `image`
//!   crate, with a downscale guard for large images
//! - **Sampling** ([`sample`]): transparent-pixel exclusion and a
//!   strided working-set budget
//! - **Clustering** ([`kmeans`]): seeded Lloyd iteration with
//!   per-cluster share reporting
//! - **Palettes** ([`palette`]): noise-floor filtering and sorting by
//!   dominance, hue, or brightness
//! - **Gradient stops** ([`stops`]): dominant colors rebuilt as a
//!   [`tinct_gradient::Gradient`]

pub mod decode;
pub mod error;
pub mod kmeans;
pub mod palette;
pub mod sample;
pub mod stops;

// Re-export core and gradient types
pub use tinct_core;
pub use tinct_gradient;

// Re-export error types
pub use error::{ExtractError, ExtractResult};

// Re-export decoding
pub use decode::{load_rgba, load_rgba_from_bytes};

// Re-export sampling
pub use sample::{SampleOptions, sample_pixels};

// Re-export clustering
pub use kmeans::{Cluster, KmeansOptions, kmeans};

// Re-export palette extraction
pub use palette::{MAX_PALETTE_COLORS, PaletteOptions, SortKey, extract_palette};

// Re-export gradient extraction
pub use stops::{StopExtractOptions, extract_gradient};
