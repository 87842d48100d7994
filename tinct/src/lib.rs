//! Tinct - Color toolkit for the web palette workflow
//!
//! # Overview
//!
//! Tinct covers the color work behind design tooling:
//!
//! - Color space conversion (hex, RGB, HSL, HSB, CMYK, LAB, OKLCH)
//! - WCAG contrast evaluation and readable text color selection
//! - Harmony palette generation (analogous, triadic, complementary, ...)
//! - Color mixing in four models
//! - Color-vision deficiency simulation
//! - Palette and gradient extraction from images via k-means
//!
//! # Example
//!
//! ```
//! use tinct::{Rgb, theory};
//!
//! let base = Rgb::from_hex("#FF5733").unwrap();
//! assert_eq!(base.to_hsl().to_rgb(), base);
//!
//! let on_dark = theory::contrast_ratio(base, Rgb::BLACK);
//! let on_light = theory::contrast_ratio(base, Rgb::WHITE);
//! assert!(on_dark > on_light);
//!
//! let palette = theory::harmony_palette(base, theory::HarmonyKind::Triadic, 3).unwrap();
//! assert_eq!(palette[0], base);
//! ```

// Re-export core types (colors and conversions used everywhere)
pub use tinct_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use tinct_extract as extract;
pub use tinct_gradient as gradient;
pub use tinct_theory as theory;
