//! Tinct Theory - Color relationships
//!
//! This crate provides the operations that relate colors to each other:
//!
//! - **Contrast** ([`contrast`]): WCAG relative luminance, contrast ratio, AA/AAA rating
//! - **Harmony** ([`harmony`]): palette generation by hue rotation
//! - **Mixing** ([`mix`]): blending two colors under four models
//! - **Vision simulation** ([`cvd`]): color-vision deficiency transforms

pub mod contrast;
pub mod cvd;
pub mod error;
pub mod harmony;
pub mod mix;

// Re-export core types
pub use tinct_core;

// Re-export error types
pub use error::{TheoryError, TheoryResult};

// Re-export contrast evaluation
pub use contrast::{WcagRating, contrast_ratio, readable_text_color, relative_luminance};

// Re-export palette generation
pub use harmony::{HarmonyKind, MAX_PALETTE, harmony_palette};

// Re-export mixing
pub use mix::{MixMode, mix};

// Re-export vision simulation
pub use cvd::{Deficiency, simulate, simulate_rgba_in_place};
