//! Tinct Core - Color value types and conversions
//!
//! This crate provides the fundamental color types used throughout the
//! tinct color library:
//!
//! - [`Rgb`] - The canonical 8-bit RGB color, with hex parsing/formatting
//! - [`Hsl`] / [`Hsb`] - Cylindrical models (lightness / brightness)
//! - [`Cmyk`] - Subtractive print model
//! - [`Lab`] / [`Oklch`] - Perceptually-oriented spaces, approximated
//!
//! All conversions are pure functions of their inputs. RGB is the source
//! of truth; the other representations are derived views, so a round trip
//! through one of them may drift by one step per channel (see the tests
//! in [`space`]).
//!
//! # Example
//!
//! ```
//! use tinct_core::{Hsl, Rgb};
//!
//! let c = Rgb::from_hex("#FF5733").unwrap();
//! let hsl = c.to_hsl();
//! assert_eq!(hsl.css(), "hsl(11, 100%, 60%)");
//! assert_eq!(Hsl::new(11.0, 100.0, 60.0).to_rgb().to_hex(), "#FF5833");
//! ```

pub mod error;
pub mod rgb;
pub mod space;

pub use error::{Error, Result};
pub use rgb::Rgb;
pub use space::{Cmyk, Hsb, Hsl, Lab, Oklch, normalize_hue};
