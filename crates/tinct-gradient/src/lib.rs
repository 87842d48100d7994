//! Tinct Gradient - CSS gradient model
//!
//! This crate models CSS gradients as an ordered list of color stops
//! under a linear, radial, or conic shape:
//!
//! - **Stops** ([`stop`]): a color pinned to a position, with optional opacity
//! - **Gradients** ([`gradient`]): validated stop lists and CSS serialization
//! - **Randomization** ([`random`]): seeded random colors and gradients
//!
//! # Example
//!
//! ```
//! use tinct_core::Rgb;
//! use tinct_gradient::{ColorStop, Gradient, GradientKind};
//!
//! let gradient = Gradient::new(
//!     GradientKind::Linear { angle: 45.0 },
//!     vec![
//!         ColorStop::new(Rgb::new(255, 87, 51), 0.0)?,
//!         ColorStop::new(Rgb::new(51, 87, 255), 100.0)?,
//!     ],
//! )?;
//! assert_eq!(
//!     gradient.css(),
//!     "linear-gradient(45deg, #FF5733 0%, #3357FF 100%)"
//! );
//! # Ok::<(), tinct_gradient::GradientError>(())
//! ```

pub mod error;
pub mod gradient;
pub mod random;
pub mod stop;

// Re-export core types
pub use tinct_core;

// Re-export error types
pub use error::{GradientError, GradientResult};

// Re-export the gradient model
pub use gradient::{Gradient, GradientKind, MAX_STOPS, MIN_STOPS, RadialShape};
pub use stop::ColorStop;

// Re-export randomization
pub use random::{random_color, random_gradient};
