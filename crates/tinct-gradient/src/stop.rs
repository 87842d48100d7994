//! Color stops
//!
//! A [`ColorStop`] pins a color to a position along a gradient axis,
//! optionally with its own opacity. Stops are plain values; ordering
//! and count rules live on the gradient that owns them.

use tinct_core::Rgb;

use crate::error::{GradientError, GradientResult};

/// A color at a position along a gradient, both in percent.
///
/// `position` is [0, 100] along the gradient axis. `opacity`, when
/// present and below 100, switches the CSS form of this stop from hex
/// to `rgba(...)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub color: Rgb,
    pub position: f64,
    pub opacity: Option<f64>,
}

impl ColorStop {
    /// Create a fully opaque stop.
    ///
    /// # Errors
    ///
    /// Returns [`GradientError::InvalidStop`] if `position` is not a
    /// finite value in [0, 100].
    pub fn new(color: Rgb, position: f64) -> GradientResult<Self> {
        if !position.is_finite() || !(0.0..=100.0).contains(&position) {
            return Err(GradientError::InvalidStop(format!(
                "position must be 0..=100, got {position}"
            )));
        }
        Ok(ColorStop {
            color,
            position,
            opacity: None,
        })
    }

    /// Set this stop's opacity, in percent.
    ///
    /// # Errors
    ///
    /// Returns [`GradientError::InvalidStop`] if `opacity` is not a
    /// finite value in [0, 100].
    pub fn with_opacity(self, opacity: f64) -> GradientResult<Self> {
        if !opacity.is_finite() || !(0.0..=100.0).contains(&opacity) {
            return Err(GradientError::InvalidStop(format!(
                "opacity must be 0..=100, got {opacity}"
            )));
        }
        Ok(ColorStop {
            opacity: Some(opacity),
            ..self
        })
    }

    /// CSS fragment for this stop: `#RRGGBB NN%`, or
    /// `rgba(r, g, b, a) NN%` when a partial opacity applies.
    pub fn css_fragment(&self) -> String {
        match self.opacity {
            Some(o) if o < 100.0 => {
                format!("{} {}%", self.color.css_with_alpha(o / 100.0), self.position)
            }
            _ => format!("{} {}%", self.color.to_hex(), self.position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_position() {
        let red = Rgb::new(255, 0, 0);
        assert!(ColorStop::new(red, 0.0).is_ok());
        assert!(ColorStop::new(red, 100.0).is_ok());
        assert!(ColorStop::new(red, -0.1).is_err());
        assert!(ColorStop::new(red, 100.1).is_err());
        assert!(ColorStop::new(red, f64::NAN).is_err());
        assert!(ColorStop::new(red, f64::INFINITY).is_err());
    }

    #[test]
    fn test_with_opacity_validates_range() {
        let stop = ColorStop::new(Rgb::new(0, 128, 255), 40.0).unwrap();
        assert!(stop.with_opacity(0.0).is_ok());
        assert!(stop.with_opacity(100.0).is_ok());
        assert!(stop.with_opacity(-1.0).is_err());
        assert!(stop.with_opacity(101.0).is_err());
    }

    #[test]
    fn test_css_fragment_opaque() {
        let stop = ColorStop::new(Rgb::new(255, 87, 51), 25.0).unwrap();
        assert_eq!(stop.css_fragment(), "#FF5733 25%");
    }

    #[test]
    fn test_css_fragment_fractional_position() {
        let stop = ColorStop::new(Rgb::new(255, 87, 51), 33.5).unwrap();
        assert_eq!(stop.css_fragment(), "#FF5733 33.5%");
    }

    #[test]
    fn test_css_fragment_with_opacity() {
        let stop = ColorStop::new(Rgb::new(255, 0, 0), 0.0)
            .unwrap()
            .with_opacity(50.0)
            .unwrap();
        assert_eq!(stop.css_fragment(), "rgba(255, 0, 0, 0.5) 0%");
    }

    #[test]
    fn test_full_opacity_renders_as_hex() {
        let stop = ColorStop::new(Rgb::new(255, 0, 0), 10.0)
            .unwrap()
            .with_opacity(100.0)
            .unwrap();
        assert_eq!(stop.css_fragment(), "#FF0000 10%");
    }
}
