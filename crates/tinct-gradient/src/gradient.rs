//! Gradient descriptions and CSS serialization
//!
//! A [`Gradient`] is a kind (linear, radial, conic, with their shape
//! parameters) plus 2 to 10 color stops. Stops keep their insertion
//! order in storage; serialization sorts them by position, so editing
//! order never leaks into the CSS output.

use tinct_core::Rgb;

use crate::error::{GradientError, GradientResult};
use crate::stop::ColorStop;

/// Fewest stops a gradient can hold.
pub const MIN_STOPS: usize = 2;
/// Most stops a gradient can hold.
pub const MAX_STOPS: usize = 10;

/// Shape keyword for radial gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadialShape {
    Circle,
    Ellipse,
}

impl RadialShape {
    fn css(self) -> &'static str {
        match self {
            RadialShape::Circle => "circle",
            RadialShape::Ellipse => "ellipse",
        }
    }
}

/// Gradient kind with its geometry.
///
/// Angles are degrees; `at` centers are percentages of the painted box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientKind {
    /// Straight-line gradient along an angle
    Linear { angle: f64 },
    /// Gradient radiating from a center point
    Radial { shape: RadialShape, at: (f64, f64) },
    /// Gradient sweeping around a center point
    Conic { from: f64, at: (f64, f64) },
}

/// A gradient: kind plus color stops.
///
/// Stop count is kept within [`MIN_STOPS`]..=[`MAX_STOPS`] by every
/// constructor and editing method, so a held value is always
/// renderable.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    kind: GradientKind,
    stops: Vec<ColorStop>,
}

impl Gradient {
    /// Build a gradient from a kind and its stops.
    ///
    /// # Errors
    ///
    /// Returns [`GradientError::TooFewStops`] or
    /// [`GradientError::TooManyStops`] if the stop count is outside
    /// 2..=10.
    ///
    /// # Example
    ///
    /// ```
    /// use tinct_core::Rgb;
    /// use tinct_gradient::{ColorStop, Gradient, GradientKind};
    ///
    /// let g = Gradient::new(
    ///     GradientKind::Linear { angle: 90.0 },
    ///     vec![
    ///         ColorStop::new(Rgb::new(255, 0, 0), 0.0).unwrap(),
    ///         ColorStop::new(Rgb::new(0, 0, 255), 100.0).unwrap(),
    ///     ],
    /// )
    /// .unwrap();
    /// assert_eq!(g.css(), "linear-gradient(90deg, #FF0000 0%, #0000FF 100%)");
    /// ```
    pub fn new(kind: GradientKind, stops: Vec<ColorStop>) -> GradientResult<Self> {
        if stops.len() < MIN_STOPS {
            return Err(GradientError::TooFewStops(stops.len()));
        }
        if stops.len() > MAX_STOPS {
            return Err(GradientError::TooManyStops(stops.len()));
        }
        Ok(Gradient { kind, stops })
    }

    /// The gradient's kind and geometry.
    pub fn kind(&self) -> GradientKind {
        self.kind
    }

    /// Replace the kind, keeping the stops.
    pub fn set_kind(&mut self, kind: GradientKind) {
        self.kind = kind;
    }

    /// Stops in insertion order.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Stops ordered by position, ready for rendering.
    ///
    /// The sort is stable: stops sharing a position keep their
    /// insertion order.
    pub fn sorted_stops(&self) -> Vec<ColorStop> {
        let mut sorted = self.stops.clone();
        sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
        sorted
    }

    /// Append a stop.
    ///
    /// # Errors
    ///
    /// Returns [`GradientError::TooManyStops`] when the gradient is
    /// already at capacity.
    pub fn add_stop(&mut self, stop: ColorStop) -> GradientResult<()> {
        if self.stops.len() >= MAX_STOPS {
            return Err(GradientError::TooManyStops(self.stops.len() + 1));
        }
        self.stops.push(stop);
        Ok(())
    }

    /// Remove the stop at `index` (insertion order), returning it.
    ///
    /// # Errors
    ///
    /// Returns [`GradientError::TooFewStops`] if removal would leave
    /// fewer than 2 stops, or [`GradientError::StopIndexOutOfBounds`]
    /// for a bad index.
    pub fn remove_stop(&mut self, index: usize) -> GradientResult<ColorStop> {
        if index >= self.stops.len() {
            return Err(GradientError::StopIndexOutOfBounds {
                index,
                len: self.stops.len(),
            });
        }
        if self.stops.len() <= MIN_STOPS {
            return Err(GradientError::TooFewStops(self.stops.len() - 1));
        }
        Ok(self.stops.remove(index))
    }

    /// Serialize to a CSS gradient function string.
    ///
    /// Stops are sorted by position and formatted `#RRGGBB NN%` (or
    /// `rgba(...) NN%` under partial opacity), matching what browsers
    /// and design tools parse.
    pub fn css(&self) -> String {
        let stops: Vec<String> = self
            .sorted_stops()
            .iter()
            .map(ColorStop::css_fragment)
            .collect();
        let stops = stops.join(", ");

        match self.kind {
            GradientKind::Linear { angle } => {
                format!("linear-gradient({angle}deg, {stops})")
            }
            GradientKind::Radial { shape, at } => {
                format!("radial-gradient({} at {}% {}%, {stops})", shape.css(), at.0, at.1)
            }
            GradientKind::Conic { from, at } => {
                format!(
                    "conic-gradient(from {from}deg at {}% {}%, {stops})",
                    at.0, at.1
                )
            }
        }
    }
}

impl Default for Gradient {
    /// A left-to-right blend from black to white.
    fn default() -> Self {
        Gradient {
            kind: GradientKind::Linear { angle: 90.0 },
            stops: vec![
                ColorStop {
                    color: Rgb::BLACK,
                    position: 0.0,
                    opacity: None,
                },
                ColorStop {
                    color: Rgb::WHITE,
                    position: 100.0,
                    opacity: None,
                },
            ],
        }
    }
}
