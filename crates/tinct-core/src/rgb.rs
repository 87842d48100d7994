//! RGB color values and hex notation
//!
//! [`Rgb`] is the canonical interchange form of the library: an 8-bit RGB
//! triple. Every other representation (HSL, HSB, CMYK, LAB, OKLCH) is a
//! derived view computed on demand from it.
//!
//! Hex strings follow the CSS `#RRGGBB` notation: case-insensitive on
//! input, normalized to uppercase on output.

use std::fmt;

use crate::error::{Error, Result};

/// An 8-bit RGB color.
///
/// Channels are integers in [0, 255]. Derived computations that produce
/// fractional channel values go through [`Rgb::from_f64`], which rounds
/// and clamps, so a round trip through another color space may drift by
/// at most one step per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black, `#000000`.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white, `#FFFFFF`.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Create a color from fractional channels, rounding and clamping
    /// each to [0, 255].
    ///
    /// This is the single place where derived computations are brought
    /// back to integer channels.
    #[inline]
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Rgb {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Parse a CSS hex color of the form `#RRGGBB`.
    ///
    /// Input is case-insensitive; the leading `#` is required.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHex`] if the string is not exactly a `#`
    /// followed by six hex digits.
    ///
    /// # Example
    ///
    /// ```
    /// use tinct_core::Rgb;
    ///
    /// let c = Rgb::from_hex("#ff5733").unwrap();
    /// assert_eq!(c, Rgb::new(255, 87, 51));
    /// assert!(Rgb::from_hex("ff5733").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidHex(hex.to_string()))?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(hex.to_string()));
        }
        let parse = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| Error::InvalidHex(hex.to_string()))
        };
        Ok(Rgb {
            r: parse(&digits[0..2])?,
            g: parse(&digits[2..4])?,
            b: parse(&digits[4..6])?,
        })
    }

    /// Format as an uppercase `#RRGGBB` hex string.
    ///
    /// Round-tripping through [`Rgb::from_hex`] is exact.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Format as a CSS `rgb(r, g, b)` function string.
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Format as a CSS `rgba(r, g, b, a)` function string.
    ///
    /// `alpha` is clamped to [0, 1] and printed as a plain decimal
    /// (`0.5`, not `0.50`).
    pub fn css_with_alpha(self, alpha: f64) -> String {
        let a = alpha.clamp(0.0, 1.0);
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, a)
    }

    /// Rec.601 weighted brightness, in [0, 255].
    ///
    /// `0.299 R + 0.587 G + 0.114 B`, the same weighting the
    /// achromatopsia simulation uses for its grayscale collapse.
    #[inline]
    pub fn luma(self) -> f64 {
        0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64
    }
}

impl fmt::Display for Rgb {
    /// Displays as the uppercase hex form, e.g. `#FF5733`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Round and clamp a fractional channel to [0, 255].
#[inline]
fn clamp_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
