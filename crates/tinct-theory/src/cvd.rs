//! Color-vision deficiency simulation
//!
//! Simulates how a color or image appears under the common color-vision
//! deficiencies by applying a fixed linear transform per RGB triple.
//! The coefficient set is the widely used web approximation model; the
//! numbers are part of the contract and must not be re-derived from a
//! different published model, or every simulated swatch changes.
//!
//! Two entry points, one per granularity: [`simulate`] for a single
//! color, [`simulate_rgba_in_place`] for a whole RGBA pixel buffer.

use tinct_core::Rgb;

use crate::error::{TheoryError, TheoryResult};

/// Color-vision deficiency type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deficiency {
    /// Unaffected vision, identity transform
    Normal,
    /// Red-blind
    Protanopia,
    /// Red-weak
    Protanomaly,
    /// Green-blind
    Deuteranopia,
    /// Green-weak
    Deuteranomaly,
    /// Blue-blind
    Tritanopia,
    /// Blue-weak
    Tritanomaly,
    /// Total color blindness, luminance-weighted grayscale
    Achromatopsia,
}

impl Deficiency {
    /// Every deficiency type, in display order.
    pub const ALL: [Deficiency; 8] = [
        Deficiency::Normal,
        Deficiency::Protanopia,
        Deficiency::Protanomaly,
        Deficiency::Deuteranopia,
        Deficiency::Deuteranomaly,
        Deficiency::Tritanopia,
        Deficiency::Tritanomaly,
        Deficiency::Achromatopsia,
    ];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Deficiency::Normal => "Normal vision",
            Deficiency::Protanopia => "Protanopia",
            Deficiency::Protanomaly => "Protanomaly",
            Deficiency::Deuteranopia => "Deuteranopia",
            Deficiency::Deuteranomaly => "Deuteranomaly",
            Deficiency::Tritanopia => "Tritanopia",
            Deficiency::Tritanomaly => "Tritanomaly",
            Deficiency::Achromatopsia => "Achromatopsia",
        }
    }

    /// Row-major transform applied to the RGB column vector.
    ///
    /// Every row sums to 1, so white and black are fixed points of all
    /// transforms.
    fn matrix(self) -> [[f64; 3]; 3] {
        match self {
            Deficiency::Normal => [
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
            Deficiency::Protanopia => [
                [0.567, 0.433, 0.0],
                [0.558, 0.442, 0.0],
                [0.0, 0.242, 0.758],
            ],
            Deficiency::Protanomaly => [
                [0.817, 0.183, 0.0],
                [0.333, 0.667, 0.0],
                [0.0, 0.125, 0.875],
            ],
            Deficiency::Deuteranopia => [
                [0.625, 0.375, 0.0],
                [0.7, 0.3, 0.0],
                [0.0, 0.3, 0.7],
            ],
            Deficiency::Deuteranomaly => [
                [0.8, 0.2, 0.0],
                [0.258, 0.742, 0.0],
                [0.0, 0.142, 0.858],
            ],
            Deficiency::Tritanopia => [
                [0.95, 0.05, 0.0],
                [0.0, 0.433, 0.567],
                [0.0, 0.475, 0.525],
            ],
            Deficiency::Tritanomaly => [
                [0.967, 0.033, 0.0],
                [0.0, 0.733, 0.267],
                [0.0, 0.183, 0.817],
            ],
            Deficiency::Achromatopsia => [
                [0.299, 0.587, 0.114],
                [0.299, 0.587, 0.114],
                [0.299, 0.587, 0.114],
            ],
        }
    }
}

/// Simulate a single color under a deficiency.
///
/// `Normal` returns the input unchanged, bit for bit. Other types apply
/// the deficiency matrix with each output channel rounded and clamped
/// to [0, 255].
///
/// # Example
///
/// ```
/// use tinct_core::Rgb;
/// use tinct_theory::cvd::{Deficiency, simulate};
///
/// let red = Rgb::new(255, 0, 0);
/// assert_eq!(simulate(red, Deficiency::Normal), red);
/// // A protanope sees pure red as a dim yellow-brown
/// assert_eq!(simulate(red, Deficiency::Protanopia), Rgb::new(145, 142, 0));
/// ```
pub fn simulate(color: Rgb, deficiency: Deficiency) -> Rgb {
    if matches!(deficiency, Deficiency::Normal) {
        return color;
    }
    apply_matrix(&deficiency.matrix(), color)
}

/// Simulate a deficiency over an RGBA byte buffer, in place.
///
/// Pixels are consecutive `[r, g, b, a]` quads; the transform is applied
/// per pixel and alpha is left untouched. `Normal` leaves the buffer
/// as-is.
///
/// # Errors
///
/// Returns [`TheoryError::RaggedBuffer`] if the length is not a
/// multiple of 4.
pub fn simulate_rgba_in_place(buffer: &mut [u8], deficiency: Deficiency) -> TheoryResult<()> {
    if buffer.len() % 4 != 0 {
        return Err(TheoryError::RaggedBuffer(buffer.len()));
    }
    if matches!(deficiency, Deficiency::Normal) {
        return Ok(());
    }

    let matrix = deficiency.matrix();
    for px in buffer.chunks_exact_mut(4) {
        let out = apply_matrix(&matrix, Rgb::new(px[0], px[1], px[2]));
        px[0] = out.r;
        px[1] = out.g;
        px[2] = out.b;
    }
    Ok(())
}

#[inline]
fn apply_matrix(m: &[[f64; 3]; 3], color: Rgb) -> Rgb {
    let r = color.r as f64;
    let g = color.g as f64;
    let b = color.b as f64;
    Rgb::from_f64(
        m[0][0] * r + m[0][1] * g + m[0][2] * b,
        m[1][0] * r + m[1][1] * g + m[1][2] * b,
        m[2][0] * r + m[2][1] * g + m[2][2] * b,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_is_identity() {
        for c in [
            Rgb::BLACK,
            Rgb::WHITE,
            Rgb::new(255, 87, 51),
            Rgb::new(1, 2, 3),
        ] {
            assert_eq!(simulate(c, Deficiency::Normal), c);
        }
    }

    #[test]
    fn test_white_and_black_are_fixed_points() {
        // Every matrix row sums to 1
        for d in Deficiency::ALL {
            assert_eq!(simulate(Rgb::WHITE, d), Rgb::WHITE, "{d:?}");
            assert_eq!(simulate(Rgb::BLACK, d), Rgb::BLACK, "{d:?}");
        }
    }

    #[test]
    fn test_protanopia_reference_coefficients() {
        // R' = 0.567R + 0.433G, G' = 0.558R + 0.442G, B' = 0.242G + 0.758B
        assert_eq!(
            simulate(Rgb::new(255, 0, 0), Deficiency::Protanopia),
            Rgb::new(145, 142, 0)
        );
        assert_eq!(
            simulate(Rgb::new(0, 255, 0), Deficiency::Protanopia),
            Rgb::new(110, 113, 62)
        );
        assert_eq!(
            simulate(Rgb::new(0, 0, 255), Deficiency::Protanopia),
            Rgb::new(0, 0, 193)
        );
    }

    #[test]
    fn test_deuteranopia_reference_values() {
        assert_eq!(
            simulate(Rgb::new(255, 0, 0), Deficiency::Deuteranopia),
            Rgb::new(159, 179, 0)
        );
        assert_eq!(
            simulate(Rgb::new(0, 255, 0), Deficiency::Deuteranopia),
            Rgb::new(96, 77, 77)
        );
    }

    #[test]
    fn test_tritanopia_reference_values() {
        assert_eq!(
            simulate(Rgb::new(0, 0, 255), Deficiency::Tritanopia),
            Rgb::new(0, 145, 134)
        );
    }

    #[test]
    fn test_achromatopsia_is_grayscale() {
        for c in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 87, 51),
            Rgb::new(12, 200, 160),
        ] {
            let out = simulate(c, Deficiency::Achromatopsia);
            assert_eq!(out.r, out.g);
            assert_eq!(out.g, out.b);
            assert_eq!(out.r as f64, c.luma().round());
        }
    }

    #[test]
    fn test_rgba_buffer_in_place() {
        // Two pixels: red with half alpha, blue opaque
        let mut buf = [255, 0, 0, 128, 0, 0, 255, 255];
        simulate_rgba_in_place(&mut buf, Deficiency::Protanopia).unwrap();
        assert_eq!(&buf[0..4], &[145, 142, 0, 128]);
        assert_eq!(&buf[4..8], &[0, 0, 193, 255]);
    }

    #[test]
    fn test_rgba_buffer_normal_untouched() {
        let mut buf = [1, 2, 3, 4, 5, 6, 7, 8];
        simulate_rgba_in_place(&mut buf, Deficiency::Normal).unwrap();
        assert_eq!(buf, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_rgba_buffer_ragged_length_rejected() {
        let mut buf = [0u8; 7];
        assert!(simulate_rgba_in_place(&mut buf, Deficiency::Tritanopia).is_err());
        let mut empty: [u8; 0] = [];
        assert!(simulate_rgba_in_place(&mut empty, Deficiency::Tritanopia).is_ok());
    }

    #[test]
    fn test_matrix_rows_sum_to_one() {
        for d in Deficiency::ALL {
            for (i, row) in d.matrix().iter().enumerate() {
                let sum: f64 = row.iter().sum();
                assert!((sum - 1.0).abs() < 1e-9, "{d:?} row {i} sums to {sum}");
            }
        }
    }
}
