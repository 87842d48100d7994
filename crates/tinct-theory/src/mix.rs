//! Color mixing
//!
//! Blends two colors at a given ratio under four models: linear RGB,
//! subtractive CMYK, HSL with shortest-arc hue interpolation, and the
//! approximate LAB space.
//!
//! The LAB model interpolates in the forward LAB space but converts
//! back through the approximate [`Lab::to_rgb`], so its real effect is
//! a differently-weighted HSL blend. That behavior is intentional and
//! kept as-is.
//!
//! [`Lab::to_rgb`]: tinct_core::Lab::to_rgb

use tinct_core::{Cmyk, Hsl, Lab, Rgb, normalize_hue};

use crate::error::{TheoryError, TheoryResult};

/// Blend model for [`mix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixMode {
    /// Linear interpolation per RGB channel
    Rgb,
    /// Interpolation of all four CMYK channels
    Cmyk,
    /// HSL interpolation, hue along the shorter arc
    Hsl,
    /// Interpolation in the approximate LAB space
    Lab,
}

/// Mix two colors.
///
/// `ratio` is the share of `b` in percent: 0 keeps `a`, 100 gives `b`,
/// 50 is an even blend.
///
/// # Errors
///
/// Returns [`TheoryError::InvalidParameters`] if `ratio` is outside
/// [0, 100].
///
/// # Example
///
/// ```
/// use tinct_core::Rgb;
/// use tinct_theory::mix::{MixMode, mix};
///
/// let red = Rgb::from_hex("#FF0000").unwrap();
/// let blue = Rgb::from_hex("#0000FF").unwrap();
/// let purple = mix(red, blue, 50.0, MixMode::Rgb).unwrap();
/// assert_eq!(purple.to_hex(), "#800080");
/// ```
pub fn mix(a: Rgb, b: Rgb, ratio: f64, mode: MixMode) -> TheoryResult<Rgb> {
    if !(0.0..=100.0).contains(&ratio) {
        return Err(TheoryError::InvalidParameters(format!(
            "mix ratio must be 0..=100, got {ratio}"
        )));
    }
    let t = ratio / 100.0;

    Ok(match mode {
        MixMode::Rgb => mix_rgb(a, b, t),
        MixMode::Cmyk => mix_cmyk(a, b, t),
        MixMode::Hsl => mix_hsl(a, b, t),
        MixMode::Lab => mix_lab(a, b, t),
    })
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn mix_rgb(a: Rgb, b: Rgb, t: f64) -> Rgb {
    Rgb::from_f64(
        lerp(a.r as f64, b.r as f64, t),
        lerp(a.g as f64, b.g as f64, t),
        lerp(a.b as f64, b.b as f64, t),
    )
}

fn mix_cmyk(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let ca = a.to_cmyk();
    let cb = b.to_cmyk();
    Cmyk::new(
        lerp(ca.c, cb.c, t),
        lerp(ca.m, cb.m, t),
        lerp(ca.y, cb.y, t),
        lerp(ca.k, cb.k, t),
    )
    .to_rgb()
}

fn mix_hsl(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let ha = a.to_hsl();
    let hb = b.to_hsl();
    Hsl::new(
        mix_hue(ha.h, hb.h, t),
        lerp(ha.s, hb.s, t),
        lerp(ha.l, hb.l, t),
    )
    .to_rgb()
}

fn mix_lab(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let la = a.to_lab();
    let lb = b.to_lab();
    Lab {
        l: lerp(la.l, lb.l, t),
        a: lerp(la.a, lb.a, t),
        b: lerp(la.b, lb.b, t),
    }
    .to_rgb()
}

/// Interpolate between two hues along the shorter arc of the wheel.
///
/// The delta is folded into [-180, 180] before interpolating, so a
/// blend never travels the long way around: 350 to 10 degrees passes
/// through 0, not 180.
fn mix_hue(h1: f64, h2: f64, t: f64) -> f64 {
    let delta = match h2 - h1 {
        d if d > 180.0 => d - 360.0,
        d if d < -180.0 => d + 360.0,
        d => d,
    };
    normalize_hue(h1 + delta * t)
}
