//! Derived color spaces and conversions
//!
//! Conversions between [`Rgb`] and the cylindrical/print color models:
//!
//! - [`Hsl`] - hue, saturation, lightness
//! - [`Hsb`] - hue, saturation, brightness (HSV)
//! - [`Cmyk`] - cyan, magenta, yellow, black
//! - [`Lab`] - CIE LAB, simplified pipeline
//! - [`Oklch`] - OKLCH, derived from HSL rather than OKLab
//!
//! Hue is in degrees [0, 360); saturation, lightness, brightness, and the
//! CMYK channels are percentages [0, 100]. Conversions normalize hue and
//! clamp percentages before use, so slightly out-of-range inputs from
//! derived computations do not propagate.
//!
//! The LAB and OKLCH conversions are deliberately approximate. The
//! forward LAB transform uses the standard D65 matrix with the usual
//! piecewise function, but [`Lab::to_rgb`] does not invert it: it maps L
//! to HSL lightness and the a/b vector to saturation and hue. Color
//! mixing is built on that mapping, so replacing it with a
//! colorimetrically correct inverse would change every LAB-mode mix.

use crate::rgb::Rgb;

/// Normalize an angle in degrees into [0, 360).
///
/// Negative values are lifted by whole turns first, so `-30.0` maps to
/// `330.0` and `370.0` maps to `10.0`.
#[inline]
pub fn normalize_hue(h: f64) -> f64 {
    let m = h % 360.0;
    if m < 0.0 { m + 360.0 } else { m }
}

// ============================================================================
// HSL
// ============================================================================

/// HSL color values.
///
/// Ranges: h [0, 360), s and l percentages [0, 100]. Values are kept at
/// full precision; display formatting rounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create HSL values, normalizing hue into [0, 360) and clamping
    /// saturation and lightness to [0, 100].
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Hsl {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Return the same color with the hue rotated by `degrees`.
    ///
    /// The offset may be negative or larger than a full turn; the result
    /// is normalized into [0, 360).
    pub fn with_hue_offset(self, degrees: f64) -> Self {
        Hsl {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Convert HSL to RGB.
    ///
    /// Standard chroma/sector formula. Channels are rounded and clamped
    /// to [0, 255]; a round trip from RGB may drift by at most one step
    /// per channel.
    pub fn to_rgb(self) -> Rgb {
        let h = normalize_hue(self.h);
        let s = self.s.clamp(0.0, 100.0) / 100.0;
        let l = self.l.clamp(0.0, 100.0) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = h / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (rf, gf, bf) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            5 => (c, 0.0, x),
            _ => (0.0, 0.0, 0.0),
        };

        Rgb::from_f64((rf + m) * 255.0, (gf + m) * 255.0, (bf + m) * 255.0)
    }

    /// Format as a CSS `hsl(h, s%, l%)` function string with rounded
    /// components.
    pub fn css(self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.h.round(),
            self.s.round(),
            self.l.round()
        )
    }

    /// Format as a CSS `hsla(h, s%, l%, a)` function string.
    ///
    /// `alpha` is clamped to [0, 1] and printed as a plain decimal.
    pub fn css_with_alpha(self, alpha: f64) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.h.round(),
            self.s.round(),
            self.l.round(),
            alpha.clamp(0.0, 1.0)
        )
    }
}

// ============================================================================
// HSB / HSV
// ============================================================================

/// HSB (HSV) color values.
///
/// Ranges: h [0, 360), s and b percentages [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub h: f64,
    pub s: f64,
    pub b: f64,
}

impl Hsb {
    /// Create HSB values, normalizing hue and clamping percentages.
    pub fn new(h: f64, s: f64, b: f64) -> Self {
        Hsb {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            b: b.clamp(0.0, 100.0),
        }
    }

    /// Convert HSB to RGB.
    pub fn to_rgb(self) -> Rgb {
        let h = normalize_hue(self.h);
        let s = self.s.clamp(0.0, 100.0) / 100.0;
        let v = self.b.clamp(0.0, 100.0) / 100.0;

        let c = v * s;
        let hp = h / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let m = v - c;

        let (rf, gf, bf) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            5 => (c, 0.0, x),
            _ => (0.0, 0.0, 0.0),
        };

        Rgb::from_f64((rf + m) * 255.0, (gf + m) * 255.0, (bf + m) * 255.0)
    }
}

// ============================================================================
// CMYK
// ============================================================================

/// CMYK color values.
///
/// All four channels are percentages [0, 100]. Pure black is represented
/// as `(0, 0, 0, 100)`: K=100 forces C=M=Y=0 by convention so the
/// conversion never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    /// Create CMYK values, clamping each channel to [0, 100].
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Cmyk {
            c: c.clamp(0.0, 100.0),
            m: m.clamp(0.0, 100.0),
            y: y.clamp(0.0, 100.0),
            k: k.clamp(0.0, 100.0),
        }
    }

    /// Convert CMYK to RGB.
    pub fn to_rgb(self) -> Rgb {
        let c = self.c.clamp(0.0, 100.0) / 100.0;
        let m = self.m.clamp(0.0, 100.0) / 100.0;
        let y = self.y.clamp(0.0, 100.0) / 100.0;
        let k = self.k.clamp(0.0, 100.0) / 100.0;

        Rgb::from_f64(
            255.0 * (1.0 - c) * (1.0 - k),
            255.0 * (1.0 - m) * (1.0 - k),
            255.0 * (1.0 - y) * (1.0 - k),
        )
    }

    /// Format as the `cmyk(c%, m%, y%, k%)` pseudo-function string with
    /// rounded channels.
    ///
    /// Not a real CSS function; used for display and export only.
    pub fn css(self) -> String {
        format!(
            "cmyk({}%, {}%, {}%, {}%)",
            self.c.round(),
            self.m.round(),
            self.y.round(),
            self.k.round()
        )
    }
}

// ============================================================================
// LAB (approximate)
// ============================================================================

/// CIE LAB color values from the simplified forward transform.
///
/// L is [0, 100]; a and b are unbounded in principle (roughly ±128 for
/// colors reachable from sRGB).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    /// Convert LAB to RGB by an approximation, not an inverse.
    ///
    /// Maps L to HSL lightness and the a/b vector's angle and magnitude
    /// to hue and saturation, then converts HSL to RGB. This does NOT
    /// invert [`Rgb::to_lab`]; the inaccuracy is intentional and must be
    /// kept, since LAB-mode color mixing is defined in terms of it.
    pub fn to_rgb(self) -> Rgb {
        let hue = normalize_hue(self.b.atan2(self.a).to_degrees());
        let sat = (self.a * self.a + self.b * self.b).sqrt().clamp(0.0, 100.0);
        let light = self.l.clamp(0.0, 100.0);
        Hsl::new(hue, sat, light).to_rgb()
    }
}

// ============================================================================
// OKLCH (approximate)
// ============================================================================

/// OKLCH color values approximated from HSL.
///
/// l is [0, 1], c is [0, 0.4], h is degrees [0, 360). Derived by scaling
/// HSL lightness and saturation rather than through OKLab; close enough
/// for display, not colorimetric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    /// Format as a CSS `oklch(l c h)` function string, lightness and
    /// chroma to two decimals, hue rounded.
    pub fn css(self) -> String {
        format!("oklch({:.2} {:.2} {})", self.l, self.c, self.h.round())
    }
}

// ============================================================================
// RGB-side conversions
// ============================================================================

impl Rgb {
    /// Convert RGB to HSL.
    ///
    /// Standard max/min-channel formula. Equal channels are achromatic
    /// and map to hue 0, saturation 0.
    pub fn to_hsl(self) -> Hsl {
        let rf = self.r as f64 / 255.0;
        let gf = self.g as f64 / 255.0;
        let bf = self.b as f64 / 255.0;

        let max = rf.max(gf).max(bf);
        let min = rf.min(gf).min(bf);
        let delta = max - min;

        let l = (max + min) / 2.0;
        if delta == 0.0 {
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        let h = rgb_hue(rf, gf, bf, max, delta);

        Hsl {
            h,
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    /// Convert RGB to HSB (HSV).
    pub fn to_hsb(self) -> Hsb {
        let rf = self.r as f64 / 255.0;
        let gf = self.g as f64 / 255.0;
        let bf = self.b as f64 / 255.0;

        let max = rf.max(gf).max(bf);
        let min = rf.min(gf).min(bf);
        let delta = max - min;

        if delta == 0.0 {
            return Hsb {
                h: 0.0,
                s: 0.0,
                b: max * 100.0,
            };
        }

        Hsb {
            h: rgb_hue(rf, gf, bf, max, delta),
            s: delta / max * 100.0,
            b: max * 100.0,
        }
    }

    /// Convert RGB to CMYK.
    ///
    /// K = 1 - max(r, g, b); C, M, Y are computed relative to (1 - K).
    /// Pure black short-circuits to `(0, 0, 0, 100)`.
    pub fn to_cmyk(self) -> Cmyk {
        let rf = self.r as f64 / 255.0;
        let gf = self.g as f64 / 255.0;
        let bf = self.b as f64 / 255.0;

        let k = 1.0 - rf.max(gf).max(bf);
        if k >= 1.0 {
            return Cmyk {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 100.0,
            };
        }

        Cmyk {
            c: (1.0 - rf - k) / (1.0 - k) * 100.0,
            m: (1.0 - gf - k) / (1.0 - k) * 100.0,
            y: (1.0 - bf - k) / (1.0 - k) * 100.0,
            k: k * 100.0,
        }
    }

    /// Convert RGB to CIE LAB through the simplified pipeline.
    ///
    /// sRGB gamma decode (threshold 0.04045), linear RGB to XYZ with the
    /// D65 matrix, then XYZ to LAB with the piecewise cube root at
    /// threshold 0.008856.
    pub fn to_lab(self) -> Lab {
        let decode = |c: u8| {
            let c = c as f64 / 255.0;
            if c > 0.04045 {
                ((c + 0.055) / 1.055).powf(2.4)
            } else {
                c / 12.92
            }
        };
        let rf = decode(self.r);
        let gf = decode(self.g);
        let bf = decode(self.b);

        // D65 reference white (0.95047, 1.0, 1.08883)
        let x = (0.4124 * rf + 0.3576 * gf + 0.1805 * bf) / 0.95047;
        let y = 0.2126 * rf + 0.7152 * gf + 0.0722 * bf;
        let z = (0.0193 * rf + 0.1192 * gf + 0.9505 * bf) / 1.08883;

        let f = |t: f64| {
            if t > 0.008856 {
                t.cbrt()
            } else {
                7.787 * t + 16.0 / 116.0
            }
        };
        let fx = f(x);
        let fy = f(y);
        let fz = f(z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Convert RGB to OKLCH by scaling HSL.
    ///
    /// Lightness becomes l in [0, 1], saturation becomes chroma scaled
    /// to a 0.4 maximum, and the hue carries over. An approximation, not
    /// the OKLab transform.
    pub fn to_oklch(self) -> Oklch {
        let hsl = self.to_hsl();
        Oklch {
            l: hsl.l / 100.0,
            c: hsl.s / 100.0 * 0.4,
            h: hsl.h,
        }
    }
}

/// Hue in degrees [0, 360) from normalized channels, with `max` and
/// `delta` already computed and `delta` nonzero.
#[inline]
fn rgb_hue(rf: f64, gf: f64, bf: f64, max: f64, delta: f64) -> f64 {
    let h = if max == rf {
        (gf - bf) / delta
    } else if max == gf {
        (bf - rf) / delta + 2.0
    } else {
        (rf - gf) / delta + 4.0
    };
    normalize_hue(h * 60.0)
}
