//! WCAG contrast evaluation
//!
//! Relative luminance and contrast ratio per WCAG 2.x, plus the
//! AA / AAA / large-text classification.
//!
//! # See also
//!
//! WCAG 2.1, "relative luminance" and "contrast ratio" definitions.

use tinct_core::Rgb;

/// WCAG conformance rating for a contrast ratio.
///
/// Ordered from strictest to weakest: AAA (>= 7.0), AA (>= 4.5),
/// AA for large text (>= 3.0), then fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WcagRating {
    Aaa,
    Aa,
    AaLarge,
    Fail,
}

impl WcagRating {
    /// Minimum ratio for AAA normal text.
    pub const AAA_MIN: f64 = 7.0;
    /// Minimum ratio for AA normal text.
    pub const AA_MIN: f64 = 4.5;
    /// Minimum ratio for AA large text.
    pub const AA_LARGE_MIN: f64 = 3.0;

    /// Classify an unrounded contrast ratio.
    ///
    /// The comparison must happen before any display rounding: a ratio
    /// of 6.996 is AA even though it displays as "7.00".
    pub fn classify(ratio: f64) -> Self {
        if ratio >= Self::AAA_MIN {
            WcagRating::Aaa
        } else if ratio >= Self::AA_MIN {
            WcagRating::Aa
        } else if ratio >= Self::AA_LARGE_MIN {
            WcagRating::AaLarge
        } else {
            WcagRating::Fail
        }
    }

    /// Whether normal-size text passes at this rating.
    pub fn passes_normal_text(self) -> bool {
        matches!(self, WcagRating::Aaa | WcagRating::Aa)
    }

    /// Whether large text passes at this rating.
    pub fn passes_large_text(self) -> bool {
        !matches!(self, WcagRating::Fail)
    }

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            WcagRating::Aaa => "AAA",
            WcagRating::Aa => "AA",
            WcagRating::AaLarge => "AA Large",
            WcagRating::Fail => "Fail",
        }
    }
}

/// Convert an sRGB channel to linear light.
///
/// WCAG 2.x piecewise linearization with the published 0.03928
/// threshold.
#[inline]
fn channel_to_linear(c: u8) -> f64 {
    let v = c as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, in [0, 1].
///
/// `L = 0.2126 R + 0.7152 G + 0.0722 B` over linearized channels.
/// Black is 0.0 and white is 1.0.
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * channel_to_linear(color.r)
        + 0.7152 * channel_to_linear(color.g)
        + 0.0722 * channel_to_linear(color.b)
}

/// WCAG contrast ratio between two colors, in [1, 21].
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`; symmetric in its
/// arguments. Black against white is exactly 21.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Black or white, whichever reads better on the given background.
///
/// Ties go to black, which only happens at the exact crossover
/// luminance.
pub fn readable_text_color(background: Rgb) -> Rgb {
    if contrast_ratio(background, Rgb::BLACK) >= contrast_ratio(background, Rgb::WHITE) {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}
