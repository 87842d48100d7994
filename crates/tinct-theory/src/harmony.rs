//! Harmony palette generation
//!
//! Builds small palettes from a base color by rotating its hue and
//! varying lightness and saturation according to one of the classic
//! harmony families. Generation is deterministic: the same base, kind,
//! and count always produce the same palette, and element 0 is always
//! the base color itself.

use tinct_core::{Hsl, Rgb};

use crate::error::{TheoryError, TheoryResult};

/// Largest palette a single call will generate.
pub const MAX_PALETTE: usize = 10;

/// Saturation for generated palette members, in percent.
const GEN_SATURATION: f64 = 75.0;
/// Lightness for generated palette members, in percent.
const GEN_LIGHTNESS: f64 = 55.0;

/// Harmony family for palette generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarmonyKind {
    /// Neighbors on the wheel, 30 degrees apart
    Analogous,
    /// One hue, spread across lightness and saturation
    Monochromatic,
    /// Three hues 120 degrees apart
    Triadic,
    /// Base and its opposite
    Complementary,
    /// Base plus the two neighbors of its complement (split-complementary)
    Compound,
}

/// Generate a harmony palette from a base color.
///
/// The palette always has exactly `count` members and its first member
/// is the base color, bit-identical, even for families whose generation
/// rule would land somewhere slightly different. Generated members use
/// saturation 75% and lightness 55% unless the family varies them.
///
/// # Errors
///
/// Returns [`TheoryError::InvalidParameters`] unless
/// `1 <= count <= MAX_PALETTE`.
///
/// # Example
///
/// ```
/// use tinct_core::Rgb;
/// use tinct_theory::harmony::{HarmonyKind, harmony_palette};
///
/// let base = Rgb::from_hex("#FF5733").unwrap();
/// let palette = harmony_palette(base, HarmonyKind::Triadic, 3).unwrap();
/// assert_eq!(palette[0], base);
/// assert_eq!(palette.len(), 3);
/// ```
pub fn harmony_palette(base: Rgb, kind: HarmonyKind, count: usize) -> TheoryResult<Vec<Rgb>> {
    if count == 0 || count > MAX_PALETTE {
        return Err(TheoryError::InvalidParameters(format!(
            "palette size must be 1..={MAX_PALETTE}, got {count}"
        )));
    }
    if count == 1 {
        return Ok(vec![base]);
    }

    let base_hsl = base.to_hsl();
    let mut colors = match kind {
        HarmonyKind::Analogous => analogous(base, base_hsl, count),
        HarmonyKind::Monochromatic => monochromatic(base_hsl, count),
        HarmonyKind::Triadic => triadic(base, base_hsl, count),
        HarmonyKind::Complementary => complementary(base, base_hsl, count),
        HarmonyKind::Compound => compound(base, base_hsl, count),
    };

    // The base color anchors every palette at index 0
    colors[0] = base;
    Ok(colors)
}

/// Members at base + 30 degrees per step.
fn analogous(base: Rgb, base_hsl: Hsl, count: usize) -> Vec<Rgb> {
    let mut colors = Vec::with_capacity(count);
    colors.push(base);
    for i in 1..count {
        let hue = base_hsl.h + 30.0 * i as f64;
        colors.push(Hsl::new(hue, GEN_SATURATION, GEN_LIGHTNESS).to_rgb());
    }
    colors
}

/// One hue, lightness 20..90 and saturation 60..90 spread across the
/// whole palette. Index 0 is rebuilt here but replaced by the anchor.
fn monochromatic(base_hsl: Hsl, count: usize) -> Vec<Rgb> {
    let mut colors = Vec::with_capacity(count);
    let span = (count - 1) as f64;
    for i in 0..count {
        let t = i as f64 / span;
        let sat = 60.0 + 30.0 * t;
        let light = 20.0 + 70.0 * t;
        colors.push(Hsl::new(base_hsl.h, sat, light).to_rgb());
    }
    colors
}

/// +120 and +240 first, then the three triadic hues again with
/// lightness stepping up per full cycle.
fn triadic(base: Rgb, base_hsl: Hsl, count: usize) -> Vec<Rgb> {
    let hues = [base_hsl.h, base_hsl.h + 120.0, base_hsl.h + 240.0];
    let mut colors = Vec::with_capacity(count);
    colors.push(base);
    for i in 1..count {
        let cycle = (i / 3) as f64;
        let light = (GEN_LIGHTNESS + 12.0 * cycle).min(90.0);
        colors.push(Hsl::new(hues[i % 3], GEN_SATURATION, light).to_rgb());
    }
    colors
}

/// Complement at index 1, then base/complement alternating with
/// lightness and saturation stepping up.
fn complementary(base: Rgb, base_hsl: Hsl, count: usize) -> Vec<Rgb> {
    let complement = base_hsl.h + 180.0;
    let mut colors = Vec::with_capacity(count);
    colors.push(base);
    for i in 1..count {
        let hue = if i % 2 == 1 { complement } else { base_hsl.h };
        let (sat, light) = if i == 1 {
            (GEN_SATURATION, GEN_LIGHTNESS)
        } else {
            (
                (GEN_SATURATION + 3.0 * (i - 1) as f64).min(95.0),
                (GEN_LIGHTNESS + 6.0 * (i - 1) as f64).min(90.0),
            )
        };
        colors.push(Hsl::new(hue, sat, light).to_rgb());
    }
    colors
}

/// Split-complementary: the complement's neighbors at +-30 degrees
/// first, then analogous variants of the base spaced 20 degrees apart.
///
/// `complement - 30.0` can go negative for small base hues; `Hsl::new`
/// lifts it back into [0, 360).
fn compound(base: Rgb, base_hsl: Hsl, count: usize) -> Vec<Rgb> {
    let complement = base_hsl.h + 180.0;
    let mut colors = Vec::with_capacity(count);
    colors.push(base);
    for i in 1..count {
        let hue = match i {
            1 => complement - 30.0,
            2 => complement + 30.0,
            _ => base_hsl.h + 20.0 * (i as f64 - 2.0),
        };
        colors.push(Hsl::new(hue, GEN_SATURATION, GEN_LIGHTNESS).to_rgb());
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [HarmonyKind; 5] = [
        HarmonyKind::Analogous,
        HarmonyKind::Monochromatic,
        HarmonyKind::Triadic,
        HarmonyKind::Complementary,
        HarmonyKind::Compound,
    ];

    fn hue_of(c: Rgb) -> f64 {
        c.to_hsl().h
    }

    /// Absolute wheel distance between two hues.
    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).abs() % 360.0;
        d.min(360.0 - d)
    }

    #[test]
    fn test_anchor_invariant_all_kinds_and_counts() {
        let base = Rgb::from_hex("#FF5733").unwrap();
        for kind in KINDS {
            for count in 2..=MAX_PALETTE {
                let palette = harmony_palette(base, kind, count).unwrap();
                assert_eq!(palette.len(), count, "{kind:?} count {count}");
                assert_eq!(palette[0], base, "{kind:?} count {count}");
            }
        }
    }

    #[test]
    fn test_count_one_returns_base_only() {
        let base = Rgb::new(10, 200, 30);
        for kind in KINDS {
            assert_eq!(harmony_palette(base, kind, 1).unwrap(), vec![base]);
        }
    }

    #[test]
    fn test_out_of_range_count_rejected() {
        let base = Rgb::WHITE;
        assert!(harmony_palette(base, HarmonyKind::Analogous, 0).is_err());
        assert!(harmony_palette(base, HarmonyKind::Analogous, 11).is_err());
    }

    #[test]
    fn test_analogous_spacing() {
        let base = Rgb::from_hex("#FF5733").unwrap();
        let base_hue = hue_of(base);
        let palette = harmony_palette(base, HarmonyKind::Analogous, 4).unwrap();
        for (i, c) in palette.iter().enumerate().skip(1) {
            let expected = (base_hue + 30.0 * i as f64) % 360.0;
            assert!(
                hue_distance(hue_of(*c), expected) < 1.5,
                "member {i} at hue {} expected near {expected}",
                hue_of(*c)
            );
        }
    }

    #[test]
    fn test_analogous_wraps_past_360() {
        // Base near the top of the wheel forces the rotation to wrap
        let base = Hsl::new(350.0, 80.0, 50.0).to_rgb();
        let palette = harmony_palette(base, HarmonyKind::Analogous, 2).unwrap();
        let h = hue_of(palette[1]);
        assert!(hue_distance(h, (hue_of(base) + 30.0) % 360.0) < 1.5);
        assert!(h < 360.0);
    }

    #[test]
    fn test_monochromatic_single_hue_rising_lightness() {
        let base = Rgb::from_hex("#3366CC").unwrap();
        let base_hue = hue_of(base);
        let palette = harmony_palette(base, HarmonyKind::Monochromatic, 6).unwrap();

        let mut last_l = -1.0;
        for c in palette.iter().skip(1) {
            let hsl = c.to_hsl();
            assert!(hue_distance(hsl.h, base_hue) < 2.0, "hue moved: {hsl:?}");
            assert!(hsl.l > last_l, "lightness not increasing: {hsl:?}");
            last_l = hsl.l;
        }
        // Spread reaches toward both ends of the lightness range
        assert!(palette[1].to_hsl().l < 45.0);
        assert!(palette[5].to_hsl().l > 85.0);
    }

    #[test]
    fn test_triadic_hue_placement() {
        let base = Rgb::from_hex("#FF5733").unwrap();
        let base_hue = hue_of(base);
        let palette = harmony_palette(base, HarmonyKind::Triadic, 5).unwrap();

        assert!(hue_distance(hue_of(palette[1]), base_hue + 120.0) < 1.5);
        assert!(hue_distance(hue_of(palette[2]), base_hue + 240.0) < 1.5);
        // Fourth member restarts the cycle on the base hue, lighter
        assert!(hue_distance(hue_of(palette[3]), base_hue) < 1.5);
        assert!(palette[3].to_hsl().l > 60.0);
        assert!(hue_distance(hue_of(palette[4]), base_hue + 120.0) < 1.5);
    }

    #[test]
    fn test_complementary_alternation() {
        let base = Rgb::from_hex("#00A0FF").unwrap();
        let base_hue = hue_of(base);
        let complement = (base_hue + 180.0) % 360.0;
        let palette = harmony_palette(base, HarmonyKind::Complementary, 6).unwrap();

        assert!(hue_distance(hue_of(palette[1]), complement) < 1.5);
        assert!(hue_distance(hue_of(palette[2]), base_hue) < 1.5);
        assert!(hue_distance(hue_of(palette[3]), complement) < 1.5);
        assert!(hue_distance(hue_of(palette[4]), base_hue) < 1.5);
        // Later members are lighter than the first generated pair
        assert!(palette[5].to_hsl().l > palette[1].to_hsl().l);
    }

    #[test]
    fn test_compound_split_complement() {
        let base = Rgb::from_hex("#FF5733").unwrap();
        let base_hue = hue_of(base);
        let palette = harmony_palette(base, HarmonyKind::Compound, 5).unwrap();

        assert!(hue_distance(hue_of(palette[1]), base_hue + 150.0) < 1.5);
        assert!(hue_distance(hue_of(palette[2]), base_hue + 210.0) < 1.5);
        // Extras fan out from the base hue 20 degrees at a time
        assert!(hue_distance(hue_of(palette[3]), base_hue + 20.0) < 1.5);
        assert!(hue_distance(hue_of(palette[4]), base_hue + 40.0) < 1.5);
    }

    #[test]
    fn test_compound_negative_intermediate_hue() {
        // Base hue below 30 pushes complement - 30 through negative
        // territory before normalization
        let base = Hsl::new(10.0, 80.0, 50.0).to_rgb();
        let palette = harmony_palette(base, HarmonyKind::Compound, 2).unwrap();
        let h = hue_of(palette[1]);
        assert!((0.0..360.0).contains(&h));
        assert!(hue_distance(h, 160.0) < 2.0);
    }

    #[test]
    fn test_generated_members_use_fixed_saturation_lightness() {
        let base = Rgb::from_hex("#FF5733").unwrap();
        let palette = harmony_palette(base, HarmonyKind::Analogous, 5).unwrap();
        for c in palette.iter().skip(1) {
            let hsl = c.to_hsl();
            assert!((hsl.s - 75.0).abs() < 1.5, "saturation drifted: {hsl:?}");
            assert!((hsl.l - 55.0).abs() < 1.5, "lightness drifted: {hsl:?}");
        }
    }

    #[test]
    fn test_deterministic() {
        let base = Rgb::new(12, 240, 100);
        for kind in KINDS {
            let a = harmony_palette(base, kind, 7).unwrap();
            let b = harmony_palette(base, kind, 7).unwrap();
            assert_eq!(a, b);
        }
    }
}
