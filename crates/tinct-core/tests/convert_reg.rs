//! Round-trip and reference-value tests for the color conversions
//!
//! Exercises hex parsing, the RGB/HSL/HSB/CMYK round trips, and the CSS
//! string formats across the public API.

use tinct_core::{Cmyk, Hsb, Hsl, Rgb};

/// Every distinct channel pattern worth sweeping: corners, near-corners,
/// mid grays, and a few arbitrary colors.
fn sweep_colors() -> Vec<Rgb> {
    let mut out = Vec::new();
    for r in (0..=255).step_by(15) {
        for (g, b) in [(0, 255), (255, 0), (r, r), (34, 187)] {
            out.push(Rgb::new(r as u8, g as u8, b as u8));
        }
    }
    out.extend([
        Rgb::BLACK,
        Rgb::WHITE,
        Rgb::new(255, 87, 51),
        Rgb::new(1, 1, 2),
        Rgb::new(254, 255, 255),
    ]);
    out
}

// ============================================================================
// hex round trip
// ============================================================================

#[test]
fn test_hex_round_trip_is_exact() {
    for c in sweep_colors() {
        let parsed = Rgb::from_hex(&c.to_hex()).unwrap();
        assert_eq!(parsed, c);
    }
}

#[test]
fn test_hex_parse_accepts_any_case() {
    let upper = Rgb::from_hex("#ABCDEF").unwrap();
    let lower = Rgb::from_hex("#abcdef").unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper.to_hex(), "#ABCDEF");
}

// ============================================================================
// cylindrical round trips
// ============================================================================

#[test]
fn test_hsl_round_trip_drift_at_most_one() {
    for c in sweep_colors() {
        let back = c.to_hsl().to_rgb();
        assert!(
            (c.r as i32 - back.r as i32).abs() <= 1
                && (c.g as i32 - back.g as i32).abs() <= 1
                && (c.b as i32 - back.b as i32).abs() <= 1,
            "HSL round trip drifted more than 1: {c} -> {back}"
        );
    }
}

#[test]
fn test_hsb_round_trip_drift_at_most_one() {
    for c in sweep_colors() {
        let back = c.to_hsb().to_rgb();
        assert!(
            (c.r as i32 - back.r as i32).abs() <= 1
                && (c.g as i32 - back.g as i32).abs() <= 1
                && (c.b as i32 - back.b as i32).abs() <= 1,
            "HSB round trip drifted more than 1: {c} -> {back}"
        );
    }
}

#[test]
fn test_cmyk_round_trip_drift_at_most_one() {
    for c in sweep_colors() {
        let back = c.to_cmyk().to_rgb();
        assert!(
            (c.r as i32 - back.r as i32).abs() <= 1
                && (c.g as i32 - back.g as i32).abs() <= 1
                && (c.b as i32 - back.b as i32).abs() <= 1,
            "CMYK round trip drifted more than 1: {c} -> {back}"
        );
    }
}

// ============================================================================
// reference values
// ============================================================================

#[test]
fn test_reference_orange_chain() {
    // #FF5733 -> RGB (255, 87, 51) -> HSL (11, 100%, 60%)
    let c = Rgb::from_hex("#FF5733").unwrap();
    assert_eq!((c.r, c.g, c.b), (255, 87, 51));

    let hsl = c.to_hsl();
    assert_eq!(hsl.h.round(), 11.0);
    assert_eq!(hsl.s.round(), 100.0);
    assert_eq!(hsl.l.round(), 60.0);
}

#[test]
fn test_black_cmyk_has_no_chroma() {
    let k = Rgb::from_hex("#000000").unwrap().to_cmyk();
    assert_eq!((k.c, k.m, k.y, k.k), (0.0, 0.0, 0.0, 100.0));
    assert_eq!(k.to_rgb(), Rgb::BLACK);
}

#[test]
fn test_lab_neutral_axis() {
    // Grays keep a/b near zero and spread L monotonically
    let mut last_l = -1.0;
    for v in [0u8, 64, 128, 192, 255] {
        let lab = Rgb::new(v, v, v).to_lab();
        assert!(lab.a.abs() < 0.05, "gray {v} has chroma");
        assert!(lab.b.abs() < 0.05, "gray {v} has chroma");
        assert!(lab.l > last_l);
        last_l = lab.l;
    }
}

// ============================================================================
// CSS strings
// ============================================================================

#[test]
fn test_css_function_strings() {
    let c = Rgb::new(255, 87, 51);
    assert_eq!(c.css(), "rgb(255, 87, 51)");
    assert_eq!(c.css_with_alpha(0.8), "rgba(255, 87, 51, 0.8)");
    assert_eq!(c.to_hsl().css(), "hsl(11, 100%, 60%)");
    assert_eq!(c.to_hsl().css_with_alpha(1.0), "hsla(11, 100%, 60%, 1)");
    assert_eq!(c.to_cmyk().css(), "cmyk(0%, 66%, 80%, 0%)");
}

#[test]
fn test_constructed_values_are_normalized() {
    let h = Hsl::new(370.0, 120.0, -5.0);
    assert_eq!((h.h, h.s, h.l), (10.0, 100.0, 0.0));

    let b = Hsb::new(-90.0, 50.0, 200.0);
    assert_eq!((b.h, b.s, b.b), (270.0, 50.0, 100.0));

    let k = Cmyk::new(-1.0, 101.0, 55.5, 0.0);
    assert_eq!((k.c, k.m, k.y, k.k), (0.0, 100.0, 55.5, 0.0));
}
