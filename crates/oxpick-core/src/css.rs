//! CSS Color Values
//!
//! Parsing and formatting for the subset of CSS Color 4 a picker exchanges
//! with text fields: `#rrggbb`, `oklab(L a b)` and `oklch(L C h)` with
//! space-separated arguments. Input is trimmed and ASCII-lowercased first.
//! Lightness may be written as a percentage; so may a, b and C, where 100%
//! stands for 0.4. Hue accepts an optional `deg` unit. Alpha is not
//! supported. Malformed input yields `None`.

use crate::color::oklab::{Oklab, Oklch, normalize_hue};
use crate::color::rgb::Rgb8;
use crate::space::WorkingColorSpace;

/// Chroma and a/b value of `100%`
const PERCENT_REFERENCE_CHROMA: f64 = 0.4;

/// Digits after the decimal point for L, a, b and C
const PRECISION: usize = 5;

/// Digits after the decimal point for hue
const HUE_PRECISION: usize = 3;

/// A parsed color value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue {
    /// Device color in the working space
    Hex(Rgb8),
    Oklab(Oklab),
    Oklch(Oklch),
}

impl ColorValue {
    /// Resolve to OKLab; hex values are interpreted in `space`
    pub fn to_oklab(&self, space: &WorkingColorSpace) -> Oklab {
        match self {
            Self::Hex(rgb) => space.device_to_oklab(space.decode_rgb(rgb.to_unit())),
            Self::Oklab(lab) => *lab,
            Self::Oklch(lch) => lch.to_oklab(),
        }
    }
}

/// Parse `#rrggbb`, `oklab(...)` or `oklch(...)`
pub fn parse_color(s: &str) -> Option<ColorValue> {
    let lowercase = s.trim().to_ascii_lowercase();
    let s = lowercase.as_str();

    if s.starts_with('#') {
        Rgb8::from_hex(s).map(ColorValue::Hex)
    } else if s.starts_with("oklab") {
        parse_oklab(s).map(ColorValue::Oklab)
    } else if s.starts_with("oklch") {
        parse_oklch(s).map(ColorValue::Oklch)
    } else {
        None
    }
}

/// Parse `oklab(L a b)`
pub fn parse_oklab(s: &str) -> Option<Oklab> {
    let lowercase = s.trim().to_ascii_lowercase();
    let [l, a, b] = parse_function(&lowercase, "oklab")?;
    Some(Oklab::new(
        parse_lightness(l)?,
        parse_scaled(a, PERCENT_REFERENCE_CHROMA)?,
        parse_scaled(b, PERCENT_REFERENCE_CHROMA)?,
    ))
}

/// Parse `oklch(L C h)`
///
/// Negative chroma is rejected. Hue is normalized into [0, 360).
pub fn parse_oklch(s: &str) -> Option<Oklch> {
    let lowercase = s.trim().to_ascii_lowercase();
    let [l, c, h] = parse_function(&lowercase, "oklch")?;
    let c = parse_scaled(c, PERCENT_REFERENCE_CHROMA)?;
    if c < 0.0 {
        return None;
    }
    let h = parse_number(h.strip_suffix("deg").unwrap_or(h))?;
    Some(Oklch::new(parse_lightness(l)?, c, normalize_hue(h)))
}

/// `oklab(L a b)` with fixed precision
pub fn format_oklab(lab: Oklab) -> String {
    format!(
        "oklab({} {} {})",
        format_coordinate(lab.l, PRECISION),
        format_coordinate(lab.a, PRECISION),
        format_coordinate(lab.b, PRECISION),
    )
}

/// `oklch(L C h)` with fixed precision
pub fn format_oklch(lch: Oklch) -> String {
    format!(
        "oklch({} {} {})",
        format_coordinate(lch.l, PRECISION),
        format_coordinate(lch.c, PRECISION),
        format_coordinate(lch.h, HUE_PRECISION),
    )
}

/// Split `name(x y z)` into its three arguments
fn parse_function<'a>(s: &'a str, name: &str) -> Option<[&'a str; 3]> {
    let body = s
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;

    let mut iter = body.split_whitespace();
    let args = [iter.next()?, iter.next()?, iter.next()?];
    if iter.next().is_some() {
        return None;
    }
    Some(args)
}

fn parse_number(s: &str) -> Option<f64> {
    // Rust also accepts "inf" and "nan"
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_scaled(s: &str, percent_reference: f64) -> Option<f64> {
    match s.strip_suffix('%') {
        Some(pct) => Some(parse_number(pct)? / 100.0 * percent_reference),
        None => parse_number(s),
    }
}

fn parse_lightness(s: &str) -> Option<f64> {
    parse_scaled(s, 1.0)
}

fn format_coordinate(v: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, v);
    // Values that round to zero print without a sign
    match s.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|c| c == b'0' || c == b'.') => rest.to_string(),
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_parse_oklab() {
        let lab = parse_oklab("oklab(0.5 0.1 -0.2)").unwrap();
        assert_eq!(lab, Oklab::new(0.5, 0.1, -0.2));

        let lab = parse_oklab("oklab( 62.5% 50% -25% )").unwrap();
        assert!((lab.l - 0.625).abs() < EPSILON);
        assert!((lab.a - 0.2).abs() < EPSILON);
        assert!((lab.b + 0.1).abs() < EPSILON);
    }

    #[test]
    fn test_parse_oklch() {
        let lch = parse_oklch("oklch(0.7 0.15 120deg)").unwrap();
        assert_eq!(lch, Oklch::new(0.7, 0.15, 120.0));

        let lch = parse_oklch("oklch(70% 0.1 -30)").unwrap();
        assert!((lch.l - 0.7).abs() < EPSILON);
        assert!((lch.h - 330.0).abs() < EPSILON);

        assert!(parse_oklch("oklch(0.7 -0.1 30)").is_none());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for s in [
            "",
            "oklab",
            "oklab()",
            "oklab(0.5 0.1)",
            "oklab(0.5 0.1 0.2 0.3)",
            "oklab(0.5 0.1 0.2",
            "oklab 0.5 0.1 0.2)",
            "oklab(0.5, 0.1, 0.2)",
            "oklab(nan 0 0)",
            "oklab(inf 0 0)",
            "oklab(0.5 0.1 0.2 / 0.5)",
            "oklch(0.5 0.1 30rad)",
            "lab(50 10 10)",
        ] {
            assert!(parse_color(s).is_none(), "accepted {:?}", s);
        }
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(
            parse_color("  #FF8000 "),
            Some(ColorValue::Hex(Rgb8::new(255, 128, 0)))
        );
        assert_eq!(
            parse_color("OKLAB(0.5 0 0)"),
            Some(ColorValue::Oklab(Oklab::new(0.5, 0.0, 0.0)))
        );
        assert_eq!(
            parse_color("oklch (0.5 0.1 90)"),
            Some(ColorValue::Oklch(Oklch::new(0.5, 0.1, 90.0)))
        );
        assert!(parse_color("#ff80").is_none());
    }

    #[test]
    fn test_value_to_oklab() {
        let srgb = WorkingColorSpace::srgb();
        let white = parse_color("#ffffff").unwrap().to_oklab(&srgb);
        assert!((white.l - 1.0).abs() < 1e-4);

        let lab = parse_color("oklch(0.5 0.1 90)").unwrap().to_oklab(&srgb);
        assert!(lab.a.abs() < 1e-12);
        assert!((lab.b - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_format() {
        assert_eq!(
            format_oklab(Oklab::new(0.5, 0.1, -0.25)),
            "oklab(0.50000 0.10000 -0.25000)"
        );
        assert_eq!(
            format_oklch(Oklch::new(0.62796, 0.25768, 29.234)),
            "oklch(0.62796 0.25768 29.234)"
        );
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(
            format_oklab(Oklab::new(0.5, -0.0, -1e-9)),
            "oklab(0.50000 0.00000 0.00000)"
        );
    }

    #[test]
    fn test_format_then_parse() {
        let lab = Oklab::new(0.73, -0.05, 0.12);
        let back = parse_oklab(&format_oklab(lab)).unwrap();
        assert!(back.distance(&lab) < 1e-5);
    }
}
