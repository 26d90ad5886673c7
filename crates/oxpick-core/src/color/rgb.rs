//! RGB Color Primitives
//!
//! Linear-light and gamma-encoded RGB triples, 8-bit quantization and the
//! `#rrggbb` hex form, sRGB↔Display P3 primaries conversion, and the
//! tolerant unit-cube gamut test.

use std::fmt::Write as _;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::math::gamma::{gamma_to_linear, linear_to_gamma};
use crate::math::matrix::{LINEAR_P3_TO_LINEAR_SRGB, LINEAR_SRGB_TO_LINEAR_P3};

/// Tolerance applied on both sides of [0, 1] by [`is_in_gamut`]
///
/// Absorbs matrix round-trip error so colors on the gamut surface are not
/// reported as out of gamut.
pub const GAMUT_TOLERANCE: f64 = 5e-4;

/// Linear-light RGB triple
///
/// Components are proportional to radiance. Values outside [0, 1] are
/// meaningful: they describe colors outside the space's gamut.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    /// Create a new linear RGB triple
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Encode with the sRGB transfer function (clamps to [0, 1] first)
    #[inline]
    pub fn to_gamma(&self) -> Rgb {
        Rgb::new(
            linear_to_gamma(self.r),
            linear_to_gamma(self.g),
            linear_to_gamma(self.b),
        )
    }

    /// True if every component lies within the tolerant unit cube
    #[inline]
    pub fn is_in_gamut(&self) -> bool {
        is_in_gamut(self.r, self.g, self.b)
    }

    /// Maximum absolute component difference
    #[inline]
    pub fn max_diff(&self, other: &Self) -> f64 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
    }
}

/// Gamma-encoded RGB triple in the 0.0-1.0 range
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgb {
    /// Red component (0.0 to 1.0)
    pub r: f64,
    /// Green component (0.0 to 1.0)
    pub g: f64,
    /// Blue component (0.0 to 1.0)
    pub b: f64,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Decode with the sRGB transfer function (not clamped)
    #[inline]
    pub fn to_linear(&self) -> LinearRgb {
        LinearRgb::new(
            gamma_to_linear(self.r),
            gamma_to_linear(self.g),
            gamma_to_linear(self.b),
        )
    }

    /// Quantize to 8 bits per channel
    #[inline]
    pub fn to_rgb8(&self) -> Rgb8 {
        Rgb8::new(quantize(self.r), quantize(self.g), quantize(self.b))
    }

    /// Format as lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        self.to_rgb8().to_hex()
    }
}

/// 8-bit per channel RGB
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Create a new 8-bit color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Expand to the 0.0-1.0 range
    #[inline]
    pub fn to_unit(&self) -> Rgb {
        Rgb::new(
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    /// Format as lowercase, zero-padded `#rrggbb`
    pub fn to_hex(&self) -> String {
        let mut s = String::with_capacity(7);
        s.push('#');
        for byte in [self.r, self.g, self.b] {
            // Writing to a String cannot fail
            let _ = write!(s, "{:02x}", byte);
        }
        s
    }

    /// Parse exactly six hex digits with an optional leading `#`
    ///
    /// Case-insensitive. Anything else, including surrounding whitespace
    /// or the three-digit short form, is rejected.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Round-half-up quantization of a unit value to a byte, clamping first
#[inline]
fn quantize(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0 + 0.5).floor() as u8
}

/// Format a gamma-encoded triple as `#rrggbb`
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Rgb::new(r, g, b).to_hex()
}

/// Parse `#rrggbb` (or `rrggbb`) into a gamma-encoded triple
///
/// Returns `None` on malformed input.
pub fn parse_hex(hex: &str) -> Option<Rgb> {
    Rgb8::from_hex(hex).map(|c| c.to_unit())
}

/// True iff each component lies within [0, 1] widened by [`GAMUT_TOLERANCE`]
#[inline]
pub fn is_in_gamut(r: f64, g: f64, b: f64) -> bool {
    is_in_gamut_with(r, g, b, GAMUT_TOLERANCE)
}

/// Unit-cube gamut test with an explicit tolerance
#[inline]
pub fn is_in_gamut_with(r: f64, g: f64, b: f64, tolerance: f64) -> bool {
    let lo = -tolerance;
    let hi = 1.0 + tolerance;
    (lo..=hi).contains(&r) && (lo..=hi).contains(&g) && (lo..=hi).contains(&b)
}

/// Convert linear sRGB to linear Display P3
#[inline]
pub fn linear_srgb_to_linear_p3(rgb: LinearRgb) -> LinearRgb {
    LinearRgb::from_array(LINEAR_SRGB_TO_LINEAR_P3.multiply_vec(rgb.to_array()))
}

/// Convert linear Display P3 to linear sRGB
#[inline]
pub fn linear_p3_to_linear_srgb(rgb: LinearRgb) -> LinearRgb {
    LinearRgb::from_array(LINEAR_P3_TO_LINEAR_SRGB.multiply_vec(rgb.to_array()))
}
