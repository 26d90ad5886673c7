//! Color types and conversions
//!
//! This module provides:
//! - OKLab / OKLCH and their conversion to and from linear sRGB
//! - Linear and gamma-encoded RGB, 8-bit quantization and hex
//! - CIE XYZ with the D50 and D65 whites

pub mod oklab;
pub mod rgb;
pub mod xyz;

pub use oklab::{
    Oklab, Oklch, hue_distance, linear_srgb_to_oklab, normalize_hue, oklab_to_linear_srgb,
    oklab_to_oklch, oklch_to_oklab,
};
pub use rgb::{
    GAMUT_TOLERANCE, LinearRgb, Rgb, Rgb8, is_in_gamut, is_in_gamut_with,
    linear_p3_to_linear_srgb, linear_srgb_to_linear_p3, parse_hex, rgb_to_hex,
};
pub use xyz::Xyz;
