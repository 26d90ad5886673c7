//! Batch OKLab conversions and gamut classification
//!
//! Each function processes `min(input.len(), output.len())` elements and
//! leaves any remaining output untouched.

use multiversion::multiversion;

use crate::color::oklab::{Oklab, linear_srgb_to_oklab, oklab_to_linear_srgb};
use crate::color::rgb::{LinearRgb, is_in_gamut_with};
use crate::options::GamutOptions;
use crate::space::WorkingColorSpace;

/// OKLab → linear sRGB for a slice
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn oklab_to_linear_srgb_batch(input: &[Oklab], output: &mut [LinearRgb]) {
    for (lab, out) in input.iter().zip(output.iter_mut()) {
        *out = oklab_to_linear_srgb(*lab);
    }
}

/// Linear sRGB → OKLab for a slice
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn linear_srgb_to_oklab_batch(input: &[LinearRgb], output: &mut [Oklab]) {
    for (rgb, out) in input.iter().zip(output.iter_mut()) {
        *out = linear_srgb_to_oklab(*rgb);
    }
}

/// OKLab → linear sRGB over interleaved `[l, a, b, l, a, b, ...]` buffers
///
/// Both buffers are viewed as whole triples; a trailing partial triple is
/// ignored.
pub fn oklab_to_linear_srgb_interleaved(input: &[f64], output: &mut [f64]) {
    let input: &[Oklab] = bytemuck::cast_slice(whole_triples(input));
    let output: &mut [LinearRgb] = bytemuck::cast_slice_mut(whole_triples_mut(output));
    oklab_to_linear_srgb_batch(input, output);
}

/// Linear sRGB → OKLab over interleaved `[r, g, b, r, g, b, ...]` buffers
pub fn linear_srgb_to_oklab_interleaved(input: &[f64], output: &mut [f64]) {
    let input: &[LinearRgb] = bytemuck::cast_slice(whole_triples(input));
    let output: &mut [Oklab] = bytemuck::cast_slice_mut(whole_triples_mut(output));
    linear_srgb_to_oklab_batch(input, output);
}

fn whole_triples(data: &[f64]) -> &[f64] {
    &data[..data.len() - data.len() % 3]
}

fn whole_triples_mut(data: &mut [f64]) -> &mut [f64] {
    let len = data.len() - data.len() % 3;
    &mut data[..len]
}

/// In-gamut flag per OKLab sample against `space`
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn gamut_mask_batch(
    space: &WorkingColorSpace,
    input: &[Oklab],
    mask: &mut [bool],
    options: &GamutOptions,
) {
    // Extract matrix elements for better register allocation
    let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = space.from_linear_srgb_matrix().m;
    let tolerance = options.tolerance;

    for (lab, out) in input.iter().zip(mask.iter_mut()) {
        let LinearRgb { r, g, b } = oklab_to_linear_srgb(*lab);
        *out = is_in_gamut_with(
            m00 * r + m01 * g + m02 * b,
            m10 * r + m11 * g + m12 * b,
            m20 * r + m21 * g + m22 * b,
            tolerance,
        );
    }
}
