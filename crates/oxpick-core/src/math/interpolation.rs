//! Interpolation functions for sampled tone curves
//!
//! This module provides:
//! - Linear interpolation between two values
//! - 1D LUT lookup with linear interpolation
//! - Inversion of a sampled monotonic curve into a fixed-size LUT

/// Resolution of inverse lookup tables built for sampled curves
pub const INVERSE_LUT_SIZE: usize = 4096;

/// Linear interpolation between two values
///
/// Returns a + t * (b - a) for t in [0, 1]
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Lookup in a 1D LUT with linear interpolation
///
/// # Arguments
/// * `lut` - 1D LUT values sampled uniformly over [0, 1]
/// * `input` - Input value, clamped to [0, 1]
pub fn lut1d_interp(lut: &[f64], input: f64) -> f64 {
    if lut.is_empty() {
        return input;
    }
    if lut.len() == 1 {
        return lut[0];
    }

    let max_idx = (lut.len() - 1) as f64;
    let pos = (input * max_idx).clamp(0.0, max_idx);

    let i0 = pos.floor() as usize;
    let i1 = (i0 + 1).min(lut.len() - 1);
    let t = pos - i0 as f64;

    lerp(lut[i0], lut[i1], t)
}

/// Build an inverse LUT for a sampled, non-decreasing curve
///
/// For each of `size` evenly spaced output levels the forward table is
/// scanned from where the previous level stopped, and the fractional table
/// position where the level is crossed is found by linear interpolation.
/// Levels below the first sample map to 0, above the last sample to 1.
pub fn build_inverse_lut(forward: &[f64], size: usize) -> Vec<f64> {
    if size < 2 {
        return vec![0.0; size];
    }
    let step = 1.0 / (size - 1) as f64;
    if forward.len() < 2 {
        return (0..size).map(|i| i as f64 * step).collect();
    }

    let last = forward.len() - 1;
    let mut inverse = Vec::with_capacity(size);
    let mut j = 0;

    for i in 0..size {
        let target = i as f64 * step;
        while j + 1 < last && forward[j + 1] < target {
            j += 1;
        }

        let lo = forward[j];
        let hi = forward[j + 1];
        let t = if hi > lo {
            ((target - lo) / (hi - lo)).clamp(0.0, 1.0)
        } else if target >= hi {
            1.0
        } else {
            0.0
        };
        inverse.push((j as f64 + t) / last as f64);
    }

    inverse
}
