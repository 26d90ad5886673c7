//! Numeric building blocks
//!
//! Matrices, transfer functions, Bradford adaptation and the table lookups
//! behind sampled ICC curves. Nothing here knows about working spaces.

pub mod chromatic_adaptation;
pub mod gamma;
pub mod interpolation;
pub mod matrix;

pub use chromatic_adaptation::{D50_TO_D65_BRADFORD, D65_TO_D50_BRADFORD, adapt_xyz, bradford};
pub use gamma::{
    ParametricCurve, gamma_to_linear, linear_to_gamma, srgb_gamma_decode, srgb_gamma_encode,
};
pub use interpolation::{INVERSE_LUT_SIZE, build_inverse_lut, lerp, lut1d_interp};
pub use matrix::Matrix3x3;
