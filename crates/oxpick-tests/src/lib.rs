//! # oxpick-tests
//!
//! Parity and property testing for oxpick.
//!
//! This crate provides:
//! - Seeded sample generators for OKLab, OKLCH and RGB sweeps
//! - A synthetic ICC profile builder for matrix/TRC profiles
//! - Helpers that serialize reference profiles with lcms2
//!
//! ## Reference Implementations
//!
//! - **palette**: OKLab/OKLCH math and the sRGB transfer function
//! - **lcms2**: ICC profile serialization and RGB transforms
//!
//! ## Test Categories
//!
//! 1. **Parity**: oxpick against palette and lcms2
//! 2. **Properties**: round trips, gamut tolerance, clamp invariants
//! 3. **ICC Scenarios**: synthetic and malformed profiles, active space imports

pub mod patterns;
pub mod profiles;

pub use patterns::{Sampler, SweepConfig, hue_ramp};
pub use profiles::{ProfileBuilder, ProfileError, TagPayload, colorants_d50};
