//! Engine Options
//!
//! Configuration for the gamut service and the startup working space.

use serde::{Deserialize, Serialize};

use crate::color::rgb::GAMUT_TOLERANCE;
use crate::error::{Error, Result};

/// Bisection steps used by the chroma search
pub const DEFAULT_ITERATIONS: u32 = 20;

/// Gamut test and chroma search parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamutOptions {
    /// Slack on both sides of [0, 1] for the unit-cube test
    pub tolerance: f64,
    /// Number of bisection steps
    pub iterations: u32,
    /// Extra cap on the chroma a clamp may keep
    ///
    /// `None` lets the clamp search up to the color's own chroma, which is
    /// what finds the boundary of spaces wider than the a/b working range.
    pub max_chroma: Option<f64>,
}

impl Default for GamutOptions {
    fn default() -> Self {
        Self {
            tolerance: GAMUT_TOLERANCE,
            iterations: DEFAULT_ITERATIONS,
            max_chroma: None,
        }
    }
}

impl GamutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_max_chroma(mut self, max_chroma: f64) -> Self {
        self.max_chroma = Some(max_chroma);
        self
    }

    /// Reject values the search cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::InvalidOptions(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        if self.iterations == 0 {
            return Err(Error::InvalidOptions(
                "iterations must be at least 1".to_string(),
            ));
        }
        if let Some(cap) = self.max_chroma.filter(|c| !c.is_finite() || *c <= 0.0) {
            return Err(Error::InvalidOptions(format!(
                "max_chroma must be finite and positive, got {}",
                cap
            )));
        }
        Ok(())
    }
}

/// Engine-wide options
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// The display advertises wide-gamut support; selects Display P3 as
    /// the default working space
    pub wide_gamut: bool,
    /// Gamut service parameters
    pub gamut: GamutOptions,
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wide_gamut(mut self, wide_gamut: bool) -> Self {
        self.wide_gamut = wide_gamut;
        self
    }

    pub fn with_gamut(mut self, gamut: GamutOptions) -> Self {
        self.gamut = gamut;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.gamut.validate()
    }
}
