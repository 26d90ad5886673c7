//! Test sample generation
//!
//! Deterministic sample streams for property sweeps. Every generator is
//! seeded so a failing case can be replayed from its seed.

use oxpick_core::{LinearRgb, Oklab, Oklch};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Nominal a/b and chroma working range
pub const NOMINAL_RANGE: f64 = 0.4;

/// Size and seed of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub seed: u64,
    pub count: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            count: 10_000,
        }
    }
}

impl SweepConfig {
    /// Split into `parts` independent sweeps with derived seeds
    pub fn split(&self, parts: usize) -> Vec<SweepConfig> {
        let parts = parts.max(1);
        (0..parts)
            .map(|i| SweepConfig {
                seed: self.seed.wrapping_mul(31).wrapping_add(i as u64),
                count: self.count / parts,
            })
            .collect()
    }
}

/// Seeded random color source
pub struct Sampler {
    rng: ChaCha8Rng,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform in [0, 1]
    pub fn unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..=1.0)
    }

    /// L in [0, 1], a and b in the nominal range
    pub fn oklab(&mut self) -> Oklab {
        Oklab::new(
            self.unit(),
            self.rng.gen_range(-NOMINAL_RANGE..=NOMINAL_RANGE),
            self.rng.gen_range(-NOMINAL_RANGE..=NOMINAL_RANGE),
        )
    }

    /// L in [0, 1], C in the nominal range, h in [0, 360)
    pub fn oklch(&mut self) -> Oklch {
        Oklch::new(
            self.unit(),
            self.rng.gen_range(0.0..=NOMINAL_RANGE),
            self.rng.gen_range(0.0..360.0),
        )
    }

    /// Each channel in [0, 1]
    pub fn linear_rgb(&mut self) -> LinearRgb {
        LinearRgb::new(self.unit(), self.unit(), self.unit())
    }

    /// Arbitrary a/b pair, including values far outside the working range
    pub fn ab_wide(&mut self) -> (f64, f64) {
        (self.rng.gen_range(-10.0..=10.0), self.rng.gen_range(-10.0..=10.0))
    }

    pub fn bytes(&mut self, len: usize) -> Vec<u8> {
        let mut data = vec![0u8; len];
        self.rng.fill(&mut data[..]);
        data
    }

    pub fn oklab_batch(&mut self, count: usize) -> Vec<Oklab> {
        (0..count).map(|_| self.oklab()).collect()
    }
}

/// Evenly spaced hues at fixed lightness and chroma
pub fn hue_ramp(l: f64, c: f64, steps: usize) -> Vec<Oklch> {
    (0..steps)
        .map(|i| Oklch::new(l, c, i as f64 * 360.0 / steps as f64))
        .collect()
}
