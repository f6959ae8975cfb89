//! Injectable randomness for the cosmetic per-bead rotation noise.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Vec3;

/// Source of small random rotations applied to organically strung beads.
///
/// Production code uses [`RandomJitter`]; tests use [`NoJitter`] or a seeded
/// [`RandomJitter`] so layouts are reproducible.
pub trait JitterSource {
    /// Returns a rotation with each axis in `[-amplitude, amplitude]`.
    fn sample(&mut self, amplitude: f32) -> Vec3;
}

/// Jitter source that never perturbs anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn sample(&mut self, _amplitude: f32) -> Vec3 {
        Vec3::ZERO
    }
}

/// Uniform jitter backed by a standard RNG.
#[derive(Debug, Clone)]
pub struct RandomJitter {
    rng: StdRng,
}

impl RandomJitter {
    /// Reproducible jitter for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Jitter seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl JitterSource for RandomJitter {
    fn sample(&mut self, amplitude: f32) -> Vec3 {
        if !(amplitude.is_finite() && amplitude > 0.0) {
            return Vec3::ZERO;
        }
        Vec3::new(
            self.rng.gen_range(-amplitude..=amplitude),
            self.rng.gen_range(-amplitude..=amplitude),
            self.rng.gen_range(-amplitude..=amplitude),
        )
    }
}
