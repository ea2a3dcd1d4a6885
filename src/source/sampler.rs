//! Random ID generation
//!
//! Sampling goes through the [`Sampler`] trait so tests can substitute a
//! deterministic stub for the thread-local RNG.

use crate::error::{Error, Result};
use rand::Rng;

/// Integer sampling capability
pub trait Sampler {
    /// Sample one integer uniformly from the closed range `[min, max]`
    ///
    /// Callers guarantee `min <= max`.
    fn sample(&mut self, min: i64, max: i64) -> i64;
}

/// Sampler backed by the thread-local RNG
///
/// No reproducibility or seeding guarantee; each call draws fresh.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSampler;

impl RandomSampler {
    /// Create a new random sampler
    pub fn new() -> Self {
        Self
    }
}

impl Sampler for RandomSampler {
    fn sample(&mut self, min: i64, max: i64) -> i64 {
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Generate `count` IDs sampled independently and uniformly from `[min, max]`.
///
/// Rejects an inverted range instead of swapping the bounds.
pub fn generate_ids(sampler: &mut dyn Sampler, count: u32, min: i64, max: i64) -> Result<Vec<i64>> {
    if min > max {
        return Err(Error::InvalidRange { min, max });
    }

    Ok((0..count).map(|_| sampler.sample(min, max)).collect())
}
