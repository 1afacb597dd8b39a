//! Deterministic, seedable RNG wrapper.
//!
//! # Determinism strategy
//!
//! A run has one root `SimRng` seeded from `SimConfig::seed`.  Components
//! that need an independent random process (one exponential stream per
//! attractiveness class, the place chooser, …) take a child stream:
//!
//!   child_seed = root_seed XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive offsets across the seed space.  Because a
//! child's seed depends only on the root seed and its offset, how often one
//! stream is drawn from never shifts another stream's sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation RNG.
///
/// Used only from the single simulation thread.  Wraps `SmallRng`, which is
/// fast and reproducible for a given seed on a given platform.
#[derive(Clone, Debug)]
pub struct SimRng {
    seed: u64,
    inner: SmallRng,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng {
            seed,
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Derive an independent stream identified by `offset`.
    ///
    /// Pure function of `(self.seed, offset)`: it does not consume from
    /// `self`, so callers may derive children in any order.
    pub fn child(&self, offset: u64) -> SimRng {
        // +1 keeps offset 0 from collapsing onto the parent's own seed.
        SimRng::new(self.seed ^ offset.wrapping_add(1).wrapping_mul(MIXING_CONSTANT))
    }

    /// Expose the inner `SmallRng` for use with `rand`/`rand_distr`
    /// distribution types (`dist.sample(rng.inner())`).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.inner
    }

    /// Uniform index in `0..len`.
    ///
    /// # Panics
    /// Panics if `len == 0`.
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}
