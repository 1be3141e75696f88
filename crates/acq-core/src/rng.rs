//! Deterministic per-stratum RNG wrapper for sampling-based quadrature.
//!
//! # Determinism strategy
//!
//! Each stratum (grid cell) gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (stratum * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive stratum indices uniformly across the seed space.
//! Cells never share RNG state, so an estimate does not depend on the order
//! (or thread) in which cells are visited.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-stratum deterministic RNG.
pub struct SampleRng(SmallRng);

impl SampleRng {
    /// Seed deterministically from the run's global seed and a stratum index.
    pub fn new(global_seed: u64, stratum: u64) -> Self {
        let seed = global_seed ^ stratum.wrapping_mul(MIXING_CONSTANT);
        SampleRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen()
    }
}
