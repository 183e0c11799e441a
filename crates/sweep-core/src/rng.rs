//! Deterministic per-cleaner and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each cleaner gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (cleaner_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive cleaner IDs uniformly across the seed space.
//! This means:
//!
//! - Cleaners never share RNG state, so a cleaner's movement stream is
//!   unaffected by how many random draws other cleaners made before it.
//! - All other randomness (activation-order shuffles, dirty-cell sampling)
//!   flows through one `SimRng`, so a run is reproducible from the global
//!   seed alone.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::CleanerId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── CleanerRng ────────────────────────────────────────────────────────────────

/// Per-cleaner deterministic RNG.
///
/// Create one per cleaner at simulation init; store in a parallel
/// `Vec<CleanerRng>` alongside the other SoA arrays.  Used by the move phase
/// to pick a neighborhood candidate.
pub struct CleanerRng(SmallRng);

impl CleanerRng {
    /// Seed deterministically from the run's global seed and a cleaner ID.
    pub fn new(global_seed: u64, cleaner: CleanerId) -> Self {
        let seed = global_seed ^ (cleaner.0 as u64).wrapping_mul(MIXING_CONSTANT);
        CleanerRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a uniformly random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations: the per-tick activation-order
/// shuffle and the initial without-replacement dirty-cell sample.
///
/// Used only in single-threaded contexts; the whole tick loop is sequential.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Sample `amount` distinct indices from `0..length` without replacement.
    ///
    /// # Panics
    /// Panics if `amount > length` — callers validate the dirty-cell count
    /// against the total cell count before sampling.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, length, amount).into_vec()
    }
}
