//! `RandomActivation` — per-tick shuffled activation order.
//!
//! # Why a fresh shuffle every tick
//!
//! Activation order is correctness-relevant: within a tick, an earlier
//! cleaner's grid mutations are visible to later ones, which is what decides
//! collision outcomes.  Re-drawing a uniform permutation each tick keeps any
//! single cleaner from being systematically first (a fixed rotation would
//! bias who wins contested cells).

use sweep_core::{CleanerId, SimRng, Tick};

/// Owns the roster of live cleaners and the global tick counter.
#[derive(Default)]
pub struct RandomActivation {
    roster: Vec<CleanerId>,
    steps:  Tick,
}

impl RandomActivation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scheduler whose roster is `0..count`.
    pub fn with_roster(count: usize) -> Self {
        Self {
            roster: (0..count as u32).map(CleanerId).collect(),
            steps:  Tick::ZERO,
        }
    }

    /// Add one cleaner to the roster.
    pub fn register(&mut self, cleaner: CleanerId) {
        self.roster.push(cleaner);
    }

    /// A fresh uniformly random permutation of the roster.
    ///
    /// Each call re-shuffles from scratch; consecutive ticks are independent
    /// draws, not rotations of one another.
    pub fn activation_order(&self, rng: &mut SimRng) -> Vec<CleanerId> {
        let mut order = self.roster.clone();
        rng.shuffle(&mut order);
        order
    }

    /// Advance the tick counter.  Called once per tick, after every cleaner
    /// in the activation order has been processed.
    #[inline]
    pub fn advance(&mut self) {
        self.steps = self.steps + 1;
    }

    /// Number of completed ticks.
    #[inline]
    pub fn steps(&self) -> Tick {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }
}
