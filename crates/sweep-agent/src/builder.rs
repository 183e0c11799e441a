//! Fluent builder for constructing `CleanerStore` + `CleanerRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use sweep_agent::CleanerStoreBuilder;
//! use sweep_core::GridPos;
//!
//! let (store, rngs) = CleanerStoreBuilder::new(4, /*seed=*/ 42)
//!     .start_pos(GridPos::new(1, 1))
//!     .build();
//!
//! assert_eq!(store.count, 4);
//! assert_eq!(rngs.len(),  4);
//! assert!(store.pos.iter().all(|&p| p == GridPos::new(1, 1)));
//! ```

use sweep_core::GridPos;

use crate::{CleanerRngs, CleanerStore};

/// Fluent builder for [`CleanerStore`] + [`CleanerRngs`].
///
/// All arrays are pre-allocated at construction time; every cleaner starts
/// at the same coordinate with a zero move counter.
pub struct CleanerStoreBuilder {
    count: usize,
    seed:  u64,
    start: GridPos,
}

impl CleanerStoreBuilder {
    /// Create a builder for `count` cleaners using `seed` as the global RNG
    /// seed.  The default starting coordinate is `(1, 1)`.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            start: GridPos::new(1, 1),
        }
    }

    /// Override the shared starting coordinate.
    ///
    /// The builder does not know the grid extent; the sim builder checks
    /// the coordinate against it when placing the cleaners.
    pub fn start_pos(mut self, start: GridPos) -> Self {
        self.start = start;
        self
    }

    /// Construct `CleanerStore` and `CleanerRngs`.
    pub fn build(self) -> (CleanerStore, CleanerRngs) {
        let store = CleanerStore::new(self.count, self.start);
        let rngs = CleanerRngs::new(self.count, self.seed);
        (store, rngs)
    }
}
