//! Core cleaner storage: `CleanerStore` (SoA data) and `CleanerRngs`.
//!
//! # Why two structs?
//!
//! The activation loop needs `&mut CleanerRngs` (a cleaner's RNG draws a
//! move candidate) while also mutating the grid and reading the store.
//! Keeping RNGs in a separate struct lets the engine take disjoint borrows
//! of the two without fighting the borrow checker.

use sweep_core::{CleanerId, CleanerRng, GridPos};

// ── CleanerRngs ───────────────────────────────────────────────────────────────

/// Per-cleaner deterministic RNG state, separated from [`CleanerStore`] so
/// the engine can borrow both mutably at once.
pub struct CleanerRngs {
    pub inner: Vec<CleanerRng>,
}

impl CleanerRngs {
    /// Allocate and seed `count` per-cleaner RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| CleanerRng::new(global_seed, CleanerId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one cleaner's RNG.
    #[inline]
    pub fn get_mut(&mut self, cleaner: CleanerId) -> &mut CleanerRng {
        &mut self.inner[cleaner.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── CleanerStore ──────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all cleaner state.
///
/// Every `Vec` field has exactly `count` elements; the `CleanerId` value is
/// the index into all of them:
///
/// ```ignore
/// let pos = store.pos[cleaner.index()];  // O(1), cache-friendly
/// ```
pub struct CleanerStore {
    /// Number of cleaners.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Current cell of each cleaner.  Always mirrors the grid's occupant
    /// sets: the engine updates both in the same operation.
    pub pos: Vec<GridPos>,

    /// Lifetime move counter of each cleaner.  Starts at 0 and only ever
    /// increments — an abandoned (blocked) move does not count.
    pub moves: Vec<u64>,
}

impl CleanerStore {
    /// `true` if there are no cleaners.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `CleanerId`s in ascending index order.
    pub fn cleaner_ids(&self) -> impl Iterator<Item = CleanerId> + '_ {
        (0..self.count as u32).map(CleanerId)
    }

    /// Sum of all cleaners' move counters.
    pub fn total_moves(&self) -> u64 {
        self.moves.iter().sum()
    }

    // ── Package-private constructor used by CleanerStoreBuilder ───────────

    pub(crate) fn new(count: usize, start: GridPos) -> Self {
        Self {
            count,
            pos:   vec![start; count],
            moves: vec![0; count],
        }
    }
}
