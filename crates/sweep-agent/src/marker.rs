//! `MarkerStore` — registry of dirty markers.
//!
//! Markers are passive: created once at simulation start at distinct cells,
//! destroyed the moment a cleaner shares their cell during the clean phase.
//! Rather than shrinking the arrays on removal (which would invalidate
//! outstanding `MarkerId`s), removal flips a tombstone flag and decrements
//! the live count.

use sweep_core::{GridPos, MarkerId};

/// SoA registry of all dirty markers ever spawned this run.
#[derive(Default)]
pub struct MarkerStore {
    /// Cell of each marker.  Never changes after spawn.
    pub pos: Vec<GridPos>,

    /// Tombstone flags, indexed by `MarkerId`.
    removed: Vec<bool>,

    /// Count of markers not yet removed.
    remaining: usize,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new marker at `pos` and return its ID.
    ///
    /// Setup-time only: the engine spawns all markers before the first tick.
    pub fn spawn(&mut self, pos: GridPos) -> MarkerId {
        let id = MarkerId(self.pos.len() as u32);
        self.pos.push(pos);
        self.removed.push(false);
        self.remaining += 1;
        id
    }

    /// Mark `marker` as removed.
    ///
    /// Removing the same marker twice is a logic fault in the caller — the
    /// engine only removes markers it just found in a grid cell, and the
    /// grid entry goes away in the same operation.
    pub fn remove(&mut self, marker: MarkerId) {
        debug_assert!(!self.removed[marker.index()], "marker removed twice: {marker}");
        self.removed[marker.index()] = true;
        self.remaining -= 1;
    }

    /// Count of markers not yet removed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Total markers ever spawned (removed or not).
    #[inline]
    pub fn spawned(&self) -> usize {
        self.pos.len()
    }

    #[inline]
    pub fn is_removed(&self, marker: MarkerId) -> bool {
        self.removed[marker.index()]
    }

    /// Iterator over the IDs of markers not yet removed.
    pub fn live_ids(&self) -> impl Iterator<Item = MarkerId> + '_ {
        self.removed
            .iter()
            .enumerate()
            .filter(|&(_, &gone)| !gone)
            .map(|(i, _)| MarkerId(i as u32))
    }
}
