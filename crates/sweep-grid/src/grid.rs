//! `MultiGrid` — dense cell → occupant-set storage.

use sweep_core::{GridPos, MarkerId};

use crate::{GridError, GridResult, Occupant};

/// A fixed-size, bounded, non-wrapping 2D grid where each cell holds zero or
/// more occupants.
///
/// All operations are synchronous and immediate: a mutation made by one
/// cleaner's activation is visible to the next activation in the same tick.
/// That sequential visibility is what the collision rule is defined against,
/// so the grid deliberately has no batching or deferred-commit layer.
pub struct MultiGrid {
    width:  u32,
    height: u32,
    /// Occupant lists, indexed by `y * width + x`.  Lists keep insertion
    /// order; removal is order-preserving so "first marker in the cell"
    /// is a stable notion.
    cells: Vec<Vec<Occupant>>,
}

impl MultiGrid {
    /// Create an empty grid.  Dimensions must be positive — the sim builder
    /// validates them before construction.
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "grid dimensions must be positive");
        let cell_count = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Vec::new(); cell_count],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Convert an index from the dense cell array back to a coordinate.
    ///
    /// Used when sampling initial dirty cells without replacement: sample
    /// indices in `0..cell_count()`, then map each back to a `GridPos`.
    #[inline]
    pub fn pos_of_index(&self, index: usize) -> GridPos {
        GridPos::new((index % self.width as usize) as u32, (index / self.width as usize) as u32)
    }

    #[inline]
    fn index(&self, pos: GridPos) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The Moore neighborhood of `pos`: up to 8 adjacent cells, center
    /// excluded, clipped to the grid bounds.  Cells outside the extent are
    /// simply absent (no wraparound).  Empty for a 1x1 grid.
    pub fn neighborhood(&self, pos: GridPos) -> Vec<GridPos> {
        let mut out = Vec::with_capacity(8);
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if let Some(n) = pos.offset(dx, dy) {
                    if self.in_bounds(n) {
                        out.push(n);
                    }
                }
            }
        }
        out
    }

    /// The occupants currently at `pos`, in insertion order.
    ///
    /// Out-of-bounds positions have no occupants by definition, so the
    /// returned slice is empty rather than an error.
    pub fn occupants(&self, pos: GridPos) -> &[Occupant] {
        if !self.in_bounds(pos) {
            return &[];
        }
        &self.cells[self.index(pos)]
    }

    /// `true` if any cleaner occupies `pos`.
    pub fn contains_cleaner(&self, pos: GridPos) -> bool {
        self.occupants(pos).iter().any(|o| o.is_cleaner())
    }

    /// The first dirty marker at `pos` (in insertion order), if any.
    pub fn first_marker(&self, pos: GridPos) -> Option<MarkerId> {
        self.occupants(pos).iter().find_map(|o| match o {
            Occupant::Marker(m) => Some(*m),
            Occupant::Cleaner(_) => None,
        })
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Add `occupant` to the occupant set at `pos`.
    pub fn place(&mut self, occupant: Occupant, pos: GridPos) -> GridResult<()> {
        if !self.in_bounds(pos) {
            return Err(self.out_of_bounds(pos));
        }
        let idx = self.index(pos);
        self.cells[idx].push(occupant);
        Ok(())
    }

    /// Remove `occupant` from the occupant set at `pos`.
    pub fn remove(&mut self, occupant: Occupant, pos: GridPos) -> GridResult<()> {
        if !self.in_bounds(pos) {
            return Err(self.out_of_bounds(pos));
        }
        let idx = self.index(pos);
        let cell = &mut self.cells[idx];
        match cell.iter().position(|&o| o == occupant) {
            // Order-preserving removal keeps the first-marker tie-break stable.
            Some(i) => {
                cell.remove(i);
                Ok(())
            }
            None => Err(GridError::NotFound { pos }),
        }
    }

    /// Atomically remove `occupant` from `from` and add it at `to`.
    ///
    /// Both preconditions are checked before either set is touched, so a
    /// failed move leaves the grid unchanged.
    pub fn move_occupant(&mut self, occupant: Occupant, from: GridPos, to: GridPos) -> GridResult<()> {
        if !self.in_bounds(from) {
            return Err(self.out_of_bounds(from));
        }
        if !self.in_bounds(to) {
            return Err(self.out_of_bounds(to));
        }
        let from_idx = self.index(from);
        if !self.cells[from_idx].contains(&occupant) {
            return Err(GridError::NotFound { pos: from });
        }
        self.remove(occupant, from)?;
        self.place(occupant, to)
    }

    fn out_of_bounds(&self, pos: GridPos) -> GridError {
        GridError::OutOfBounds {
            pos,
            width:  self.width,
            height: self.height,
        }
    }
}
