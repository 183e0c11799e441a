//! Read-only per-tick cell classification for the presentation layer.

use std::fmt;

use sweep_core::GridPos;

use crate::MultiGrid;

/// What a cell looks like from the outside: empty, dirty, or holding a
/// cleaner.
///
/// A cell containing both a marker and a cleaner classifies as `Dirty` —
/// the marker has not been removed yet, and that is the state the renderer
/// should show.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    Dirty,
    Cleaner,
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CellState::Empty   => "empty",
            CellState::Dirty   => "dirty",
            CellState::Cleaner => "cleaner",
        };
        write!(f, "{s}")
    }
}

/// A full-grid snapshot taken at a tick boundary.
///
/// The snapshot owns its data — it stays valid after the grid mutates, so
/// observers may keep it across ticks.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSnapshot {
    pub width:  u32,
    pub height: u32,
    /// Cell states indexed by `y * width + x`.
    pub cells: Vec<CellState>,
}

impl GridSnapshot {
    /// Classify every cell of `grid`.
    pub fn capture(grid: &MultiGrid) -> Self {
        let width = grid.width();
        let height = grid.height();
        let mut cells = Vec::with_capacity(grid.cell_count());
        for y in 0..height {
            for x in 0..width {
                let pos = GridPos::new(x, y);
                let occupants = grid.occupants(pos);
                let state = if occupants.iter().any(|o| o.is_marker()) {
                    CellState::Dirty
                } else if occupants.iter().any(|o| o.is_cleaner()) {
                    CellState::Cleaner
                } else {
                    CellState::Empty
                };
                cells.push(state);
            }
        }
        Self { width, height, cells }
    }

    /// The state of the cell at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate is outside the snapshot extent.
    #[inline]
    pub fn state_at(&self, x: u32, y: u32) -> CellState {
        assert!(x < self.width && y < self.height, "coordinate outside snapshot");
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Iterator over `(pos, state)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, CellState)> + '_ {
        self.cells.iter().enumerate().map(|(i, &state)| {
            let x = (i % self.width as usize) as u32;
            let y = (i / self.width as usize) as u32;
            (GridPos::new(x, y), state)
        })
    }

    /// Number of cells in a given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }
}
