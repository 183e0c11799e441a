//! Fluent builder for constructing a [`Sim`].

use sweep_agent::{CleanerStoreBuilder, MarkerStore};
use sweep_core::{GridPos, SimConfig, SimRng};
use sweep_grid::{MultiGrid, Occupant};
use sweep_schedule::RandomActivation;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required input
///
/// - [`SimConfig`] — cleaner count, grid extent, dirty fraction, tick
///   cutoff, and RNG seed.
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default  |
/// |-----------------|----------|
/// | `.start_pos(p)` | `(1, 1)` |
///
/// # Example
///
/// ```rust,ignore
/// let config = SimConfig::new(2, 10, 10, 0.3, 200, 42);
/// let mut sim = SimBuilder::new(config).build()?;
/// let summary = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    start:  GridPos,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            start: GridPos::new(1, 1),
        }
    }

    /// Override the shared starting coordinate for all cleaners.
    ///
    /// Must be inside the grid extent; checked at [`build`](Self::build).
    /// The default `(1, 1)` is out of bounds on a 1x1 grid, so degenerate
    /// grids need an explicit `(0, 0)` here.
    pub fn start_pos(mut self, start: GridPos) -> Self {
        self.start = start;
        self
    }

    /// Validate the configuration, place cleaners and dirty markers, and
    /// return a ready-to-run [`Sim`].
    ///
    /// All precondition violations surface here, before any tick runs:
    /// bad dimensions, a dirty fraction outside `[0, 1]`, a dirty-cell
    /// count exceeding the grid, zero cleaners, or a start coordinate
    /// outside the extent.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let mut grid = MultiGrid::new(self.config.width, self.config.height);
        let mut rng = SimRng::new(self.config.seed);

        // ── Cleaners: all at the shared start coordinate ──────────────────
        let (cleaners, rngs) = CleanerStoreBuilder::new(self.config.num_cleaners, self.config.seed)
            .start_pos(self.start)
            .build();
        for cleaner in cleaners.cleaner_ids() {
            grid.place(Occupant::Cleaner(cleaner), self.start)?;
        }

        // ── Dirty markers: distinct cells, sampled without replacement ────
        let dirty_count = self.config.dirty_cell_count();
        let mut markers = MarkerStore::new();
        for index in rng.sample_indices(grid.cell_count(), dirty_count) {
            let pos = grid.pos_of_index(index);
            let marker = markers.spawn(pos);
            grid.place(Occupant::Marker(marker), pos)?;
        }

        let clean_cells = self.config.cell_count() - dirty_count;
        Ok(Sim {
            schedule: RandomActivation::with_roster(self.config.num_cleaners),
            config: self.config,
            grid,
            cleaners,
            rngs,
            markers,
            rng,
            dirty_remaining: dirty_count,
            clean_cells,
            total_moves: 0,
            completion_tick: None,
        })
    }
}
