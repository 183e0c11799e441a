//! The `Sim` struct and its tick loop.

use sweep_agent::{CleanerRngs, CleanerStore, MarkerStore};
use sweep_core::{CleanerId, SimConfig, SimRng, Tick};
use sweep_grid::{GridSnapshot, MultiGrid, Occupant};
use sweep_schedule::RandomActivation;

use crate::{RunOutcome, RunSummary, SimObserver, SimResult, TickStats};

/// The main simulation runner.
///
/// `Sim` exclusively owns all grid and entity state for the duration of a
/// run; no external mutation occurs mid-run.  Execution is single-threaded
/// and synchronous throughout — there is nothing to cancel except via the
/// tick cutoff.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (dimensions, cleaner count, cutoff, seed, …).
    pub config: SimConfig,

    /// Cell → occupant-set index.  Holds references only; entity state
    /// lives in the stores below.
    pub grid: MultiGrid,

    /// Cleaner positions and move counters (SoA arrays).
    pub cleaners: CleanerStore,

    /// Per-cleaner deterministic RNGs, separated for the split-borrow
    /// pattern.
    pub rngs: CleanerRngs,

    /// Registry of every dirty marker spawned this run.
    pub markers: MarkerStore,

    /// Activation-order scheduler; also owns the global tick counter.
    pub schedule: RandomActivation,

    /// Simulation-level RNG: activation shuffles and initial dirt sampling.
    pub rng: SimRng,

    /// Dirty markers not yet removed.  Mirrors `markers.remaining()`; kept
    /// as a plain counter because the tick loop reads it constantly.
    pub dirty_remaining: usize,

    /// Cells currently clean.  Together with `dirty_remaining` this always
    /// sums to the total cell count.
    pub clean_cells: usize,

    /// Sum of all cleaners' move counters, recomputed at each tick end.
    pub total_moves: u64,

    /// The tick at which `dirty_remaining` first reached zero.  Write-once:
    /// later ticks never change a recorded value.
    pub completion_tick: Option<Tick>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick until the grid is clean or `max_ticks`
    /// ticks have executed, whichever comes first.
    ///
    /// Calls observer hooks at every tick boundary and hands the observer a
    /// fresh grid snapshot after each tick.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        let mut executed = 0u64;
        while executed < self.config.max_ticks {
            self.observed_tick(observer)?;
            executed += 1;
            if self.dirty_remaining == 0 {
                break;
            }
        }
        let summary = self.summary(executed);
        observer.on_run_end(&summary);
        Ok(summary)
    }

    /// Run exactly `n` ticks from the current position, ignoring both the
    /// cutoff and the completion check.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_tick(observer)?;
        }
        Ok(())
    }

    /// Number of completed ticks.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.schedule.steps()
    }

    /// Aggregate counters as of the last tick boundary.
    pub fn tick_stats(&self) -> TickStats {
        TickStats {
            dirty_remaining: self.dirty_remaining,
            clean_cells:     self.clean_cells,
            total_moves:     self.total_moves,
        }
    }

    /// Classify every cell of the current grid state.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::capture(&self.grid)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Execute one full tick: activate every cleaner once in a fresh random
    /// order, then update the aggregate counters.
    pub fn tick(&mut self) -> SimResult<()> {
        // ── Phase 1: shuffled sequential activation ───────────────────────
        //
        // Mutations are applied immediately, so a cleaner activated later in
        // the order sees every earlier cleaner's moves and removals.
        let order = self.schedule.activation_order(&mut self.rng);
        for cleaner in order {
            self.activate(cleaner)?;
        }

        // ── Phase 2: accounting ───────────────────────────────────────────
        self.schedule.advance();
        self.total_moves = self.cleaners.total_moves();
        if self.dirty_remaining == 0 && self.completion_tick.is_none() {
            self.completion_tick = Some(self.schedule.steps());
        }
        Ok(())
    }

    /// One cleaner's activation: clean, then move, in that strict order.
    fn activate(&mut self, cleaner: CleanerId) -> SimResult<()> {
        let pos = self.cleaners.pos[cleaner.index()];

        // ── Clean phase ───────────────────────────────────────────────────
        //
        // At most one marker is removed per activation, even if several
        // occupy the cell; the first in insertion order is taken.
        if let Some(marker) = self.grid.first_marker(pos) {
            self.grid.remove(Occupant::Marker(marker), pos)?;
            self.markers.remove(marker);
            self.dirty_remaining -= 1;
            self.clean_cells += 1;
        }

        // ── Move phase ────────────────────────────────────────────────────
        //
        // One candidate is drawn uniformly from the Moore neighborhood (not
        // weighted by occupancy).  A candidate holding another cleaner
        // blocks the move entirely — the cleaner stays put and its counter
        // is unchanged.  Markers never block.
        let hood = self.grid.neighborhood(pos);
        let Some(&target) = self.rngs.get_mut(cleaner).choose(&hood) else {
            // Degenerate 1x1 grid: no candidate exists, no move attempted.
            return Ok(());
        };
        if !self.grid.contains_cleaner(target) {
            self.grid.move_occupant(Occupant::Cleaner(cleaner), pos, target)?;
            self.cleaners.pos[cleaner.index()] = target;
            self.cleaners.moves[cleaner.index()] += 1;
        }
        Ok(())
    }

    fn observed_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        observer.on_tick_start(self.current_tick());
        self.tick()?;
        let now = self.current_tick();
        observer.on_tick_end(now, self.tick_stats());
        observer.on_snapshot(now, &self.snapshot());
        Ok(())
    }

    fn summary(&self, ticks_executed: u64) -> RunSummary {
        let outcome = if self.dirty_remaining == 0 {
            RunOutcome::Completed
        } else {
            RunOutcome::MaxTicksReached
        };
        let cells = self.config.cell_count();
        RunSummary {
            outcome,
            ticks_executed,
            ticks_to_clean:   self.completion_tick.unwrap_or(self.config.end_tick()),
            clean_percentage: self.clean_cells as f64 / cells as f64 * 100.0,
            total_moves:      self.total_moves,
        }
    }
}
