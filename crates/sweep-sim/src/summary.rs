//! Run outcome and aggregate metric types.

use sweep_core::Tick;

/// Why the run loop stopped.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunOutcome {
    /// Every dirty marker was removed before the tick cutoff.
    Completed,
    /// The tick cutoff elapsed with dirt remaining.
    MaxTicksReached,
}

/// Aggregate counters at a tick boundary, handed to observers.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TickStats {
    /// Dirty markers not yet removed.
    pub dirty_remaining: usize,
    /// Cells currently clean (total cells minus dirty cells).
    pub clean_cells: usize,
    /// Sum of all cleaners' move counters.
    pub total_moves: u64,
}

/// Final report for one run.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RunSummary {
    pub outcome: RunOutcome,

    /// Ticks actually executed (≤ `max_ticks`).
    pub ticks_executed: u64,

    /// The tick at which the grid first became fully clean, or `max_ticks`
    /// if it never did.
    pub ticks_to_clean: Tick,

    /// Percentage of cells clean at the end of the run, in `[0, 100]`.
    pub clean_percentage: f64,

    /// Total cumulative moves across all cleaners.
    pub total_moves: u64,
}
