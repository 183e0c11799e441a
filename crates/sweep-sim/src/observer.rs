//! Simulation observer trait for progress reporting and data collection.

use sweep_core::Tick;
use sweep_grid::GridSnapshot;

use crate::{RunSummary, TickStats};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The presentation layer lives entirely
/// behind this trait: the engine hands it per-tick grid snapshots and the
/// final summary, and knows nothing about rendering or file formats.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stats: TickStats) {
///         println!("{tick}: {} dirty cells left", stats.dirty_remaining);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any activation.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the updated aggregate counters.
    fn on_tick_end(&mut self, _tick: Tick, _stats: TickStats) {}

    /// Called after each tick with a read-only classification of every cell.
    ///
    /// The snapshot owns its data, so implementors may store it.
    fn on_snapshot(&mut self, _tick: Tick, _snapshot: &GridSnapshot) {}

    /// Called once after the run loop stops, with the final report.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
