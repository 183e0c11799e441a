//! The `OutputWriter` trait implemented by backend writers.

use crate::{CellRow, OutputResult, RunSummaryRow, TickSummaryRow};

/// Trait implemented by output backends (CSV today; the observer is generic
/// so alternatives slot in without touching the engine).
pub trait OutputWriter {
    /// Write a batch of per-cell classification rows for one tick.
    fn write_cells(&mut self, rows: &[CellRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the final run summary row.
    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
