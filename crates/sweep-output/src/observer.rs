//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sweep_core::Tick;
use sweep_grid::GridSnapshot;
use sweep_sim::{RunSummary, SimObserver, TickStats};

use crate::row::{CellRow, RunSummaryRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes cell snapshots, tick summaries, and the
/// final run summary to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, stats: TickStats) {
        let row = TickSummaryRow {
            tick:            tick.0,
            dirty_remaining: stats.dirty_remaining as u64,
            clean_cells:     stats.clean_cells as u64,
            total_moves:     stats.total_moves,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, snapshot: &GridSnapshot) {
        let rows: Vec<CellRow> = snapshot
            .iter()
            .map(|(pos, state)| CellRow {
                tick: tick.0,
                x:    pos.x,
                y:    pos.y,
                state,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_cells(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        let row = RunSummaryRow {
            ticks_to_clean:   summary.ticks_to_clean.0,
            clean_percentage: summary.clean_percentage,
            total_moves:      summary.total_moves,
        };
        let result = self.writer.write_run_summary(&row);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
