//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `grid_cells.csv` — one row per cell per tick
//! - `tick_summaries.csv` — one row per tick
//! - `run_summary.csv` — a single row at run end

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CellRow, OutputResult, RunSummaryRow, TickSummaryRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    cells:     Writer<File>,
    summaries: Writer<File>,
    run:       Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut cells = Writer::from_path(dir.join("grid_cells.csv"))?;
        cells.write_record(["tick", "x", "y", "state"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "dirty_remaining", "clean_cells", "total_moves"])?;

        let mut run = Writer::from_path(dir.join("run_summary.csv"))?;
        run.write_record(["ticks_to_clean", "clean_percentage", "total_moves"])?;

        Ok(Self {
            cells,
            summaries,
            run,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_cells(&mut self, rows: &[CellRow]) -> OutputResult<()> {
        for row in rows {
            self.cells.write_record(&[
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.state.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.dirty_remaining.to_string(),
            row.clean_cells.to_string(),
            row.total_moves.to_string(),
        ])?;
        Ok(())
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.run.write_record(&[
            row.ticks_to_clean.to_string(),
            row.clean_percentage.to_string(),
            row.total_moves.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.cells.flush()?;
        self.summaries.flush()?;
        self.run.flush()?;
        Ok(())
    }
}
