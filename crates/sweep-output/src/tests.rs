//! Tests for sweep-output writers and observers.

use sweep_core::{SimConfig, Tick};
use sweep_sim::SimBuilder;

use crate::{CellRow, CsvWriter, OutputResult, OutputWriter, RunSummaryRow, SimOutputObserver, TickSummaryRow};

// ── In-memory writer used to observe call patterns ────────────────────────────

#[derive(Default)]
struct MemWriter {
    cell_rows:     Vec<CellRow>,
    tick_rows:     Vec<TickSummaryRow>,
    run_rows:      Vec<RunSummaryRow>,
    finish_calls:  usize,
}

impl OutputWriter for MemWriter {
    fn write_cells(&mut self, rows: &[CellRow]) -> OutputResult<()> {
        self.cell_rows.extend_from_slice(rows);
        Ok(())
    }
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.tick_rows.push(*row);
        Ok(())
    }
    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.run_rows.push(*row);
        Ok(())
    }
    fn finish(&mut self) -> OutputResult<()> {
        self.finish_calls += 1;
        Ok(())
    }
}

#[cfg(test)]
mod observer {
    use super::*;

    #[test]
    fn rows_mirror_the_run() {
        // One cleaner, 90 dirty cells, 5-tick cutoff: exactly 5 ticks run.
        let cfg = SimConfig::new(1, 10, 10, 0.9, 5, 42);
        let mut sim = SimBuilder::new(cfg).build().unwrap();
        let mut obs = SimOutputObserver::new(MemWriter::default());
        let summary = sim.run(&mut obs).unwrap();

        assert!(obs.take_error().is_none());
        let writer = obs.into_writer();
        assert_eq!(writer.tick_rows.len(), 5);
        assert_eq!(writer.cell_rows.len(), 5 * 100, "every cell, every tick");
        assert_eq!(writer.run_rows.len(), 1);
        assert_eq!(writer.finish_calls, 1);

        let run = &writer.run_rows[0];
        assert_eq!(run.ticks_to_clean, summary.ticks_to_clean.0);
        assert_eq!(run.total_moves, summary.total_moves);

        // Tick rows carry the advancing tick counter.
        let ticks: Vec<u64> = writer.tick_rows.iter().map(|r| r.tick).collect();
        assert_eq!(ticks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn tick_rows_conserve_cells() {
        let cfg = SimConfig::new(2, 6, 6, 0.4, 20, 7);
        let mut sim = SimBuilder::new(cfg).build().unwrap();
        let mut obs = SimOutputObserver::new(MemWriter::default());
        sim.run(&mut obs).unwrap();
        for row in &obs.into_writer().tick_rows {
            assert_eq!(row.dirty_remaining + row.clean_cells, 36);
        }
    }
}

#[cfg(test)]
mod csv_backend {
    use super::*;

    fn lines(path: &std::path::Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn files_created_with_headers() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();

        assert_eq!(lines(&dir.path().join("grid_cells.csv"))[0], "tick,x,y,state");
        assert_eq!(
            lines(&dir.path().join("tick_summaries.csv"))[0],
            "tick,dirty_remaining,clean_cells,total_moves"
        );
        assert_eq!(
            lines(&dir.path().join("run_summary.csv"))[0],
            "ticks_to_clean,clean_percentage,total_moves"
        );
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn end_to_end_run_writes_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = SimConfig::new(1, 3, 3, 0.0, 5, 42);
        let mut sim = SimBuilder::new(cfg).build().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        // Zero dirt completes after one tick: 9 cell rows + header.
        assert_eq!(lines(&dir.path().join("grid_cells.csv")).len(), 10);
        assert_eq!(lines(&dir.path().join("tick_summaries.csv")).len(), 2);
        let run = lines(&dir.path().join("run_summary.csv"));
        assert_eq!(run.len(), 2);
        // A lone cleaner's single move is never blocked, so the row is fixed:
        // completion at tick 1, 100% clean, one move.
        assert_eq!(run[1], "1,100,1");
    }
}

#[cfg(test)]
mod ascii {
    use sweep_core::{CleanerId, GridPos, MarkerId};
    use sweep_grid::{GridSnapshot, MultiGrid, Occupant};

    use super::*;
    use crate::render_frame;

    #[test]
    fn frame_layout() {
        let mut grid = MultiGrid::new(2, 2);
        grid.place(Occupant::Marker(MarkerId(0)), GridPos::new(0, 0)).unwrap();
        grid.place(Occupant::Cleaner(CleanerId(0)), GridPos::new(1, 1)).unwrap();
        let snap = GridSnapshot::capture(&grid);

        let frame = render_frame(Tick(3), &snap);
        assert_eq!(frame, "tick 3\n# .\n. @\n");
    }

    #[test]
    fn cleaner_on_dirty_cell_renders_dirty() {
        let mut grid = MultiGrid::new(1, 1);
        grid.place(Occupant::Cleaner(CleanerId(0)), GridPos::new(0, 0)).unwrap();
        grid.place(Occupant::Marker(MarkerId(0)), GridPos::new(0, 0)).unwrap();
        let snap = GridSnapshot::capture(&grid);
        assert_eq!(render_frame(Tick(0), &snap), "tick 0\n#\n");
    }
}
