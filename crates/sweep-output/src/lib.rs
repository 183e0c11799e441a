//! `sweep-output` — presentation layer for the gridsweep simulation.
//!
//! The engine knows nothing about rendering or file formats; this crate
//! consumes the per-tick grid snapshots and the final run summary through
//! `sweep_sim::SimObserver` and turns them into something a human or a
//! downstream tool can read.
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`writer`]   | `OutputWriter` trait                                   |
//! | [`csv`]      | `CsvWriter` — `grid_cells.csv`, `tick_summaries.csv`, `run_summary.csv` |
//! | [`row`]      | Plain data row types                                   |
//! | [`observer`] | `SimOutputObserver<W>` — bridges observer → writer     |
//! | [`ascii`]    | `render_frame` — terminal frames                       |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                       |
//!
//! # Usage
//!
//! ```rust,ignore
//! use sweep_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod ascii;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use ascii::render_frame;
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CellRow, RunSummaryRow, TickSummaryRow};
pub use writer::OutputWriter;
