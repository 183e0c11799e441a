//! cleaning — end-to-end demo for the gridsweep simulation.
//!
//! A handful of cleaners random-walk a 10x10 grid until every dirty cell
//! has been swept (or the tick cutoff hits).  Each tick is rendered to the
//! terminal and logged to CSV under `output/cleaning/`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use sweep_core::{SimConfig, Tick};
use sweep_grid::GridSnapshot;
use sweep_output::{render_frame, CsvWriter, SimOutputObserver};
use sweep_sim::{RunOutcome, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const NUM_CLEANERS:   usize = 3;
const WIDTH:          u32   = 10;
const HEIGHT:         u32   = 10;
const DIRTY_FRACTION: f64   = 0.3;
const MAX_TICKS:      u64   = 500;
const SEED:           u64   = 42;
const FRAME_INTERVAL: u64   = 25; // print every 25th frame to keep the log short

// ── Observer wrapper: terminal frames on top of CSV output ───────────────────

struct FramePrinter<W: sweep_output::OutputWriter> {
    inner: SimOutputObserver<W>,
    frames_printed: usize,
}

impl<W: sweep_output::OutputWriter> FramePrinter<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, frames_printed: 0 }
    }
}

impl<W: sweep_output::OutputWriter> SimObserver for FramePrinter<W> {
    fn on_tick_end(&mut self, tick: Tick, stats: sweep_sim::TickStats) {
        self.inner.on_tick_end(tick, stats);
    }

    fn on_snapshot(&mut self, tick: Tick, snapshot: &GridSnapshot) {
        if tick.0 == 1 || tick.0 % FRAME_INTERVAL == 0 {
            print!("{}", render_frame(tick, snapshot));
            println!();
            self.frames_printed += 1;
        }
        self.inner.on_snapshot(tick, snapshot);
    }

    fn on_run_end(&mut self, summary: &sweep_sim::RunSummary) {
        self.inner.on_run_end(summary);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== cleaning — gridsweep demo ===");
    println!(
        "Cleaners: {NUM_CLEANERS}  |  Grid: {WIDTH}x{HEIGHT}  |  Dirty: {:.0}%  |  Seed: {SEED}",
        DIRTY_FRACTION * 100.0
    );
    println!();

    // 1. Sim config and builder.
    let config = SimConfig::new(NUM_CLEANERS, WIDTH, HEIGHT, DIRTY_FRACTION, MAX_TICKS, SEED);
    let mut sim = SimBuilder::new(config).build()?;
    println!(
        "Initial dirt: {} of {} cells",
        sim.dirty_remaining,
        sim.config.cell_count()
    );
    println!();

    // 2. Set up output.
    std::fs::create_dir_all("output/cleaning")?;
    let writer = CsvWriter::new(Path::new("output/cleaning"))?;
    let inner_obs = SimOutputObserver::new(writer);
    let mut obs = FramePrinter::new(inner_obs);

    // 3. Run.
    let t0 = Instant::now();
    let summary = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!("Simulation complete in {:.3} s ({} frames printed)", elapsed.as_secs_f64(), obs.frames_printed);
    match summary.outcome {
        RunOutcome::Completed       => println!("  grid fully clean"),
        RunOutcome::MaxTicksReached => println!("  tick cutoff reached with dirt remaining"),
    }
    println!("  ticks to clean (or cutoff) : {}", summary.ticks_to_clean.0);
    println!("  clean cells                : {:.1}%", summary.clean_percentage);
    println!("  total cleaner moves        : {}", summary.total_moves);
    println!();

    // 5. Final per-cleaner table.
    println!("{:<10} {:<10} {:<8}", "Cleaner", "Cell", "Moves");
    println!("{}", "-".repeat(30));
    for cleaner in sim.cleaners.cleaner_ids() {
        println!(
            "{:<10} {:<10} {:<8}",
            cleaner.0,
            sim.cleaners.pos[cleaner.index()].to_string(),
            sim.cleaners.moves[cleaner.index()],
        );
    }

    Ok(())
}
