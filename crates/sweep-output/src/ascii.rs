//! Terminal frame rendering for grid snapshots.

use std::fmt::Write;

use sweep_core::Tick;
use sweep_grid::{CellState, GridSnapshot};

/// Glyphs: `.` empty, `#` dirty, `@` cleaner.
fn glyph(state: CellState) -> char {
    match state {
        CellState::Empty   => '.',
        CellState::Dirty   => '#',
        CellState::Cleaner => '@',
    }
}

/// Render one snapshot as a text frame with a tick header.
///
/// Row 0 is printed at the top; one glyph per cell, space-separated.
pub fn render_frame(tick: Tick, snapshot: &GridSnapshot) -> String {
    // Header + height lines of width glyphs with separating spaces.
    let mut out = String::with_capacity(
        16 + snapshot.height as usize * (snapshot.width as usize * 2 + 1),
    );
    let _ = writeln!(out, "tick {}", tick.0);
    for y in 0..snapshot.height {
        for x in 0..snapshot.width {
            if x > 0 {
                out.push(' ');
            }
            out.push(glyph(snapshot.state_at(x, y)));
        }
        out.push('\n');
    }
    out
}
