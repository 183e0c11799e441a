//! `sweep-grid` — bounded 2D multi-occupant grid.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`occupant`] | `Occupant` — tagged union of grid entity references |
//! | [`grid`]     | `MultiGrid` — dense cell → occupant-set storage     |
//! | [`snapshot`] | `CellState`, `GridSnapshot` — read-only cell views  |
//! | [`error`]    | `GridError`, `GridResult<T>`                        |
//!
//! # Data layout
//!
//! Cells are stored in one dense `Vec` of occupant lists indexed by
//! `y * width + x`.  A cell may hold any number of occupants; bounds are
//! hard edges (no wraparound).  The grid stores only *references* to
//! entities (`CleanerId` / `MarkerId`); entity state itself lives in the
//! stores of `sweep-agent` — the grid is a coordinate index, not an owner.

pub mod error;
pub mod grid;
pub mod occupant;
pub mod snapshot;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GridError, GridResult};
pub use grid::MultiGrid;
pub use occupant::Occupant;
pub use snapshot::{CellState, GridSnapshot};
