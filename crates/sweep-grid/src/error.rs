//! Error types for sweep-grid.

use sweep_core::GridPos;
use thiserror::Error;

/// Local precondition violations on grid operations.
///
/// These surface immediately to the caller; there is no retry or recovery
/// path — a violation means the engine's bookkeeping and the grid disagree.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("position {pos} outside {width}x{height} grid")]
    OutOfBounds {
        pos:    GridPos,
        width:  u32,
        height: u32,
    },

    #[error("occupant not found at {pos}")]
    NotFound { pos: GridPos },
}

/// Alias for `Result<T, GridError>`.
pub type GridResult<T> = Result<T, GridError>;
