//! Integer grid coordinates.

use std::fmt;

/// A cell coordinate on the simulation grid.
///
/// Coordinates are unsigned: the grid origin is `(0, 0)` and edges do not
/// wrap.  Bounds checking against a particular grid's extent lives in
/// `sweep-grid`; `GridPos` itself is just a value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The position `(dx, dy)` away, or `None` if either coordinate would
    /// underflow below zero.  Overflow past the grid extent is the grid's
    /// concern, not this type's.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<GridPos> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(GridPos { x, y })
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for GridPos {
    #[inline]
    fn from((x, y): (u32, u32)) -> Self {
        GridPos { x, y }
    }
}
