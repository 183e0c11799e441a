//! The tagged union of everything that can occupy a grid cell.

use sweep_core::{CleanerId, MarkerId};

/// A reference to an entity occupying a cell.
///
/// The two entity kinds are distinguished by variant, so cell scans match on
/// the discriminant directly — there is no runtime type inspection anywhere
/// in the crate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    /// An active cleaning agent.
    Cleaner(CleanerId),
    /// A passive dirty marker, removed when a cleaner shares its cell.
    Marker(MarkerId),
}

impl Occupant {
    #[inline]
    pub fn is_cleaner(self) -> bool {
        matches!(self, Occupant::Cleaner(_))
    }

    #[inline]
    pub fn is_marker(self) -> bool {
        matches!(self, Occupant::Marker(_))
    }
}
