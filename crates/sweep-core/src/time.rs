//! Simulation time model and run configuration.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one full
//! scheduling round: every cleaner is activated exactly once per tick.  Using
//! an integer tick as the canonical time unit keeps all comparisons exact and
//! O(1).

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`; at one scheduling round per tick a run can never
/// plausibly overflow it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// All fields are required; construct with [`SimConfig::new`] or as a struct
/// literal.  Validation happens in [`validate`][Self::validate], which the
/// sim builder calls before any tick runs.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of cleaners created, all starting at the same coordinate.
    pub num_cleaners: usize,

    /// Grid width in cells.  Must be positive.
    pub width: u32,

    /// Grid height in cells.  Must be positive.
    pub height: u32,

    /// Fraction of cells that start dirty, in `[0, 1]`.  The dirty-cell
    /// count is `floor(width * height * dirty_fraction)`.
    pub dirty_fraction: f64,

    /// Hard cap on ticks executed.  The run stops here even if dirt remains.
    pub max_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    pub fn new(
        num_cleaners:   usize,
        width:          u32,
        height:         u32,
        dirty_fraction: f64,
        max_ticks:      u64,
        seed:           u64,
    ) -> Self {
        Self { num_cleaners, width, height, dirty_fraction, max_ticks, seed }
    }

    /// Total number of cells on the grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of cells that start dirty: `floor(cells * dirty_fraction)`.
    #[inline]
    pub fn dirty_cell_count(&self) -> usize {
        (self.cell_count() as f64 * self.dirty_fraction) as usize
    }

    /// The tick at which the run is cut off (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_ticks)
    }

    /// Check every construction-time precondition.
    ///
    /// Violations surface immediately to the caller; a single-threaded
    /// deterministic simulation has no transient failures to retry.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(0.0..=1.0).contains(&self.dirty_fraction) {
            return Err(CoreError::Config(format!(
                "dirty_fraction must be in [0, 1], got {}",
                self.dirty_fraction
            )));
        }
        if self.num_cleaners == 0 {
            return Err(CoreError::Config("num_cleaners must be positive".into()));
        }
        if self.dirty_cell_count() > self.cell_count() {
            return Err(CoreError::Config(format!(
                "dirty cell count {} exceeds total cell count {}",
                self.dirty_cell_count(),
                self.cell_count()
            )));
        }
        Ok(())
    }
}
