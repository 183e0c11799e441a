//! `sweep-core` — foundational types for the `gridsweep` simulation.
//!
//! This crate is a dependency of every other `sweep-*` crate.  It intentionally
//! has no `sweep-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `CleanerId`, `MarkerId`                           |
//! | [`pos`]     | `GridPos` — integer grid coordinate               |
//! | [`time`]    | `Tick`, `SimConfig`                               |
//! | [`rng`]     | `CleanerRng` (per-cleaner), `SimRng` (global)     |
//! | [`error`]   | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod error;
pub mod ids;
pub mod pos;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{CleanerId, MarkerId};
pub use pos::GridPos;
pub use rng::{CleanerRng, SimRng};
pub use time::{SimConfig, Tick};
