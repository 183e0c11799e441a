//! `sweep-agent` — entity storage for the gridsweep simulation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`store`]   | `CleanerStore` (SoA data), `CleanerRngs`              |
//! | [`builder`] | `CleanerStoreBuilder`                                 |
//! | [`marker`]  | `MarkerStore` — dirty-marker registry                 |
//!
//! The stores own all entity state; the grid in `sweep-grid` holds only
//! coordinate → entity-reference relations.  There is exactly one registry
//! per entity kind, indexed by the typed IDs from `sweep-core` — no
//! parallel "agent list + schedule" bookkeeping to keep in sync.

pub mod builder;
pub mod marker;
pub mod store;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::CleanerStoreBuilder;
pub use marker::MarkerStore;
pub use store::{CleanerRngs, CleanerStore};
