//! `sweep-sim` — tick loop orchestrator for the gridsweep simulation.
//!
//! # Tick structure
//!
//! ```text
//! for tick in 0..max_ticks:
//!   ① Shuffle   — draw a fresh random activation order over all cleaners.
//!   ② Activate  — for each cleaner, in order:
//!                   clean: remove at most one dirty marker from its cell
//!                   move:  pick one Moore neighbor uniformly; step there
//!                          unless another cleaner already occupies it
//!   ③ Account   — recompute total moves, advance the tick counter, record
//!                  the completion tick the first time no dirt remains.
//!   The run loop stops early once the grid is clean.
//! ```
//!
//! Activations are strictly sequential: a cleaner activated earlier in a
//! tick may vacate or occupy a cell, and later cleaners observe that updated
//! state.  This ordering guarantee decides collision outcomes and is part of
//! the contract, not an implementation detail.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sweep_core::SimConfig;
//! use sweep_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::new(2, 10, 10, 0.3, 200, 42);
//! let mut sim = SimBuilder::new(config).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("clean after {} ticks", summary.ticks_to_clean);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod summary;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use summary::{RunOutcome, RunSummary, TickStats};
