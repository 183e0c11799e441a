//! `sweep-schedule` — random-activation scheduling.
//!
//! # Crate layout
//!
//! | Module         | Contents                                       |
//! |----------------|------------------------------------------------|
//! | [`activation`] | `RandomActivation` — shuffled roster per tick  |
//!
//! # Activation model (summary)
//!
//! Every cleaner is activated exactly once per tick, in a uniformly random
//! permutation that is re-drawn every tick:
//!
//! ```text
//! order = shuffle(roster)       // fresh Fisher-Yates each tick
//! for cleaner in order: activate(cleaner)
//! steps += 1
//! ```
//!
//! The scheduler holds cleaners only; dirty markers are passive and never
//! activated.  It has no terminal state — the engine simply stops calling
//! it when the run ends.

pub mod activation;


pub use activation::RandomActivation;
