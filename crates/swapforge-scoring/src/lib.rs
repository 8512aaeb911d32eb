//! Score director contract for SwapForge.
//!
//! Moves never talk to a scoring engine directly. They go through the
//! [`ScoreDirector`] trait, which owns the working solution, hands out
//! [`FactHandle`]s for live entities and receives a before/after
//! notification around every variable write.
//!
//! [`WorkingMemoryDirector`] is the reference implementation: it keeps a
//! working memory of the recorded variable values of every tracked entity.

pub mod director;

pub use director::{FactHandle, ScoreDirector, WorkingMemoryDirector};
