//! Scope hierarchy for solver runs.
//!
//! Only the phase level exists here: the phase driver owns a [`PhaseScope`]
//! and passes it by reference into every factory call.

mod phase;

#[cfg(test)]
mod tests;

pub use phase::PhaseScope;
