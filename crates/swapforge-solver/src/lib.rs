//! Move generation and execution for SwapForge local search
//!
//! This crate provides:
//! - [`PhaseScope`]: the explicit scope object a phase driver owns
//! - [`Move`] and [`GenericSwapMove`]: reversible mutations of the working solution
//! - [`CachedMoveFactory`]: phase-scoped caching of a full neighborhood
//! - [`GenericSwapMoveFactory`]: the pairwise-exchange neighborhood
//! - [`builder`]: building factories from [`swapforge_config`] settings
//!
//! # Phase lifecycle
//!
//! A phase driver creates a [`PhaseScope`], calls `phase_started`, requests
//! move lists and executes moves, then calls `phase_ended`. Move lists are
//! only valid between those two calls.

pub mod builder;
pub mod heuristic;
pub mod scope;

#[cfg(test)]
mod test_utils;

pub use builder::{build_move_factory, build_phase_move_factories};
pub use heuristic::factory::{
    CachedMoveFactory, GenericSwapMoveFactory, MoveFactory, MoveListFactory,
};
pub use heuristic::r#move::{GenericSwapMove, Move};
pub use scope::PhaseScope;
