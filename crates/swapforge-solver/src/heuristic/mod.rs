//! Heuristic components: moves and the factories that enumerate them.

pub mod factory;
pub mod r#move;

pub use factory::{CachedMoveFactory, GenericSwapMoveFactory, MoveFactory, MoveListFactory};
pub use r#move::{GenericSwapMove, Move};
