//! Move system for modifying planning solutions.
//!
//! Moves are the fundamental operations that modify planning variables during
//! solving. Every move is self-contained: it keeps what it needs to run long
//! after the factory that created it has moved on, and creating one never
//! touches the solution or the score director.
//!
//! - `GenericSwapMove` - exchanges every planning variable between two entities
//!
//! Undo is done by executing the move returned from `undo_move`.

mod generic_swap;
mod traits;

#[cfg(test)]
mod tests;

pub use generic_swap::GenericSwapMove;
pub use traits::Move;
