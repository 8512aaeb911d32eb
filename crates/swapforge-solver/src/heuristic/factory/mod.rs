//! Move factories: neighborhood enumeration with phase-scoped caching.
//!
//! - [`MoveListFactory`] - builds the full move list for a solution
//! - [`CachedMoveFactory`] - lifecycle wrapper caching that list per phase
//! - [`GenericSwapMoveFactory`] - every pairwise swap of same-class entities

mod cached;
mod generic_swap;
mod traits;

#[cfg(test)]
mod tests;

pub use cached::CachedMoveFactory;
pub use generic_swap::GenericSwapMoveFactory;
pub use traits::{MoveFactory, MoveListFactory};
