//! Move trait definition.

use std::fmt::Debug;

use smallvec::SmallVec;
use swapforge_core::domain::{EntityRef, PlanningSolution};
use swapforge_core::Result;
use swapforge_scoring::ScoreDirector;

/// A reversible modification of one or more planning variables.
///
/// Methods are generic over the score director so the same move value can
/// run against any director of the right solution type.
///
/// # Implementation Notes
/// - Construction must have no side effects; only `do_move` mutates state
/// - `do_move` runs to completion synchronously and notifies the score
///   director before and after every variable write
/// - Executing `undo_move()` right after `do_move()` restores the previous state
pub trait Move: Send + Sync + Debug + Clone {
    /// Returns true if this move can be executed in the current state.
    fn is_doable<S, D>(&self, score_director: &D) -> bool
    where
        S: PlanningSolution,
        D: ScoreDirector<S>;

    /// Executes this move, modifying the working solution.
    ///
    /// # Errors
    ///
    /// Returns an integrity error if the score director no longer tracks an
    /// entity the move refers to. No variable is written in that case.
    fn do_move<S, D>(&self, score_director: &mut D) -> Result<()>
    where
        S: PlanningSolution,
        D: ScoreDirector<S>;

    /// Returns the move that reverts this one.
    fn undo_move(&self) -> Self;

    /// Returns the entities involved in this move.
    fn entity_refs(&self) -> &[EntityRef];

    /// Returns the names of the variables this move changes.
    fn variable_names(&self) -> SmallVec<[&'static str; 4]>;
}
