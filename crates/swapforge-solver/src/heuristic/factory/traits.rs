//! Move factory traits.

use std::fmt::Debug;

use swapforge_core::domain::{PlanningSolution, SolutionDescriptor};
use swapforge_core::Result;
use swapforge_scoring::ScoreDirector;

use crate::heuristic::r#move::Move;
use crate::scope::PhaseScope;

/// Enumerates a complete neighborhood for the current working solution.
///
/// Implementations describe *what* the neighborhood is; caching and the
/// phase lifecycle are handled by [`CachedMoveFactory`](super::CachedMoveFactory).
///
/// # Type Parameters
/// * `S` - The planning solution type
/// * `D` - The score director type
pub trait MoveListFactory<S: PlanningSolution, D: ScoreDirector<S>>: Send + Debug {
    /// The move type produced.
    type Move: Move;

    /// Returns the name used in logs and configuration errors.
    fn name(&self) -> &'static str;

    /// Builds the ordered move list.
    ///
    /// Must not mutate the solution or notify the score director.
    fn create_move_list(
        &self,
        solution_descriptor: &SolutionDescriptor,
        score_director: &D,
    ) -> Result<Vec<Self::Move>>;
}

/// Lifecycle contract between a phase driver and a move factory.
///
/// The driver calls `phase_started` once, then any number of `move_list`
/// (and `step_ended`) calls, then `phase_ended` once, all with the same
/// scope. Anything else is a programmer error and panics.
pub trait MoveFactory<S: PlanningSolution, D: ScoreDirector<S>>: Send + Debug {
    /// The move type produced.
    type Move: Move;

    /// Called when a phase starts.
    fn phase_started(&mut self, phase_scope: &PhaseScope<'_, S, D>);

    /// Called after each step of the phase.
    fn step_ended(&mut self, _phase_scope: &PhaseScope<'_, S, D>) {}

    /// Called when the phase ends. Releases every phase-scoped reference.
    fn phase_ended(&mut self, phase_scope: &PhaseScope<'_, S, D>);

    /// Returns the ordered move list for the scope's working solution.
    fn move_list(&mut self, phase_scope: &PhaseScope<'_, S, D>) -> Result<&[Self::Move]>;
}
