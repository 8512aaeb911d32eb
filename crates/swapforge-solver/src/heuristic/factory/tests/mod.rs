//! Tests for the move factories.

use super::*;
use crate::heuristic::r#move::{GenericSwapMove, Move};
use crate::scope::PhaseScope;
use crate::test_utils::{create_director, create_task_director};
use swapforge_core::{PlanningSolution, Result};
use swapforge_scoring::{ScoreDirector, WorkingMemoryDirector};

mod generic_swap;

fn swap_factory() -> CachedMoveFactory<GenericSwapMove, GenericSwapMoveFactory> {
    CachedMoveFactory::new(GenericSwapMoveFactory::new())
}

// Enumerates a neighborhood directly, without caching or a phase.
fn create_move_list<S: PlanningSolution>(
    factory: &GenericSwapMoveFactory,
    director: &WorkingMemoryDirector<S>,
) -> Result<Vec<GenericSwapMove>> {
    <GenericSwapMoveFactory as MoveListFactory<S, WorkingMemoryDirector<S>>>::create_move_list(
        factory,
        director.solution_descriptor(),
        director,
    )
}

// Renders a move list as "Type#i <=> Type#j" strings.
fn describe(moves: &[GenericSwapMove]) -> Vec<String> {
    moves.iter().map(ToString::to_string).collect()
}
