//! Tests for the move module.

use super::*;
use crate::test_utils::{create_director, create_task_director, entity_refs};
use swapforge_core::domain::EntityRef;
use swapforge_core::PlanningSolution;
use swapforge_scoring::{ScoreDirector, WorkingMemoryDirector};


// Builds the swap of the i-th and j-th entity with live handles.
fn swap_of<S: PlanningSolution>(
    director: &WorkingMemoryDirector<S>,
    i: usize,
    j: usize,
) -> GenericSwapMove {
    let entities: Vec<EntityRef> = entity_refs::<S, _>(director);
    let (left, right) = (entities[i], entities[j]);
    let variables = director
        .solution_descriptor()
        .entity_descriptor(left.type_id)
        .unwrap()
        .variable_descriptors()
        .clone();
    GenericSwapMove::new(
        variables,
        left,
        director.fact_handle(&left).unwrap(),
        right,
        director.fact_handle(&right).unwrap(),
    )
}
