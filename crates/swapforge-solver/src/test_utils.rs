//! Test utilities for solver tests.

use std::any::Any;

use swapforge_core::domain::{EntityRef, SolutionDescriptor};
use swapforge_core::PlanningSolution;
use swapforge_scoring::{ScoreDirector, WorkingMemoryDirector};
use swapforge_test::task::{create_task_descriptor, TaskSolution};

/// Director over tasks with the given priorities and a single `priority` variable.
pub fn create_task_director(priorities: &[i32]) -> WorkingMemoryDirector<TaskSolution> {
    let solution = TaskSolution::with_priorities(priorities);
    create_director(solution, create_task_descriptor())
}

/// Director over an arbitrary solution.
pub fn create_director<S: PlanningSolution>(
    solution: S,
    descriptor: SolutionDescriptor,
) -> WorkingMemoryDirector<S> {
    WorkingMemoryDirector::new(solution, descriptor).unwrap()
}

/// Ordered entity references of the director's working solution.
pub fn entity_refs<S, D>(director: &D) -> Vec<EntityRef>
where
    S: PlanningSolution,
    D: ScoreDirector<S>,
{
    director
        .solution_descriptor()
        .entity_list(director.working_solution() as &dyn Any)
        .unwrap()
}
