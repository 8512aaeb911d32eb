//! Tests for PhaseScope.

use std::any::Any;

use smallvec::{smallvec, SmallVec};
use swapforge_config::EnvironmentMode;
use swapforge_core::domain::{EntityRef, PlanningSolution};
use swapforge_core::Result;
use swapforge_scoring::ScoreDirector;
use swapforge_test::TaskSolution;

use super::*;
use crate::heuristic::r#move::Move;
use crate::test_utils::create_task_director;

// Writes a priority without notifying the director.
#[derive(Clone, Debug)]
struct SilentWrite {
    priority: i32,
}

impl Move for SilentWrite {
    fn is_doable<S, D>(&self, _score_director: &D) -> bool
    where
        S: PlanningSolution,
        D: ScoreDirector<S>,
    {
        true
    }

    fn do_move<S, D>(&self, score_director: &mut D) -> Result<()>
    where
        S: PlanningSolution,
        D: ScoreDirector<S>,
    {
        let solution = score_director.working_solution_mut() as &mut dyn Any;
        if let Some(solution) = solution.downcast_mut::<TaskSolution>() {
            solution.tasks[0].priority = Some(self.priority);
        }
        Ok(())
    }

    fn undo_move(&self) -> Self {
        self.clone()
    }

    fn entity_refs(&self) -> &[EntityRef] {
        &[]
    }

    fn variable_names(&self) -> SmallVec<[&'static str; 4]> {
        smallvec!["priority"]
    }
}

#[test]
fn test_phase_ids_are_unique() {
    let mut first_director = create_task_director(&[1]);
    let mut second_director = create_task_director(&[1]);
    let first = PhaseScope::new(&mut first_director, 0);
    let second = PhaseScope::new(&mut second_director, 0);

    assert_ne!(first.phase_id(), second.phase_id());
    assert_eq!(first.phase_index(), second.phase_index());
}

#[test]
fn test_counts() {
    let mut director = create_task_director(&[1, 2]);
    let mut scope = PhaseScope::new(&mut director, 3);

    assert_eq!(scope.phase_index(), 3);
    assert_eq!(scope.step_count(), 0);
    assert_eq!(scope.increment_step_count(), 1);
    assert_eq!(scope.increment_step_count(), 2);

    scope.do_move(&SilentWrite { priority: 9 }).unwrap();
    assert_eq!(scope.move_count(), 1);
    assert_eq!(
        scope.working_solution().priorities(),
        vec![Some(9), Some(2)]
    );
}

#[test]
fn test_default_mode_skips_assertions() {
    let mut director = create_task_director(&[1, 2]);
    let mut scope = PhaseScope::new(&mut director, 0);
    assert_eq!(scope.environment_mode(), EnvironmentMode::NoAssert);

    scope.do_move(&SilentWrite { priority: 9 }).unwrap();
    assert!(!scope.score_director().is_consistent());
}

#[test]
#[should_panic(expected = "diverged")]
fn test_assert_mode_catches_unnotified_write() {
    let mut director = create_task_director(&[1, 2]);
    let mut scope =
        PhaseScope::new(&mut director, 0).with_environment_mode(EnvironmentMode::FastAssert);

    let _ = scope.do_move(&SilentWrite { priority: 9 });
}

// Diverges the director, then runs a move that fails before writing.
fn run_failing_move_after_divergence(mode: EnvironmentMode) -> Result<()> {
    let mut director = create_task_director(&[1, 2]);
    let entities = crate::test_utils::entity_refs::<TaskSolution, _>(&director);
    let variables = director
        .solution_descriptor()
        .entity_descriptor(entities[0].type_id)
        .unwrap()
        .variable_descriptors()
        .clone();
    let stale = crate::GenericSwapMove::new(
        variables,
        entities[0],
        director.fact_handle(&entities[0]).unwrap(),
        entities[1],
        director.fact_handle(&entities[1]).unwrap(),
    );
    director.retract(&entities[1]);
    director.working_solution_mut().tasks[0].priority = Some(9);

    let mut scope = PhaseScope::new(&mut director, 0).with_environment_mode(mode);
    scope.do_move(&stale)
}

#[test]
fn test_fast_assert_skips_failed_moves() {
    let err = run_failing_move_after_divergence(EnvironmentMode::FastAssert).unwrap_err();
    assert!(err.is_integrity());
}

#[test]
#[should_panic(expected = "diverged")]
fn test_full_assert_checks_before_the_move() {
    let _ = run_failing_move_after_divergence(EnvironmentMode::FullAssert);
}

#[test]
fn test_assert_mode_accepts_notified_moves() {
    let mut director = create_task_director(&[1, 2, 3]);
    let entities = crate::test_utils::entity_refs::<TaskSolution, _>(&director);
    let variables = director
        .solution_descriptor()
        .entity_descriptor(entities[0].type_id)
        .unwrap()
        .variable_descriptors()
        .clone();
    let swap = crate::GenericSwapMove::new(
        variables,
        entities[0],
        director.fact_handle(&entities[0]).unwrap(),
        entities[2],
        director.fact_handle(&entities[2]).unwrap(),
    );

    let mut scope =
        PhaseScope::new(&mut director, 0).with_environment_mode(EnvironmentMode::FullAssert);
    scope.do_move(&swap).unwrap();
    scope.do_move(&swap.undo_move()).unwrap();

    assert_eq!(scope.move_count(), 2);
    assert_eq!(
        scope.working_solution().priorities(),
        vec![Some(1), Some(2), Some(3)]
    );
}

#[test]
fn test_elapsed_grows() {
    let mut director = create_task_director(&[1]);
    let scope = PhaseScope::new(&mut director, 0);

    let first = scope.elapsed();
    std::thread::sleep(std::time::Duration::from_millis(2));
    assert!(scope.elapsed() > first);
}

#[test]
fn test_debug() {
    let mut director = create_task_director(&[1]);
    let scope = PhaseScope::new(&mut director, 2);
    let debug = format!("{scope:?}");

    assert!(debug.contains("phase_index: 2"));
}
