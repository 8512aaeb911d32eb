//! Tests for GenericSwapMoveFactory.

use super::*;
use swapforge_core::SwapForgeError;
use swapforge_test::mixed::{create_mixed_descriptor, create_plain_mixed_descriptor};
use swapforge_test::route::create_route_descriptor;
use swapforge_test::{Meeting, MixedSolution, RouteSolution, Task, TaskSolution, Visit};

fn mixed_solution() -> MixedSolution {
    MixedSolution {
        tasks: vec![Task::new(0, 1), Task::new(1, 2)],
        meetings: (0..3)
            .map(|id| Meeting {
                id,
                room: Some(id as u32),
            })
            .collect(),
        visits: Vec::new(),
    }
}

#[test]
fn test_three_entities_in_order() {
    let director = create_task_director(&[1, 2, 3]);
    let moves = create_move_list(&GenericSwapMoveFactory::new(), &director).unwrap();

    assert_eq!(
        describe(&moves),
        vec![
            "Task#0 <=> Task#1",
            "Task#0 <=> Task#2",
            "Task#1 <=> Task#2",
        ]
    );
}

#[test]
fn test_pair_count() {
    for n in 0..8 {
        let priorities: Vec<i32> = (0..n).collect();
        let director = create_task_director(&priorities);
        let moves = create_move_list(&GenericSwapMoveFactory::new(), &director).unwrap();

        let n = n as usize;
        assert_eq!(moves.len(), n * n.saturating_sub(1) / 2);
    }
}

#[test]
fn test_no_self_or_duplicate_pairs() {
    let director = create_task_director(&[1, 2, 3, 4, 5]);
    let moves = create_move_list(&GenericSwapMoveFactory::new(), &director).unwrap();

    let mut pairs = std::collections::HashSet::new();
    for m in &moves {
        let (l, r) = (m.left_entity().entity_index, m.right_entity().entity_index);
        assert!(l < r);
        assert!(pairs.insert((l, r)));
        assert!(m.is_doable(&director));
    }
}

#[test]
fn test_moves_carry_live_handles() {
    let director = create_task_director(&[1, 2, 3]);
    let moves = create_move_list(&GenericSwapMoveFactory::new(), &director).unwrap();

    for m in &moves {
        let [left, right] = m.fact_handles();
        assert_eq!(director.fact_handle(m.left_entity()), Some(left));
        assert_eq!(director.fact_handle(m.right_entity()), Some(right));
    }
}

#[test]
fn test_enumeration_is_read_only() {
    let director = create_task_director(&[1, 2, 3]);
    create_move_list(&GenericSwapMoveFactory::new(), &director).unwrap();

    assert_eq!(director.notification_count(), 0);
    assert_eq!(
        director.working_solution().priorities(),
        vec![Some(1), Some(2), Some(3)]
    );
}

#[test]
fn test_cross_class_pairs_are_skipped() {
    let director = create_director(mixed_solution(), create_plain_mixed_descriptor());
    let moves = create_move_list(&GenericSwapMoveFactory::new(), &director).unwrap();

    assert_eq!(
        describe(&moves),
        vec![
            "Task#0 <=> Task#1",
            "Meeting#0 <=> Meeting#1",
            "Meeting#0 <=> Meeting#2",
            "Meeting#1 <=> Meeting#2",
        ]
    );
    for m in &moves {
        assert!(m.left_entity().same_class(m.right_entity()));
    }
}

#[test]
fn test_entity_class_filter() {
    let director = create_director(mixed_solution(), create_plain_mixed_descriptor());
    let factory = GenericSwapMoveFactory::for_entity_class("Meeting");
    let moves = create_move_list(&factory, &director).unwrap();

    assert_eq!(moves.len(), 3);
    assert!(moves.iter().all(|m| m.left_entity().type_name == "Meeting"));
}

#[test]
fn test_unknown_entity_class_yields_nothing() {
    let director = create_task_director(&[1, 2]);
    let factory = GenericSwapMoveFactory::for_entity_class("Lesson");

    assert!(create_move_list(&factory, &director).unwrap().is_empty());
}

#[test]
fn test_swapping_every_move_keeps_director_consistent() {
    let mut director = create_director(mixed_solution(), create_plain_mixed_descriptor());
    let moves = create_move_list(&GenericSwapMoveFactory::new(), &director).unwrap();

    for m in &moves {
        m.do_move(&mut director).unwrap();
        director.assert_consistent();
    }
    // Meeting swaps: (0,1) (0,2) (1,2) turn rooms [0,1,2] into [2,1,0].
    let rooms: Vec<_> = director
        .working_solution()
        .meetings
        .iter()
        .map(|m| m.room)
        .collect();
    assert_eq!(rooms, vec![Some(2), Some(1), Some(0)]);
}

#[test]
fn test_chained_variable_is_config_error() {
    let director = create_director(RouteSolution::single_chain(3), create_route_descriptor());
    let err = create_move_list(&GenericSwapMoveFactory::new(), &director).unwrap_err();

    assert!(err.is_config());
    assert!(matches!(
        err,
        SwapForgeError::Config {
            entity_type: "Visit",
            variable: "previous",
            move_factory: "GenericSwapMoveFactory",
        }
    ));
    assert!(err.to_string().contains("is chained"));
}

#[test]
fn test_chained_class_fails_the_whole_enumeration() {
    let mut solution = mixed_solution();
    solution.visits = vec![
        Visit::new(0, Some(0), None),
        Visit::new(1, Some(0), Some(0)),
    ];
    let director = create_director(solution, create_mixed_descriptor());

    let err = create_move_list(&GenericSwapMoveFactory::new(), &director).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_filter_excludes_chained_class() {
    let mut solution = mixed_solution();
    solution.visits = vec![
        Visit::new(0, Some(0), None),
        Visit::new(1, Some(0), Some(0)),
    ];
    let director = create_director(solution, create_mixed_descriptor());

    let factory = GenericSwapMoveFactory::for_entity_class("Task");
    let moves = create_move_list(&factory, &director).unwrap();
    assert_eq!(describe(&moves), vec!["Task#0 <=> Task#1"]);
}

#[test]
fn test_empty_chained_class_is_not_processed() {
    // No visits, so the chained variable is never reached.
    let director = create_director(mixed_solution(), create_mixed_descriptor());
    let moves = create_move_list(&GenericSwapMoveFactory::new(), &director).unwrap();

    assert_eq!(moves.len(), 4);
}

#[test]
fn test_untracked_entity_is_integrity_fault() {
    let mut director = create_task_director(&[1, 2, 3]);
    let entity = crate::test_utils::entity_refs::<TaskSolution, _>(&director)[2];
    director.retract(&entity);

    let err = create_move_list(&GenericSwapMoveFactory::new(), &director).unwrap_err();
    assert!(matches!(
        err,
        SwapForgeError::Integrity {
            entity_type: "Task",
            entity_index: 2
        }
    ));
}
