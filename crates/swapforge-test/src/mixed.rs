//! A solution mixing several entity classes.
//!
//! Tasks and meetings only have plain variables; visits carry a chained
//! variable. Descriptors can be built with or without the visits so tests
//! can pick which classes are present.

use std::any::TypeId;

use swapforge_core::domain::{
    EntityDescriptor, SolutionDescriptor, TypedEntityExtractor, TypedVariableAccessor,
    VariableDescriptor,
};
use swapforge_core::{PlanningEntity, PlanningSolution};

use crate::route::{create_visit_entity_descriptor, Visit};
use crate::task::{priority_variable, Task};

/// A meeting with a plain `room` variable.
#[derive(Clone, Debug, PartialEq)]
pub struct Meeting {
    pub id: usize,
    pub room: Option<u32>,
}

impl PlanningEntity for Meeting {}

/// A solution with tasks, meetings and visits.
#[derive(Clone, Debug, Default)]
pub struct MixedSolution {
    pub tasks: Vec<Task>,
    pub meetings: Vec<Meeting>,
    pub visits: Vec<Visit>,
}

impl PlanningSolution for MixedSolution {}

fn tasks(s: &MixedSolution) -> &Vec<Task> {
    &s.tasks
}

fn tasks_mut(s: &mut MixedSolution) -> &mut Vec<Task> {
    &mut s.tasks
}

fn meetings(s: &MixedSolution) -> &Vec<Meeting> {
    &s.meetings
}

fn meetings_mut(s: &mut MixedSolution) -> &mut Vec<Meeting> {
    &mut s.meetings
}

fn visits(s: &MixedSolution) -> &Vec<Visit> {
    &s.visits
}

fn visits_mut(s: &mut MixedSolution) -> &mut Vec<Visit> {
    &mut s.visits
}

fn task_entity() -> EntityDescriptor {
    EntityDescriptor::new("Task", TypeId::of::<Task>(), "tasks")
        .with_extractor(Box::new(TypedEntityExtractor::new(tasks, tasks_mut)))
        .with_variable(priority_variable())
}

fn meeting_entity() -> EntityDescriptor {
    EntityDescriptor::new("Meeting", TypeId::of::<Meeting>(), "meetings")
        .with_extractor(Box::new(TypedEntityExtractor::new(meetings, meetings_mut)))
        .with_variable(VariableDescriptor::plain(
            "room",
            TypedVariableAccessor::new(
                |m: &Meeting| m.room,
                |m: &mut Meeting, v: Option<u32>| m.room = v,
            ),
        ))
}

/// Descriptor with tasks and meetings only.
pub fn create_plain_mixed_descriptor() -> SolutionDescriptor {
    SolutionDescriptor::new("MixedSolution", TypeId::of::<MixedSolution>())
        .with_entity(task_entity())
        .with_entity(meeting_entity())
}

/// Descriptor with tasks, meetings and visits.
pub fn create_mixed_descriptor() -> SolutionDescriptor {
    create_plain_mixed_descriptor().with_entity(create_visit_entity_descriptor(Box::new(
        TypedEntityExtractor::new(visits, visits_mut),
    )))
}
