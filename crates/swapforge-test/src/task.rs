//! Task scheduling fixtures.
//!
//! Tasks have a `priority` variable and, in the two-variable descriptor, a
//! `machine` variable as well. Both are plain.

use std::any::TypeId;

use swapforge_core::domain::{
    EntityDescriptor, SolutionDescriptor, TypedEntityExtractor, TypedVariableAccessor,
    VariableDescriptor,
};
use swapforge_core::{PlanningEntity, PlanningSolution};

/// A task with an id and two planning variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    pub id: usize,
    pub priority: Option<i32>,
    pub machine: Option<usize>,
}

impl Task {
    /// Creates a task with a priority and no machine.
    pub fn new(id: usize, priority: i32) -> Self {
        Self {
            id,
            priority: Some(priority),
            machine: None,
        }
    }

    /// Creates a task with a priority and a machine.
    pub fn on_machine(id: usize, priority: i32, machine: usize) -> Self {
        Self {
            id,
            priority: Some(priority),
            machine: Some(machine),
        }
    }
}

impl PlanningEntity for Task {}

/// A solution holding a list of tasks.
#[derive(Clone, Debug)]
pub struct TaskSolution {
    pub tasks: Vec<Task>,
}

impl TaskSolution {
    /// Creates a solution with one task per priority, ids starting at 0.
    pub fn with_priorities(priorities: &[i32]) -> Self {
        Self {
            tasks: priorities
                .iter()
                .enumerate()
                .map(|(id, &p)| Task::new(id, p))
                .collect(),
        }
    }

    /// Returns the priorities of all tasks in order.
    pub fn priorities(&self) -> Vec<Option<i32>> {
        self.tasks.iter().map(|t| t.priority).collect()
    }

    /// Returns the machines of all tasks in order.
    pub fn machines(&self) -> Vec<Option<usize>> {
        self.tasks.iter().map(|t| t.machine).collect()
    }
}

impl PlanningSolution for TaskSolution {}

pub fn get_tasks(s: &TaskSolution) -> &Vec<Task> {
    &s.tasks
}

pub fn get_tasks_mut(s: &mut TaskSolution) -> &mut Vec<Task> {
    &mut s.tasks
}

pub fn priority_variable() -> VariableDescriptor {
    VariableDescriptor::plain(
        "priority",
        TypedVariableAccessor::new(
            |t: &Task| t.priority,
            |t: &mut Task, v: Option<i32>| t.priority = v,
        ),
    )
}

pub fn machine_variable() -> VariableDescriptor {
    VariableDescriptor::plain(
        "machine",
        TypedVariableAccessor::new(
            |t: &Task| t.machine,
            |t: &mut Task, v: Option<usize>| t.machine = v,
        ),
    )
}

/// Task entity descriptor with the `priority` variable only.
pub fn create_task_entity_descriptor() -> EntityDescriptor {
    EntityDescriptor::new("Task", TypeId::of::<Task>(), "tasks")
        .with_extractor(Box::new(TypedEntityExtractor::new(get_tasks, get_tasks_mut)))
        .with_variable(priority_variable())
}

/// Solution descriptor whose tasks have a single `priority` variable.
pub fn create_task_descriptor() -> SolutionDescriptor {
    SolutionDescriptor::new("TaskSolution", TypeId::of::<TaskSolution>())
        .with_entity(create_task_entity_descriptor())
}

/// Solution descriptor whose tasks have `priority` and `machine` variables.
pub fn create_two_variable_task_descriptor() -> SolutionDescriptor {
    SolutionDescriptor::new("TaskSolution", TypeId::of::<TaskSolution>())
        .with_entity(create_task_entity_descriptor().with_variable(machine_variable()))
}
