//! Vehicle routing fixtures with a chained variable.
//!
//! Each visit points at its predecessor (`previous`), forming chains rooted
//! at vehicles. `previous` is chained; `vehicle` is plain.

use std::any::TypeId;

use swapforge_core::domain::{
    EntityDescriptor, EntityExtractor, SolutionDescriptor, TypedEntityExtractor,
    TypedVariableAccessor, VariableDescriptor,
};
use swapforge_core::{PlanningEntity, PlanningSolution};

/// A customer visit in a route.
#[derive(Clone, Debug, PartialEq)]
pub struct Visit {
    pub id: usize,
    pub vehicle: Option<usize>,
    pub previous: Option<usize>,
}

impl Visit {
    /// Creates a visit with the given vehicle and predecessor.
    pub fn new(id: usize, vehicle: Option<usize>, previous: Option<usize>) -> Self {
        Self {
            id,
            vehicle,
            previous,
        }
    }
}

impl PlanningEntity for Visit {}

/// A solution holding the visits of all routes.
#[derive(Clone, Debug)]
pub struct RouteSolution {
    pub visits: Vec<Visit>,
}

impl PlanningSolution for RouteSolution {}

impl RouteSolution {
    /// Creates one chain of `n` visits on vehicle 0.
    pub fn single_chain(n: usize) -> Self {
        Self {
            visits: (0..n)
                .map(|id| Visit::new(id, Some(0), id.checked_sub(1)))
                .collect(),
        }
    }
}

fn visits(s: &RouteSolution) -> &Vec<Visit> {
    &s.visits
}

fn visits_mut(s: &mut RouteSolution) -> &mut Vec<Visit> {
    &mut s.visits
}

pub fn vehicle_variable() -> VariableDescriptor {
    VariableDescriptor::plain(
        "vehicle",
        TypedVariableAccessor::new(
            |v: &Visit| v.vehicle,
            |v: &mut Visit, value: Option<usize>| v.vehicle = value,
        ),
    )
}

pub fn previous_variable() -> VariableDescriptor {
    VariableDescriptor::chained(
        "previous",
        TypedVariableAccessor::new(
            |v: &Visit| v.previous,
            |v: &mut Visit, value: Option<usize>| v.previous = value,
        ),
    )
}

/// Visit entity descriptor with `vehicle` (plain) and `previous` (chained).
pub fn create_visit_entity_descriptor(extractor: Box<dyn EntityExtractor>) -> EntityDescriptor {
    EntityDescriptor::new("Visit", TypeId::of::<Visit>(), "visits")
        .with_extractor(extractor)
        .with_variable(vehicle_variable())
        .with_variable(previous_variable())
}

/// Solution descriptor for [`RouteSolution`].
pub fn create_route_descriptor() -> SolutionDescriptor {
    SolutionDescriptor::new("RouteSolution", TypeId::of::<RouteSolution>()).with_entity(
        create_visit_entity_descriptor(Box::new(TypedEntityExtractor::new(visits, visits_mut))),
    )
}
