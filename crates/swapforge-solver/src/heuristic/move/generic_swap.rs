//! GenericSwapMove - exchanges all planning variables between two entities.
//!
//! The move works on any entity class through the accessors stored in the
//! variable descriptors, so one implementation serves every domain.

use std::any::Any;
use std::fmt::{self, Debug};
use std::sync::Arc;

use smallvec::SmallVec;
use swapforge_core::domain::{
    EntityRef, PlanningSolution, SolutionDescriptor, VariableDescriptor, VariableDescriptors,
    VariableValue,
};
use swapforge_core::{Result, SwapForgeError};
use swapforge_scoring::{FactHandle, ScoreDirector};
use tracing::{trace, warn};

use super::Move;

/// A move that swaps every planning variable of two entities of the same class.
///
/// Holds the two entities, the fact handles the score director issued for
/// them and the shared variable descriptors of their class. Swapping is
/// simultaneous: all values are read before any is written.
///
/// # Example
///
/// ```
/// use std::any::{Any, TypeId};
/// use swapforge_core::domain::*;
/// use swapforge_core::{PlanningEntity, PlanningSolution};
/// use swapforge_scoring::{ScoreDirector, WorkingMemoryDirector};
/// use swapforge_solver::{GenericSwapMove, Move};
///
/// #[derive(Clone, Debug)]
/// struct Shift { employee: Option<u32> }
/// impl PlanningEntity for Shift {}
///
/// #[derive(Clone, Debug)]
/// struct Roster { shifts: Vec<Shift> }
/// impl PlanningSolution for Roster {}
///
/// fn shifts(r: &Roster) -> &Vec<Shift> { &r.shifts }
/// fn shifts_mut(r: &mut Roster) -> &mut Vec<Shift> { &mut r.shifts }
///
/// let shift = EntityDescriptor::new("Shift", TypeId::of::<Shift>(), "shifts")
///     .with_extractor(Box::new(TypedEntityExtractor::new(shifts, shifts_mut)))
///     .with_variable(VariableDescriptor::plain(
///         "employee",
///         TypedVariableAccessor::new(
///             |s: &Shift| s.employee,
///             |s: &mut Shift, v: Option<u32>| s.employee = v,
///         ),
///     ));
/// let variables = shift.variable_descriptors().clone();
/// let descriptor = SolutionDescriptor::new("Roster", TypeId::of::<Roster>()).with_entity(shift);
///
/// let roster = Roster { shifts: vec![Shift { employee: Some(1) }, Shift { employee: Some(2) }] };
/// let mut director = WorkingMemoryDirector::new(roster, descriptor).unwrap();
///
/// let entities = director.solution_descriptor()
///     .entity_list(director.working_solution() as &dyn Any)
///     .unwrap();
/// let left = director.fact_handle(&entities[0]).unwrap();
/// let right = director.fact_handle(&entities[1]).unwrap();
///
/// let swap = GenericSwapMove::new(variables, entities[0], left, entities[1], right);
/// swap.do_move(&mut director).unwrap();
/// assert_eq!(director.working_solution().shifts[0].employee, Some(2));
///
/// swap.undo_move().do_move(&mut director).unwrap();
/// assert_eq!(director.working_solution().shifts[0].employee, Some(1));
/// ```
#[derive(Clone)]
pub struct GenericSwapMove {
    variable_descriptors: VariableDescriptors,
    entities: [EntityRef; 2],
    handles: [FactHandle; 2],
}

impl GenericSwapMove {
    /// Creates a new swap move. Has no side effects.
    pub fn new(
        variable_descriptors: VariableDescriptors,
        left_entity: EntityRef,
        left_handle: FactHandle,
        right_entity: EntityRef,
        right_handle: FactHandle,
    ) -> Self {
        Self {
            variable_descriptors,
            entities: [left_entity, right_entity],
            handles: [left_handle, right_handle],
        }
    }

    /// Returns the left entity.
    pub fn left_entity(&self) -> &EntityRef {
        &self.entities[0]
    }

    /// Returns the right entity.
    pub fn right_entity(&self) -> &EntityRef {
        &self.entities[1]
    }

    /// Returns the fact handles of the left and right entity.
    pub fn fact_handles(&self) -> [FactHandle; 2] {
        self.handles
    }

    /// Returns the variable descriptors this move exchanges.
    pub fn variable_descriptors(&self) -> &VariableDescriptors {
        &self.variable_descriptors
    }

    fn verify_handle<S, D>(
        score_director: &D,
        entity: &EntityRef,
        expected: FactHandle,
    ) -> Result<()>
    where
        S: PlanningSolution,
        D: ScoreDirector<S>,
    {
        match score_director.fact_handle(entity) {
            Some(handle) if handle == expected => Ok(()),
            actual => {
                warn!(
                    event = "integrity_fault",
                    entity = %entity,
                    expected = %expected,
                    actual = ?actual,
                );
                Err(integrity_fault(entity))
            }
        }
    }

    // Reads every swapped value of both entities.
    fn read_values<S: PlanningSolution>(
        &self,
        descriptor: &SolutionDescriptor,
        solution: &S,
    ) -> Result<Vec<(VariableValue, VariableValue)>> {
        let [left, right] = &self.entities;
        let solution = solution as &dyn Any;
        let left_entity = descriptor
            .get_entity(solution, left)
            .ok_or_else(|| integrity_fault(left))?;
        let right_entity = descriptor
            .get_entity(solution, right)
            .ok_or_else(|| integrity_fault(right))?;

        self.variable_descriptors
            .iter()
            .map(|variable| {
                let left_value = variable
                    .get_value(left_entity)
                    .ok_or_else(|| value_type_mismatch(left, variable.name))?;
                let right_value = variable
                    .get_value(right_entity)
                    .ok_or_else(|| value_type_mismatch(right, variable.name))?;
                Ok((left_value, right_value))
            })
            .collect()
    }
}

fn integrity_fault(entity: &EntityRef) -> SwapForgeError {
    SwapForgeError::Integrity {
        entity_type: entity.type_name,
        entity_index: entity.entity_index,
    }
}

fn value_type_mismatch(entity: &EntityRef, variable: &str) -> SwapForgeError {
    SwapForgeError::DomainModel(format!(
        "variable ({variable}) cannot be accessed on entity ({entity})"
    ))
}

// Writes one value, returning false if the entity or value type didn't match.
fn write_value<S: PlanningSolution>(
    descriptor: &SolutionDescriptor,
    solution: &mut S,
    entity: &EntityRef,
    variable: &VariableDescriptor,
    value: VariableValue,
) -> bool {
    descriptor
        .get_entity_mut(solution as &mut dyn Any, entity)
        .is_some_and(|instance| variable.set_value(instance, value))
}

impl Move for GenericSwapMove {
    fn is_doable<S, D>(&self, _score_director: &D) -> bool
    where
        S: PlanningSolution,
        D: ScoreDirector<S>,
    {
        self.entities[0] != self.entities[1]
    }

    fn do_move<S, D>(&self, score_director: &mut D) -> Result<()>
    where
        S: PlanningSolution,
        D: ScoreDirector<S>,
    {
        // Swapping an entity with itself changes nothing.
        if !self.is_doable::<S, D>(score_director) {
            return Ok(());
        }

        let [left, right] = &self.entities;
        let [left_handle, right_handle] = self.handles;
        Self::verify_handle::<S, D>(score_director, left, left_handle)?;
        Self::verify_handle::<S, D>(score_director, right, right_handle)?;

        let descriptor = Arc::clone(score_director.solution_descriptor());
        let values = self.read_values::<S>(&descriptor, score_director.working_solution())?;

        let mut all_written = true;
        for (variable, (left_value, right_value)) in self.variable_descriptors.iter().zip(values)
        {
            score_director.before_variable_changed(left_handle, variable.name);
            score_director.before_variable_changed(right_handle, variable.name);

            let solution = score_director.working_solution_mut();
            all_written &= write_value(&descriptor, solution, left, variable, right_value);
            all_written &= write_value(&descriptor, solution, right, variable, left_value);

            score_director.after_variable_changed(left_handle, variable.name);
            score_director.after_variable_changed(right_handle, variable.name);
        }

        if !all_written {
            return Err(SwapForgeError::DomainModel(format!(
                "swap between ({left}) and ({right}) could not write every variable"
            )));
        }

        trace!(
            event = "move_executed",
            left = %left,
            right = %right,
            variables = self.variable_descriptors.len(),
        );
        Ok(())
    }

    fn undo_move(&self) -> Self {
        let [left, right] = self.entities;
        let [left_handle, right_handle] = self.handles;
        GenericSwapMove::new(
            Arc::clone(&self.variable_descriptors),
            right,
            right_handle,
            left,
            left_handle,
        )
    }

    fn entity_refs(&self) -> &[EntityRef] {
        &self.entities
    }

    fn variable_names(&self) -> SmallVec<[&'static str; 4]> {
        self.variable_descriptors.iter().map(|v| v.name).collect()
    }
}

impl Debug for GenericSwapMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericSwapMove")
            .field("left", &format_args!("{}", self.entities[0]))
            .field("right", &format_args!("{}", self.entities[1]))
            .field("variables", &self.variable_names())
            .finish()
    }
}

impl fmt::Display for GenericSwapMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <=> {}", self.entities[0], self.entities[1])
    }
}
