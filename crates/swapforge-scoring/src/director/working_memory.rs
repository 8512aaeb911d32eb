//! Working-memory backed score director.

use std::any::Any;
use std::cell::Cell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use swapforge_core::domain::{EntityRef, PlanningSolution, SolutionDescriptor};
use swapforge_core::Result;

use super::{FactHandle, ScoreDirector};

// What the working memory believes about one tracked entity.
#[derive(Debug, Clone)]
struct FactRecord {
    entity: EntityRef,
    values: BTreeMap<&'static str, String>,
    pending: HashSet<String>,
}

/// A score director that tracks every planning entity as a fact.
///
/// Each entity gets a [`FactHandle`] when it is inserted. The director
/// records the `Debug` rendering of every planning variable and refreshes a
/// variable only on `after_variable_changed`, so its recorded state matches
/// the working solution exactly when every write was notified.
///
/// Used as the reference scorer in tests and by callers that plug in their
/// own score calculation on top of the recorded state.
///
/// # Panics
///
/// Notifications for an unknown handle, an `after` without a matching
/// `before`, or a second `before` for the same variable indicate that the
/// solution and the working memory diverged, and panic.
pub struct WorkingMemoryDirector<S: PlanningSolution> {
    working_solution: S,
    solution_descriptor: Arc<SolutionDescriptor>,
    handles: HashMap<EntityRef, FactHandle>,
    facts: HashMap<FactHandle, FactRecord>,
    next_handle: u64,
    notification_count: u64,
    handle_lookups: Cell<u64>,
}

impl<S: PlanningSolution> WorkingMemoryDirector<S> {
    /// Creates a director and inserts every entity of the solution.
    pub fn new(
        solution: S,
        solution_descriptor: impl Into<Arc<SolutionDescriptor>>,
    ) -> Result<Self> {
        let mut director = WorkingMemoryDirector {
            working_solution: solution,
            solution_descriptor: solution_descriptor.into(),
            handles: HashMap::new(),
            facts: HashMap::new(),
            next_handle: 0,
            notification_count: 0,
            handle_lookups: Cell::new(0),
        };
        director.insert_all()?;
        Ok(director)
    }

    /// Retracts every fact and re-inserts the current entities with fresh handles.
    ///
    /// Call this after entities were added, removed or reordered between
    /// phases. Handles issued before the call are dead afterwards.
    pub fn rebuild_working_memory(&mut self) -> Result<()> {
        self.handles.clear();
        self.facts.clear();
        self.insert_all()
    }

    /// Stops tracking an entity. Returns its now dead handle.
    pub fn retract(&mut self, entity: &EntityRef) -> Option<FactHandle> {
        let handle = self.handles.remove(entity)?;
        self.facts.remove(&handle);
        Some(handle)
    }

    /// Returns the recorded value of a variable, rendered with `Debug`.
    pub fn recorded_value(&self, handle: FactHandle, variable_name: &str) -> Option<&str> {
        self.facts
            .get(&handle)?
            .values
            .get(variable_name)
            .map(String::as_str)
    }

    /// Returns the number of tracked entities.
    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }

    /// Returns the total number of before/after notifications received.
    pub fn notification_count(&self) -> u64 {
        self.notification_count
    }

    /// Returns how many times `fact_handle` has been called.
    pub fn fact_handle_lookups(&self) -> u64 {
        self.handle_lookups.get()
    }

    /// Returns true if no change is in flight and every recorded value
    /// matches the working solution.
    pub fn is_consistent(&self) -> bool {
        self.facts.values().all(|record| {
            record.pending.is_empty()
                && record.values.iter().all(|(name, value)| {
                    self.current_value(&record.entity, name).as_ref() == Some(value)
                })
        })
    }

    /// Consumes the director and returns the working solution.
    pub fn into_working_solution(self) -> S {
        self.working_solution
    }

    fn insert_all(&mut self) -> Result<()> {
        let entities = self
            .solution_descriptor
            .entity_list(&self.working_solution as &dyn Any)?;
        for entity in entities {
            self.insert(entity);
        }
        Ok(())
    }

    fn insert(&mut self, entity: EntityRef) -> FactHandle {
        let handle = FactHandle::new(self.next_handle);
        self.next_handle += 1;

        let mut values = BTreeMap::new();
        if let Some(descriptor) = self
            .solution_descriptor
            .entity_descriptors
            .get(entity.descriptor_index)
        {
            for variable in descriptor.variable_descriptors().iter() {
                if let Some(value) = self.current_value(&entity, variable.name) {
                    values.insert(variable.name, value);
                }
            }
        }

        self.handles.insert(entity, handle);
        self.facts.insert(
            handle,
            FactRecord {
                entity,
                values,
                pending: HashSet::new(),
            },
        );
        handle
    }

    fn current_value(&self, entity: &EntityRef, variable_name: &str) -> Option<String> {
        let variable = self
            .solution_descriptor
            .entity_descriptors
            .get(entity.descriptor_index)?
            .find_variable(variable_name)?;
        let instance = self
            .solution_descriptor
            .get_entity(&self.working_solution as &dyn Any, entity)?;
        variable.describe_value(instance)
    }

    fn record_mut(&mut self, handle: FactHandle) -> &mut FactRecord {
        match self.facts.get_mut(&handle) {
            Some(record) => record,
            None => panic!("Fact handle ({handle}) is not tracked by the working memory"),
        }
    }
}

impl<S: PlanningSolution> ScoreDirector<S> for WorkingMemoryDirector<S> {
    fn working_solution(&self) -> &S {
        &self.working_solution
    }

    fn working_solution_mut(&mut self) -> &mut S {
        &mut self.working_solution
    }

    fn solution_descriptor(&self) -> &Arc<SolutionDescriptor> {
        &self.solution_descriptor
    }

    fn fact_handle(&self, entity: &EntityRef) -> Option<FactHandle> {
        self.handle_lookups.set(self.handle_lookups.get() + 1);
        self.handles.get(entity).copied()
    }

    fn before_variable_changed(&mut self, handle: FactHandle, variable_name: &str) {
        self.notification_count += 1;
        let record = self.record_mut(handle);
        let first = record.pending.insert(variable_name.to_string());
        assert!(
            first,
            "Variable ({variable_name}) of fact ({handle}) is already being changed"
        );
    }

    fn after_variable_changed(&mut self, handle: FactHandle, variable_name: &str) {
        self.notification_count += 1;
        let entity = {
            let record = self.record_mut(handle);
            assert!(
                record.pending.remove(variable_name),
                "Variable ({variable_name}) of fact ({handle}) changed without before notification"
            );
            record.entity
        };

        let variable = self
            .solution_descriptor
            .entity_descriptors
            .get(entity.descriptor_index)
            .and_then(|d| d.find_variable(variable_name))
            .map(|v| v.name);
        if let Some(name) = variable {
            let value = self.current_value(&entity, name);
            let record = self.record_mut(handle);
            match value {
                Some(value) => {
                    record.values.insert(name, value);
                }
                None => {
                    record.values.remove(name);
                }
            }
        }
    }

    fn assert_consistent(&self) {
        assert!(
            self.is_consistent(),
            "Working memory of solution ({}) diverged from the working solution",
            self.solution_descriptor.type_name
        );
    }
}

impl<S: PlanningSolution + std::fmt::Debug> std::fmt::Debug for WorkingMemoryDirector<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkingMemoryDirector")
            .field("working_solution", &self.working_solution)
            .field("facts", &self.facts.len())
            .finish()
    }
}
