//! Entity descriptor.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use super::VariableDescriptor;
use crate::domain::entity_ref::EntityExtractor;

/// Ordered variable descriptors of one entity type, shared with the moves
/// that swap them.
pub type VariableDescriptors = Arc<[VariableDescriptor]>;

/// Describes a planning entity type at runtime.
pub struct EntityDescriptor {
    /// Name of the entity type.
    pub type_name: &'static str,
    /// TypeId of the entity type.
    pub type_id: TypeId,
    /// Field name in the solution (for entity collections).
    pub solution_field: &'static str,
    variable_descriptors: VariableDescriptors,
    extractor: Option<Box<dyn EntityExtractor>>,
}

impl EntityDescriptor {
    /// Creates a new EntityDescriptor.
    pub fn new(type_name: &'static str, type_id: TypeId, solution_field: &'static str) -> Self {
        EntityDescriptor {
            type_name,
            type_id,
            solution_field,
            variable_descriptors: Arc::from(Vec::new()),
            extractor: None,
        }
    }

    /// Sets the entity extractor for this descriptor.
    pub fn with_extractor(mut self, extractor: Box<dyn EntityExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Adds a variable descriptor, recording this type as its owner.
    pub fn with_variable(mut self, descriptor: VariableDescriptor) -> Self {
        let mut variables = self.variable_descriptors.to_vec();
        variables.push(descriptor.with_entity_type_name(self.type_name));
        self.variable_descriptors = Arc::from(variables);
        self
    }

    /// Returns the ordered variable descriptors.
    pub fn variable_descriptors(&self) -> &VariableDescriptors {
        &self.variable_descriptors
    }

    /// Finds a variable descriptor by name.
    pub fn find_variable(&self, name: &str) -> Option<&VariableDescriptor> {
        self.variable_descriptors.iter().find(|v| v.name == name)
    }

    /// Returns the first chained variable, if any.
    pub fn first_chained_variable(&self) -> Option<&VariableDescriptor> {
        self.variable_descriptors.iter().find(|v| v.is_chained())
    }

    /// Returns whether this descriptor has an entity extractor.
    pub fn has_extractor(&self) -> bool {
        self.extractor.is_some()
    }

    /// Returns the number of entities in the solution.
    ///
    /// Returns `None` if no extractor is set or solution type doesn't match.
    pub fn entity_count(&self, solution: &dyn Any) -> Option<usize> {
        self.extractor.as_ref()?.count(solution)
    }

    /// Gets a reference to an entity by index.
    pub fn get_entity<'a>(&self, solution: &'a dyn Any, index: usize) -> Option<&'a dyn Any> {
        self.extractor.as_ref()?.get(solution, index)
    }

    /// Gets a mutable reference to an entity by index.
    pub fn get_entity_mut<'a>(
        &self,
        solution: &'a mut dyn Any,
        index: usize,
    ) -> Option<&'a mut dyn Any> {
        self.extractor.as_ref()?.get_mut(solution, index)
    }
}

impl Clone for EntityDescriptor {
    fn clone(&self) -> Self {
        Self {
            type_name: self.type_name,
            type_id: self.type_id,
            solution_field: self.solution_field,
            variable_descriptors: Arc::clone(&self.variable_descriptors),
            extractor: self.extractor.clone(),
        }
    }
}

impl fmt::Debug for EntityDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityDescriptor")
            .field("type_name", &self.type_name)
            .field("solution_field", &self.solution_field)
            .field("variables", &self.variable_descriptors.len())
            .finish()
    }
}
