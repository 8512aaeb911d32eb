//! Solution descriptor.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use super::EntityDescriptor;
use crate::domain::entity_ref::EntityRef;
use crate::error::{Result, SwapForgeError};

/// Describes a planning solution at runtime.
///
/// Immutable once built. Share it between solver runs with an `Arc`; it is
/// the only piece of solver state that is safe to read concurrently.
pub struct SolutionDescriptor {
    /// Name of the solution type.
    pub type_name: &'static str,
    /// TypeId of the solution type.
    pub type_id: TypeId,
    /// Descriptors for all entity types in this solution.
    pub entity_descriptors: Vec<EntityDescriptor>,
    /// Index mapping entity TypeId to descriptor index for O(1) lookup.
    entity_type_index: HashMap<TypeId, usize>,
}

impl SolutionDescriptor {
    /// Creates a new SolutionDescriptor.
    pub fn new(type_name: &'static str, type_id: TypeId) -> Self {
        SolutionDescriptor {
            type_name,
            type_id,
            entity_descriptors: Vec::new(),
            entity_type_index: HashMap::new(),
        }
    }

    /// Adds an entity descriptor and indexes it by TypeId for O(1) lookup.
    pub fn with_entity(mut self, descriptor: EntityDescriptor) -> Self {
        let index = self.entity_descriptors.len();
        let type_id = descriptor.type_id;
        self.entity_descriptors.push(descriptor);
        self.entity_type_index.entry(type_id).or_insert(index);
        self
    }

    /// Finds an entity descriptor by type name.
    pub fn find_entity_descriptor(&self, type_name: &str) -> Option<&EntityDescriptor> {
        self.entity_descriptors
            .iter()
            .find(|d| d.type_name == type_name)
    }

    /// Returns the entity descriptor for a runtime entity class (O(1) lookup).
    pub fn entity_descriptor(&self, type_id: TypeId) -> Option<&EntityDescriptor> {
        self.entity_type_index
            .get(&type_id)
            .and_then(|&idx| self.entity_descriptors.get(idx))
    }

    /// Returns the ordered list of all planning entities in the solution.
    ///
    /// Entities are listed collection by collection in descriptor
    /// registration order, and in collection order within each one.
    pub fn entity_list(&self, solution: &dyn Any) -> Result<Vec<EntityRef>> {
        let mut entities = Vec::new();
        for (descriptor_index, descriptor) in self.entity_descriptors.iter().enumerate() {
            let count = descriptor
                .entity_count(solution)
                .ok_or_else(|| self.unreadable_collection(descriptor))?;
            entities.extend((0..count).map(|entity_index| {
                EntityRef::new(
                    descriptor_index,
                    entity_index,
                    descriptor.type_id,
                    descriptor.type_name,
                )
            }));
        }
        Ok(entities)
    }

    fn unreadable_collection(&self, descriptor: &EntityDescriptor) -> SwapForgeError {
        let reason = if descriptor.has_extractor() {
            "is not a collection of the given solution"
        } else {
            "has no entity extractor"
        };
        SwapForgeError::DomainModel(format!(
            "{}.{} ({}) {reason}",
            self.type_name, descriptor.solution_field, descriptor.type_name
        ))
    }

    /// Gets the entity an `EntityRef` points at.
    pub fn get_entity<'a>(&self, solution: &'a dyn Any, entity: &EntityRef) -> Option<&'a dyn Any> {
        self.entity_descriptors
            .get(entity.descriptor_index)?
            .get_entity(solution, entity.entity_index)
    }

    /// Gets the entity an `EntityRef` points at, mutably.
    pub fn get_entity_mut<'a>(
        &self,
        solution: &'a mut dyn Any,
        entity: &EntityRef,
    ) -> Option<&'a mut dyn Any> {
        self.entity_descriptors
            .get(entity.descriptor_index)?
            .get_entity_mut(solution, entity.entity_index)
    }

    /// Returns the total number of entities across all entity collections.
    pub fn total_entity_count(&self, solution: &dyn Any) -> Option<usize> {
        let mut total = 0;
        for desc in &self.entity_descriptors {
            total += desc.entity_count(solution)?;
        }
        Some(total)
    }
}

impl Clone for SolutionDescriptor {
    fn clone(&self) -> Self {
        Self {
            type_name: self.type_name,
            type_id: self.type_id,
            entity_descriptors: self.entity_descriptors.clone(),
            entity_type_index: self.entity_type_index.clone(),
        }
    }
}

impl fmt::Debug for SolutionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolutionDescriptor")
            .field("type_name", &self.type_name)
            .field("entities", &self.entity_descriptors.len())
            .finish()
    }
}
