//! Variable descriptor.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::domain::variable::{VariableAccessor, VariableKind, VariableValue};

/// Describes a planning variable at runtime.
///
/// Carries the accessor used to read and write the variable, so moves work
/// on any entity type without per-call reflection.
#[derive(Clone)]
pub struct VariableDescriptor {
    /// Name of the variable (field name).
    pub name: &'static str,
    /// Structural kind of the variable.
    pub kind: VariableKind,
    /// Name of the owning entity type, stamped by `EntityDescriptor::with_variable`.
    pub entity_type_name: &'static str,
    accessor: Arc<dyn VariableAccessor>,
}

impl VariableDescriptor {
    /// Creates a new plain variable descriptor.
    pub fn plain(name: &'static str, accessor: impl VariableAccessor + 'static) -> Self {
        Self::new(name, VariableKind::Plain, accessor)
    }

    /// Creates a new chained variable descriptor.
    ///
    /// Chained variables form chains rooted at anchor problem facts.
    pub fn chained(name: &'static str, accessor: impl VariableAccessor + 'static) -> Self {
        Self::new(name, VariableKind::Chained, accessor)
    }

    /// Creates a variable descriptor of the given kind.
    pub fn new(
        name: &'static str,
        kind: VariableKind,
        accessor: impl VariableAccessor + 'static,
    ) -> Self {
        VariableDescriptor {
            name,
            kind,
            entity_type_name: "",
            accessor: Arc::new(accessor),
        }
    }

    /// Returns true if this is a chained variable.
    pub fn is_chained(&self) -> bool {
        self.kind.is_chained()
    }

    /// Reads the variable from a type-erased entity.
    pub fn get_value(&self, entity: &dyn Any) -> Option<VariableValue> {
        self.accessor.get_value(entity)
    }

    /// Writes the variable on a type-erased entity.
    ///
    /// Returns false if the entity or the value has the wrong type.
    pub fn set_value(&self, entity: &mut dyn Any, value: VariableValue) -> bool {
        self.accessor.set_value(entity, value)
    }

    /// Renders the current value of the variable with `Debug`.
    pub fn describe_value(&self, entity: &dyn Any) -> Option<String> {
        self.accessor.describe_value(entity)
    }

    pub(crate) fn with_entity_type_name(mut self, entity_type_name: &'static str) -> Self {
        self.entity_type_name = entity_type_name;
        self
    }
}

impl fmt::Debug for VariableDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("entity_type_name", &self.entity_type_name)
            .finish()
    }
}
