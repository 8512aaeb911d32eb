//! Variable kinds and typed accessors
//!
//! Accessors are plain function pointers resolved once when the descriptor
//! model is built; moves never look fields up by name at runtime.

use std::any::{Any, TypeId};
use std::fmt::{self, Debug};
use std::marker::PhantomData;

use super::PlanningEntity;

/// A type-erased planning variable value in transit between two entities.
pub type VariableValue = Box<dyn Any + Send>;

/// The structural kind of a planning variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VariableKind {
    /// An ordinary variable whose value can be exchanged freely.
    #[default]
    Plain,
    /// A chained variable where entities form chains rooted at anchors.
    ///
    /// For example, in vehicle routing: Vehicle ← Customer1 ← Customer2.
    /// Exchanging values blindly would break the chain, so only chain-aware
    /// moves may touch these.
    Chained,
}

impl VariableKind {
    /// Returns true if this is a chained variable.
    pub fn is_chained(&self) -> bool {
        matches!(self, VariableKind::Chained)
    }
}

/// Reads and writes one planning variable on a type-erased entity.
pub trait VariableAccessor: Send + Sync {
    /// Reads the current value, or `None` if the entity type doesn't match.
    fn get_value(&self, entity: &dyn Any) -> Option<VariableValue>;

    /// Writes a value. Returns false if the entity or value type doesn't match.
    fn set_value(&self, entity: &mut dyn Any, value: VariableValue) -> bool;

    /// Renders the current value with `Debug`.
    fn describe_value(&self, entity: &dyn Any) -> Option<String>;

    /// Returns the TypeId of the entity type this accessor reads.
    fn entity_type_id(&self) -> TypeId;
}

/// Accessor backed by typed getter/setter function pointers.
///
/// # Type Parameters
/// * `E` - The entity type
/// * `V` - The variable value type
///
/// # Example
///
/// ```
/// use std::any::Any;
/// use swapforge_core::PlanningEntity;
/// use swapforge_core::domain::{TypedVariableAccessor, VariableAccessor};
///
/// #[derive(Clone, Debug)]
/// struct Shift { employee: Option<usize> }
/// impl PlanningEntity for Shift {}
///
/// let accessor = TypedVariableAccessor::new(
///     |s: &Shift| s.employee,
///     |s: &mut Shift, v: Option<usize>| s.employee = v,
/// );
///
/// let mut shift = Shift { employee: Some(3) };
/// let value = accessor.get_value(&shift as &dyn Any).unwrap();
/// assert!(accessor.set_value(&mut shift as &mut dyn Any, Box::new(None::<usize>)));
/// assert_eq!(shift.employee, None);
/// assert!(accessor.set_value(&mut shift as &mut dyn Any, value));
/// assert_eq!(shift.employee, Some(3));
/// ```
pub struct TypedVariableAccessor<E, V> {
    getter: fn(&E) -> V,
    setter: fn(&mut E, V),
    _phantom: PhantomData<fn() -> (E, V)>,
}

impl<E, V> TypedVariableAccessor<E, V> {
    /// Creates a new accessor from a getter and a setter.
    pub fn new(getter: fn(&E) -> V, setter: fn(&mut E, V)) -> Self {
        Self {
            getter,
            setter,
            _phantom: PhantomData,
        }
    }
}

impl<E, V> VariableAccessor for TypedVariableAccessor<E, V>
where
    E: PlanningEntity,
    V: Debug + Send + 'static,
{
    fn get_value(&self, entity: &dyn Any) -> Option<VariableValue> {
        let entity = entity.downcast_ref::<E>()?;
        Some(Box::new((self.getter)(entity)))
    }

    fn set_value(&self, entity: &mut dyn Any, value: VariableValue) -> bool {
        let Some(entity) = entity.downcast_mut::<E>() else {
            return false;
        };
        match value.downcast::<V>() {
            Ok(value) => {
                (self.setter)(entity, *value);
                true
            }
            Err(_) => false,
        }
    }

    fn describe_value(&self, entity: &dyn Any) -> Option<String> {
        let entity = entity.downcast_ref::<E>()?;
        Some(format!("{:?}", (self.getter)(entity)))
    }

    fn entity_type_id(&self) -> TypeId {
        TypeId::of::<E>()
    }
}

impl<E, V> Debug for TypedVariableAccessor<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedVariableAccessor")
            .field("entity", &std::any::type_name::<E>())
            .field("value", &std::any::type_name::<V>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Job {
        machine: Option<u32>,
        priority: i64,
    }

    impl PlanningEntity for Job {}

    fn machine_accessor() -> TypedVariableAccessor<Job, Option<u32>> {
        TypedVariableAccessor::new(
            |j: &Job| j.machine,
            |j: &mut Job, v: Option<u32>| j.machine = v,
        )
    }

    #[test]
    fn test_get_and_set() {
        let accessor = machine_accessor();
        let mut job = Job {
            machine: Some(4),
            priority: 1,
        };

        let value = accessor.get_value(&job as &dyn Any).unwrap();
        assert_eq!(value.downcast_ref::<Option<u32>>(), Some(&Some(4)));

        assert!(accessor.set_value(&mut job as &mut dyn Any, Box::new(Some(9u32))));
        assert_eq!(job.machine, Some(9));
        assert_eq!(job.priority, 1);
    }

    #[test]
    fn test_type_mismatch_is_rejected() {
        let accessor = machine_accessor();
        let mut job = Job {
            machine: None,
            priority: 0,
        };
        let mut other = 5u8;

        assert!(accessor.get_value(&other as &dyn Any).is_none());
        assert!(!accessor.set_value(&mut other as &mut dyn Any, Box::new(Some(1u32))));
        assert!(!accessor.set_value(&mut job as &mut dyn Any, Box::new("wrong")));
        assert_eq!(job.machine, None);
    }

    #[test]
    fn test_describe_value() {
        let accessor = machine_accessor();
        let job = Job {
            machine: Some(2),
            priority: 0,
        };
        assert_eq!(
            accessor.describe_value(&job as &dyn Any).as_deref(),
            Some("Some(2)")
        );
        assert_eq!(accessor.entity_type_id(), TypeId::of::<Job>());
    }

    #[test]
    fn test_variable_kind() {
        assert!(VariableKind::Chained.is_chained());
        assert!(!VariableKind::Plain.is_chained());
        assert_eq!(VariableKind::default(), VariableKind::Plain);
    }
}
