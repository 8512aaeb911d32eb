//! Entity reference types for dynamic entity access.
//!
//! These types let the solver address entities inside a solution without
//! knowing their concrete types at compile time.

use std::any::{Any, TypeId};
use std::fmt::{self, Debug};

use super::PlanningEntity;

/// Identity of a live planning entity inside the working solution.
///
/// Two references are equal when they point at the same slot of the same
/// entity collection. `type_id` is the entity's runtime class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityRef {
    /// Index of the entity descriptor owning the collection.
    pub descriptor_index: usize,
    /// Index of this entity in its collection.
    pub entity_index: usize,
    /// Runtime class of the entity.
    pub type_id: TypeId,
    /// Name of the entity type.
    pub type_name: &'static str,
}

impl EntityRef {
    /// Creates a new entity reference.
    pub fn new(
        descriptor_index: usize,
        entity_index: usize,
        type_id: TypeId,
        type_name: &'static str,
    ) -> Self {
        Self {
            descriptor_index,
            entity_index,
            type_id,
            type_name,
        }
    }

    /// Returns true if both references have exactly the same runtime class.
    pub fn same_class(&self, other: &EntityRef) -> bool {
        self.type_id == other.type_id
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.type_name, self.entity_index)
    }
}

/// Extracts one entity collection from a type-erased planning solution.
pub trait EntityExtractor: Send + Sync {
    /// Returns the number of entities, or `None` if the solution type doesn't match.
    fn count(&self, solution: &dyn Any) -> Option<usize>;

    /// Gets a reference to an entity by index.
    fn get<'a>(&self, solution: &'a dyn Any, index: usize) -> Option<&'a dyn Any>;

    /// Gets a mutable reference to an entity by index.
    fn get_mut<'a>(&self, solution: &'a mut dyn Any, index: usize) -> Option<&'a mut dyn Any>;

    /// Returns the TypeId of the entity type.
    fn entity_type_id(&self) -> TypeId;

    /// Clone this extractor.
    fn clone_box(&self) -> Box<dyn EntityExtractor>;
}

impl Clone for Box<dyn EntityExtractor> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A concrete entity extractor for a specific solution and entity type.
///
/// # Type Parameters
/// * `S` - The solution type
/// * `E` - The entity type
pub struct TypedEntityExtractor<S, E> {
    get_collection: fn(&S) -> &Vec<E>,
    get_collection_mut: fn(&mut S) -> &mut Vec<E>,
}

impl<S, E> TypedEntityExtractor<S, E>
where
    S: 'static,
    E: PlanningEntity,
{
    /// Creates a new typed entity extractor.
    pub fn new(
        get_collection: fn(&S) -> &Vec<E>,
        get_collection_mut: fn(&mut S) -> &mut Vec<E>,
    ) -> Self {
        Self {
            get_collection,
            get_collection_mut,
        }
    }
}

impl<S, E> EntityExtractor for TypedEntityExtractor<S, E>
where
    S: Send + Sync + 'static,
    E: PlanningEntity,
{
    fn count(&self, solution: &dyn Any) -> Option<usize> {
        let solution = solution.downcast_ref::<S>()?;
        Some((self.get_collection)(solution).len())
    }

    fn get<'a>(&self, solution: &'a dyn Any, index: usize) -> Option<&'a dyn Any> {
        let solution = solution.downcast_ref::<S>()?;
        (self.get_collection)(solution)
            .get(index)
            .map(|e| e as &dyn Any)
    }

    fn get_mut<'a>(&self, solution: &'a mut dyn Any, index: usize) -> Option<&'a mut dyn Any> {
        let solution = solution.downcast_mut::<S>()?;
        (self.get_collection_mut)(solution)
            .get_mut(index)
            .map(|e| e as &mut dyn Any)
    }

    fn entity_type_id(&self) -> TypeId {
        TypeId::of::<E>()
    }

    fn clone_box(&self) -> Box<dyn EntityExtractor> {
        Box::new(Self {
            get_collection: self.get_collection,
            get_collection_mut: self.get_collection_mut,
        })
    }
}

impl<S, E> Debug for TypedEntityExtractor<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedEntityExtractor")
            .field("entity", &std::any::type_name::<E>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Lesson {
        room: Option<u8>,
    }

    impl PlanningEntity for Lesson {}

    #[derive(Clone, Debug)]
    struct Timetable {
        lessons: Vec<Lesson>,
    }

    fn lessons(s: &Timetable) -> &Vec<Lesson> {
        &s.lessons
    }

    fn lessons_mut(s: &mut Timetable) -> &mut Vec<Lesson> {
        &mut s.lessons
    }

    #[test]
    fn test_typed_extractor_access() {
        let extractor = TypedEntityExtractor::new(lessons, lessons_mut);
        let mut timetable = Timetable {
            lessons: vec![Lesson { room: Some(1) }, Lesson { room: None }],
        };

        assert_eq!(extractor.count(&timetable as &dyn Any), Some(2));
        let first = extractor
            .get(&timetable as &dyn Any, 0)
            .and_then(|e| e.downcast_ref::<Lesson>())
            .unwrap();
        assert_eq!(first.room, Some(1));
        assert!(extractor.get(&timetable as &dyn Any, 2).is_none());

        let second = extractor
            .get_mut(&mut timetable as &mut dyn Any, 1)
            .and_then(|e| e.downcast_mut::<Lesson>())
            .unwrap();
        second.room = Some(7);
        assert_eq!(timetable.lessons[1].room, Some(7));
    }

    #[test]
    fn test_wrong_solution_type() {
        let extractor = TypedEntityExtractor::new(lessons, lessons_mut);
        let not_a_timetable = 42u32;
        assert_eq!(extractor.count(&not_a_timetable as &dyn Any), None);
        assert_eq!(extractor.entity_type_id(), TypeId::of::<Lesson>());
    }

    #[test]
    fn test_entity_ref_class_and_display() {
        let a = EntityRef::new(0, 0, TypeId::of::<Lesson>(), "Lesson");
        let b = EntityRef::new(0, 1, TypeId::of::<Lesson>(), "Lesson");
        let c = EntityRef::new(1, 0, TypeId::of::<u8>(), "Room");
        assert!(a.same_class(&b));
        assert!(!a.same_class(&c));
        assert_ne!(a, b);
        assert_eq!(b.to_string(), "Lesson#1");
    }
}
