//! Core domain traits

use std::any::Any;

/// Marker trait for planning solutions.
///
/// A planning solution owns one or more ordered collections of planning
/// entities. Moves mutate the live instance in place; the solver core never
/// copies it.
///
/// # Example
///
/// ```
/// use swapforge_core::PlanningSolution;
///
/// #[derive(Clone)]
/// struct Roster {
///     shifts: Vec<Option<usize>>,
/// }
///
/// impl PlanningSolution for Roster {}
/// ```
///
/// # Thread Safety
///
/// Planning solutions must be `Send + Sync` so independent solver runs can
/// live on separate threads.
pub trait PlanningSolution: Clone + Send + Sync + 'static {}

/// Marker trait for planning entities.
///
/// A planning entity has one or more planning variables the solver changes.
/// Two entities are of the same class only if their concrete types match.
///
/// # Example
///
/// ```
/// use swapforge_core::PlanningEntity;
///
/// #[derive(Clone, Debug)]
/// struct Shift {
///     employee: Option<usize>,
/// }
///
/// impl PlanningEntity for Shift {}
/// ```
pub trait PlanningEntity: Clone + Send + Sync + Any + 'static {}
