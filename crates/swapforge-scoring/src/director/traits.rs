// Score director trait definition.

use std::sync::Arc;

use swapforge_core::domain::{EntityRef, PlanningSolution, SolutionDescriptor};

use super::FactHandle;

// The score director manages the working solution on behalf of the scorer.
//
// It is responsible for:
// - Owning the working solution moves mutate in place
// - Resolving fact handles for live entities
// - Receiving before/after notifications around every variable write
// - Providing access to solution metadata via descriptors
pub trait ScoreDirector<S: PlanningSolution>: Send {
    // Returns a reference to the working solution.
    fn working_solution(&self) -> &S;

    // Returns a mutable reference to the working solution.
    fn working_solution_mut(&mut self) -> &mut S;

    // Returns the shared solution descriptor.
    fn solution_descriptor(&self) -> &Arc<SolutionDescriptor>;

    // Resolves the fact handle of a live entity.
    //
    // Returns None if the director does not track the entity.
    fn fact_handle(&self, entity: &EntityRef) -> Option<FactHandle>;

    // Called before a planning variable of a tracked entity is changed.
    fn before_variable_changed(&mut self, handle: FactHandle, variable_name: &str);

    // Called after a planning variable of a tracked entity is changed.
    fn after_variable_changed(&mut self, handle: FactHandle, variable_name: &str);

    // Panics if the recorded state diverged from the working solution.
    //
    // Default implementation checks nothing.
    fn assert_consistent(&self) {}
}
