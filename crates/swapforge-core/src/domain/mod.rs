//! Domain model traits and runtime metadata for planning problems
//!
//! - `PlanningSolution`: The container for the complete problem and solution
//! - `PlanningEntity`: Things that can be planned/optimized
//! - Descriptors: immutable metadata describing entities and their variables

mod descriptor;
mod entity_ref;
mod traits;
mod variable;

pub use descriptor::{EntityDescriptor, SolutionDescriptor, VariableDescriptor, VariableDescriptors};
pub use entity_ref::{EntityExtractor, EntityRef, TypedEntityExtractor};
pub use traits::{PlanningEntity, PlanningSolution};
pub use variable::{TypedVariableAccessor, VariableAccessor, VariableKind, VariableValue};
