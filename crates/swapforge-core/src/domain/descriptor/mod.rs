//! Descriptor types for runtime metadata about planning domains.
//!
//! Descriptors are built once at configuration time and shared read-only
//! (behind an `Arc`) by every solver run.

mod entity;
mod solution;
mod var_descriptor;


pub use entity::{EntityDescriptor, VariableDescriptors};
pub use solution::SolutionDescriptor;
pub use var_descriptor::VariableDescriptor;
