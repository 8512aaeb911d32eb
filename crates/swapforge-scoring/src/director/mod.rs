//! Score director implementations.
//!
//! - [`ScoreDirector`] - The notifier/fact-handle contract moves depend on
//! - [`WorkingMemoryDirector`] - Working-memory backed reference director

mod fact;
mod traits;
mod working_memory;


pub use fact::FactHandle;
pub use traits::ScoreDirector;
pub use working_memory::WorkingMemoryDirector;
