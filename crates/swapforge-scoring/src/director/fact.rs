//! Fact handles.

use std::fmt;

/// Opaque token a score director issues for one tracked entity.
///
/// Handles are never reused: once an entity is retracted its handle stays
/// dead, so a move holding it can detect desynchronisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FactHandle(u64);

impl FactHandle {
    /// Creates a handle from a raw id.
    pub const fn new(id: u64) -> Self {
        FactHandle(id)
    }

    /// Returns the raw id.
    pub const fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FactHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
