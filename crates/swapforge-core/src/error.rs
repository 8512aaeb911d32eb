//! Error types for SwapForge

use thiserror::Error;

/// Main error type for SwapForge operations.
///
/// Lifecycle misuse (requesting moves outside a phase, ending a phase twice)
/// is a programmer error and panics instead of producing one of these.
#[derive(Debug, Error)]
pub enum SwapForgeError {
    /// A move factory was configured against variables it cannot handle.
    #[error(
        "The entity type ({entity_type})'s variable ({variable}) is chained \
         and can therefore not use the move factory ({move_factory})"
    )]
    Config {
        entity_type: &'static str,
        variable: &'static str,
        move_factory: &'static str,
    },

    /// The working solution and the score director disagree about an entity.
    #[error(
        "Integrity fault: entity {entity_type}#{entity_index} has no matching \
         fact handle in the score director"
    )]
    Integrity {
        entity_type: &'static str,
        entity_index: usize,
    },

    /// Error in domain model definition
    #[error("Domain model error: {0}")]
    DomainModel(String),
}

impl SwapForgeError {
    /// Returns true for errors that indicate an invalid configuration.
    pub fn is_config(&self) -> bool {
        matches!(self, SwapForgeError::Config { .. })
    }

    /// Returns true for errors that indicate solution/director desynchronisation.
    pub fn is_integrity(&self) -> bool {
        matches!(self, SwapForgeError::Integrity { .. })
    }
}

/// Result type alias for SwapForge operations
pub type Result<T> = std::result::Result<T, SwapForgeError>;
