//! SwapForge Core - Core types and traits for move-based local search
//!
//! This crate provides the fundamental abstractions for SwapForge:
//! - Domain traits for defining planning problems
//! - Descriptor types for runtime metadata
//! - Variable accessors resolved once at configuration time
//! - The error taxonomy shared by every other crate

pub mod domain;
pub mod error;

pub use domain::{PlanningEntity, PlanningSolution};
pub use error::{Result, SwapForgeError};
