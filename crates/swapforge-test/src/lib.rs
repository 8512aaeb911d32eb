//! Shared test fixtures for SwapForge crates.
//!
//! This crate provides data types and descriptor builders for testing.
//! It only depends on `swapforge-core` so every other crate can use it as a
//! dev-dependency without cycles.
//!
//! - [`task`] - Tasks with plain planning variables
//! - [`route`] - Visits with a chained planning variable
//! - [`mixed`] - A solution mixing several entity classes
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! swapforge-test = { workspace = true }
//! ```

pub mod mixed;
pub mod route;
pub mod task;

pub use mixed::{Meeting, MixedSolution};
pub use route::{RouteSolution, Visit};
pub use task::{Task, TaskSolution};
