//! SwapForge - generic swap neighborhoods for local search in Rust
//!
//! Describe your domain once with descriptors, then let the generic swap
//! factory enumerate every pairwise exchange of same-class entities.
//!
//! # Example
//!
//! ```rust
//! use std::any::TypeId;
//! use swapforge::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! struct Lesson { room: Option<u8> }
//! impl PlanningEntity for Lesson {}
//!
//! #[derive(Clone, Debug)]
//! struct Timetable { lessons: Vec<Lesson> }
//! impl PlanningSolution for Timetable {}
//!
//! fn lessons(t: &Timetable) -> &Vec<Lesson> { &t.lessons }
//! fn lessons_mut(t: &mut Timetable) -> &mut Vec<Lesson> { &mut t.lessons }
//!
//! let descriptor = SolutionDescriptor::new("Timetable", TypeId::of::<Timetable>()).with_entity(
//!     EntityDescriptor::new("Lesson", TypeId::of::<Lesson>(), "lessons")
//!         .with_extractor(Box::new(TypedEntityExtractor::new(lessons, lessons_mut)))
//!         .with_variable(VariableDescriptor::plain(
//!             "room",
//!             TypedVariableAccessor::new(
//!                 |l: &Lesson| l.room,
//!                 |l: &mut Lesson, v: Option<u8>| l.room = v,
//!             ),
//!         )),
//! );
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     [[phases]]
//!     [[phases.move_factories]]
//!     type = "generic_swap_move_factory"
//!     entity_class = "Lesson"
//! "#).unwrap();
//! let mut factories = build_phase_move_factories(&config.phases[0], &descriptor).unwrap();
//!
//! let timetable = Timetable { lessons: (0..3).map(|r| Lesson { room: Some(r) }).collect() };
//! let mut director = WorkingMemoryDirector::new(timetable, descriptor).unwrap();
//! let mut scope = PhaseScope::new(&mut director, 0);
//!
//! let factory = &mut factories[0];
//! factory.phase_started(&scope);
//! let moves = factory.move_list(&scope).unwrap();
//! assert_eq!(moves.len(), 3);
//!
//! scope.do_move(&moves[0]).unwrap();
//! assert_eq!(scope.working_solution().lessons[0].room, Some(1));
//! factory.phase_ended(&scope);
//! ```

pub mod console;

// Errors
pub use swapforge_core::{Result, SwapForgeError};

// Domain model
pub use swapforge_core::domain::{
    EntityDescriptor, EntityExtractor, EntityRef, PlanningEntity, PlanningSolution,
    SolutionDescriptor, TypedEntityExtractor, TypedVariableAccessor, VariableAccessor,
    VariableDescriptor, VariableKind,
};

// Score director contract
pub use swapforge_scoring::{FactHandle, ScoreDirector, WorkingMemoryDirector};

// Moves and move factories
pub use swapforge_solver::builder::ConfiguredMoveFactory;
pub use swapforge_solver::{
    build_move_factory, build_phase_move_factories, CachedMoveFactory, GenericSwapMove,
    GenericSwapMoveFactory, Move, MoveFactory, MoveListFactory, PhaseScope,
};

// Configuration
pub use swapforge_config::{
    CacheType, ConfigError, EnvironmentMode, GenericSwapMoveConfig, LocalSearchConfig,
    MoveFactoryConfig, SolverConfig,
};

pub mod prelude {
    pub use super::{
        build_phase_move_factories, EntityDescriptor, Move, MoveFactory, PhaseScope,
        PlanningEntity, PlanningSolution, ScoreDirector, SolutionDescriptor, SolverConfig,
        TypedEntityExtractor, TypedVariableAccessor, VariableDescriptor, WorkingMemoryDirector,
    };
}
