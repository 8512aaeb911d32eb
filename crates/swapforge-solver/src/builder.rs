//! Builds move factories from configuration.
//!
//! Configuration is validated against the solution descriptor here, so a
//! misspelled entity class fails at setup instead of silently producing an
//! empty neighborhood.

use swapforge_config::{ConfigError, LocalSearchConfig, MoveFactoryConfig};
use swapforge_core::domain::SolutionDescriptor;

use crate::heuristic::factory::{CachedMoveFactory, GenericSwapMoveFactory};
use crate::heuristic::r#move::GenericSwapMove;

/// A move factory built from [`MoveFactoryConfig`].
pub type ConfiguredMoveFactory = CachedMoveFactory<GenericSwapMove, GenericSwapMoveFactory>;

/// Builds one move factory from its configuration.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] if the configured entity class is not an
/// entity of the solution.
pub fn build_move_factory(
    config: &MoveFactoryConfig,
    solution_descriptor: &SolutionDescriptor,
) -> Result<ConfiguredMoveFactory, ConfigError> {
    match config {
        MoveFactoryConfig::GenericSwapMoveFactory(swap) => {
            let factory = match &swap.entity_class {
                Some(class) => {
                    if solution_descriptor.find_entity_descriptor(class).is_none() {
                        return Err(ConfigError::Invalid(format!(
                            "entity_class ({class}) is not a planning entity of solution ({})",
                            solution_descriptor.type_name
                        )));
                    }
                    GenericSwapMoveFactory::for_entity_class(class.as_str())
                }
                None => GenericSwapMoveFactory::new(),
            };
            Ok(CachedMoveFactory::new(factory).with_cache_type(swap.cache_type))
        }
    }
}

/// Builds every move factory of a local search phase.
///
/// A phase without configured factories gets a single generic swap factory.
pub fn build_phase_move_factories(
    config: &LocalSearchConfig,
    solution_descriptor: &SolutionDescriptor,
) -> Result<Vec<ConfiguredMoveFactory>, ConfigError> {
    if config.move_factories.is_empty() {
        return Ok(vec![CachedMoveFactory::new(GenericSwapMoveFactory::new())]);
    }
    config
        .move_factories
        .iter()
        .map(|factory| build_move_factory(factory, solution_descriptor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use swapforge_config::{CacheType, GenericSwapMoveConfig, SolverConfig};
    use swapforge_test::mixed::create_plain_mixed_descriptor;

    #[test]
    fn test_build_from_toml() {
        let config = SolverConfig::from_toml_str(
            r#"
            [[phases]]
            [[phases.move_factories]]
            type = "generic_swap_move_factory"
            entity_class = "Meeting"
            cache_type = "step"

            [[phases.move_factories]]
            type = "generic_swap_move_factory"
            "#,
        )
        .unwrap();

        let descriptor = create_plain_mixed_descriptor();
        let factories = build_phase_move_factories(&config.phases[0], &descriptor).unwrap();
        assert_eq!(factories.len(), 2);
        assert_eq!(factories[0].inner().entity_class(), Some("Meeting"));
        assert_eq!(factories[0].cache_type(), CacheType::Step);
        assert_eq!(factories[1].inner().entity_class(), None);
        assert_eq!(factories[1].cache_type(), CacheType::Phase);
    }

    #[test]
    fn test_unknown_entity_class_is_invalid() {
        let config = MoveFactoryConfig::GenericSwapMoveFactory(GenericSwapMoveConfig {
            entity_class: Some("Lesson".to_string()),
            cache_type: CacheType::Phase,
        });

        let err = build_move_factory(&config, &create_plain_mixed_descriptor()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("Lesson")));
    }

    #[test]
    fn test_empty_phase_gets_default_factory() {
        let descriptor = create_plain_mixed_descriptor();
        let factories =
            build_phase_move_factories(&LocalSearchConfig::default(), &descriptor).unwrap();
        assert_eq!(factories.len(), 1);
        assert_eq!(factories[0].inner(), &GenericSwapMoveFactory::new());
        assert!(!factories[0].is_phase_active());
    }
}
