//! Generic swap move factory.
//!
//! Enumerates every unordered pair of same-class planning entities and
//! produces one [`GenericSwapMove`] per pair.

use std::any::Any;
use std::sync::Arc;

use swapforge_core::domain::{EntityRef, PlanningSolution, SolutionDescriptor};
use swapforge_core::{Result, SwapForgeError};
use swapforge_scoring::{FactHandle, ScoreDirector};
use tracing::{debug, warn};

use super::MoveListFactory;
use crate::heuristic::r#move::GenericSwapMove;

/// Builds the full pairwise-exchange neighborhood.
///
/// For entities `e0..en` in solution order, yields `swap(ei, ej)` for every
/// `i < j` where both have the same runtime class, so no entity is paired
/// with itself and no pair appears twice. The output order depends only on
/// the entity order.
///
/// Chained variables cannot be swapped blindly. If any processed entity
/// class has one, the whole enumeration fails with a configuration error.
///
/// # Example
///
/// ```
/// use swapforge_solver::{CachedMoveFactory, GenericSwapMove, GenericSwapMoveFactory};
///
/// // Swap every entity class, building the list once per phase
/// let all = CachedMoveFactory::<GenericSwapMove, _>::new(GenericSwapMoveFactory::new());
/// assert!(!all.is_phase_active());
///
/// // Only swap tasks
/// let tasks = GenericSwapMoveFactory::for_entity_class("Task");
/// assert_eq!(tasks.entity_class(), Some("Task"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericSwapMoveFactory {
    entity_class: Option<String>,
}

impl GenericSwapMoveFactory {
    /// Creates a factory swapping entities of every class.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory that only processes entities of the named class.
    pub fn for_entity_class(entity_class: impl Into<String>) -> Self {
        Self {
            entity_class: Some(entity_class.into()),
        }
    }

    /// Returns the entity class filter, if any.
    pub fn entity_class(&self) -> Option<&str> {
        self.entity_class.as_deref()
    }

    fn accepts(&self, entity: &EntityRef) -> bool {
        self.entity_class
            .as_deref()
            .map_or(true, |class| class == entity.type_name)
    }
}

fn resolve_handle<S, D>(score_director: &D, entity: &EntityRef) -> Result<FactHandle>
where
    S: PlanningSolution,
    D: ScoreDirector<S>,
{
    score_director.fact_handle(entity).ok_or_else(|| {
        warn!(event = "integrity_fault", entity = %entity);
        SwapForgeError::Integrity {
            entity_type: entity.type_name,
            entity_index: entity.entity_index,
        }
    })
}

impl<S, D> MoveListFactory<S, D> for GenericSwapMoveFactory
where
    S: PlanningSolution,
    D: ScoreDirector<S>,
{
    type Move = GenericSwapMove;

    fn name(&self) -> &'static str {
        "GenericSwapMoveFactory"
    }

    fn create_move_list(
        &self,
        solution_descriptor: &SolutionDescriptor,
        score_director: &D,
    ) -> Result<Vec<GenericSwapMove>> {
        let entities: Vec<EntityRef> = solution_descriptor
            .entity_list(score_director.working_solution() as &dyn Any)?
            .into_iter()
            .filter(|entity| self.accepts(entity))
            .collect();

        let mut moves = Vec::new();
        for (i, left) in entities.iter().enumerate() {
            let left_descriptor = solution_descriptor
                .entity_descriptor(left.type_id)
                .ok_or_else(|| {
                    SwapForgeError::DomainModel(format!(
                        "no entity descriptor for entity class ({})",
                        left.type_name
                    ))
                })?;
            if let Some(chained) = left_descriptor.first_chained_variable() {
                warn!(
                    event = "chained_variable_rejected",
                    entity_type = left_descriptor.type_name,
                    variable = chained.name,
                );
                return Err(SwapForgeError::Config {
                    entity_type: left_descriptor.type_name,
                    variable: chained.name,
                    move_factory: <Self as MoveListFactory<S, D>>::name(self),
                });
            }

            let variable_descriptors = left_descriptor.variable_descriptors();
            let left_handle = resolve_handle::<S, D>(score_director, left)?;
            for right in &entities[i + 1..] {
                if !left.same_class(right) {
                    continue;
                }
                let right_handle = resolve_handle::<S, D>(score_director, right)?;
                moves.push(GenericSwapMove::new(
                    Arc::clone(variable_descriptors),
                    *left,
                    left_handle,
                    *right,
                    right_handle,
                ));
            }
        }

        debug!(
            event = "swap_neighborhood_built",
            entities = entities.len(),
            moves = moves.len(),
        );
        Ok(moves)
    }
}
