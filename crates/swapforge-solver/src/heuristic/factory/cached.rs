//! Phase-scoped caching move factory.
//!
//! Builds the neighborhood once per phase (or once per step) and serves the
//! same list to every request in between.

use std::fmt::{self, Debug};
use std::sync::Arc;

use swapforge_config::CacheType;
use swapforge_core::domain::{PlanningSolution, SolutionDescriptor};
use swapforge_core::Result;
use swapforge_scoring::ScoreDirector;
use tracing::{debug, trace};

use super::{MoveFactory, MoveListFactory};
use crate::heuristic::r#move::Move;
use crate::scope::PhaseScope;

// Everything that lives exactly as long as one phase.
struct PhaseState<M> {
    phase_id: u64,
    solution_descriptor: Arc<SolutionDescriptor>,
    moves: Option<Vec<M>>,
}

/// Caches the move list of an inner [`MoveListFactory`] for one phase.
///
/// The first `move_list` call of a phase runs the inner enumeration and
/// stores the result; later calls return the stored list unchanged. The
/// cache is dropped at `phase_ended`, and with [`CacheType::Step`] also at
/// every `step_ended`.
///
/// # Panics
///
/// Lifecycle misuse panics: requesting moves outside a phase, using a scope
/// other than the one the phase was started with, starting a phase twice or
/// ending a phase that is not active.
pub struct CachedMoveFactory<M, F> {
    inner: F,
    cache_type: CacheType,
    state: Option<PhaseState<M>>,
}

impl<M, F> CachedMoveFactory<M, F> {
    /// Creates a phase-cached factory wrapping the given move list factory.
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            cache_type: CacheType::Phase,
            state: None,
        }
    }

    /// Sets how long a built move list stays cached.
    pub fn with_cache_type(mut self, cache_type: CacheType) -> Self {
        self.cache_type = cache_type;
        self
    }

    /// Returns the cache type.
    pub fn cache_type(&self) -> CacheType {
        self.cache_type
    }

    /// Returns the inner factory.
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Returns true between `phase_started` and `phase_ended`.
    pub fn is_phase_active(&self) -> bool {
        self.state.is_some()
    }

    /// Returns the size of the cached move list, if one is cached.
    pub fn cached_move_count(&self) -> Option<usize> {
        self.state.as_ref()?.moves.as_ref().map(Vec::len)
    }
}

// Returns the state of the active phase, panicking on lifecycle misuse.
fn active_state<'s, M>(
    state: &'s mut Option<PhaseState<M>>,
    phase_id: u64,
    operation: &str,
) -> &'s mut PhaseState<M> {
    if let Some(active) = state.as_ref().map(|state| state.phase_id) {
        assert!(
            active == phase_id,
            "{operation} called with phase ({phase_id}) but the active phase is ({active})"
        );
    }
    match state.as_mut() {
        Some(state) => state,
        None => panic!("{operation} called without an active phase; call phase_started first"),
    }
}

impl<S, D, M, F> MoveFactory<S, D> for CachedMoveFactory<M, F>
where
    S: PlanningSolution,
    D: ScoreDirector<S>,
    M: Move,
    F: MoveListFactory<S, D, Move = M>,
{
    type Move = M;

    fn phase_started(&mut self, phase_scope: &PhaseScope<'_, S, D>) {
        if let Some(state) = &self.state {
            panic!(
                "phase_started called for phase ({}) while phase ({}) is still active",
                phase_scope.phase_id(),
                state.phase_id
            );
        }
        self.state = Some(PhaseState {
            phase_id: phase_scope.phase_id(),
            solution_descriptor: Arc::clone(phase_scope.solution_descriptor()),
            moves: None,
        });
        debug!(
            event = "phase_started",
            factory = self.inner.name(),
            phase_index = phase_scope.phase_index(),
        );
    }

    fn step_ended(&mut self, phase_scope: &PhaseScope<'_, S, D>) {
        let state = active_state(&mut self.state, phase_scope.phase_id(), "step_ended");
        if self.cache_type == CacheType::Step {
            state.moves = None;
        }
    }

    fn phase_ended(&mut self, phase_scope: &PhaseScope<'_, S, D>) {
        active_state(&mut self.state, phase_scope.phase_id(), "phase_ended");
        self.state = None;
        debug!(
            event = "phase_ended",
            factory = self.inner.name(),
            phase_index = phase_scope.phase_index(),
            duration_ms = phase_scope.elapsed().as_millis() as u64,
        );
    }

    fn move_list(&mut self, phase_scope: &PhaseScope<'_, S, D>) -> Result<&[M]> {
        let state = active_state(&mut self.state, phase_scope.phase_id(), "move_list");
        let moves = match state.moves.take() {
            Some(moves) => {
                trace!(event = "move_list_cached", moves = moves.len());
                moves
            }
            None => {
                let moves = self
                    .inner
                    .create_move_list(&state.solution_descriptor, phase_scope.score_director())?;
                debug!(
                    event = "move_list_created",
                    factory = self.inner.name(),
                    phase_index = phase_scope.phase_index(),
                    moves = moves.len(),
                );
                moves
            }
        };
        Ok(state.moves.insert(moves).as_slice())
    }
}

impl<M, F: Debug> Debug for CachedMoveFactory<M, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedMoveFactory")
            .field("inner", &self.inner)
            .field("cache_type", &self.cache_type)
            .field("phase_active", &self.is_phase_active())
            .field("cached_moves", &self.cached_move_count())
            .finish()
    }
}
