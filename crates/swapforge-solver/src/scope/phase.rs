//! Phase-level scope.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use swapforge_config::EnvironmentMode;
use swapforge_core::domain::{PlanningSolution, SolutionDescriptor};
use swapforge_core::Result;
use swapforge_scoring::ScoreDirector;

use crate::heuristic::r#move::Move;

// Process-wide so two scopes never share an id, even across solver runs.
static NEXT_PHASE_ID: AtomicU64 = AtomicU64::new(1);

/// Scope for a single phase of solving.
///
/// Every scope gets a unique phase id. Factories remember the id they were
/// started with and refuse requests made through any other scope, so a move
/// list cached in one phase can never leak into the next.
///
/// # Type Parameters
/// * `'a` - Lifetime of the score director borrow
/// * `S` - The planning solution type
/// * `D` - The score director type
pub struct PhaseScope<'a, S: PlanningSolution, D: ScoreDirector<S>> {
    score_director: &'a mut D,
    phase_id: u64,
    phase_index: usize,
    environment_mode: EnvironmentMode,
    step_count: u64,
    move_count: u64,
    start_time: Instant,
    _phantom: PhantomData<fn() -> S>,
}

impl<'a, S: PlanningSolution, D: ScoreDirector<S>> PhaseScope<'a, S, D> {
    /// Creates a new phase scope.
    pub fn new(score_director: &'a mut D, phase_index: usize) -> Self {
        Self {
            score_director,
            phase_id: NEXT_PHASE_ID.fetch_add(1, Ordering::Relaxed),
            phase_index,
            environment_mode: EnvironmentMode::default(),
            step_count: 0,
            move_count: 0,
            start_time: Instant::now(),
            _phantom: PhantomData,
        }
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, environment_mode: EnvironmentMode) -> Self {
        self.environment_mode = environment_mode;
        self
    }

    /// Returns the unique id of this phase.
    pub fn phase_id(&self) -> u64 {
        self.phase_id
    }

    /// Returns the phase index.
    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    /// Returns the environment mode.
    pub fn environment_mode(&self) -> EnvironmentMode {
        self.environment_mode
    }

    /// Returns the elapsed time for this phase.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the step count for this phase.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Increments the phase step count.
    pub fn increment_step_count(&mut self) -> u64 {
        self.step_count += 1;
        self.step_count
    }

    /// Returns the number of moves executed through this scope.
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Returns a reference to the score director.
    pub fn score_director(&self) -> &D {
        self.score_director
    }

    /// Returns a mutable reference to the score director.
    pub fn score_director_mut(&mut self) -> &mut D {
        self.score_director
    }

    /// Returns the working solution.
    pub fn working_solution(&self) -> &S {
        self.score_director.working_solution()
    }

    /// Returns the shared solution descriptor.
    pub fn solution_descriptor(&self) -> &Arc<SolutionDescriptor> {
        self.score_director.solution_descriptor()
    }

    /// Executes a move against the score director.
    ///
    /// In assert environment modes the director's consistency is checked
    /// after the move. Full assert mode also checks it before the move.
    pub fn do_move<M: Move>(&mut self, m: &M) -> Result<()> {
        if self.environment_mode.is_fully_asserted() {
            self.score_director.assert_consistent();
        }
        m.do_move::<S, D>(self.score_director)?;
        self.move_count += 1;
        if self.environment_mode.is_asserted() {
            self.score_director.assert_consistent();
        }
        Ok(())
    }
}

impl<S: PlanningSolution, D: ScoreDirector<S>> std::fmt::Debug for PhaseScope<'_, S, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhaseScope")
            .field("phase_id", &self.phase_id)
            .field("phase_index", &self.phase_index)
            .field("environment_mode", &self.environment_mode)
            .field("step_count", &self.step_count)
            .finish()
    }
}
