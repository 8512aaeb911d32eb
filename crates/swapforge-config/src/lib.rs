//! Configuration system for SwapForge.
//!
//! Load move factory configuration from TOML or YAML to choose
//! neighborhoods and cache scopes without code changes.
//!
//! # Examples
//!
//! ```
//! use swapforge_config::{CacheType, MoveFactoryConfig, SolverConfig};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     environment_mode = "fast_assert"
//!
//!     [[phases]]
//!     [[phases.move_factories]]
//!     type = "generic_swap_move_factory"
//!     entity_class = "Task"
//! "#).unwrap();
//!
//! let MoveFactoryConfig::GenericSwapMoveFactory(swap) = &config.phases[0].move_factories[0];
//! assert_eq!(swap.entity_class.as_deref(), Some("Task"));
//! assert_eq!(swap.cache_type, CacheType::Phase);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use swapforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! assert!(config.phases.is_empty());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Environment mode affecting assertions.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Local search phase configurations, in execution order.
    #[serde(default)]
    pub phases: Vec<LocalSearchConfig>,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Adds a phase configuration.
    pub fn with_phase(mut self, phase: LocalSearchConfig) -> Self {
        self.phases.push(phase);
        self
    }
}

/// Environment mode affecting solver behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// No consistency checks.
    #[default]
    NoAssert,

    /// The score director is checked after every successful move.
    FastAssert,

    /// The score director is checked before and after every move.
    FullAssert,
}

impl EnvironmentMode {
    /// Returns true if moves should be followed by consistency assertions.
    pub fn is_asserted(&self) -> bool {
        matches!(self, EnvironmentMode::FastAssert | EnvironmentMode::FullAssert)
    }

    /// Returns true if moves should also be preceded by consistency assertions.
    pub fn is_fully_asserted(&self) -> bool {
        matches!(self, EnvironmentMode::FullAssert)
    }
}

/// Local search phase configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LocalSearchConfig {
    /// Move factories providing this phase's neighborhood.
    #[serde(default)]
    pub move_factories: Vec<MoveFactoryConfig>,
}

impl LocalSearchConfig {
    /// Adds a move factory configuration.
    pub fn with_move_factory(mut self, factory: MoveFactoryConfig) -> Self {
        self.move_factories.push(factory);
        self
    }
}

/// Move factory configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MoveFactoryConfig {
    /// Pairwise exchange of all planning variables between two entities.
    GenericSwapMoveFactory(GenericSwapMoveConfig),
}

impl Default for MoveFactoryConfig {
    fn default() -> Self {
        MoveFactoryConfig::GenericSwapMoveFactory(GenericSwapMoveConfig::default())
    }
}

/// Generic swap move factory configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GenericSwapMoveConfig {
    /// Entity class filter. When unset every entity class is swapped.
    #[serde(default)]
    pub entity_class: Option<String>,

    /// How long a built move list stays cached.
    #[serde(default)]
    pub cache_type: CacheType,
}

/// Lifetime of a cached move list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheType {
    /// Build once per phase.
    #[default]
    Phase,

    /// Rebuild after every step.
    Step,
}
