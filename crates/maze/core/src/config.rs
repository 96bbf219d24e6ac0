//! Agent tunables.

use crate::error::{ErrorSeverity, MazeError};
use crate::search::Heuristic;

/// Perception and planning parameters for the agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Chebyshev radius of the window revealed around the agent each tick.
    pub sight_radius: u32,

    /// Multiplier applied to the octile heuristic.
    ///
    /// `1.0` is admissible and yields least-cost paths. Larger values expand
    /// fewer nodes but may return paths that are longer than optimal.
    pub heuristic_weight: f64,
}

impl AgentConfig {
    pub const DEFAULT_SIGHT_RADIUS: u32 = 2;
    pub const DEFAULT_HEURISTIC_WEIGHT: f64 = 1.0;

    pub fn new() -> Self {
        Self {
            sight_radius: Self::DEFAULT_SIGHT_RADIUS,
            heuristic_weight: Self::DEFAULT_HEURISTIC_WEIGHT,
        }
    }

    pub fn with_sight_radius(mut self, sight_radius: u32) -> Self {
        self.sight_radius = sight_radius;
        self
    }

    pub fn with_heuristic_weight(mut self, heuristic_weight: f64) -> Self {
        self.heuristic_weight = heuristic_weight;
        self
    }

    /// Checks the invariants the planner relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeuristicWeight`] if the weight is not a
    /// finite number `>= 1.0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.heuristic().map(|_| ())
    }

    /// The planner heuristic described by `heuristic_weight`.
    pub fn heuristic(&self) -> Result<Heuristic, ConfigError> {
        Heuristic::weighted(self.heuristic_weight)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("heuristic weight must be a finite number >= 1.0, got {0}")]
    InvalidHeuristicWeight(f64),
}

impl MazeError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidHeuristicWeight(_) => "CONFIG_INVALID_HEURISTIC_WEIGHT",
        }
    }
}
