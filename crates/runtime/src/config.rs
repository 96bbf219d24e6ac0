//! Run configuration structures and loaders.
use std::env;

use maze_core::{AgentConfig, Cell, Grid};
use serde::{Deserialize, Serialize};

/// Parameters for one simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub agent: AgentConfig,

    /// Starting cell of the agent.
    pub start: Cell,

    /// Exit cell. Defaults to the bottom-right corner of the maze.
    pub exit: Option<Cell>,

    /// Hard cap on ticks. Defaults to `TICKS_PER_CELL` times the maze area.
    pub max_ticks: Option<u64>,
}

impl SimulationConfig {
    pub const TICKS_PER_CELL: u64 = 40;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MAZE_SIGHT_RADIUS` - Sight radius in cells (default: 2)
    /// - `MAZE_HEURISTIC_WEIGHT` - A* heuristic weight, >= 1.0 (default: 1.0)
    /// - `MAZE_MAX_TICKS` - Tick cap (default: 40 x maze area)
    /// - `MAZE_START` - Start cell as `row,col` (default: `0,0`)
    /// - `MAZE_EXIT` - Exit cell as `row,col` (default: bottom-right)
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Applies any `MAZE_*` environment variables on top of `self`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(radius) = read_env::<u32>("MAZE_SIGHT_RADIUS") {
            self.agent.sight_radius = radius;
        }

        if let Some(weight) = read_env::<f64>("MAZE_HEURISTIC_WEIGHT") {
            self.agent.heuristic_weight = weight;
        }

        if let Some(max_ticks) = read_env::<u64>("MAZE_MAX_TICKS") {
            self.max_ticks = Some(max_ticks);
        }

        if let Some(start) = read_env::<Cell>("MAZE_START") {
            self.start = start;
        }

        if let Some(exit) = read_env::<Cell>("MAZE_EXIT") {
            self.exit = Some(exit);
        }

        self
    }

    /// The exit cell for `maze`.
    pub fn exit_for(&self, maze: &Grid) -> Cell {
        self.exit.unwrap_or_else(|| maze.bottom_right())
    }

    /// The tick cap for `maze`.
    pub fn tick_limit_for(&self, maze: &Grid) -> u64 {
        self.max_ticks
            .unwrap_or_else(|| maze.len() as u64 * Self::TICKS_PER_CELL)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            agent: AgentConfig::default(),
            start: Cell::ORIGIN,
            exit: None,
            max_ticks: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
