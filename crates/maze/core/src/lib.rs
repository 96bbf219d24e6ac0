//! Deterministic maze rules shared by the runtime and offline tools.
//!
//! `maze-core` defines the grid model, the two search procedures the agent
//! plans with, and the agent's belief map and memory. Everything here is a
//! pure function of its inputs: no I/O, no clocks, no logging.
//!
//! - [`grid`]: [`Cell`], [`TileKind`], and the rectangular [`Grid`]
//! - [`search`]: A* over a tile grid and breadth-first frontier search
//! - [`agent`]: [`Agent`] state, [`AgentMemory`] slots, and the sight-radius
//!   sensor that reveals ground truth
pub mod agent;
pub mod config;
pub mod error;
pub mod grid;
pub mod search;

pub use agent::{Agent, AgentMemory, GoalSlot, nearest_item_in_sight};
pub use config::{AgentConfig, ConfigError};
pub use error::{ErrorSeverity, MazeError};
pub use grid::{Cell, Grid, GridError, ParseCellError, TileKind};
pub use search::{
    Heuristic, PathError, PathPlan, find_path, nearest_frontier, octile_distance,
};
