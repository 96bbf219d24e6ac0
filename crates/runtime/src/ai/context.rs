//! Blackboard shared by all decision nodes.

use maze_core::{Agent, AgentConfig, Cell, Grid, Heuristic, TileKind};

/// Everything a node may read or mutate during one tree evaluation.
///
/// The context owns the ground-truth maze because pickups rewrite it. Nodes
/// must plan against [`Agent::belief`] and only consult `maze` through the
/// sight-radius sensor.
#[derive(Clone, Debug)]
pub struct AgentContext {
    /// Ground truth.
    pub maze: Grid,

    pub agent: Agent,

    pub config: AgentConfig,

    /// Resolved once from `config.heuristic_weight`.
    pub heuristic: Heuristic,
}

impl AgentContext {
    pub fn new(maze: Grid, agent: Agent, config: AgentConfig, heuristic: Heuristic) -> Self {
        Self {
            maze,
            agent,
            config,
            heuristic,
        }
    }

    /// Copies ground truth into the belief map around the agent.
    pub fn refresh_belief(&mut self) {
        self.agent
            .update_exploration_map(&self.maze, self.config.sight_radius);
    }

    /// Number of items still lying in the maze.
    pub fn items_remaining(&self) -> usize {
        self.maze.count(TileKind::Item)
    }

    pub fn position(&self) -> Cell {
        self.agent.position()
    }
}
