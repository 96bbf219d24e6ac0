//! The simulation context object and its tick loop.

use behavior_tree::Status;
use maze_core::{Agent, AgentMemory, Cell, Grid, GridError, TileKind};
use serde::Serialize;

use crate::ai::{AgentContext, BehaviorTree, presets};
use crate::config::SimulationConfig;
use crate::error::{EndpointRole, Result, RuntimeError};
use crate::telemetry::{TelemetrySink, TickRecord};

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RunOutcome {
    /// The agent stood on the exit.
    Escaped,
    /// The tick cap was reached first.
    TickLimit,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub ticks: u64,
    pub position: Cell,
    pub items_collected: u32,
    pub explored_percent: f64,
}

/// One agent in one maze.
///
/// Each [`tick`](Self::tick) refreshes the belief map around the agent and
/// evaluates the decision tree exactly once, which moves the agent at most one
/// cell. All run state lives here; nothing is global.
pub struct Simulation {
    context: AgentContext,
    tree: BehaviorTree,
    end_point: Cell,
    tick_limit: u64,
    ticks: u64,
    last_status: Option<Status>,
}

impl Simulation {
    /// Builds a run driven by [`presets::maze_runner`].
    pub fn new(maze: Grid, config: SimulationConfig) -> Result<Self> {
        Self::with_tree(maze, config, presets::maze_runner())
    }

    /// Builds a run driven by a custom tree.
    ///
    /// # Errors
    ///
    /// Fails before any tick if the heuristic weight is invalid, the maze
    /// contains Unknown tiles, or the start or exit cell is off-grid or a
    /// wall.
    pub fn with_tree(maze: Grid, config: SimulationConfig, tree: BehaviorTree) -> Result<Self> {
        let heuristic = config.agent.heuristic()?;

        if let Some((cell, _)) = maze.iter().find(|&(_, kind)| kind == TileKind::Unknown) {
            return Err(GridError::UnknownInGroundTruth(cell).into());
        }

        let end_point = config.exit_for(&maze);
        validate_endpoint(&maze, EndpointRole::Start, config.start)?;
        validate_endpoint(&maze, EndpointRole::Exit, end_point)?;

        let tick_limit = config.tick_limit_for(&maze);
        tracing::info!(
            rows = maze.rows(),
            cols = maze.cols(),
            start = %config.start,
            exit = %end_point,
            items = maze.count(TileKind::Item),
            tick_limit,
            "simulation ready"
        );
        if !heuristic.is_admissible() {
            tracing::info!(
                weight = heuristic.weight(),
                "weighted heuristic in use, paths may be longer than optimal"
            );
        }

        let agent = Agent::new(config.start, &maze)
            .with_memory(AgentMemory::with_end_point(end_point));

        Ok(Self {
            context: AgentContext::new(maze, agent, config.agent, heuristic),
            tree,
            end_point,
            tick_limit,
            ticks: 0,
            last_status: None,
        })
    }

    /// Runs one tick and returns its telemetry record.
    pub fn tick(&mut self) -> TickRecord {
        self.context.refresh_belief();
        let status = self.tree.tick(&mut self.context);

        let record = TickRecord::capture(self.ticks, &self.context, status);
        tracing::trace!(
            tick = self.ticks,
            position = %self.context.position(),
            action = %record.action,
            %status,
            "tick"
        );

        self.ticks += 1;
        self.last_status = Some(status);
        record
    }

    /// Ticks until the agent reaches the exit or the tick cap is hit.
    ///
    /// # Errors
    ///
    /// Only sink failures are errors; planning failures are absorbed by the
    /// tree.
    pub fn run<S: TelemetrySink + ?Sized>(&mut self, sink: &mut S) -> Result<RunSummary> {
        let outcome = loop {
            if self.is_finished() {
                break RunOutcome::Escaped;
            }
            if self.ticks >= self.tick_limit {
                tracing::warn!(
                    ticks = self.ticks,
                    position = %self.context.position(),
                    "tick limit reached before escaping"
                );
                break RunOutcome::TickLimit;
            }

            let record = self.tick();
            sink.record(&record)?;
        };
        sink.flush()?;

        let summary = self.summary(outcome);
        tracing::info!(
            outcome = %summary.outcome,
            ticks = summary.ticks,
            items = summary.items_collected,
            explored_percent = summary.explored_percent,
            "run finished"
        );
        Ok(summary)
    }

    pub fn is_finished(&self) -> bool {
        self.context.position() == self.end_point
    }

    pub fn summary(&self, outcome: RunOutcome) -> RunSummary {
        RunSummary {
            outcome,
            ticks: self.ticks,
            position: self.context.position(),
            items_collected: self.context.agent.items_collected(),
            explored_percent: self.context.agent.explored_percent(),
        }
    }

    /// Belief map as text with the agent drawn as `@`.
    pub fn render_belief(&self) -> String {
        self.context
            .agent
            .belief()
            .render(Some((self.context.position(), '@')))
    }

    pub fn context(&self) -> &AgentContext {
        &self.context
    }

    /// Mutable access for scripted scenarios.
    pub fn context_mut(&mut self) -> &mut AgentContext {
        &mut self.context
    }

    pub fn agent(&self) -> &Agent {
        &self.context.agent
    }

    pub fn maze(&self) -> &Grid {
        &self.context.maze
    }

    pub fn end_point(&self) -> Cell {
        self.end_point
    }

    pub fn tick_limit(&self) -> u64 {
        self.tick_limit
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn last_status(&self) -> Option<Status> {
        self.last_status
    }
}

fn validate_endpoint(maze: &Grid, role: EndpointRole, cell: Cell) -> Result<()> {
    match maze.get(cell) {
        None => Err(RuntimeError::EndpointOutOfBounds {
            role,
            cell,
            rows: maze.rows(),
            cols: maze.cols(),
        }),
        Some(TileKind::Wall) => Err(RuntimeError::EndpointBlocked { role, cell }),
        Some(_) => Ok(()),
    }
}
