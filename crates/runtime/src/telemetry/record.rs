use behavior_tree::Status;
use maze_core::Cell;
use serde::{Serialize, Serializer};

use crate::ai::AgentContext;

/// High-level activity shown in telemetry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, strum::Display, strum::AsRefStr)]
pub enum ActionLabel {
    Escaping,
    MoveToItem,
    Exploring,
    #[serde(rename = "Idle/Deciding")]
    #[strum(serialize = "Idle/Deciding")]
    Idle,
}

impl ActionLabel {
    /// Derives the label and its target from agent memory.
    ///
    /// Once the maze holds no items the agent is reported as escaping,
    /// whatever it is actually doing.
    pub fn describe(ctx: &AgentContext) -> (Self, Option<Cell>) {
        let memory = &ctx.agent.memory;
        if ctx.items_remaining() == 0 {
            (Self::Escaping, memory.end_point)
        } else if let Some(item) = memory.target_item {
            (Self::MoveToItem, Some(item))
        } else if let Some(frontier) = memory.exploration_target {
            (Self::Exploring, Some(frontier))
        } else {
            (Self::Idle, None)
        }
    }
}

/// Post-tick snapshot of the agent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TickRecord {
    /// Zero-based tick index.
    pub tick: u64,
    pub row: i32,
    pub col: i32,
    pub action: ActionLabel,
    pub target: Option<Cell>,
    /// Result of the root node for this tick.
    #[serde(serialize_with = "serialize_status")]
    pub status: Status,
    pub items_collected: u32,
    /// Share of belief-map cells that are no longer Unknown, in percent.
    pub explored_percent: f64,
}

impl TickRecord {
    pub fn capture(tick: u64, ctx: &AgentContext, status: Status) -> Self {
        let position = ctx.position();
        let (action, target) = ActionLabel::describe(ctx);
        Self {
            tick,
            row: position.row,
            col: position.col,
            action,
            target,
            status,
            items_collected: ctx.agent.items_collected(),
            explored_percent: ctx.agent.explored_percent(),
        }
    }
}

fn serialize_status<S: Serializer>(status: &Status, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(status.as_str())
}

#[cfg(test)]
mod tests {
    use maze_core::{Agent, AgentConfig, AgentMemory, Grid, Heuristic, TileKind};

    use super::*;

    fn context(with_item: bool) -> AgentContext {
        let mut maze = Grid::filled(4, 4, TileKind::Path);
        if with_item {
            maze.set(Cell::new(2, 2), TileKind::Item).unwrap();
        }
        let agent = Agent::new(Cell::ORIGIN, &maze)
            .with_memory(AgentMemory::with_end_point(Cell::new(3, 3)));
        AgentContext::new(maze, agent, AgentConfig::default(), Heuristic::ADMISSIBLE)
    }

    #[test]
    fn labels_follow_priority() {
        let mut ctx = context(true);
        assert_eq!(ActionLabel::describe(&ctx), (ActionLabel::Idle, None));

        ctx.agent.memory.exploration_target = Some(Cell::new(0, 3));
        assert_eq!(
            ActionLabel::describe(&ctx),
            (ActionLabel::Exploring, Some(Cell::new(0, 3)))
        );

        ctx.agent.memory.target_item = Some(Cell::new(2, 2));
        assert_eq!(
            ActionLabel::describe(&ctx),
            (ActionLabel::MoveToItem, Some(Cell::new(2, 2)))
        );
    }

    #[test]
    fn no_items_left_means_escaping() {
        let mut ctx = context(false);
        ctx.agent.memory.exploration_target = Some(Cell::new(0, 3));

        assert_eq!(
            ActionLabel::describe(&ctx),
            (ActionLabel::Escaping, Some(Cell::new(3, 3)))
        );
    }

    #[test]
    fn idle_label_text() {
        assert_eq!(ActionLabel::Idle.to_string(), "Idle/Deciding");
        assert_eq!(ActionLabel::MoveToItem.as_ref(), "MoveToItem");
    }

    #[test]
    fn serializes_status_by_name() {
        let record = TickRecord::capture(3, &context(false), Status::Running);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["status"], "RUNNING");
        assert_eq!(json["action"], "Escaping");
        assert_eq!(json["target"]["row"], 3);
        assert_eq!(json["tick"], 3);
    }
}
