//! Action nodes for the maze agent.
//!
//! Goal-setting actions (`FindItemNearby`, `ChooseFrontier`) only write a
//! memory slot. Movement actions share one contract: `Success` on arrival,
//! `Running` after a step, `Failure` when the goal had to be abandoned.

use behavior_tree::{Behavior, Status};
use maze_core::{GoalSlot, nearest_frontier, nearest_item_in_sight};

use crate::ai::{AgentContext, movement::move_toward};

/// Scans the sight window of ground truth and remembers the nearest item.
///
/// Fails when no item is in sight.
pub struct FindItemNearby;

impl Behavior<AgentContext> for FindItemNearby {
    fn tick(&self, ctx: &mut AgentContext) -> Status {
        let position = ctx.agent.position();
        match nearest_item_in_sight(&ctx.maze, position, ctx.config.sight_radius) {
            Some(item) => {
                tracing::debug!(from = %position, item = %item, "spotted item");
                ctx.agent.memory.set_goal(GoalSlot::TargetItem, item);
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Walks toward the remembered item and picks it up on arrival.
pub struct MoveToItem;

impl Behavior<AgentContext> for MoveToItem {
    fn tick(&self, ctx: &mut AgentContext) -> Status {
        move_toward(ctx, GoalSlot::TargetItem)
    }
}

/// Remembers the nearest frontier cell.
///
/// Keeps an already remembered exploration target. Fails when no Unknown
/// cell is reachable through known open cells.
pub struct ChooseFrontier;

impl Behavior<AgentContext> for ChooseFrontier {
    fn tick(&self, ctx: &mut AgentContext) -> Status {
        if ctx.agent.memory.exploration_target.is_some() {
            return Status::Success;
        }

        let position = ctx.agent.position();
        match nearest_frontier(ctx.agent.belief(), position) {
            Some(frontier) => {
                tracing::debug!(from = %position, frontier = %frontier, "chose frontier");
                ctx.agent
                    .memory
                    .set_goal(GoalSlot::ExplorationTarget, frontier);
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Walks toward the remembered exploration target.
pub struct Explore;

impl Behavior<AgentContext> for Explore {
    fn tick(&self, ctx: &mut AgentContext) -> Status {
        move_toward(ctx, GoalSlot::ExplorationTarget)
    }
}

/// Walks toward the exit.
pub struct Escape;

impl Behavior<AgentContext> for Escape {
    fn tick(&self, ctx: &mut AgentContext) -> Status {
        move_toward(ctx, GoalSlot::EndPoint)
    }
}
