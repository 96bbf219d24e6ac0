//! Goal-directed movement shared by every pursuit action.

use behavior_tree::Status;
use maze_core::{GoalSlot, TileKind, find_path};

use super::AgentContext;

/// Advances the agent one step toward the cell stored in `slot`.
///
/// - At the target: completes the goal and returns `Success`.
/// - Without a plan for the target: plans over the belief map, returning
///   `Failure` and abandoning the goal if no path exists.
/// - If the next committed step is now believed to be a wall, abandons the
///   goal and returns `Failure` so the next tick replans.
/// - Otherwise moves one step and returns `Running`.
pub(crate) fn move_toward(ctx: &mut AgentContext, slot: GoalSlot) -> Status {
    let Some(target) = ctx.agent.memory.goal(slot) else {
        return Status::Failure;
    };
    let position = ctx.agent.position();

    if position == target {
        complete(ctx, slot);
        return Status::Success;
    }

    if !ctx.agent.has_plan_for(target) {
        match find_path(ctx.agent.belief(), position, target, ctx.heuristic) {
            Ok(plan) => {
                tracing::debug!(
                    goal = %slot,
                    from = %position,
                    to = %target,
                    cost = plan.cost,
                    expansions = plan.expansions,
                    "planned path"
                );
                ctx.agent.commit_plan(target, plan.into_steps());
            }
            Err(error) => {
                tracing::debug!(goal = %slot, from = %position, %error, "no path to goal");
                abandon(ctx, slot);
                return Status::Failure;
            }
        }
    }

    let Some(next) = ctx.agent.next_step() else {
        abandon(ctx, slot);
        return Status::Failure;
    };

    if ctx.agent.belief().is(next, TileKind::Wall) {
        tracing::debug!(goal = %slot, blocked = %next, "committed step is a wall, replanning");
        abandon(ctx, slot);
        return Status::Failure;
    }

    ctx.agent.advance();
    Status::Running
}

fn complete(ctx: &mut AgentContext, slot: GoalSlot) {
    let position = ctx.agent.position();
    match slot {
        GoalSlot::TargetItem => {
            if ctx.agent.pickup(&mut ctx.maze) {
                tracing::info!(
                    at = %position,
                    collected = ctx.agent.items_collected(),
                    "picked up item"
                );
            }
        }
        GoalSlot::ExplorationTarget => {
            ctx.agent.memory.clear_goal(slot);
            tracing::debug!(at = %position, "reached exploration target");
        }
        // The exit stays remembered; the simulation terminates on it.
        GoalSlot::EndPoint => tracing::info!(at = %position, "reached exit"),
    }
    ctx.agent.clear_plan();
}

fn abandon(ctx: &mut AgentContext, slot: GoalSlot) {
    ctx.agent.clear_plan();
    if slot != GoalSlot::EndPoint {
        ctx.agent.memory.clear_goal(slot);
    }
}
