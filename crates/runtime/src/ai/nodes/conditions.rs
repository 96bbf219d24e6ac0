//! Condition nodes for the maze agent.
//!
//! Conditions are [`Predicate`]s and never receive mutable access to the
//! context. Wrap them with `behavior_tree::builder::condition`.

use behavior_tree::Predicate;

use crate::ai::AgentContext;

/// Succeeds while an item target is remembered.
pub struct HasItemTarget;

impl Predicate<AgentContext> for HasItemTarget {
    fn check(&self, ctx: &AgentContext) -> bool {
        ctx.agent.memory.target_item.is_some()
    }
}

/// Succeeds while the belief map still has Unknown cells anywhere.
///
/// Reachability is not considered here; `ChooseFrontier` fails when the
/// remaining Unknown cells are sealed off.
pub struct HasUnexploredArea;

impl Predicate<AgentContext> for HasUnexploredArea {
    fn check(&self, ctx: &AgentContext) -> bool {
        ctx.agent.has_unknown()
    }
}
