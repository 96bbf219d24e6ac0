//! Complete decision trees for the maze agent.
//!
//! ```text
//! maze_runner()
//!   └─ Selector
//!       ├─ Sequence  resume remembered item
//!       │   ├─ HasItemTarget
//!       │   └─ MoveToItem
//!       ├─ Sequence  pursue newly sighted item
//!       │   ├─ FindItemNearby
//!       │   └─ MoveToItem
//!       ├─ Sequence  explore
//!       │   ├─ HasUnexploredArea
//!       │   ├─ ChooseFrontier
//!       │   └─ Explore
//!       └─ Escape
//! ```

use behavior_tree::{
    Behavior,
    builder::{action, condition, selector, sequence},
};

use super::{AgentContext, nodes::*};

/// Boxed tree evaluated against an [`AgentContext`].
pub type BehaviorTree = Box<dyn Behavior<AgentContext>>;

/// The default agent: collect items, then explore, then leave.
///
/// Branch order is priority order; an earlier branch that does not fail wins
/// the tick.
pub fn maze_runner() -> BehaviorTree {
    selector(vec![
        sequence(vec![condition(HasItemTarget), action(MoveToItem)]),
        sequence(vec![action(FindItemNearby), action(MoveToItem)]),
        sequence(vec![
            condition(HasUnexploredArea),
            action(ChooseFrontier),
            action(Explore),
        ]),
        action(Escape),
    ])
}
