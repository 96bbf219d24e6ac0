//! Behavior-tree decision making for the maze agent.
//!
//! The tree itself is stateless. Every tick it re-derives which branch to run
//! from the agent's memory slots, so a `Running` result only means the slot
//! that drove it is still populated and the same branch will most likely win
//! again next tick.
//!
//! - [`AgentContext`]: the blackboard every node reads and mutates
//! - [`nodes`]: conditions and actions over that blackboard
//! - [`presets`]: complete trees ready to hand to a simulation

pub mod context;
mod movement;
pub mod nodes;
pub mod presets;

pub use context::AgentContext;
pub use presets::BehaviorTree;
