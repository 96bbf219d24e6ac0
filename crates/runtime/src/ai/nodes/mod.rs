//! Maze-specific behavior tree nodes.
//!
//! - `conditions`: read-only checks over agent memory and belief
//! - `actions`: nodes that set goals or move the agent

pub mod actions;
pub mod conditions;

pub use actions::*;
pub use conditions::*;
