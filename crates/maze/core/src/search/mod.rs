//! Search procedures the agent plans with.
//!
//! - [`find_path`]: A* over any tile grid (normally the belief map)
//! - [`nearest_frontier`]: breadth-first search for the step-nearest unknown
//!   tile reachable through known, passable territory
//!
//! Both are single synchronous calls bounded by the grid size.

mod astar;
mod frontier;
mod heuristic;

pub use astar::{PathError, PathPlan, find_path};
pub use frontier::nearest_frontier;
pub use heuristic::{Heuristic, octile_distance};
