//! Agent state: position, belief map, memory, and the committed path.
//!
//! The belief map only ever gains knowledge. [`Agent::update_exploration_map`]
//! is the one way an `Unknown` tile becomes known, and [`Agent::pickup`] is
//! the one way a known tile changes afterwards (`Item` to `Path`, applied to
//! ground truth and belief together).

mod memory;
mod sensor;

use std::collections::VecDeque;

pub use memory::{AgentMemory, GoalSlot};
pub use sensor::nearest_item_in_sight;

use crate::grid::{Cell, Grid, TileKind};

#[derive(Clone, Debug)]
pub struct Agent {
    position: Cell,
    belief: Grid,
    pub memory: AgentMemory,
    path: VecDeque<Cell>,
    items_collected: u32,
}

impl Agent {
    /// Creates an agent at `start` with an all-unknown belief map shaped like
    /// `truth`.
    pub fn new(start: Cell, truth: &Grid) -> Self {
        Self {
            position: start,
            belief: Grid::unknown_like(truth),
            memory: AgentMemory::default(),
            path: VecDeque::new(),
            items_collected: 0,
        }
    }

    pub fn with_memory(mut self, memory: AgentMemory) -> Self {
        self.memory = memory;
        self
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn belief(&self) -> &Grid {
        &self.belief
    }

    /// Remaining committed steps, excluding the current position.
    pub fn path(&self) -> &VecDeque<Cell> {
        &self.path
    }

    pub fn items_collected(&self) -> u32 {
        self.items_collected
    }

    /// Copies ground truth into the belief map for every cell within
    /// Chebyshev distance `radius` of the agent.
    pub fn update_exploration_map(&mut self, truth: &Grid, radius: u32) {
        for cell in truth.window(self.position, radius) {
            if let Some(kind) = truth.get(cell) {
                // Window cells are in-bounds and both grids share a shape.
                let revealed = self.belief.set(cell, kind);
                debug_assert!(revealed.is_ok(), "belief shape differs from truth");
            }
        }
    }

    /// True while any belief tile is still `Unknown`, reachable or not.
    pub fn has_unknown(&self) -> bool {
        self.belief.contains_kind(TileKind::Unknown)
    }

    /// Percentage of belief tiles that are no longer `Unknown`.
    pub fn explored_percent(&self) -> f64 {
        if self.belief.is_empty() {
            return 100.0;
        }
        let known = self.belief.len() - self.belief.count(TileKind::Unknown);
        known as f64 * 100.0 / self.belief.len() as f64
    }

    /// True if the cached path was planned toward `target` and still has
    /// steps left.
    pub fn has_plan_for(&self, target: Cell) -> bool {
        !self.path.is_empty() && self.memory.current_target == Some(target)
    }

    /// Caches `steps` (start cell already dropped) as the plan toward `target`.
    pub fn commit_plan(&mut self, target: Cell, steps: impl IntoIterator<Item = Cell>) {
        self.path = steps.into_iter().collect();
        self.memory.current_target = Some(target);
    }

    /// Drops the cached path together with the goal it was planned for.
    pub fn clear_plan(&mut self) {
        self.path.clear();
        self.memory.current_target = None;
    }

    /// The next committed step, without taking it.
    pub fn next_step(&self) -> Option<Cell> {
        self.path.front().copied()
    }

    /// Takes the next committed step and returns the new position.
    pub fn advance(&mut self) -> Option<Cell> {
        let next = self.path.pop_front()?;
        self.position = next;
        Some(next)
    }

    /// Collects the remembered item if the agent is standing on it.
    ///
    /// On the remembered cell, the item slot and cached plan are cleared
    /// whether or not an item was still there; the counter increments only
    /// when ground truth actually held an `Item`, which is then turned into
    /// `Path` in both ground truth and belief. Returns `true` if an item was
    /// collected. Off the remembered cell nothing changes.
    pub fn pickup(&mut self, truth: &mut Grid) -> bool {
        if self.memory.target_item != Some(self.position) {
            return false;
        }

        let collected = truth.is(self.position, TileKind::Item);
        if collected {
            let cleared = truth.set(self.position, TileKind::Path);
            debug_assert!(cleared.is_ok(), "agent stands outside the maze");
            let cleared = self.belief.set(self.position, TileKind::Path);
            debug_assert!(cleared.is_ok(), "belief shape differs from truth");
            self.items_collected += 1;
        }

        self.memory.clear_goal(GoalSlot::TargetItem);
        self.clear_plan();
        collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn truth() -> Grid {
        let mut grid = Grid::filled(6, 6, TileKind::Path);
        grid.set(Cell::new(0, 3), TileKind::Wall).unwrap();
        grid.set(Cell::new(1, 1), TileKind::Item).unwrap();
        grid
    }

    #[test]
    fn new_agent_knows_nothing() {
        let agent = Agent::new(Cell::ORIGIN, &truth());
        assert!(agent.has_unknown());
        assert_eq!(agent.explored_percent(), 0.0);
        assert_eq!(agent.belief().count(TileKind::Unknown), 36);
    }

    #[test]
    fn exploration_reveals_only_the_sight_window() {
        let truth = truth();
        let mut agent = Agent::new(Cell::ORIGIN, &truth);
        agent.update_exploration_map(&truth, 2);

        assert_eq!(agent.belief().get(Cell::new(1, 1)), Some(TileKind::Item));
        assert_eq!(agent.belief().get(Cell::new(2, 2)), Some(TileKind::Path));
        assert_eq!(agent.belief().get(Cell::new(0, 3)), Some(TileKind::Unknown));
        assert_eq!(agent.belief().count(TileKind::Unknown), 36 - 9);
        assert_eq!(agent.explored_percent(), 25.0);
    }

    #[test]
    fn oversized_sight_radius_reveals_everything() {
        let truth = truth();
        let mut agent = Agent::new(Cell::new(1, 1), &truth);
        agent.update_exploration_map(&truth, u32::MAX);

        assert!(!agent.has_unknown());
        assert_eq!(agent.belief(), &truth);
    }

    #[test]
    fn plan_lifecycle() {
        let truth = truth();
        let mut agent = Agent::new(Cell::ORIGIN, &truth);
        let goal = Cell::new(0, 2);
        agent.commit_plan(goal, [Cell::new(0, 1), goal]);

        assert!(agent.has_plan_for(goal));
        assert!(!agent.has_plan_for(Cell::new(5, 5)));
        assert_eq!(agent.advance(), Some(Cell::new(0, 1)));
        assert_eq!(agent.next_step(), Some(goal));

        agent.clear_plan();
        assert!(agent.path().is_empty());
        assert_eq!(agent.memory.current_target, None);
        assert_eq!(agent.advance(), None);
        assert_eq!(agent.position(), Cell::new(0, 1));
    }

    #[test]
    fn pickup_updates_truth_belief_and_counter_once() {
        let mut truth = truth();
        let item = Cell::new(1, 1);
        let mut agent = Agent::new(item, &truth);
        agent.update_exploration_map(&truth, 1);
        agent.memory.set_goal(GoalSlot::TargetItem, item);
        agent.commit_plan(item, [Cell::new(1, 2)]);

        assert!(agent.pickup(&mut truth));
        assert_eq!(truth.get(item), Some(TileKind::Path));
        assert_eq!(agent.belief().get(item), Some(TileKind::Path));
        assert_eq!(agent.items_collected(), 1);
        assert_eq!(agent.memory.target_item, None);
        assert!(agent.path().is_empty());

        agent.memory.set_goal(GoalSlot::TargetItem, item);
        assert!(!agent.pickup(&mut truth));
        assert_eq!(agent.items_collected(), 1);
    }

    #[test]
    fn pickup_away_from_target_does_nothing() {
        let mut truth = truth();
        let mut agent = Agent::new(Cell::ORIGIN, &truth);
        agent.memory.set_goal(GoalSlot::TargetItem, Cell::new(1, 1));

        assert!(!agent.pickup(&mut truth));
        assert_eq!(agent.memory.target_item, Some(Cell::new(1, 1)));
        assert_eq!(truth.get(Cell::new(1, 1)), Some(TileKind::Item));
    }
}
