use crate::grid::Cell;

/// Named goal slots. A populated slot means a goal of that kind is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum GoalSlot {
    TargetItem,
    ExplorationTarget,
    EndPoint,
}

/// The agent's short-term memory.
///
/// Slots are advisory and may be populated at the same time; the decision
/// tree's priority order decides which one drives movement on a given tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentMemory {
    /// Item the agent has committed to collecting.
    pub target_item: Option<Cell>,
    /// Cached result of the last frontier search.
    pub exploration_target: Option<Cell>,
    /// Goal the cached path was planned toward.
    pub current_target: Option<Cell>,
    /// Exit cell, set once before the first tick.
    pub end_point: Option<Cell>,
}

impl AgentMemory {
    pub fn with_end_point(end_point: Cell) -> Self {
        Self {
            end_point: Some(end_point),
            ..Self::default()
        }
    }

    pub fn goal(&self, slot: GoalSlot) -> Option<Cell> {
        match slot {
            GoalSlot::TargetItem => self.target_item,
            GoalSlot::ExplorationTarget => self.exploration_target,
            GoalSlot::EndPoint => self.end_point,
        }
    }

    pub fn set_goal(&mut self, slot: GoalSlot, cell: Cell) {
        *self.slot_mut(slot) = Some(cell);
    }

    pub fn clear_goal(&mut self, slot: GoalSlot) {
        *self.slot_mut(slot) = None;
    }

    fn slot_mut(&mut self, slot: GoalSlot) -> &mut Option<Cell> {
        match slot {
            GoalSlot::TargetItem => &mut self.target_item,
            GoalSlot::ExplorationTarget => &mut self.exploration_target,
            GoalSlot::EndPoint => &mut self.end_point,
        }
    }
}
