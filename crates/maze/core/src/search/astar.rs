//! A* pathfinding over a tile grid.
//!
//! Search nodes live in an arena and refer to their parent by index, so the
//! backtrace is a walk over indices rather than a chain of references. The
//! open set is a binary heap ordered by `(f, insertion sequence)`; duplicate
//! entries for one cell are allowed and discarded lazily when popped after
//! that cell has been closed.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::error::{ErrorSeverity, MazeError};
use crate::grid::{Cell, Grid, TileKind};

use super::Heuristic;

/// A successful search result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPlan {
    /// Cells from start to goal, both inclusive.
    pub cells: Vec<Cell>,
    /// Sum of step costs along `cells`.
    pub cost: u32,
    /// Number of cells expanded (closed) during the search.
    pub expansions: usize,
}

impl PathPlan {
    /// The steps still to take, i.e. the path without its start cell.
    pub fn steps(&self) -> &[Cell] {
        self.cells.get(1..).unwrap_or_default()
    }

    pub fn into_steps(mut self) -> Vec<Cell> {
        if !self.cells.is_empty() {
            self.cells.remove(0);
        }
        self.cells
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The open set was exhausted before the goal was reached.
    #[error("no path from {start} to {goal} after {expansions} expansions")]
    NotFound {
        start: Cell,
        goal: Cell,
        expansions: usize,
    },

    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),
}

impl MazeError for PathError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            PathError::NotFound { .. } => ErrorSeverity::Recoverable,
            PathError::OutOfBounds(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            PathError::NotFound { .. } => "PATH_NOT_FOUND",
            PathError::OutOfBounds(_) => "PATH_OUT_OF_BOUNDS",
        }
    }
}

struct SearchNode {
    cell: Cell,
    parent: Option<usize>,
    g: u32,
}

/// Open-set key. Field order gives the heap ordering: lowest `f` first, then
/// earliest insertion.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct OpenEntry {
    f: u32,
    seq: u64,
    node: usize,
}

/// Computes a path from `start` to `goal` over `grid`.
///
/// Movement is eight-directional with orthogonal cost 10 and diagonal cost 14.
/// Every tile except [`TileKind::Wall`] is traversable, including
/// [`TileKind::Unknown`]. The start tile itself is never checked.
///
/// Results are deterministic for identical inputs.
///
/// # Errors
///
/// - [`PathError::OutOfBounds`] if `start` or `goal` is off-grid
/// - [`PathError::NotFound`] if the goal cannot be reached
pub fn find_path(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    heuristic: Heuristic,
) -> Result<PathPlan, PathError> {
    for cell in [start, goal] {
        if !grid.contains(cell) {
            return Err(PathError::OutOfBounds(cell));
        }
    }

    let mut nodes = vec![SearchNode {
        cell: start,
        parent: None,
        g: 0,
    }];
    let mut open = BinaryHeap::new();
    let mut best_open_g: HashMap<Cell, u32> = HashMap::from([(start, 0)]);
    let mut closed: HashSet<Cell> = HashSet::new();
    let mut seq = 0u64;

    open.push(Reverse(OpenEntry {
        f: heuristic.estimate(start, goal),
        seq,
        node: 0,
    }));

    while let Some(Reverse(entry)) = open.pop() {
        let (cell, g) = (nodes[entry.node].cell, nodes[entry.node].g);

        // Stale duplicate of an already expanded cell.
        if !closed.insert(cell) {
            continue;
        }

        if cell == goal {
            return Ok(PathPlan {
                cells: backtrace(&nodes, entry.node),
                cost: g,
                expansions: closed.len(),
            });
        }

        for next in cell.neighbors() {
            match grid.get(next) {
                None | Some(TileKind::Wall) => continue,
                Some(_) => {}
            }
            if closed.contains(&next) {
                continue;
            }

            let next_g = g + cell.step_cost(next);
            if best_open_g.get(&next).is_some_and(|&known| known <= next_g) {
                continue;
            }
            best_open_g.insert(next, next_g);

            nodes.push(SearchNode {
                cell: next,
                parent: Some(entry.node),
                g: next_g,
            });
            seq += 1;
            open.push(Reverse(OpenEntry {
                f: next_g.saturating_add(heuristic.estimate(next, goal)),
                seq,
                node: nodes.len() - 1,
            }));
        }
    }

    Err(PathError::NotFound {
        start,
        goal,
        expansions: closed.len(),
    })
}

fn backtrace(nodes: &[SearchNode], mut index: usize) -> Vec<Cell> {
    let mut cells = vec![nodes[index].cell];
    while let Some(parent) = nodes[index].parent {
        cells.push(nodes[parent].cell);
        index = parent;
    }
    cells.reverse();
    cells
}
