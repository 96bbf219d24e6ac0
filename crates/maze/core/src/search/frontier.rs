use std::collections::{HashSet, VecDeque};

use crate::grid::{Cell, Grid, TileKind};

/// Finds the step-nearest [`TileKind::Unknown`] tile reachable from `origin`.
///
/// Breadth-first over the eight-way neighbourhood. Known `Path` and `Item`
/// tiles are expanded, walls are never entered, and the first unknown
/// neighbour encountered is returned: BFS order makes it minimal by step
/// count (not by path cost).
///
/// Returns `None` when every reachable tile is known, which means
/// exploration of the reachable region is complete.
pub fn nearest_frontier(belief: &Grid, origin: Cell) -> Option<Cell> {
    if !belief.contains(origin) {
        return None;
    }

    let mut visited = HashSet::from([origin]);
    let mut queue = VecDeque::from([origin]);

    while let Some(cell) = queue.pop_front() {
        for next in cell.neighbors() {
            if visited.contains(&next) {
                continue;
            }
            match belief.get(next) {
                Some(TileKind::Unknown) => return Some(next),
                Some(TileKind::Path | TileKind::Item) => {
                    visited.insert(next);
                    queue.push_back(next);
                }
                Some(TileKind::Wall) | None => {}
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(
            rows.iter()
                .map(|row| {
                    row.chars()
                        .map(|c| match c {
                            '#' => TileKind::Wall,
                            '*' => TileKind::Item,
                            '?' => TileKind::Unknown,
                            _ => TileKind::Path,
                        })
                        .collect()
                })
                .collect(),
        )
        .unwrap()
    }

    /// Step distance from `origin` to every reachable unknown tile.
    fn unknown_distances(belief: &Grid, origin: Cell) -> HashMap<Cell, usize> {
        let mut dist = HashMap::from([(origin, 0usize)]);
        let mut unknown = HashMap::new();
        let mut queue = VecDeque::from([origin]);
        while let Some(cell) = queue.pop_front() {
            let d = dist[&cell];
            for next in cell.neighbors() {
                match belief.get(next) {
                    Some(TileKind::Unknown) => {
                        unknown.entry(next).or_insert(d + 1);
                    }
                    Some(TileKind::Path | TileKind::Item) if !dist.contains_key(&next) => {
                        dist.insert(next, d + 1);
                        queue.push_back(next);
                    }
                    _ => {}
                }
            }
        }
        unknown
    }

    #[test]
    fn fully_known_map_has_no_frontier() {
        let belief = grid(&["...", ".#.", "..."]);
        assert_eq!(nearest_frontier(&belief, Cell::new(0, 0)), None);
    }

    #[test]
    fn unknown_behind_walls_is_not_a_frontier() {
        let belief = grid(&[
            "..#??", //
            "..#??", //
            "###??",
        ]);
        assert_eq!(nearest_frontier(&belief, Cell::new(0, 0)), None);
    }

    #[test]
    fn adjacent_unknown_is_returned_immediately() {
        let belief = grid(&["??", ".?"]);
        let found = nearest_frontier(&belief, Cell::new(1, 0)).unwrap();
        assert_eq!(found.chebyshev_distance(Cell::new(1, 0)), 1);
    }

    #[test]
    fn frontier_is_step_minimal() {
        let belief = grid(&[
            "......#???", //
            ".####.#???", //
            ".#..*.#...", //
            ".#.####.#.", //
            ".......#?.", //
            "#######..?",
        ]);
        let origin = Cell::new(2, 2);
        let distances = unknown_distances(&belief, origin);
        let best = *distances.values().min().unwrap();

        let found = nearest_frontier(&belief, origin).unwrap();
        assert_eq!(belief.get(found), Some(TileKind::Unknown));
        assert_eq!(distances[&found], best);
    }

    #[test]
    fn diagonal_gaps_are_followed() {
        let belief = grid(&[
            ".#?", //
            "#.#", //
            "###",
        ]);
        assert_eq!(
            nearest_frontier(&belief, Cell::new(0, 0)),
            Some(Cell::new(0, 2))
        );
    }

    #[test]
    fn off_grid_origin_has_no_frontier() {
        let belief = grid(&["??"]);
        assert_eq!(nearest_frontier(&belief, Cell::new(3, 3)), None);
    }
}
