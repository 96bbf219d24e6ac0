//! Procedural maze generation.
//!
//! Randomized depth-first carving: every cell with even row and column is a
//! room, the search walks between rooms two cells at a time and knocks out the
//! wall in between. The result is a perfect maze over the even lattice; the
//! start `(0, 0)` and the bottom-right exit are always open.

use maze_core::{Cell, Grid, TileKind};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::loaders::LoadResult;

/// Two-cell steps between rooms on the even lattice.
const ROOM_STEPS: [(i32, i32); 4] = [(0, 2), (0, -2), (2, 0), (-2, 0)];

/// Seeded maze generator. The same seed and dimensions always produce the
/// same maze.
#[derive(Clone, Debug)]
pub struct MazeGenerator {
    rows: usize,
    cols: usize,
    item_probability: f64,
    seed: u64,
}

impl MazeGenerator {
    pub const DEFAULT_ROWS: usize = 50;
    pub const DEFAULT_COLS: usize = 50;
    pub const DEFAULT_ITEM_PROBABILITY: f64 = 0.005;

    /// Creates a generator with a random seed.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            item_probability: Self::DEFAULT_ITEM_PROBABILITY,
            seed: rand::random(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Probability that a carved cell (other than start and exit) holds an item.
    pub fn with_item_probability(mut self, item_probability: f64) -> Self {
        self.item_probability = item_probability;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates the ground-truth grid.
    ///
    /// # Errors
    ///
    /// Fails if either dimension is zero or the item probability is outside
    /// `[0, 1]`.
    pub fn generate(&self) -> LoadResult<Grid> {
        anyhow::ensure!(
            self.rows > 0 && self.cols > 0,
            "maze dimensions must be positive, got {}x{}",
            self.rows,
            self.cols
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.item_probability),
            "item probability must be within [0, 1], got {}",
            self.item_probability
        );

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut grid = Grid::filled(self.rows, self.cols, TileKind::Wall);

        let start = Cell::new(
            2 * rng.gen_range(0..self.rows.div_ceil(2)) as i32,
            2 * rng.gen_range(0..self.cols.div_ceil(2)) as i32,
        );
        self.carve(&mut grid, &mut rng, start)?;

        let entrance = Cell::ORIGIN;
        let exit = grid.bottom_right();
        // The exit may sit on an odd row or column; it always touches a room.
        grid.set(exit, TileKind::Path)?;

        let carved = grid.clone();
        for (cell, kind) in carved.iter() {
            if kind == TileKind::Path
                && cell != entrance
                && cell != exit
                && rng.gen_bool(self.item_probability)
            {
                grid.set(cell, TileKind::Item)?;
            }
        }

        Ok(grid)
    }

    fn carve(&self, grid: &mut Grid, rng: &mut StdRng, start: Cell) -> LoadResult<()> {
        grid.set(start, TileKind::Path)?;
        let mut stack = vec![start];

        while let Some(&current) = stack.last() {
            let unvisited: Vec<Cell> = ROOM_STEPS
                .iter()
                .map(|&(dr, dc)| Cell::new(current.row + dr, current.col + dc))
                .filter(|&next| grid.is(next, TileKind::Wall))
                .collect();

            match unvisited.choose(rng) {
                Some(&next) => {
                    let between = Cell::new(
                        (current.row + next.row) / 2,
                        (current.col + next.col) / 2,
                    );
                    grid.set(between, TileKind::Path)?;
                    grid.set(next, TileKind::Path)?;
                    stack.push(next);
                }
                None => {
                    stack.pop();
                }
            }
        }

        Ok(())
    }
}

impl Default for MazeGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROWS, Self::DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests {
    use maze_core::{Heuristic, find_path};

    use super::*;

    #[test]
    fn same_seed_same_maze() {
        let a = MazeGenerator::new(21, 21).with_seed(7).generate().unwrap();
        let b = MazeGenerator::new(21, 21).with_seed(7).generate().unwrap();
        let c = MazeGenerator::new(21, 21).with_seed(8).generate().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn exit_is_reachable_from_start_for_even_and_odd_sizes() {
        for (rows, cols) in [(20, 20), (21, 21), (15, 30), (30, 15)] {
            for seed in 0..5 {
                let grid = MazeGenerator::new(rows, cols)
                    .with_seed(seed)
                    .generate()
                    .unwrap();
                assert_eq!(grid.get(Cell::ORIGIN), Some(TileKind::Path));
                assert_eq!(grid.get(grid.bottom_right()), Some(TileKind::Path));
                assert!(
                    find_path(&grid, Cell::ORIGIN, grid.bottom_right(), Heuristic::ADMISSIBLE)
                        .is_ok(),
                    "{rows}x{cols} seed {seed}"
                );
            }
        }
    }

    #[test]
    fn every_room_is_carved() {
        let grid = MazeGenerator::new(11, 11).with_seed(3).generate().unwrap();
        for row in (0..11).step_by(2) {
            for col in (0..11).step_by(2) {
                assert!(grid.get(Cell::new(row, col)).is_some_and(TileKind::is_traversable));
            }
        }
    }

    #[test]
    fn item_probability_one_fills_every_open_cell() {
        let grid = MazeGenerator::new(9, 9)
            .with_seed(1)
            .with_item_probability(1.0)
            .generate()
            .unwrap();
        assert_eq!(grid.count(TileKind::Path), 2);
        assert!(grid.count(TileKind::Item) > 0);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(MazeGenerator::new(0, 5).generate().is_err());
        assert!(
            MazeGenerator::new(5, 5)
                .with_item_probability(1.5)
                .generate()
                .is_err()
        );
    }
}
