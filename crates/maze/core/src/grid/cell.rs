use std::fmt;
use std::str::FromStr;

/// Orthogonal step cost.
pub const ORTHOGONAL_COST: u32 = 10;

/// Diagonal step cost, the integer approximation of `10 * sqrt(2)`.
pub const DIAGONAL_COST: u32 = 14;

/// Eight-way neighbourhood, orthogonal offsets first.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Discrete grid coordinate expressed as (row, column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The eight surrounding cells, unfiltered by bounds.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .map(move |(dr, dc)| Cell::new(self.row + dr, self.col + dc))
    }

    /// Cost of a single step to an adjacent cell.
    ///
    /// Diagonal when both coordinates differ, orthogonal otherwise.
    pub fn step_cost(self, to: Cell) -> u32 {
        if self.row != to.row && self.col != to.col {
            DIAGONAL_COST
        } else {
            ORTHOGONAL_COST
        }
    }

    pub fn manhattan_distance(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn chebyshev_distance(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error returned when a `row,col` string cannot be parsed as a [`Cell`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("expected a cell as `row,col`, got {0:?}")]
pub struct ParseCellError(String);

impl FromStr for Cell {
    type Err = ParseCellError;

    /// Parses `row,col`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = inner
            .split_once(',')
            .ok_or_else(|| ParseCellError(s.to_string()))?;
        let row = row.trim().parse().map_err(|_| ParseCellError(s.to_string()))?;
        let col = col.trim().parse().map_err(|_| ParseCellError(s.to_string()))?;
        Ok(Cell::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_cover_all_eight_directions() {
        let center = Cell::new(5, 5);
        let around: Vec<Cell> = center.neighbors().collect();
        assert_eq!(around.len(), 8);
        assert!(around.iter().all(|c| c.chebyshev_distance(center) == 1));
        assert!(!around.contains(&center));
    }

    #[test]
    fn diagonal_steps_cost_more() {
        let c = Cell::new(3, 3);
        assert_eq!(c.step_cost(Cell::new(3, 4)), ORTHOGONAL_COST);
        assert_eq!(c.step_cost(Cell::new(2, 3)), ORTHOGONAL_COST);
        assert_eq!(c.step_cost(Cell::new(4, 4)), DIAGONAL_COST);
    }

    #[test]
    fn display_matches_tuple_form() {
        assert_eq!(Cell::new(4, 12).to_string(), "(4, 12)");
    }

    #[test]
    fn parses_row_col_pairs() {
        assert_eq!("3,4".parse::<Cell>(), Ok(Cell::new(3, 4)));
        assert_eq!(" (10, 2) ".parse::<Cell>(), Ok(Cell::new(10, 2)));
        assert!("3".parse::<Cell>().is_err());
        assert!("a,b".parse::<Cell>().is_err());
    }
}
