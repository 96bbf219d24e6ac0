//! Rectangular tile grids.
//!
//! A [`Grid`] is used twice per run: once as the immutable-shape ground truth
//! loaded from the maze matrix, and once as the agent's belief map, which
//! starts entirely [`TileKind::Unknown`].

mod cell;
mod csv;
mod tile;

pub use cell::{Cell, DIAGONAL_COST, ORTHOGONAL_COST, ParseCellError};
pub use tile::TileKind;

use crate::error::{ErrorSeverity, MazeError};

/// Errors raised while building or addressing a grid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("maze matrix is empty")]
    Empty,

    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid tile value {value:?} at row {row}, column {col}")]
    InvalidTile {
        row: usize,
        col: usize,
        value: String,
    },

    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),

    #[error("ground truth has an unknown tile at {0}")]
    UnknownInGroundTruth(Cell),
}

impl MazeError for GridError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            GridError::Empty
            | GridError::Ragged { .. }
            | GridError::InvalidTile { .. }
            | GridError::UnknownInGroundTruth(_) => ErrorSeverity::Fatal,
            GridError::OutOfBounds(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            GridError::Empty => "GRID_EMPTY",
            GridError::Ragged { .. } => "GRID_RAGGED",
            GridError::InvalidTile { .. } => "GRID_INVALID_TILE",
            GridError::OutOfBounds(_) => "GRID_OUT_OF_BOUNDS",
            GridError::UnknownInGroundTruth(_) => "GRID_UNKNOWN_TILE",
        }
    }
}

/// Row-major rectangular mapping from [`Cell`] to [`TileKind`].
///
/// Dimensions are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<TileKind>,
}

impl Grid {
    /// Creates a grid with every tile set to `kind`.
    pub fn filled(rows: usize, cols: usize, kind: TileKind) -> Self {
        Self {
            rows,
            cols,
            tiles: vec![kind; rows * cols],
        }
    }

    /// Creates an all-`Unknown` grid with the same shape as `other`.
    pub fn unknown_like(other: &Grid) -> Self {
        Self::filled(other.rows, other.cols, TileKind::Unknown)
    }

    /// Builds a grid from row vectors.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] if there are no rows or the first row is
    /// empty, and [`GridError::Ragged`] if rows differ in length.
    pub fn from_rows(rows: Vec<Vec<TileKind>>) -> Result<Self, GridError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut tiles = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            tiles.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            tiles,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The bottom-right cell, the conventional exit.
    pub fn bottom_right(&self) -> Cell {
        Cell::new(self.rows as i32 - 1, self.cols as i32 - 1)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.row as usize * self.cols + cell.col as usize)
    }

    /// Returns the tile at `cell`, or `None` when off-grid.
    pub fn get(&self, cell: Cell) -> Option<TileKind> {
        self.index(cell).map(|i| self.tiles[i])
    }

    /// Overwrites the tile at `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when `cell` is off-grid.
    pub fn set(&mut self, cell: Cell, kind: TileKind) -> Result<(), GridError> {
        let index = self.index(cell).ok_or(GridError::OutOfBounds(cell))?;
        self.tiles[index] = kind;
        Ok(())
    }

    /// True if `cell` is on-grid and holds `kind`.
    pub fn is(&self, cell: Cell, kind: TileKind) -> bool {
        self.get(cell) == Some(kind)
    }

    /// Iterates all cells with their tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, TileKind)> + '_ {
        let cols = self.cols;
        self.tiles.iter().enumerate().map(move |(i, &kind)| {
            let cell = Cell::new((i / cols) as i32, (i % cols) as i32);
            (cell, kind)
        })
    }

    /// Counts tiles of the given kind.
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&t| t == kind).count()
    }

    /// True if at least one tile has the given kind.
    pub fn contains_kind(&self, kind: TileKind) -> bool {
        self.tiles.contains(&kind)
    }

    /// Cells within Chebyshev distance `radius` of `center`, clipped to the
    /// grid, in row-major then column-ascending order.
    pub fn window(&self, center: Cell, radius: u32) -> impl Iterator<Item = Cell> + '_ {
        let rows = clipped_span(center.row, radius, self.rows);
        let cols = clipped_span(center.col, radius, self.cols);
        rows.flat_map(move |row| cols.clone().map(move |col| Cell::new(row, col)))
    }

    /// Renders the grid as text, one glyph per tile, with `marker` drawn at
    /// the given cell if present.
    pub fn render(&self, marker: Option<(Cell, char)>) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for (cell, kind) in self.iter() {
            let glyph = match marker {
                Some((at, glyph)) if at == cell => glyph,
                _ => kind.glyph(),
            };
            out.push(glyph);
            if cell.col as usize == self.cols - 1 {
                out.push('\n');
            }
        }
        out
    }
}

/// `center ± radius` clipped to `0..len`; empty when the span misses the grid.
fn clipped_span(center: i32, radius: u32, len: usize) -> std::ops::RangeInclusive<i32> {
    let radius = i64::from(radius);
    let last = i64::try_from(len).unwrap_or(i64::MAX) - 1;
    let lo = (i64::from(center) - radius).max(0);
    let hi = (i64::from(center) + radius).min(last).min(i64::from(i32::MAX));
    if lo > hi {
        return 1..=0;
    }
    lo as i32..=hi as i32
}
