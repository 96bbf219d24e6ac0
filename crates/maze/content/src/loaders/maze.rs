//! Maze matrix loader and writer.
//!
//! The on-disk format is the ground-truth matrix, row-major, one row per line,
//! comma-separated codes `0` (path), `1` (wall), `2` (item).

use std::path::Path;

use maze_core::Grid;

use crate::loaders::{LoadResult, read_file};

/// Loader for maze matrices.
pub struct MazeLoader;

impl MazeLoader {
    /// Load a maze matrix from a CSV file.
    ///
    /// # Errors
    ///
    /// Fails if the file is missing or unreadable, or if any row is malformed.
    /// No partially parsed grid is ever returned.
    pub fn load(path: &Path) -> LoadResult<Grid> {
        let content = read_file(path)?;
        let grid = Grid::from_csv_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse maze {}: {}", path.display(), e))?;
        Ok(grid)
    }
}

/// Writer for maze matrices.
pub struct MazeWriter;

impl MazeWriter {
    /// Write `grid` to `path` in the format [`MazeLoader`] reads.
    pub fn write(path: &Path, grid: &Grid) -> LoadResult<()> {
        std::fs::write(path, grid.to_csv_string())
            .map_err(|e| anyhow::anyhow!("Failed to write maze {}: {}", path.display(), e))
    }
}
