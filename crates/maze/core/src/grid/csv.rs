//! Text form of the maze matrix: comma-separated tile codes, one row per line.

use super::{Grid, GridError, TileKind};

impl Grid {
    /// Parses a comma-separated matrix of `0` (path), `1` (wall), `2` (item).
    ///
    /// Surrounding whitespace on each value is ignored, as are blank lines.
    ///
    /// # Errors
    ///
    /// Any malformed value, ragged row, or empty input is rejected; a
    /// partially parsed grid is never returned.
    pub fn from_csv_str(input: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for line in input.lines().filter(|line| !line.trim().is_empty()) {
            let row_index = rows.len();
            let row = line
                .split(',')
                .enumerate()
                .map(|(col, raw)| {
                    let value = raw.trim();
                    value
                        .parse::<u8>()
                        .ok()
                        .and_then(TileKind::from_code)
                        .ok_or_else(|| GridError::InvalidTile {
                            row: row_index,
                            col,
                            value: value.to_string(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Serializes the grid as numeric codes, one line per row.
    pub fn to_csv_string(&self) -> String {
        let mut out = String::with_capacity(self.len() * 2);
        for (cell, kind) in self.iter() {
            if cell.col > 0 {
                out.push(',');
            }
            out.push(char::from(b'0' + kind.code()));
            if cell.col as usize == self.cols() - 1 {
                out.push('\n');
            }
        }
        out
    }
}
