use crate::grid::{Cell, Grid, TileKind};

/// Scans the sight window of the ground truth for items.
///
/// Returns the item with the smallest Manhattan distance to `origin`. Ties go
/// to the first item in row-major, column-ascending scan order.
pub fn nearest_item_in_sight(truth: &Grid, origin: Cell, radius: u32) -> Option<Cell> {
    let mut nearest: Option<(u32, Cell)> = None;
    for cell in truth.window(origin, radius) {
        if !truth.is(cell, TileKind::Item) {
            continue;
        }
        let distance = origin.manhattan_distance(cell);
        if nearest.is_none_or(|(best, _)| distance < best) {
            nearest = Some((distance, cell));
        }
    }
    nearest.map(|(_, cell)| cell)
}
