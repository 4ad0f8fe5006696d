//! Pointer snapping - forgiving drop targets for touch input
//!
//! This is input-side help and never runs inside the placement engine. Given where
//! the pointer says the shape's top-left block is, it returns the origin to place at:
//! the exact cell when that fits, otherwise the closest fitting neighbor within
//! [`SNAP_THRESHOLD`] cells.

use crate::core::{Grid, Shape};
use crate::types::SNAP_THRESHOLD;

/// Pointer position in cell units; `(r, c)` is the center of cell `(r, c)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPos {
    pub row: f32,
    pub col: f32,
}

impl PointerPos {
    pub fn new(row: f32, col: f32) -> Self {
        Self { row, col }
    }

    /// The cell the pointer is over
    pub fn cell(self) -> (i32, i32) {
        (self.row.round() as i32, self.col.round() as i32)
    }

    fn distance_to(self, row: i32, col: i32) -> f32 {
        (self.row - row as f32).hypot(self.col - col as f32)
    }
}

impl From<(i32, i32)> for PointerPos {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row as f32, col as f32)
    }
}

/// Origin to drop `shape` at for the given pointer, if any
///
/// Candidates are the pointer's own cell and its eight neighbors. Ties between
/// equally close neighbors go to the first in row-major order.
pub fn nearest_valid_origin(
    shape: &Shape,
    pointer: impl Into<PointerPos>,
    grid: &Grid,
) -> Option<(i32, i32)> {
    let pointer = pointer.into();
    let (row, col) = pointer.cell();
    if grid.can_accommodate(shape, row, col) {
        return Some((row, col));
    }

    let mut best: Option<((i32, i32), f32)> = None;
    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (r, c) = (row.saturating_add(dr), col.saturating_add(dc));
            if !grid.can_accommodate(shape, r, c) {
                continue;
            }
            let dist = pointer.distance_to(r, c);
            if dist < SNAP_THRESHOLD && best.map_or(true, |(_, d)| dist < d) {
                best = Some(((r, c), dist));
            }
        }
    }
    best.map(|(origin, _)| origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builtin_shape;

    #[test]
    fn exact_cell_wins_when_it_fits() {
        let grid = Grid::new(10, 10).unwrap();
        let square = builtin_shape("square2").unwrap();
        assert_eq!(nearest_valid_origin(&square, (4, 4), &grid), Some((4, 4)));
        assert_eq!(
            nearest_valid_origin(&square, PointerPos::new(4.4, 3.6), &grid),
            Some((4, 4))
        );
    }

    #[test]
    fn snaps_to_close_neighbor() {
        let grid = Grid::new(10, 10).unwrap();
        let line4 = builtin_shape("line4").unwrap();
        // Cell (0, 7) hangs off the right edge; (0, 6) is 0.55 away.
        let pointer = PointerPos::new(0.0, 6.55);
        assert_eq!(nearest_valid_origin(&line4, pointer, &grid), Some((0, 6)));
    }

    #[test]
    fn far_neighbors_do_not_snap() {
        let grid = Grid::new(10, 10).unwrap();
        let line4 = builtin_shape("line4").unwrap();
        // Whole-cell pointer: the nearest neighbor is a full cell away.
        assert_eq!(nearest_valid_origin(&line4, (0, 7), &grid), None);
    }

    #[test]
    fn blocked_cell_snaps_past_obstacle() {
        let grid = Grid::from_rows(&["#...", "....", "...."]).unwrap();
        let single = builtin_shape("single").unwrap();
        let pointer = PointerPos::new(0.4, 0.3);
        assert_eq!(nearest_valid_origin(&single, pointer, &grid), Some((1, 0)));
    }

    #[test]
    fn extreme_pointer_finds_nothing() {
        let grid = Grid::new(10, 10).unwrap();
        let s4 = builtin_shape("s4").unwrap();
        assert_eq!(nearest_valid_origin(&s4, (i32::MAX, i32::MAX), &grid), None);
        assert_eq!(nearest_valid_origin(&s4, (i32::MIN, i32::MIN), &grid), None);
        assert_eq!(nearest_valid_origin(&s4, PointerPos::new(f32::MAX, 0.0), &grid), None);
    }
}
