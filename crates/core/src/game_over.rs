//! Game-over detection - brute-force search for any legal placement
//!
//! Cost is `O(shapes * rows * cols * blocks)`, which is trivial for the small grids
//! this engine targets. Origins are only tried where the shape's bounding box fits,
//! so shapes larger than the grid are rejected without scanning.

use crate::grid::Grid;
use crate::shape::Shape;

/// Every origin where `shape` fits, in row-major order
pub fn valid_origins<'a>(
    shape: &'a Shape,
    grid: &'a Grid,
) -> impl Iterator<Item = (i32, i32)> + 'a {
    let (height, width) = shape.bounds();
    let max_row = grid.rows().checked_sub(height).map(|r| r as i32);
    let max_col = grid.columns().checked_sub(width).map(|c| c as i32);

    let origins = match (max_row, max_col) {
        (Some(max_row), Some(max_col)) => {
            Some((0..=max_row).flat_map(move |r| (0..=max_col).map(move |c| (r, c))))
        }
        _ => None,
    };

    origins
        .into_iter()
        .flatten()
        .filter(move |&(r, c)| grid.can_accommodate(shape, r, c))
}

/// First origin (row-major) where `shape` fits
pub fn first_fit(shape: &Shape, grid: &Grid) -> Option<(i32, i32)> {
    valid_origins(shape, grid).next()
}

pub fn can_place_anywhere(shape: &Shape, grid: &Grid) -> bool {
    first_fit(shape, grid).is_some()
}

/// True if at least one of `shapes` fits somewhere on `grid`
///
/// An empty set of shapes has no move.
pub fn has_any_move<'a, I>(shapes: I, grid: &Grid) -> bool
where
    I: IntoIterator<Item = &'a Shape>,
{
    shapes.into_iter().any(|shape| can_place_anywhere(shape, grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_shape;

    #[test]
    fn empty_grid_accepts_every_default_shape() {
        let grid = Grid::new(10, 10).unwrap();
        for shape in crate::catalog::default_catalog() {
            assert_eq!(first_fit(&shape, &grid), Some((0, 0)), "{}", shape.name());
        }
    }

    #[test]
    fn origin_count_matches_free_positions() {
        let grid = Grid::new(4, 5).unwrap();
        let line3 = builtin_shape("line3").unwrap();
        // 4 rows x 3 horizontal starts
        assert_eq!(valid_origins(&line3, &grid).count(), 12);
    }

    #[test]
    fn shape_larger_than_grid_never_fits() {
        let grid = Grid::new(3, 3).unwrap();
        let line4 = builtin_shape("line4").unwrap();
        assert!(!can_place_anywhere(&line4, &grid));
    }

    #[test]
    fn single_hole_only_takes_single() {
        let mut grid = Grid::new(5, 5).unwrap();
        for r in 0..5 {
            for c in 0..5 {
                grid.set(r, c, (r, c) != (2, 2));
            }
        }
        let single = builtin_shape("single").unwrap();
        let line2 = builtin_shape("line2").unwrap();

        assert_eq!(first_fit(&single, &grid), Some((2, 2)));
        assert!(!can_place_anywhere(&line2, &grid));
        assert!(has_any_move([&line2, &single], &grid));
        assert!(!has_any_move([&line2], &grid));
        assert!(!has_any_move(std::iter::empty::<&Shape>(), &grid));
    }
}
