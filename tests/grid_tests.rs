//! Grid tests - bounds, accommodation and line queries

use blockfit::core::{builtin_shape, ConfigError, Grid};
use blockfit::types::{DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_GRID_DIM};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(DEFAULT_ROWS, DEFAULT_COLUMNS).unwrap();
    assert_eq!(grid.rows(), 10);
    assert_eq!(grid.columns(), 10);
    assert!(grid.is_empty());

    for row in 0..10 {
        for col in 0..10 {
            assert!(grid.is_in_bounds(row, col), "cell ({}, {}) should be in bounds", row, col);
            assert_eq!(grid.get(row, col), Some(false));
        }
    }
}

#[test]
fn test_grid_rejects_bad_dimensions() {
    assert!(matches!(
        Grid::new(0, 10),
        Err(ConfigError::InvalidDimensions { rows: 0, .. })
    ));
    assert!(Grid::new(10, MAX_GRID_DIM + 1).is_err());
    assert!(Grid::new(MAX_GRID_DIM, MAX_GRID_DIM).is_ok());
}

#[test]
fn test_grid_bounds() {
    let grid = Grid::new(10, 8).unwrap();
    assert!(!grid.is_in_bounds(-1, 0));
    assert!(!grid.is_in_bounds(0, -1));
    assert!(!grid.is_in_bounds(10, 0));
    assert!(!grid.is_in_bounds(0, 8));
    assert!(grid.is_in_bounds(9, 7));
    assert_eq!(grid.get(10, 0), None);
}

#[test]
fn test_can_accommodate_is_pure() {
    let grid = Grid::from_rows(&["....", ".#..", "....", "...."]).unwrap();
    let square = builtin_shape("square2").unwrap();
    let before = grid.clone();

    assert!(!grid.can_accommodate(&square, 0, 0));
    assert!(!grid.can_accommodate(&square, 0, 1));
    assert!(grid.can_accommodate(&square, 0, 2));
    assert!(!grid.can_accommodate(&square, 3, 0), "bottom edge");
    assert!(!grid.can_accommodate(&square, -1, 2), "negative origin");
    assert_eq!(grid, before);
}

#[test]
fn test_full_row_and_column() {
    let grid = Grid::from_rows(&["####", "#...", "#...", "#..."]).unwrap();
    assert!(grid.is_row_full(0));
    assert!(!grid.is_row_full(1));
    assert!(grid.is_column_full(0));
    assert!(!grid.is_column_full(1));
    assert_eq!(grid.full_rows().as_slice(), &[0]);
    assert_eq!(grid.full_columns().as_slice(), &[0]);
}

#[test]
fn test_clear_row_and_column() {
    let mut grid = Grid::from_rows(&["####", "#.#.", "#...", "#..#"]).unwrap();
    grid.clear_row(0);
    grid.clear_column(0);
    assert_eq!(grid.to_string(), "....\n..#.\n....\n...#");
    assert_eq!(grid.occupied_count(), 2);
}

#[test]
fn test_occupy_then_accommodate_fails() {
    let mut grid = Grid::new(5, 5).unwrap();
    let l3 = builtin_shape("l3").unwrap();
    assert!(grid.can_accommodate(&l3, 2, 2));
    grid.occupy(&l3, 2, 2);
    assert_eq!(grid.occupied_count(), l3.block_count());
    assert!(!grid.can_accommodate(&l3, 2, 2));
}

#[test]
fn test_clearing_empty_lines_is_a_no_op() {
    let mut grid = Grid::from_rows(&["....", "#.#.", "...."]).unwrap();
    let before = grid.clone();

    grid.clear_row(0);
    grid.clear_column(1);
    grid.clear_column(3);
    assert_eq!(grid, before);

    // Clearing the same line twice leaves the same state as clearing it once.
    grid.clear_row(1);
    let once = grid.clone();
    grid.clear_row(1);
    assert_eq!(grid, once);
    assert!(grid.is_empty());
}

#[test]
fn test_extreme_origins_are_out_of_bounds() {
    let grid = Grid::new(10, 10).unwrap();
    let s4 = builtin_shape("s4").unwrap();
    for (row, col) in [
        (0, i32::MAX),
        (i32::MAX, 0),
        (i32::MAX, i32::MAX),
        (i32::MIN, 0),
        (0, i32::MIN),
        (i32::MIN, i32::MAX),
    ] {
        assert!(!grid.can_accommodate(&s4, row, col), "origin ({}, {})", row, col);
    }
}
