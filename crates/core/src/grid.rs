//! Grid module - manages the occupancy matrix
//!
//! The grid is a `rows x columns` matrix of booleans (occupied or empty), sized once
//! per session and never resized. Storage is a flat row-major `Vec<bool>`.
//! Coordinates are `(row, col)` with row 0 at the top and col 0 at the left.
//! Query coordinates are signed so callers can ask about positions hanging off the
//! edge; those are simply out of bounds.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::ConfigError;
use crate::shape::Shape;
use crate::types::MAX_GRID_DIM;

/// Indices of completed lines, collected without allocation
pub type LineList = ArrayVec<usize, MAX_GRID_DIM>;

/// The board occupancy matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    /// Flat array of cells, row-major order (row * columns + col)
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new empty grid
    ///
    /// Fails when either dimension is zero or larger than [`MAX_GRID_DIM`].
    pub fn new(rows: usize, columns: usize) -> Result<Self, ConfigError> {
        if rows == 0 || columns == 0 || rows > MAX_GRID_DIM || columns > MAX_GRID_DIM {
            return Err(ConfigError::InvalidDimensions {
                rows,
                columns,
                max: MAX_GRID_DIM,
            });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        })
    }

    /// Build a grid from a text picture: `#` is occupied, anything else is empty.
    ///
    /// All lines must have the same length.
    ///
    /// ```
    /// use blockfit_core::Grid;
    ///
    /// let grid = Grid::from_rows(&["##.", "..."]).unwrap();
    /// assert_eq!(grid.get(0, 1), Some(true));
    /// assert_eq!(grid.get(1, 1), Some(false));
    /// ```
    pub fn from_rows(lines: &[&str]) -> Result<Self, ConfigError> {
        let columns = lines.first().map(|l| l.chars().count()).unwrap_or(0);
        if lines.iter().any(|l| l.chars().count() != columns) {
            return Err(ConfigError::InvalidDimensions {
                rows: lines.len(),
                columns,
                max: MAX_GRID_DIM,
            });
        }
        let mut grid = Self::new(lines.len(), columns)?;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                grid.cells[row * columns + col] = ch == '#';
            }
        }
        Ok(grid)
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if !self.is_in_bounds(row, col) {
            return None;
        }
        Some(row as usize * self.columns + col as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// True iff `0 <= row < rows` and `0 <= col < columns`
    #[inline]
    pub fn is_in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.columns
    }

    /// Get occupancy at `(row, col)`; `None` when out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<bool> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set occupancy at `(row, col)`. Returns false if out of bounds.
    ///
    /// Setup path for pre-filled patterns; gameplay goes through [`Grid::occupy`].
    pub fn set(&mut self, row: i32, col: i32, occupied: bool) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Check whether every cell of `shape` lands in bounds and on an empty cell
    pub fn can_accommodate(&self, shape: &Shape, origin_row: i32, origin_col: i32) -> bool {
        shape
            .cells_at(origin_row, origin_col)
            .all(|(row, col)| matches!(self.get(row, col), Some(false)))
    }

    /// Mark every cell of `shape` as occupied.
    ///
    /// Precondition: `can_accommodate` holds for the same placement. No validation is
    /// performed here; cells that would fall outside the grid are ignored.
    pub fn occupy(&mut self, shape: &Shape, origin_row: i32, origin_col: i32) {
        debug_assert!(self.can_accommodate(shape, origin_row, origin_col));
        for (row, col) in shape.cells_at(origin_row, origin_col) {
            if let Some(idx) = self.index(row, col) {
                self.cells[idx] = true;
            }
        }
    }

    /// Check if a row is completely filled (false for an out-of-range row)
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        let start = row * self.columns;
        self.cells[start..start + self.columns].iter().all(|&c| c)
    }

    /// Check if a column is completely filled (false for an out-of-range column)
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.columns {
            return false;
        }
        (0..self.rows).all(|row| self.cells[row * self.columns + col])
    }

    /// Set every cell in the row to empty. Out-of-range rows are ignored.
    pub fn clear_row(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }
        let start = row * self.columns;
        self.cells[start..start + self.columns].fill(false);
    }

    /// Set every cell in the column to empty. Out-of-range columns are ignored.
    pub fn clear_column(&mut self, col: usize) {
        if col >= self.columns {
            return;
        }
        for row in 0..self.rows {
            self.cells[row * self.columns + col] = false;
        }
    }

    /// Indices of all full rows, ascending
    pub fn full_rows(&self) -> LineList {
        (0..self.rows).filter(|&r| self.is_row_full(r)).collect()
    }

    /// Indices of all full columns, ascending
    pub fn full_columns(&self) -> LineList {
        (0..self.columns).filter(|&c| self.is_column_full(c)).collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| !c)
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Rows as vectors of booleans, top to bottom
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.columns).map(<[bool]>::to_vec).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.columns).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &occupied in row {
                write!(f, "{}", if occupied { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}
