//! Placement engine - validate, commit, clear, score
//!
//! The engine owns the grid and the score. Each placement runs to completion:
//!
//! 1. **Validate** against the grid; a failed check changes nothing
//! 2. **Commit** the shape and award block points
//! 3. **Scan** every row and column from scratch for completions
//! 4. **Clear** all completed lines at once and award `per_line * n * n`
//! 5. **Report** a [`PlacementOutcome`] for renderers and audio to act on

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{Grid, LevelPattern, LineList, ScoreBoard, ScoreRules, Shape};

/// Why a placement was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// At least one block would land outside the grid
    OutOfBounds,
    /// At least one block would land on an occupied cell
    Blocked,
}

impl Rejection {
    pub fn code(self) -> &'static str {
        match self {
            Rejection::OutOfBounds => "out_of_bounds",
            Rejection::Blocked => "blocked",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Rejection::OutOfBounds => "shape would extend outside the grid",
            Rejection::Blocked => "shape overlaps occupied cells",
        }
    }
}

/// Result record of one placement attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementOutcome {
    pub accepted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
    /// Points for the placed blocks
    pub placement_points: u32,
    /// Points for cleared lines
    pub line_points: u32,
    /// Session score after this placement
    pub new_score: u32,
    pub cleared_rows: LineList,
    pub cleared_columns: LineList,
}

impl PlacementOutcome {
    fn rejected(reason: Rejection, score: u32) -> Self {
        Self {
            accepted: false,
            rejection: Some(reason),
            placement_points: 0,
            line_points: 0,
            new_score: score,
            cleared_rows: LineList::new(),
            cleared_columns: LineList::new(),
        }
    }

    pub fn cleared_any(&self) -> bool {
        !self.cleared_rows.is_empty() || !self.cleared_columns.is_empty()
    }

    /// Rows plus columns cleared
    pub fn lines_cleared(&self) -> usize {
        self.cleared_rows.len() + self.cleared_columns.len()
    }

    /// Total points awarded by this placement
    pub fn points(&self) -> u32 {
        self.placement_points.saturating_add(self.line_points)
    }
}

/// Owns the grid and the score; the only writer of either during play
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    grid: Grid,
    score: ScoreBoard,
    rules: ScoreRules,
}

impl PlacementEngine {
    pub fn new(grid: Grid, rules: ScoreRules, best_score: u32) -> Self {
        Self {
            grid,
            score: ScoreBoard::new(best_score),
            rules,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    pub fn rules(&self) -> ScoreRules {
        self.rules
    }

    pub fn can_place(&self, shape: &Shape, row: i32, col: i32) -> bool {
        self.grid.can_accommodate(shape, row, col)
    }

    /// Check a placement and explain a failure
    pub fn validate(&self, shape: &Shape, row: i32, col: i32) -> Result<(), Rejection> {
        if self.grid.can_accommodate(shape, row, col) {
            return Ok(());
        }
        let off_grid = shape
            .cells_at(row, col)
            .any(|(r, c)| !self.grid.is_in_bounds(r, c));
        Err(if off_grid {
            Rejection::OutOfBounds
        } else {
            Rejection::Blocked
        })
    }

    /// Attempt to place `shape` with its top-left corner at `(row, col)`
    pub fn place(&mut self, shape: &Shape, row: i32, col: i32) -> PlacementOutcome {
        if let Err(reason) = self.validate(shape, row, col) {
            trace!("place {} at ({}, {}) rejected: {}", shape.name(), row, col, reason.code());
            return PlacementOutcome::rejected(reason, self.score.current());
        }

        self.grid.occupy(shape, row, col);
        let placement_points = self.rules.placement_score(shape.block_count());
        self.score.add(placement_points);

        // Scan everything before clearing anything so crossing lines both count.
        let cleared_rows = self.grid.full_rows();
        let cleared_columns = self.grid.full_columns();
        for &r in &cleared_rows {
            self.grid.clear_row(r);
        }
        for &c in &cleared_columns {
            self.grid.clear_column(c);
        }

        let lines = cleared_rows.len() + cleared_columns.len();
        let line_points = self.rules.line_clear_score(lines);
        let new_score = self.score.add(line_points);
        if lines > 0 {
            debug!(
                "cleared rows {:?} columns {:?} (+{} points)",
                cleared_rows.as_slice(),
                cleared_columns.as_slice(),
                line_points
            );
        }

        PlacementOutcome {
            accepted: true,
            rejection: None,
            placement_points,
            line_points,
            new_score,
            cleared_rows,
            cleared_columns,
        }
    }

    /// Pre-fill cells from a level pattern. Setup only: call before the first placement.
    pub fn apply_pattern(&mut self, pattern: &LevelPattern) -> usize {
        pattern.apply(&mut self.grid)
    }
}
