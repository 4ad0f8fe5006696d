//! Scoring module - block placement and line clear points
//!
//! Rules:
//! - Committing a shape awards `per_block_points * block_count`.
//! - Clearing `n` lines (rows and columns together) in one placement awards
//!   `per_line_points * n * n`, so simultaneous clears beat the same lines cleared
//!   one at a time.
//!
//! A cell at the intersection of a cleared row and a cleared column counts toward
//! both lines; there is no intersection correction.

use serde::{Deserialize, Serialize};

use crate::types::{PER_BLOCK_POINTS, PER_LINE_POINTS};

/// Point values for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRules {
    pub per_block_points: u32,
    pub per_line_points: u32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            per_block_points: PER_BLOCK_POINTS,
            per_line_points: PER_LINE_POINTS,
        }
    }
}

impl ScoreRules {
    /// Points for committing a shape of `block_count` blocks
    pub fn placement_score(&self, block_count: usize) -> u32 {
        calculate_placement_score(self.per_block_points, block_count)
    }

    /// Points for clearing `lines` lines in a single placement
    pub fn line_clear_score(&self, lines: usize) -> u32 {
        calculate_line_clear_score(self.per_line_points, lines)
    }
}

/// `per_block * block_count`, saturating
pub fn calculate_placement_score(per_block: u32, block_count: usize) -> u32 {
    per_block.saturating_mul(block_count as u32)
}

/// `per_line * lines * lines`, saturating; zero lines score zero
pub fn calculate_line_clear_score(per_line: u32, lines: usize) -> u32 {
    let lines = lines as u32;
    per_line.saturating_mul(lines).saturating_mul(lines)
}

/// Current and best score for one session
///
/// `current` only ever grows. `best` starts from whatever the persistence
/// collaborator hands in and tracks `max(best, current)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    current: u32,
    best: u32,
}

impl ScoreBoard {
    pub fn new(best_seed: u32) -> Self {
        Self {
            current: 0,
            best: best_seed,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Add points and return the new total
    pub fn add(&mut self, points: u32) -> u32 {
        self.current = self.current.saturating_add(points);
        if self.current > self.best {
            self.best = self.current;
        }
        self.current
    }

    /// True when the current score beats the seed it started from
    pub fn is_new_best(&self) -> bool {
        self.current > 0 && self.current == self.best
    }
}
