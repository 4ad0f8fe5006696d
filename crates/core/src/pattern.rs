//! Level patterns - pre-filled cells applied before the first move
//!
//! A pattern is a one-time setup: it writes directly into the grid before any
//! placement, outside the normal placement path. Sessions pick a pattern with a
//! configurable chance and never pick the same pattern twice in a row when an
//! alternative exists.

use log::{debug, warn};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::types::ColorId;

fn default_fill() -> ColorId {
    ColorId::STONE
}

/// A named set of `(row, col)` cells to pre-fill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelPattern {
    pub id: String,
    pub cells: Vec<(usize, usize)>,
    #[serde(default = "default_fill")]
    pub color: ColorId,
}

impl LevelPattern {
    pub fn new(id: impl Into<String>, cells: Vec<(usize, usize)>) -> Self {
        Self {
            id: id.into(),
            cells,
            color: ColorId::STONE,
        }
    }

    /// Occupy the pattern's cells on `grid` and return how many were applied.
    ///
    /// Cells outside the grid are skipped with a warning.
    pub fn apply(&self, grid: &mut Grid) -> usize {
        let mut applied = 0;
        for &(row, col) in &self.cells {
            let in_range = i32::try_from(row)
                .ok()
                .zip(i32::try_from(col).ok())
                .is_some_and(|(r, c)| grid.set(r, c, true));
            if in_range {
                applied += 1;
            } else {
                warn!(
                    "pattern {}: cell ({}, {}) outside {}x{} grid, skipped",
                    self.id,
                    row,
                    col,
                    grid.rows(),
                    grid.columns()
                );
            }
        }
        debug!("pattern {}: pre-filled {} cells", self.id, applied);
        applied
    }
}

/// Pick a pattern uniformly, avoiding `last_id` unless it is the only choice
pub fn choose_pattern<'a, R: RngCore + ?Sized>(
    patterns: &'a [LevelPattern],
    last_id: Option<&str>,
    rng: &mut R,
) -> Option<&'a LevelPattern> {
    let fresh: Vec<&LevelPattern> = patterns
        .iter()
        .filter(|p| Some(p.id.as_str()) != last_id)
        .collect();
    let candidates: Vec<&LevelPattern> = if fresh.is_empty() {
        patterns.iter().collect()
    } else {
        fresh
    };
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.gen_range(0..candidates.len())])
}
