//! Snapshot module - read-only session views for renderers and tooling
//!
//! A [`SessionSnapshot`] is plain serializable data; [`grid_hash`] gives a cheap
//! fingerprint for comparing boards across replays.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::core::{Grid, Shape};
use crate::session::GameSession;

/// Read-only, serializable view of a session
///
/// Grid rows are rendered as strings of `#` (occupied) and `.` (empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub rows: usize,
    pub columns: usize,
    pub grid: Vec<String>,
    pub grid_hash: u64,
    pub slots: Vec<Option<Shape>>,
    pub lookahead: Vec<Shape>,
    pub score: u32,
    pub best_score: u32,
    pub turn: u32,
    pub game_over: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_id: Option<String>,
}

impl SessionSnapshot {
    pub fn capture<R: RngCore>(session: &GameSession<R>) -> Self {
        let grid = session.grid();
        Self {
            rows: grid.rows(),
            columns: grid.columns(),
            grid: grid.to_string().lines().map(str::to_owned).collect(),
            grid_hash: grid_hash(grid),
            slots: session.slots().to_vec(),
            lookahead: session.lookahead().cloned().collect(),
            score: session.score(),
            best_score: session.best_score(),
            turn: session.turn(),
            game_over: session.is_game_over(),
            pattern_id: session.pattern_id().map(str::to_owned),
        }
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

/// FNV-1a 64-bit hash of the occupancy matrix (one byte per cell, row-major)
pub fn grid_hash(grid: &Grid) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for &occupied in grid.cells() {
        h ^= u64::from(occupied);
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}
