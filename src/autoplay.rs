//! Headless autoplayer used by the `blockfit` binary, tests and benches.
//!
//! A [`Strategy`] looks at the grid and the held slots and picks a move; the
//! runner feeds that move through [`GameSession::place`] until the session ends
//! or a turn cap is hit.

use anyhow::{bail, Result};
use clap::ValueEnum;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{first_fit, valid_origins, Grid, Shape, SimpleRng};
use crate::engine::{grid_hash, GameSession, SessionConfig};

/// Place the shape in `slot` at `(row, col)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub slot: usize,
    pub row: i32,
    pub col: i32,
}

pub trait Strategy {
    fn name(&self) -> &'static str;

    /// Pick a legal move, or `None` when no held shape fits
    fn choose(&mut self, grid: &Grid, slots: &[Option<Shape>]) -> Option<Move>;
}

/// Lowest slot, first row-major origin
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFit;

impl Strategy for FirstFit {
    fn name(&self) -> &'static str {
        "first-fit"
    }

    fn choose(&mut self, grid: &Grid, slots: &[Option<Shape>]) -> Option<Move> {
        slots.iter().enumerate().find_map(|(slot, held)| {
            let shape = held.as_ref()?;
            first_fit(shape, grid).map(|(row, col)| Move { slot, row, col })
        })
    }
}

/// Most lines cleared, then most contact with walls and blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Greedy {
    fn lines_completed(grid: &Grid, shape: &Shape, row: i32, col: i32) -> usize {
        let mut after = grid.clone();
        after.occupy(shape, row, col);
        after.full_rows().len() + after.full_columns().len()
    }

    fn contact(grid: &Grid, shape: &Shape, row: i32, col: i32) -> usize {
        const SIDES: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        shape
            .cells_at(row, col)
            .flat_map(|(r, c)| SIDES.iter().map(move |(dr, dc)| (r + dr, c + dc)))
            .filter(|&(r, c)| grid.get(r, c).unwrap_or(true))
            .count()
    }
}

impl Strategy for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose(&mut self, grid: &Grid, slots: &[Option<Shape>]) -> Option<Move> {
        let mut best: Option<(Move, (usize, usize))> = None;
        for (slot, held) in slots.iter().enumerate() {
            let Some(shape) = held else { continue };
            for (row, col) in valid_origins(shape, grid) {
                let key = (
                    Self::lines_completed(grid, shape, row, col),
                    Self::contact(grid, shape, row, col),
                );
                if best.map_or(true, |(_, k)| key > k) {
                    best = Some((Move { slot, row, col }, key));
                }
            }
        }
        best.map(|(mv, _)| mv)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    #[default]
    Greedy,
    FirstFit,
}

impl StrategyKind {
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Greedy => Box::new(Greedy),
            StrategyKind::FirstFit => Box::new(FirstFit),
        }
    }
}

/// Result of one autoplayed session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub seed: u32,
    pub strategy: String,
    pub score: u32,
    pub best_score: u32,
    pub turns: u32,
    pub lines_cleared: u64,
    pub blocks_placed: u64,
    pub game_over: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_id: Option<String>,
    pub grid_hash: u64,
}

/// Play one session from `seed` until game over or `max_turns` placements
pub fn play_game(
    config: SessionConfig,
    seed: u32,
    strategy: &mut dyn Strategy,
    max_turns: u32,
) -> Result<GameSummary> {
    let mut session = GameSession::new(config, SimpleRng::new(seed))?;
    let mut lines_cleared = 0u64;
    let mut blocks_placed = 0u64;

    while !session.is_game_over() && session.turn() < max_turns {
        let Some(mv) = strategy.choose(session.grid(), session.slots()) else {
            bail!("{} found no move in a live session", strategy.name());
        };
        let blocks = session.slots()[mv.slot].as_ref().map_or(0, Shape::block_count);
        let report = session.place(mv.slot, mv.row, mv.col)?;
        if let Some(reason) = report.outcome.rejection {
            bail!("{} chose {:?}: {}", strategy.name(), mv, reason.message());
        }
        lines_cleared += report.outcome.lines_cleared() as u64;
        blocks_placed += blocks as u64;
        debug!(
            "turn {}: slot {} at ({}, {}) +{} -> {}",
            session.turn(),
            mv.slot,
            mv.row,
            mv.col,
            report.outcome.points(),
            report.outcome.new_score
        );
    }

    let summary = GameSummary {
        seed,
        strategy: strategy.name().to_owned(),
        score: session.score(),
        best_score: session.best_score(),
        turns: session.turn(),
        lines_cleared,
        blocks_placed,
        game_over: session.is_game_over(),
        pattern_id: session.pattern_id().map(str::to_owned),
        grid_hash: grid_hash(session.grid()),
    };
    info!(
        "seed {}: {} points in {} turns ({} lines)",
        summary.seed, summary.score, summary.turns, summary.lines_cleared
    );
    Ok(summary)
}

/// Play `games` sessions on consecutive seeds
///
/// The best score and last level pattern carry from one session to the next the
/// way a persistence layer would hand them back.
pub fn run_games(
    mut config: SessionConfig,
    first_seed: u32,
    games: u32,
    kind: StrategyKind,
    max_turns: u32,
) -> Result<Vec<GameSummary>> {
    let mut strategy = kind.build();
    let mut summaries = Vec::with_capacity(games as usize);
    for i in 0..games {
        let summary = play_game(
            config.clone(),
            first_seed.wrapping_add(i),
            strategy.as_mut(),
            max_turns,
        )?;
        config.best_score = summary.best_score;
        if summary.pattern_id.is_some() {
            config.last_pattern_id = summary.pattern_id.clone();
        }
        summaries.push(summary);
    }
    Ok(summaries)
}
