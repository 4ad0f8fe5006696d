//! Game session - slots, refills and the game-over transition
//!
//! A session wires the pieces together for one round of play:
//!
//! - the [`ShapeSupply`] feeds a fixed number of player-facing slots
//! - placements go through the [`PlacementEngine`]
//! - emptied slots are refilled according to the [`RefillPolicy`]
//! - after every refill or placement the held shapes are checked for any legal move
//!
//! Once no held shape fits, the session is over for good. The turn on which that
//! happens is the only one whose [`TurnReport`] has `game_over` set.

use log::info;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{
    choose_pattern, default_catalog, has_any_move, roll_chance, ConfigError, Grid, LevelPattern,
    ScoreRules, Shape, ShapeSupply, SimpleRng,
};
use crate::placement::{PlacementEngine, PlacementOutcome};
use crate::snapshot::SessionSnapshot;
use crate::types::{
    RefillPolicy, ADVENTURE_CHANCE_PERCENT, DEFAULT_COLUMNS, DEFAULT_LOOKAHEAD, DEFAULT_ROWS,
    DEFAULT_SLOT_COUNT,
};

/// Everything needed to start a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub rows: usize,
    pub columns: usize,
    pub lookahead: usize,
    pub slot_count: usize,
    pub refill: RefillPolicy,
    pub rules: ScoreRules,
    /// Best score handed in by the persistence layer
    pub best_score: u32,
    pub catalog: Vec<Shape>,
    pub patterns: Vec<LevelPattern>,
    /// Chance (percent) of starting from one of `patterns`
    pub pattern_chance_percent: u32,
    /// Pattern used by the previous session, avoided when possible
    pub last_pattern_id: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            lookahead: DEFAULT_LOOKAHEAD,
            slot_count: DEFAULT_SLOT_COUNT,
            refill: RefillPolicy::default(),
            rules: ScoreRules::default(),
            best_score: 0,
            catalog: default_catalog(),
            patterns: Vec::new(),
            pattern_chance_percent: ADVENTURE_CHANCE_PERCENT,
            last_pattern_id: None,
        }
    }
}

/// Requests the session refuses outright
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session is over")]
    GameOver,
    #[error("slot {slot} out of range ({count} slots)")]
    SlotOutOfRange { slot: usize, count: usize },
    #[error("slot {0} is empty")]
    EmptySlot(usize),
}

impl SessionError {
    pub fn code(self) -> &'static str {
        match self {
            SessionError::GameOver => "game_over",
            SessionError::SlotOutOfRange { .. } => "slot_out_of_range",
            SessionError::EmptySlot(_) => "empty_slot",
        }
    }
}

/// What happened during one placement request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub outcome: PlacementOutcome,
    /// Slots that received a new shape after the placement
    pub refilled_slots: Vec<usize>,
    /// True only on the turn the session became terminal
    pub game_over: bool,
}

/// One round of play
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    engine: PlacementEngine,
    supply: ShapeSupply<R>,
    slots: Vec<Option<Shape>>,
    refill: RefillPolicy,
    game_over: bool,
    turn: u32,
    pattern_id: Option<String>,
}

impl<R: RngCore> GameSession<R> {
    /// Build the grid, supply and engine, apply a level pattern if one is rolled,
    /// fill the slots and run the first game-over check.
    ///
    /// A session can start already over, for example when a dense pattern leaves no
    /// room for the first slots. No [`TurnReport`] carries that signal, so callers
    /// check [`GameSession::is_game_over`] right after construction.
    pub fn new(config: SessionConfig, mut rng: R) -> Result<Self, ConfigError> {
        if config.slot_count == 0 {
            return Err(ConfigError::InvalidSlotCount);
        }
        let mut grid = Grid::new(config.rows, config.columns)?;

        let mut pattern_id = None;
        if !config.patterns.is_empty() && roll_chance(&mut rng, config.pattern_chance_percent) {
            if let Some(pattern) =
                choose_pattern(&config.patterns, config.last_pattern_id.as_deref(), &mut rng)
            {
                pattern.apply(&mut grid);
                pattern_id = Some(pattern.id.clone());
            }
        }

        let supply = ShapeSupply::new(
            config.catalog,
            config.rows,
            config.columns,
            config.lookahead,
            rng,
        )?;
        let engine = PlacementEngine::new(grid, config.rules, config.best_score);

        let mut session = Self {
            engine,
            supply,
            slots: vec![None; config.slot_count],
            refill: config.refill,
            game_over: false,
            turn: 0,
            pattern_id,
        };
        session.fill_empty_slots();
        session.check_game_over();

        info!(
            "session start: {}x{} grid, {} slots, pattern {:?}",
            config.rows, config.columns, config.slot_count, session.pattern_id
        );
        Ok(session)
    }

    /// Place the shape held in `slot` with its top-left corner at `(row, col)`.
    ///
    /// A placement that does not fit is not an error: the report's outcome is
    /// rejected and the slot keeps its shape.
    pub fn place(&mut self, slot: usize, row: i32, col: i32) -> Result<TurnReport, SessionError> {
        if self.game_over {
            return Err(SessionError::GameOver);
        }
        let count = self.slots.len();
        let held = self
            .slots
            .get(slot)
            .ok_or(SessionError::SlotOutOfRange { slot, count })?;
        let Some(shape) = held.as_ref() else {
            return Err(SessionError::EmptySlot(slot));
        };

        let outcome = self.engine.place(shape, row, col);
        if !outcome.accepted {
            return Ok(TurnReport {
                outcome,
                refilled_slots: Vec::new(),
                game_over: false,
            });
        }

        self.slots[slot] = None;
        self.turn += 1;

        let refilled_slots = match self.refill {
            RefillPolicy::Immediate => self.fill_empty_slots(),
            RefillPolicy::WhenAllEmpty if self.slots.iter().all(Option::is_none) => {
                self.fill_empty_slots()
            }
            RefillPolicy::WhenAllEmpty => Vec::new(),
        };

        let game_over = self.check_game_over();
        Ok(TurnReport {
            outcome,
            refilled_slots,
            game_over,
        })
    }

    /// Draw a shape into every empty slot; returns the refilled indices
    fn fill_empty_slots(&mut self) -> Vec<usize> {
        let mut refilled = Vec::new();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_none() {
                *slot = Some(self.supply.take_next());
                refilled.push(i);
            }
        }
        refilled
    }

    /// Returns true if this call ended the session
    fn check_game_over(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if has_any_move(self.held_shapes(), self.engine.grid()) {
            return false;
        }
        self.game_over = true;
        info!(
            "game over after {} turns: score {} (best {})",
            self.turn,
            self.engine.score().current(),
            self.engine.score().best()
        );
        true
    }

    /// Check a placement without committing it
    pub fn can_place(&self, slot: usize, row: i32, col: i32) -> bool {
        match self.slots.get(slot) {
            Some(Some(shape)) => self.engine.can_place(shape, row, col),
            _ => false,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    pub fn slots(&self) -> &[Option<Shape>] {
        &self.slots
    }

    /// Shapes currently held in slots, in slot order
    pub fn held_shapes(&self) -> impl Iterator<Item = &Shape> + '_ {
        self.slots.iter().flatten()
    }

    /// Upcoming shapes, in the order slots will receive them
    pub fn lookahead(&self) -> impl ExactSizeIterator<Item = &Shape> + '_ {
        self.supply.peek_all()
    }

    pub fn score(&self) -> u32 {
        self.engine.score().current()
    }

    pub fn best_score(&self) -> u32 {
        self.engine.score().best()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Number of accepted placements so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Id of the level pattern this session started from, if any
    pub fn pattern_id(&self) -> Option<&str> {
        self.pattern_id.as_deref()
    }

    pub fn rules(&self) -> ScoreRules {
        self.engine.rules()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }
}
