//! Core rules module - pure, deterministic, and testable
//!
//! This crate contains the grid, shapes, the bag-randomized shape supply, scoring
//! and game-over detection. It has **no dependencies** on rendering, input or I/O:
//!
//! - **Deterministic**: randomness is injected, so the same seed gives the same game
//! - **Testable**: every rule is a plain function or method on plain data
//! - **Allocation-free hot path**: placement checks and line scans never allocate
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size occupancy matrix with row/column completion queries
//! - [`shape`]: normalized polyomino descriptors
//! - [`catalog`]: built-in shape tables
//! - [`rng`]: seedable LCG and Fisher-Yates shuffle
//! - [`supply`]: bag randomizer feeding a bounded lookahead
//! - [`scoring`]: block and line-clear points, current/best score
//! - [`game_over`]: brute-force "any move left?" search
//! - [`pattern`]: pre-filled level patterns
//!
//! # Game Rules
//!
//! - **Placement**: a shape fits if every block lands in bounds on an empty cell
//! - **Lines**: full rows and full columns clear together after each placement
//! - **Scoring**: `10` per block, plus `10 * n * n` for `n` lines cleared at once
//! - **Bag**: every catalog shape appears once per shuffled bag
//! - **Game over**: none of the held shapes fits anywhere
//!
//! # Example
//!
//! ```
//! use blockfit_core::{default_catalog, has_any_move, Grid, ShapeSupply, SimpleRng};
//!
//! let grid = Grid::new(10, 10).unwrap();
//! let mut supply = ShapeSupply::new(default_catalog(), 10, 10, 3, SimpleRng::new(12345)).unwrap();
//!
//! let shape = supply.take_next();
//! assert!(grid.can_accommodate(&shape, 0, 0));
//! assert!(has_any_move(supply.peek_all(), &grid));
//! ```

pub mod catalog;
pub mod error;
pub mod game_over;
pub mod grid;
pub mod pattern;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod supply;

pub use blockfit_types as types;

// Re-export commonly used types for convenience
pub use catalog::{builtin_shape, default_catalog, extended_catalog};
pub use error::ConfigError;
pub use game_over::{can_place_anywhere, first_fit, has_any_move, valid_origins};
pub use grid::{Grid, LineList};
pub use pattern::{choose_pattern, LevelPattern};
pub use rng::{roll_chance, shuffle, SimpleRng};
pub use scoring::{ScoreBoard, ScoreRules};
pub use shape::{Shape, ShapeDef};
pub use supply::ShapeSupply;
