//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, so they can be shared by the
//! rule engine, the session layer and any collaborator that renders or stores state.
//!
//! # Grid Dimensions
//!
//! The default board is a 10x10 grid:
//!
//! - **Rows**: 10 (indexed 0-9, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Upper bound**: 32 in either axis ([`MAX_GRID_DIM`])
//!
//! # Gameplay Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_LOOKAHEAD` | 3 | Shapes visible in the supply queue |
//! | `DEFAULT_SLOT_COUNT` | 3 | Player-facing shape slots |
//! | `PER_BLOCK_POINTS` | 10 | Points per placed block |
//! | `PER_LINE_POINTS` | 10 | Line clear base (scaled by `lines * lines`) |
//! | `ADVENTURE_CHANCE_PERCENT` | 30 | Chance a session starts from a level pattern |
//! | `SNAP_THRESHOLD` | 0.7 | Max pointer distance (cells) for snapping |
//!
//! # Examples
//!
//! ```
//! use blockfit_types::{Offset, RefillPolicy, DEFAULT_COLUMNS, DEFAULT_ROWS};
//!
//! let offset = Offset::new(1, 2);
//! assert_eq!((offset.row, offset.col), (1, 2));
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(RefillPolicy::from_str("when-all-empty"), Some(RefillPolicy::WhenAllEmpty));
//!
//! assert_eq!(DEFAULT_ROWS, 10);
//! assert_eq!(DEFAULT_COLUMNS, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Default grid height in cells (10 rows)
pub const DEFAULT_ROWS: usize = 10;

/// Default grid width in cells (10 columns)
pub const DEFAULT_COLUMNS: usize = 10;

/// Largest supported grid dimension in either axis.
///
/// Bounds the inline capacity of cleared-line lists so line scans never allocate.
pub const MAX_GRID_DIM: usize = 32;

/// Largest supported shape, in cells (a full 5x5 block)
pub const MAX_SHAPE_CELLS: usize = 25;

/// Number of upcoming shapes kept in the supply queue
pub const DEFAULT_LOOKAHEAD: usize = 3;

/// Number of player-facing slots
pub const DEFAULT_SLOT_COUNT: usize = 3;

/// Points awarded per block when a shape is committed
pub const PER_BLOCK_POINTS: u32 = 10;

/// Base points for a line clear; the award is `PER_LINE_POINTS * n * n` for `n` lines
pub const PER_LINE_POINTS: u32 = 10;

/// Chance (percent) that a new session starts from a pre-filled level pattern
pub const ADVENTURE_CHANCE_PERCENT: u32 = 30;

/// Maximum distance, in cells, between the pointer and a snapped origin
pub const SNAP_THRESHOLD: f32 = 0.7;


/// Offset of a single block relative to its shape's top-left corner
///
/// Ordering is row-major (row first, then column), which is the order shapes
/// store their cells in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub row: u8,
    pub col: u8,
}

impl Offset {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Opaque color/identity tag carried by a shape
///
/// The engine never interprets it; renderers map it to an actual color.
/// The named constants are the default catalog's palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorId(pub u8);

impl ColorId {
    pub const RUBY: ColorId = ColorId(0);
    pub const TEAL: ColorId = ColorId(1);
    pub const SAPPHIRE: ColorId = ColorId(2);
    pub const AMBER: ColorId = ColorId(3);
    pub const EMERALD: ColorId = ColorId(4);
    pub const CORAL: ColorId = ColorId(5);
    pub const AMETHYST: ColorId = ColorId(6);
    pub const ROSE: ColorId = ColorId(7);
    /// Grey used for pre-filled pattern cells
    pub const STONE: ColorId = ColorId(8);
}

/// When emptied slots are handed new shapes
///
/// - **Immediate**: a slot is refilled from the supply as soon as its shape is placed
/// - **WhenAllEmpty**: slots stay empty until every slot has been used, then all are refilled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefillPolicy {
    #[default]
    Immediate,
    WhenAllEmpty,
}

impl RefillPolicy {
    /// Parse a refill policy from string (case-insensitive)
    ///
    /// Accepts `immediate` | `each`, and `when_all_empty` | `when-all-empty` | `all`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfit_types::RefillPolicy;
    ///
    /// assert_eq!(RefillPolicy::from_str("Immediate"), Some(RefillPolicy::Immediate));
    /// assert_eq!(RefillPolicy::from_str("when_all_empty"), Some(RefillPolicy::WhenAllEmpty));
    /// assert_eq!(RefillPolicy::from_str("never"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "immediate" | "each" => Some(RefillPolicy::Immediate),
            "when_all_empty" | "when-all-empty" | "all" => Some(RefillPolicy::WhenAllEmpty),
            _ => None,
        }
    }

    /// Convert to snake_case string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RefillPolicy::Immediate => "immediate",
            RefillPolicy::WhenAllEmpty => "when_all_empty",
        }
    }
}
