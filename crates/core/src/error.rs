//! Configuration errors raised when building engine components.
//!
//! These are setup mistakes, not runtime conditions: every constructor that can
//! fail does so up front, before the first move of a session.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("shape catalog is empty")]
    EmptyCatalog,

    #[error("invalid grid dimensions {rows}x{columns} (each must be in 1..={max})")]
    InvalidDimensions {
        rows: usize,
        columns: usize,
        max: usize,
    },

    #[error("lookahead size must be at least 1")]
    InvalidLookahead,

    #[error("slot count must be at least 1")]
    InvalidSlotCount,

    #[error("shape `{name}` has no cells")]
    EmptyShape { name: String },

    #[error("shape `{name}` has {cells} cells (max {max})")]
    ShapeTooLarge {
        name: String,
        cells: usize,
        max: usize,
    },

    #[error("shape `{name}` has offset ({row}, {col}) outside the supported range")]
    OffsetOutOfRange { name: String, row: i64, col: i64 },

    #[error("shape `{name}` ({height}x{width}) cannot fit on a {rows}x{columns} grid")]
    ShapeExceedsGrid {
        name: String,
        height: usize,
        width: usize,
        rows: usize,
        columns: usize,
    },
}
