//! Runner configuration: JSON file first, then command-line overrides.
//!
//! The file holds a [`SessionConfig`]; every field is optional and falls back to
//! the compiled-in defaults.
//!
//! ```json
//! {
//!   "rows": 8,
//!   "columns": 8,
//!   "refill": "when_all_empty",
//!   "rules": { "per_block_points": 1, "per_line_points": 10 },
//!   "patterns": [{ "id": "corners", "cells": [[0, 0], [7, 7]] }]
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::extended_catalog;
use crate::engine::SessionConfig;
use crate::types::RefillPolicy;

/// Overrides taken from the command line; `None` keeps the file/default value
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub lookahead: Option<usize>,
    pub slots: Option<usize>,
    pub refill: Option<RefillPolicy>,
    pub best_score: Option<u32>,
    pub extended_catalog: bool,
}

/// Parse a session config from JSON text
pub fn parse_session_config(text: &str) -> Result<SessionConfig> {
    serde_json::from_str(text).context("invalid session config")
}

/// Load the session config from `path`, or defaults when no path is given
pub fn load_session_config(path: Option<&Path>) -> Result<SessionConfig> {
    let Some(path) = path else {
        return Ok(SessionConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("config: failed to read {}", path.display()))?;
    parse_session_config(&text).with_context(|| format!("config: {}", path.display()))
}

/// Apply command-line overrides on top of a loaded config
pub fn apply_overrides(mut config: SessionConfig, overrides: &Overrides) -> SessionConfig {
    if let Some(rows) = overrides.rows {
        config.rows = rows;
    }
    if let Some(columns) = overrides.columns {
        config.columns = columns;
    }
    if let Some(lookahead) = overrides.lookahead {
        config.lookahead = lookahead;
    }
    if let Some(slots) = overrides.slots {
        config.slot_count = slots;
    }
    if let Some(refill) = overrides.refill {
        config.refill = refill;
    }
    if let Some(best) = overrides.best_score {
        config.best_score = best;
    }
    if overrides.extended_catalog {
        config.catalog = extended_catalog();
    }
    config
}
