//! blockfit (workspace facade crate).
//!
//! Re-exports the member crates as `blockfit::{core, engine, types}` and hosts the
//! pieces the headless runner needs: config loading, logging and the autoplayer.

pub use blockfit_core as core;
pub use blockfit_engine as engine;
pub use blockfit_types as types;

pub mod autoplay;
pub mod config;
pub mod logging;
