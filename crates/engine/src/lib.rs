//! Engine module - placement, sessions and input helpers
//!
//! Builds on the pure rules in `blockfit-core`:
//!
//! - [`placement`]: the validate/commit/clear/score pipeline over an owned grid
//! - [`session`]: player-facing slots, refills and the one-way game-over transition
//! - [`snap`]: pointer forgiveness for drop targets, kept outside the placement path
//! - [`snapshot`]: serializable session views for renderers and tooling
//!
//! # Example
//!
//! ```
//! use blockfit_engine::{GameSession, SessionConfig};
//! use blockfit_engine::core::SimpleRng;
//!
//! let mut session = GameSession::new(SessionConfig::default(), SimpleRng::new(7)).unwrap();
//! let report = session.place(0, 0, 0).unwrap();
//! assert!(report.outcome.accepted);
//! assert!(session.score() > 0);
//! ```

pub mod placement;
pub mod session;
pub mod snap;
pub mod snapshot;

pub use blockfit_core as core;
pub use blockfit_types as types;

pub use placement::{PlacementEngine, PlacementOutcome, Rejection};
pub use session::{GameSession, SessionConfig, SessionError, TurnReport};
pub use snap::{nearest_valid_origin, PointerPos};
pub use snapshot::{grid_hash, SessionSnapshot};
