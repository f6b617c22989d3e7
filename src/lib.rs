//! # oware
//!
//! Rules engine for Oware, built to be driven by an adversarial search.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: the engine never mutates a state. `apply_move`
//!    returns a fresh successor, so a search can explore sibling branches
//!    (in parallel if it likes) without any aliasing.
//!
//! 2. **Configuration over constants**: board size, starting seeds, the
//!    capture window, the low-seed cutoff, and residual seed attribution are
//!    all `RuleConfig` values.
//!
//! 3. **Loud failures**: illegal moves, misuse on finished games, and any
//!    broken seed-conservation invariant come back as `EngineError`s.
//!
//! ## Modules
//!
//! - `core`: Players, ring geometry, board, state, configuration, move
//!   records, RNG
//! - `rules`: `RulesEngine` trait consumed by search drivers
//! - `games`: The Oware rule set
//! - `playout`: Random playouts and perft over any `RulesEngine`
//! - `error`: `EngineError`

pub mod core;
pub mod error;
pub mod games;
pub mod playout;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, GameRng, GameState, MoveRecord, PitIndex, Player, PlayerMap,
    ResidualPolicy, Ring, RuleConfig,
};

pub use crate::error::{EngineError, IllegalReason, StateFault};

pub use crate::games::oware::{Oware, OwareBuilder};

pub use crate::playout::{perft, random_playout, PlayoutSummary};

pub use crate::rules::{GameResult, MoveList, RulesEngine};
