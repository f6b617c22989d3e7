//! Core value types: players, ring geometry, board, state, configuration,
//! move records, RNG.
//!
//! Nothing here knows the rules. The rule set in `games::oware` drives every
//! transition between states.

pub mod player;
pub mod ring;
pub mod config;
pub mod board;
pub mod state;
pub mod record;
pub mod rng;

pub use player::{Player, PlayerMap};
pub use ring::{PitIndex, Ring};
pub use config::{ResidualPolicy, RuleConfig};
pub use board::Board;
pub use state::GameState;
pub use record::MoveRecord;
pub use rng::GameRng;
