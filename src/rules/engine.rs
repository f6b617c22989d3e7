//! Rules engine trait consumed by search drivers.
//!
//! A driver owns a `GameState`, asks for legal moves, applies candidates to
//! get successors, recurses, and reads the evaluation back. The engine never
//! initiates turns and knows nothing about search depth.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameState, PitIndex, Player, RuleConfig};
use crate::error::EngineError;

/// Legal pits for one turn, ascending. One row never holds more than the
/// inline capacity on a standard board.
pub type MoveList = SmallVec<[PitIndex; 6]>;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - Every method takes `&self` and leaves its input state untouched;
///   `apply_move` returns a fresh successor.
/// - `legal_moves` errors on a terminal state rather than returning an
///   empty list, so "no moves" never doubles as a failure signal.
/// - `evaluate` is conventionally called with the player who just moved
///   (the side the parent node maximizes for).
pub trait RulesEngine {
    /// Get the rule configuration.
    fn config(&self) -> &RuleConfig;

    /// Starting position.
    fn initial_state(&self) -> GameState;

    /// Legal pits for the player to move.
    fn legal_moves(&self, state: &GameState) -> Result<MoveList, EngineError>;

    /// Play `pit` for the player to move and return the successor.
    fn apply_move(&self, state: &GameState, pit: PitIndex) -> Result<GameState, EngineError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> bool;

    /// Heuristic value of `state` from `perspective`'s point of view.
    fn evaluate(&self, state: &GameState, perspective: Player) -> i64;

    /// Outcome of a finished game. Fails with `GameNotOver` otherwise.
    fn winner(&self, state: &GameState) -> Result<GameResult, EngineError>;

    // === Convenience Methods ===

    /// `Some(result)` if the game has ended, `None` if it continues.
    fn result(&self, state: &GameState) -> Option<GameResult> {
        self.winner(state).ok()
    }

    /// Every legal move paired with its successor.
    fn successors(&self, state: &GameState) -> Result<Vec<(PitIndex, GameState)>, EngineError> {
        self.legal_moves(state)?
            .into_iter()
            .map(|pit| Ok((pit, self.apply_move(state, pit)?)))
            .collect()
    }
}
