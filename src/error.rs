//! Error types for the engine.
//!
//! Every failure is surfaced to the caller. The engine is deterministic and
//! side-effect free, so the only recovery from an error is a corrected input.

use thiserror::Error;

use crate::core::{PitIndex, Player};

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IllegalReason {
    /// Pit index is not on the board at all.
    OutOfRange,
    /// Pit belongs to the opponent's row.
    NotOwnRow,
    /// Pit holds no seeds.
    EmptyPit,
    /// Opponent is starved and another move would feed them.
    MustFeed,
    /// The game has already ended.
    GameOver,
}

impl std::fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IllegalReason::OutOfRange => "pit is off the board",
            IllegalReason::NotOwnRow => "pit is in the opponent's row",
            IllegalReason::EmptyPit => "pit is empty",
            IllegalReason::MustFeed => "opponent is starved and must be fed",
            IllegalReason::GameOver => "game is already over",
        };
        f.write_str(text)
    }
}

/// Ways a state can be unusable for the requested operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum StateFault {
    #[error("state is terminal")]
    Terminal,

    #[error("board has {found} pits, rules expect {expected}")]
    WrongPitCount { expected: usize, found: usize },

    #[error("seeds not conserved: expected {expected}, found {found}")]
    SeedsNotConserved { expected: u64, found: u64 },
}

/// Main error type for the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("illegal move: pit {pit} for {player}: {reason}")]
    IllegalMove {
        pit: PitIndex,
        player: Player,
        reason: IllegalReason,
    },

    #[error("invalid state: {0}")]
    InvalidState(#[from] StateFault),

    #[error("winner requested before the game is over")]
    GameNotOver,

    #[error("invalid rule configuration: {message}")]
    InvalidConfig { message: String },
}

/// Convenience alias for results carrying [`EngineError`].
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_message() {
        let err = EngineError::IllegalMove {
            pit: 7,
            player: Player::South,
            reason: IllegalReason::NotOwnRow,
        };
        assert_eq!(
            err.to_string(),
            "illegal move: pit 7 for South: pit is in the opponent's row"
        );
    }

    #[test]
    fn test_state_fault_converts() {
        let err: EngineError = StateFault::SeedsNotConserved { expected: 48, found: 47 }.into();
        assert_eq!(
            err.to_string(),
            "invalid state: seeds not conserved: expected 48, found 47"
        );
    }
}
