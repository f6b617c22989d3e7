//! Game state: the unit handed to a search driver.
//!
//! ## GameState
//!
//! - Board (pit contents)
//! - Captured seeds per player
//! - Side to move and ply counter
//!
//! A `GameState` is a plain value. Search clones it per branch, so sibling
//! branches never observe each other's changes. Outside the crate it can only
//! be created (`initial`, `from_position`) and read; the engine produces every
//! successor.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::config::RuleConfig;
use super::player::{Player, PlayerMap};
use crate::error::{EngineError, StateFault};

/// Complete position: board, scores, and whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    scores: PlayerMap<u32>,
    to_move: Player,
    ply: u32,
}

impl GameState {
    /// Starting position: every pit full, no captures, South to move.
    #[must_use]
    pub fn initial(config: &RuleConfig) -> Self {
        Self {
            board: Board::filled(config.ring(), config.seeds_per_pit),
            scores: PlayerMap::with_value(0),
            to_move: Player::South,
            ply: 0,
        }
    }

    /// Set up an arbitrary position.
    ///
    /// Fails with `InvalidState` if the pit count does not match the rules or
    /// the seeds on the board plus both scores do not add up to the pool.
    pub fn from_position(
        config: &RuleConfig,
        pits: &[u32],
        scores: PlayerMap<u32>,
        to_move: Player,
    ) -> Result<Self, EngineError> {
        let state = Self {
            board: Board::from_pits(config.ring(), pits),
            scores,
            to_move,
            ply: 0,
        };
        state.verify(config)?;
        Ok(state)
    }

    /// Pit contents.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seeds a player has captured.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player]
    }

    /// Both scores.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Moves played since this state's origin position.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Seeds on the board plus both scores.
    #[must_use]
    pub fn seed_count(&self) -> u64 {
        self.board.total() + self.scores.iter().map(|(_, &score)| u64::from(score)).sum::<u64>()
    }

    /// Check the state fits the rules and no seed has been created or lost.
    pub fn verify(&self, config: &RuleConfig) -> Result<(), EngineError> {
        if self.board.pits().len() != config.pit_count() || self.board.ring() != config.ring() {
            return Err(StateFault::WrongPitCount {
                expected: config.pit_count(),
                found: self.board.pits().len(),
            }
            .into());
        }
        let expected = u64::from(config.total_seeds());
        let found = self.seed_count();
        if found != expected {
            return Err(StateFault::SeedsNotConserved {
                expected,
                found,
            }
            .into());
        }
        Ok(())
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Move `seeds` into a player's score.
    pub(crate) fn credit(&mut self, player: Player, seeds: u32) {
        self.scores[player] += seeds;
    }

    /// Hand the turn to the other player.
    pub(crate) fn pass_turn(&mut self) {
        self.to_move = self.to_move.opponent();
        self.ply += 1;
    }
}

impl std::fmt::Display for GameState {
    /// North's row is printed reversed above South's so the ring reads
    /// counter-clockwise, the way the board sits between two players.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row = |player: Player, reversed: bool| {
            let mut cells: Vec<String> = self.board.row(player).iter().map(u32::to_string).collect();
            if reversed {
                cells.reverse();
            }
            cells.join(" ")
        };

        writeln!(
            f,
            "North | {} | score {}",
            row(Player::North, true),
            self.scores[Player::North]
        )?;
        writeln!(
            f,
            "South | {} | score {}",
            row(Player::South, false),
            self.scores[Player::South]
        )?;
        write!(f, "{} to move", self.to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let config = RuleConfig::default();
        let state = GameState::initial(&config);

        assert_eq!(state.to_move(), Player::South);
        assert_eq!(state.score(Player::South), 0);
        assert_eq!(state.score(Player::North), 0);
        assert_eq!(state.board().pits(), &[4; 12]);
        assert_eq!(state.seed_count(), 48);
        assert!(state.verify(&config).is_ok());
    }

    #[test]
    fn test_from_position() {
        let config = RuleConfig::default();
        let pits = [0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1];
        let state =
            GameState::from_position(&config, &pits, PlayerMap::from_parts(20, 26), Player::North)
                .unwrap();

        assert_eq!(state.to_move(), Player::North);
        assert_eq!(state.score(Player::North), 26);
        assert_eq!(state.board().total(), 2);
    }

    #[test]
    fn test_from_position_rejects_lost_seeds() {
        let config = RuleConfig::default();
        let result =
            GameState::from_position(&config, &[4; 12], PlayerMap::from_parts(1, 0), Player::South);

        assert_eq!(
            result,
            Err(EngineError::InvalidState(StateFault::SeedsNotConserved {
                expected: 48,
                found: 49,
            }))
        );
    }

    #[test]
    fn test_from_position_rejects_overflowing_pits() {
        let config = RuleConfig::default();
        let mut pits = [0; 12];
        pits[0] = u32::MAX;
        pits[1] = 49;

        let result =
            GameState::from_position(&config, &pits, PlayerMap::with_value(0), Player::South);

        assert_eq!(
            result,
            Err(EngineError::InvalidState(StateFault::SeedsNotConserved {
                expected: 48,
                found: u64::from(u32::MAX) + 49,
            }))
        );
    }

    #[test]
    fn test_from_position_rejects_wrong_size() {
        let config = RuleConfig::default();
        let result =
            GameState::from_position(&config, &[6; 8], PlayerMap::with_value(0), Player::South);

        assert!(matches!(
            result,
            Err(EngineError::InvalidState(StateFault::WrongPitCount { expected: 12, found: 8 }))
        ));
    }

    #[test]
    fn test_clone_is_independent() {
        let config = RuleConfig::default();
        let state = GameState::initial(&config);

        let mut branch = state.clone();
        branch.board_mut().take(0);
        branch.pass_turn();

        assert_eq!(state.board()[0], 4);
        assert_eq!(state.to_move(), Player::South);
        assert_ne!(state, branch);
    }

    #[test]
    fn test_display() {
        let config = RuleConfig::default();
        let pits = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 0, 0];
        let state =
            GameState::from_position(&config, &pits, PlayerMap::from_parts(2, 1), Player::South)
                .unwrap();

        let text = state.to_string();
        assert_eq!(
            text,
            "North | 0 0 0 9 8 7 | score 1\nSouth | 1 2 3 4 5 6 | score 2\nSouth to move"
        );
    }

    #[test]
    fn test_serialization() {
        let state = GameState::initial(&RuleConfig::default());
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
