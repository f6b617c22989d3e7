//! Legal move generation and the feeding rule.
//!
//! Any non-empty pit in the mover's row is playable, except when the
//! opponent's row is empty: then only moves that deliver at least one seed
//! into it are allowed. If no move can feed the opponent the restriction is
//! dropped.

use crate::core::{GameState, PitIndex, Ring};
use crate::error::IllegalReason;
use crate::rules::MoveList;

/// Does sowing `seeds` from `pit` reach the opponent's row?
///
/// A pit at offset `k` in its row is `pits_per_side - k` steps from the
/// first opponent pit.
pub(crate) fn feeds(ring: Ring, pit: PitIndex, seeds: u32) -> bool {
    seeds as usize >= ring.pits_per_side() - ring.offset(pit)
}

/// Legal pits for the player to move, ascending.
///
/// Empty only when the mover's row is empty.
pub(crate) fn legal_pits(state: &GameState) -> MoveList {
    let board = state.board();
    let ring = board.ring();
    let mover = state.to_move();

    let sowable: MoveList = ring.row(mover).filter(|&pit| board[pit] > 0).collect();

    if board.is_row_empty(mover.opponent()) {
        let feeding: MoveList = sowable
            .iter()
            .copied()
            .filter(|&pit| feeds(ring, pit, board[pit]))
            .collect();
        if !feeding.is_empty() {
            return feeding;
        }
    }

    sowable
}

/// Why `pit` is missing from `legal_pits(state)`.
pub(crate) fn rejection(state: &GameState, pit: PitIndex) -> IllegalReason {
    let board = state.board();
    let ring = board.ring();

    if !ring.contains(pit) {
        IllegalReason::OutOfRange
    } else if ring.owner(pit) != state.to_move() {
        IllegalReason::NotOwnRow
    } else if board[pit] == 0 {
        IllegalReason::EmptyPit
    } else {
        IllegalReason::MustFeed
    }
}
