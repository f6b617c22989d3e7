//! Sowing and capture.

use smallvec::SmallVec;

use crate::core::{Board, PitIndex, Player, RuleConfig};

/// Lift every seed from `pit` and drop them one per pit going forward,
/// skipping `pit` itself on laps.
///
/// Returns the seeds sown and the pit that received the last one.
pub(crate) fn sow(board: &mut Board, pit: PitIndex) -> (u32, PitIndex) {
    let ring = board.ring();
    let sown = board.take(pit);

    let mut hand = sown;
    let mut position = pit;
    while hand > 0 {
        position = ring.next(position);
        if position == pit {
            continue;
        }
        board.add(position, 1);
        hand -= 1;
    }

    (sown, position)
}

/// Capture backward from `landing` for `mover`.
///
/// Each pit in the opponent's row holding a capturable count is emptied; the
/// chain stops at the first pit that is outside that row or not capturable.
/// Returns the captured pits (landing first) and the seeds taken.
pub(crate) fn capture(
    board: &mut Board,
    config: &RuleConfig,
    landing: PitIndex,
    mover: Player,
) -> (SmallVec<[PitIndex; 6]>, u32) {
    let ring = board.ring();
    let victim = mover.opponent();

    let mut captured = SmallVec::new();
    let mut seeds = 0;
    let mut pit = landing;
    while ring.owner(pit) == victim && config.capturable(board[pit]) {
        seeds += board.take(pit);
        captured.push(pit);
        pit = ring.prev(pit);
    }

    (captured, seeds)
}
