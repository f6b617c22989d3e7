//! What a single move did.
//!
//! `MoveRecord` narrates one application of a move: where the last seed
//! landed, which pits were captured, whether the sweep or the low-seed
//! settlement fired. Renderers and logs read it instead of diffing states.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{Player, PlayerMap};
use super::ring::PitIndex;

/// A recorded move with everything it caused.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// The pit that was sown.
    pub pit: PitIndex,

    /// Seeds lifted from `pit`.
    pub sown: u32,

    /// Pit that received the last seed.
    pub landing: PitIndex,

    /// Captured pits, in the order the chain took them (landing pit first).
    pub captured: SmallVec<[PitIndex; 6]>,

    /// Seeds taken by the capture chain.
    pub captured_seeds: u32,

    /// Seeds from the mover's own row credited because the opponent's row
    /// was left empty.
    pub swept: u32,

    /// Seeds credited to each side when too few remained in play.
    pub settled: PlayerMap<u32>,
}

impl MoveRecord {
    /// Record for a move that has only been sown so far.
    #[must_use]
    pub fn new(player: Player, pit: PitIndex, sown: u32, landing: PitIndex) -> Self {
        Self {
            player,
            pit,
            sown,
            landing,
            captured: SmallVec::new(),
            captured_seeds: 0,
            swept: 0,
            settled: PlayerMap::with_value(0),
        }
    }

    /// Did the move capture anything?
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}
