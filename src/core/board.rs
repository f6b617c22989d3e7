//! Pit contents.
//!
//! A `Board` is the ring of pits and nothing else: scores and the side to
//! move live on `GameState`. Callers outside the crate only ever see it
//! read-only.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::player::Player;
use super::ring::{PitIndex, Ring};
use crate::error::StateFault;

/// Seed counts for every pit on the ring.
///
/// Inline storage covers the standard 12-pit board without allocating.
/// Deserialization rejects a pit list that does not fit the ring.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    ring: Ring,
    pits: SmallVec<[u32; 12]>,
}

/// Unchecked wire form of a `Board`.
#[derive(Deserialize)]
struct RawBoard {
    ring: Ring,
    pits: SmallVec<[u32; 12]>,
}

impl TryFrom<RawBoard> for Board {
    type Error = StateFault;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let expected = raw.ring.pits_per_side().checked_mul(2);
        if expected != Some(raw.pits.len()) {
            return Err(StateFault::WrongPitCount {
                expected: expected.unwrap_or(usize::MAX),
                found: raw.pits.len(),
            });
        }
        Ok(Self {
            ring: raw.ring,
            pits: raw.pits,
        })
    }
}

impl Board {
    /// A board with every pit holding `seeds_per_pit` seeds.
    #[must_use]
    pub fn filled(ring: Ring, seeds_per_pit: u32) -> Self {
        Self {
            ring,
            pits: SmallVec::from_elem(seeds_per_pit, ring.len()),
        }
    }

    /// A board from explicit pit counts. The caller checks the length.
    pub(crate) fn from_pits(ring: Ring, pits: &[u32]) -> Self {
        Self {
            ring,
            pits: SmallVec::from_slice(pits),
        }
    }

    /// Ring geometry.
    #[must_use]
    pub fn ring(&self) -> Ring {
        self.ring
    }

    /// All pit counts, South's row first.
    #[must_use]
    pub fn pits(&self) -> &[u32] {
        &self.pits
    }

    /// Seeds in one pit, or `None` off the board.
    #[must_use]
    pub fn get(&self, pit: PitIndex) -> Option<u32> {
        self.pits.get(pit).copied()
    }

    /// One player's row, in sowing order.
    #[must_use]
    pub fn row(&self, player: Player) -> &[u32] {
        &self.pits[self.ring.row(player)]
    }

    /// Seeds in one player's row.
    #[must_use]
    pub fn row_total(&self, player: Player) -> u32 {
        self.row(player).iter().sum()
    }

    /// Does a player's row hold no seeds at all?
    #[must_use]
    pub fn is_row_empty(&self, player: Player) -> bool {
        self.row(player).iter().all(|&seeds| seeds == 0)
    }

    /// Seeds still in play. Summed wide so arbitrary pit counts cannot wrap.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.pits.iter().map(|&seeds| u64::from(seeds)).sum()
    }

    /// Empty a pit, returning what it held.
    pub(crate) fn take(&mut self, pit: PitIndex) -> u32 {
        std::mem::take(&mut self.pits[pit])
    }

    /// Drop `seeds` into a pit.
    pub(crate) fn add(&mut self, pit: PitIndex, seeds: u32) {
        self.pits[pit] += seeds;
    }

    /// Empty a whole row, returning what it held.
    pub(crate) fn clear_row(&mut self, player: Player) -> u32 {
        let range = self.ring.row(player);
        self.pits[range].iter_mut().map(std::mem::take).sum()
    }
}

impl Index<PitIndex> for Board {
    type Output = u32;

    fn index(&self, pit: PitIndex) -> &Self::Output {
        &self.pits[pit]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_board() {
        let board = Board::filled(Ring::new(6), 4);
        assert_eq!(board.pits().len(), 12);
        assert_eq!(board.total(), 48);
        assert_eq!(board.row_total(Player::North), 24);
        assert!(!board.is_row_empty(Player::South));
    }

    #[test]
    fn test_rows() {
        let board = Board::from_pits(Ring::new(3), &[1, 2, 3, 0, 0, 0]);
        assert_eq!(board.row(Player::South), &[1, 2, 3]);
        assert!(board.is_row_empty(Player::North));
        assert_eq!(board.get(2), Some(3));
        assert_eq!(board.get(6), None);
        assert_eq!(board[1], 2);
    }

    #[test]
    fn test_take_add_clear() {
        let mut board = Board::filled(Ring::new(6), 4);

        assert_eq!(board.take(3), 4);
        assert_eq!(board[3], 0);

        board.add(7, 2);
        assert_eq!(board[7], 6);

        assert_eq!(board.clear_row(Player::North), 26);
        assert!(board.is_row_empty(Player::North));
        assert_eq!(board.total(), 20);
    }

    #[test]
    fn test_total_does_not_wrap() {
        let board = Board::from_pits(Ring::new(1), &[u32::MAX, 2]);
        assert_eq!(board.total(), u64::from(u32::MAX) + 2);
    }

    #[test]
    fn test_deserialize_checks_pit_count() {
        let json = serde_json::to_string(&Board::filled(Ring::new(6), 4)).unwrap();
        let board: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board.total(), 48);

        let short = r#"{"ring":{"pits_per_side":6},"pits":[4,4,4]}"#;
        let err = serde_json::from_str::<Board>(short).unwrap_err();
        assert!(err.to_string().contains("board has 3 pits, rules expect 12"));
    }
}
