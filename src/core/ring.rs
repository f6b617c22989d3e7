//! Circular pit traversal.
//!
//! Pits form one ring: South's row first, then North's, the last pit
//! wrapping back to pit 0. All index arithmetic on pits goes through here.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::player::Player;

/// Index of a pit on the board.
pub type PitIndex = usize;

/// Ring geometry for a board with `pits_per_side` pits in each row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ring {
    pits_per_side: usize,
}

impl Ring {
    /// Create a ring with the given row length.
    #[must_use]
    pub const fn new(pits_per_side: usize) -> Self {
        Self { pits_per_side }
    }

    /// Pits in one row.
    #[must_use]
    pub const fn pits_per_side(self) -> usize {
        self.pits_per_side
    }

    /// Total number of pits.
    #[must_use]
    pub const fn len(self) -> usize {
        self.pits_per_side * 2
    }

    /// True for a ring with no pits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.pits_per_side == 0
    }

    /// Is `pit` a valid index on this ring?
    #[must_use]
    pub const fn contains(self, pit: PitIndex) -> bool {
        pit < self.len()
    }

    /// The pit sowing reaches after `pit`.
    #[must_use]
    pub const fn next(self, pit: PitIndex) -> PitIndex {
        (pit + 1) % self.len()
    }

    /// The pit before `pit`; capture chains walk this way.
    #[must_use]
    pub const fn prev(self, pit: PitIndex) -> PitIndex {
        (pit + self.len() - 1) % self.len()
    }

    /// Player whose row holds `pit`.
    #[must_use]
    pub const fn owner(self, pit: PitIndex) -> Player {
        if pit < self.pits_per_side {
            Player::South
        } else {
            Player::North
        }
    }

    /// Position of `pit` within its owner's row, 0-based.
    #[must_use]
    pub const fn offset(self, pit: PitIndex) -> usize {
        pit % self.pits_per_side
    }

    /// Pit indices of a player's row.
    #[must_use]
    pub const fn row(self, player: Player) -> Range<PitIndex> {
        let start = player.index() * self.pits_per_side;
        start..start + self.pits_per_side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraparound() {
        let ring = Ring::new(6);
        assert_eq!(ring.len(), 12);
        assert_eq!(ring.next(5), 6);
        assert_eq!(ring.next(11), 0);
        assert_eq!(ring.prev(0), 11);
        assert_eq!(ring.prev(6), 5);
    }

    #[test]
    fn test_ownership() {
        let ring = Ring::new(6);
        assert_eq!(ring.owner(0), Player::South);
        assert_eq!(ring.owner(5), Player::South);
        assert_eq!(ring.owner(6), Player::North);
        assert_eq!(ring.owner(11), Player::North);
        assert_eq!(ring.offset(8), 2);
        assert_eq!(ring.row(Player::South), 0..6);
        assert_eq!(ring.row(Player::North), 6..12);
    }

    #[test]
    fn test_small_ring() {
        let ring = Ring::new(3);
        assert_eq!(ring.row(Player::North), 3..6);
        assert_eq!(ring.next(5), 0);
        assert!(ring.contains(5));
        assert!(!ring.contains(6));
    }
}
