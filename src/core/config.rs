//! Rule configuration.
//!
//! Every number the rules depend on is a configuration value accepted at
//! construction time:
//! - Board shape: pits per row, seeds per pit
//! - Capture window: which pit counts are capturable
//! - Low-seed cutoff and what happens to the seeds left on the board
//!
//! `RuleConfig::default()` is standard Oware (2 × 6 pits, 4 seeds each).

use serde::{Deserialize, Serialize};

use super::ring::Ring;
use crate::error::EngineError;

/// What happens to seeds still on the board when the game ends because too
/// few remain in play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResidualPolicy {
    /// Each row's remaining seeds are credited to the row's owner.
    #[default]
    RowOwner,
    /// Remaining seeds stay on the board and count for nobody.
    Unclaimed,
}

/// Complete rule configuration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Pits in each player's row.
    pub pits_per_side: usize,

    /// Seeds in every pit at game start.
    pub seeds_per_pit: u32,

    /// Smallest pit count that can be captured.
    pub capture_min: u32,

    /// Largest pit count that can be captured.
    pub capture_max: u32,

    /// The game ends once fewer than this many seeds remain on the board.
    pub min_board_seeds: u32,

    /// Attribution of seeds left on the board at a low-seed ending.
    pub residual: ResidualPolicy,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            pits_per_side: 6,
            seeds_per_pit: 4,
            capture_min: 2,
            capture_max: 3,
            min_board_seeds: 7,
            residual: ResidualPolicy::RowOwner,
        }
    }
}

impl RuleConfig {
    /// Set the row length.
    #[must_use]
    pub fn with_pits_per_side(mut self, pits: usize) -> Self {
        self.pits_per_side = pits;
        self
    }

    /// Set the starting seeds per pit.
    #[must_use]
    pub fn with_seeds_per_pit(mut self, seeds: u32) -> Self {
        self.seeds_per_pit = seeds;
        self
    }

    /// Set the capturable pit counts (inclusive).
    #[must_use]
    pub fn with_capture_range(mut self, min: u32, max: u32) -> Self {
        self.capture_min = min;
        self.capture_max = max;
        self
    }

    /// Set the low-seed cutoff.
    #[must_use]
    pub fn with_min_board_seeds(mut self, seeds: u32) -> Self {
        self.min_board_seeds = seeds;
        self
    }

    /// Set the residual seed policy.
    #[must_use]
    pub fn with_residual(mut self, residual: ResidualPolicy) -> Self {
        self.residual = residual;
        self
    }

    /// Ring geometry for this board.
    #[must_use]
    pub fn ring(&self) -> Ring {
        Ring::new(self.pits_per_side)
    }

    /// Total pits on the board.
    #[must_use]
    pub fn pit_count(&self) -> usize {
        self.pits_per_side.saturating_mul(2)
    }

    /// Seeds in the game; constant for its whole lifetime.
    ///
    /// Saturates on a board too large to count in `u32`; `validate` rejects
    /// such a configuration.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.checked_total_seeds().unwrap_or(u32::MAX)
    }

    fn checked_total_seeds(&self) -> Option<u32> {
        let pits = self.pits_per_side.checked_mul(2)?;
        u32::try_from(pits).ok()?.checked_mul(self.seeds_per_pit)
    }

    /// Half the seed pool. A score strictly above this wins outright.
    #[must_use]
    pub fn majority(&self) -> u32 {
        self.total_seeds() / 2
    }

    /// Does a pit holding `count` seeds qualify for capture?
    #[must_use]
    pub fn capturable(&self, count: u32) -> bool {
        (self.capture_min..=self.capture_max).contains(&count)
    }

    /// Check the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), EngineError> {
        let fail = |message: &str| {
            Err(EngineError::InvalidConfig {
                message: message.to_string(),
            })
        };

        if self.pits_per_side == 0 {
            return fail("pits_per_side must be at least 1");
        }
        if self.seeds_per_pit == 0 {
            return fail("seeds_per_pit must be at least 1");
        }
        if self.capture_min == 0 {
            return fail("capture_min must be at least 1");
        }
        if self.capture_min > self.capture_max {
            return fail("capture_min must not exceed capture_max");
        }
        let Some(total) = self.checked_total_seeds() else {
            return fail("board holds more seeds than can be counted");
        };
        if total < 2 {
            return fail("at least two seeds are needed to play");
        }
        if self.min_board_seeds > total {
            return fail("min_board_seeds exceeds the seeds in the game");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RuleConfig::default();
        assert_eq!(config.pit_count(), 12);
        assert_eq!(config.total_seeds(), 48);
        assert_eq!(config.majority(), 24);
        assert_eq!(config.min_board_seeds, 7);
        assert_eq!(config.residual, ResidualPolicy::RowOwner);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_capture_window() {
        let config = RuleConfig::default();
        assert!(!config.capturable(1));
        assert!(config.capturable(2));
        assert!(config.capturable(3));
        assert!(!config.capturable(4));
    }

    #[test]
    fn test_builder_pattern() {
        let config = RuleConfig::default()
            .with_pits_per_side(4)
            .with_seeds_per_pit(3)
            .with_capture_range(2, 2)
            .with_min_board_seeds(0)
            .with_residual(ResidualPolicy::Unclaimed);

        assert_eq!(config.total_seeds(), 24);
        assert_eq!(config.majority(), 12);
        assert!(!config.capturable(3));
        assert_eq!(config.residual, ResidualPolicy::Unclaimed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let inverted = RuleConfig::default().with_capture_range(3, 2);
        assert!(matches!(
            inverted.validate(),
            Err(EngineError::InvalidConfig { .. })
        ));

        let no_pits = RuleConfig::default().with_pits_per_side(0);
        assert!(no_pits.validate().is_err());

        let no_seeds = RuleConfig::default().with_seeds_per_pit(0);
        assert!(no_seeds.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unplayable_sizes() {
        let over_cutoff = RuleConfig::default().with_min_board_seeds(49);
        assert!(matches!(
            over_cutoff.validate(),
            Err(EngineError::InvalidConfig { .. })
        ));
        assert!(RuleConfig::default().with_min_board_seeds(48).validate().is_ok());

        let huge_board = RuleConfig::default().with_pits_per_side(usize::MAX);
        assert!(matches!(
            huge_board.validate(),
            Err(EngineError::InvalidConfig { .. })
        ));
        assert_eq!(huge_board.total_seeds(), u32::MAX);

        let too_many_seeds = RuleConfig::default().with_seeds_per_pit(u32::MAX);
        assert!(too_many_seeds.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = RuleConfig::default().with_residual(ResidualPolicy::Unclaimed);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RuleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
