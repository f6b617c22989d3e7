//! The Oware rule set.

use crate::core::{GameState, MoveRecord, PitIndex, Player, PlayerMap, ResidualPolicy, RuleConfig};
use crate::error::{EngineError, IllegalReason, StateFault};
use crate::rules::{GameResult, MoveList, RulesEngine};

use super::movegen;
use super::sowing;

/// Oware rules over a validated configuration.
#[derive(Clone, Debug)]
pub struct Oware {
    config: RuleConfig,
}

/// Builder for creating an Oware engine.
#[derive(Clone, Debug, Default)]
pub struct OwareBuilder {
    config: RuleConfig,
}

impl OwareBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pits_per_side(mut self, pits: usize) -> Self {
        self.config.pits_per_side = pits;
        self
    }

    pub fn seeds_per_pit(mut self, seeds: u32) -> Self {
        self.config.seeds_per_pit = seeds;
        self
    }

    pub fn capture_range(mut self, min: u32, max: u32) -> Self {
        self.config.capture_min = min;
        self.config.capture_max = max;
        self
    }

    pub fn min_board_seeds(mut self, seeds: u32) -> Self {
        self.config.min_board_seeds = seeds;
        self
    }

    pub fn residual(mut self, residual: ResidualPolicy) -> Self {
        self.config.residual = residual;
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<Oware, EngineError> {
        Oware::new(self.config)
    }
}

impl Oware {
    /// Engine for the given rules.
    pub fn new(config: RuleConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Standard Oware: 2 × 6 pits, 4 seeds each, captures on 2 or 3.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            config: RuleConfig::default(),
        }
    }

    /// Set up a position under these rules. See [`GameState::from_position`].
    pub fn position(
        &self,
        pits: &[u32],
        scores: PlayerMap<u32>,
        to_move: Player,
    ) -> Result<GameState, EngineError> {
        GameState::from_position(&self.config, pits, scores, to_move)
    }

    /// Apply a move and report what it did.
    ///
    /// Order: sow, capture, sweep, low-seed settlement, turn change.
    pub fn apply_move_traced(
        &self,
        state: &GameState,
        pit: PitIndex,
    ) -> Result<(GameState, MoveRecord), EngineError> {
        state.verify(&self.config)?;

        let mover = state.to_move();
        let illegal = |reason| EngineError::IllegalMove {
            pit,
            player: mover,
            reason,
        };

        if self.is_terminal(state) {
            return Err(illegal(IllegalReason::GameOver));
        }
        if !movegen::legal_pits(state).contains(&pit) {
            return Err(illegal(movegen::rejection(state, pit)));
        }

        let mut next = state.clone();
        let board = next.board_mut();

        let (sown, landing) = sowing::sow(board, pit);
        let mut record = MoveRecord::new(mover, pit, sown, landing);

        let (captured, captured_seeds) = sowing::capture(board, &self.config, landing, mover);
        record.captured = captured;
        record.captured_seeds = captured_seeds;

        // Opponent left with nothing: the mover banks their own row.
        if board.is_row_empty(mover.opponent()) {
            record.swept = board.clear_row(mover);
        }

        if self.settles_residue(board.total()) {
            for player in Player::ALL {
                record.settled[player] = board.clear_row(player);
            }
        }

        next.credit(mover, record.captured_seeds + record.swept);
        for (player, &seeds) in record.settled.iter() {
            next.credit(player, seeds);
        }
        next.pass_turn();

        next.verify(&self.config)?;
        Ok((next, record))
    }

    /// Scores at the end of the game. A position set up below the seed
    /// cutoff has not been through settlement yet, so residual seeds are
    /// credited here under the same policy.
    #[must_use]
    pub fn final_scores(&self, state: &GameState) -> PlayerMap<u32> {
        let board = state.board();
        let settle = self.settles_residue(board.total());
        PlayerMap::new(|player| {
            let residue = if settle { board.row_total(player) } else { 0 };
            state.score(player).saturating_add(residue)
        })
    }

    /// Do seeds left on a board holding `on_board` go to the row owners?
    fn settles_residue(&self, on_board: u64) -> bool {
        on_board < u64::from(self.config.min_board_seeds)
            && self.config.residual == ResidualPolicy::RowOwner
    }
}

impl Default for Oware {
    fn default() -> Self {
        Self::standard()
    }
}

impl RulesEngine for Oware {
    fn config(&self) -> &RuleConfig {
        &self.config
    }

    fn initial_state(&self) -> GameState {
        GameState::initial(&self.config)
    }

    fn legal_moves(&self, state: &GameState) -> Result<MoveList, EngineError> {
        state.verify(&self.config)?;
        if self.is_terminal(state) {
            return Err(StateFault::Terminal.into());
        }
        Ok(movegen::legal_pits(state))
    }

    fn apply_move(&self, state: &GameState, pit: PitIndex) -> Result<GameState, EngineError> {
        self.apply_move_traced(state, pit).map(|(next, _)| next)
    }

    fn is_terminal(&self, state: &GameState) -> bool {
        let majority = self.config.majority();
        let board = state.board();

        Player::ALL.iter().any(|&p| state.score(p) > majority)
            || board.total() < u64::from(self.config.min_board_seeds)
            // An empty row means the mover has no legal move.
            || board.is_row_empty(state.to_move())
    }

    fn evaluate(&self, state: &GameState, perspective: Player) -> i64 {
        i64::from(self.config.total_seeds()) - i64::from(state.score(perspective.opponent()))
    }

    fn winner(&self, state: &GameState) -> Result<GameResult, EngineError> {
        state.verify(&self.config)?;
        if !self.is_terminal(state) {
            return Err(EngineError::GameNotOver);
        }

        let scores = self.final_scores(state);
        Ok(match scores[Player::South].cmp(&scores[Player::North]) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::South),
            std::cmp::Ordering::Less => GameResult::Winner(Player::North),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }
}
