//! Driver-side helpers built only on the `RulesEngine` contract.
//!
//! - `random_playout`: play uniformly random legal moves to the end
//! - `perft`: count the leaves of the legal-move tree to a fixed depth
//!
//! Both use the engine exactly the way a search algorithm does, which makes
//! them the natural harness for checking the engine end to end.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameState};
use crate::error::EngineError;
use crate::rules::{GameResult, RulesEngine};

/// How a random playout finished.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutSummary {
    /// Last state reached.
    pub state: GameState,

    /// Moves played.
    pub plies: u32,

    /// `None` if the ply limit was hit first.
    pub result: Option<GameResult>,
}

/// Play random legal moves from `state` until the game ends or `max_plies`
/// moves have been made (0 = unlimited).
pub fn random_playout<E: RulesEngine>(
    engine: &E,
    state: &GameState,
    rng: &mut GameRng,
    max_plies: u32,
) -> Result<PlayoutSummary, EngineError> {
    let mut current = state.clone();
    let mut plies = 0;

    loop {
        if engine.is_terminal(&current) {
            let result = engine.winner(&current)?;
            return Ok(PlayoutSummary {
                state: current,
                plies,
                result: Some(result),
            });
        }

        if max_plies > 0 && plies >= max_plies {
            return Ok(PlayoutSummary {
                state: current,
                plies,
                result: None,
            });
        }

        let moves = engine.legal_moves(&current)?;
        let pit = moves[rng.gen_index(moves.len())];
        current = engine.apply_move(&current, pit)?;

        plies += 1;
    }
}

/// Number of positions reachable in exactly `depth` moves, counting
/// terminal states met earlier as leaves.
pub fn perft<E: RulesEngine>(engine: &E, state: &GameState, depth: u32) -> Result<u64, EngineError> {
    if depth == 0 || engine.is_terminal(state) {
        return Ok(1);
    }

    let mut nodes = 0;
    for pit in engine.legal_moves(state)? {
        let next = engine.apply_move(state, pit)?;
        nodes += perft(engine, &next, depth - 1)?;
    }
    Ok(nodes)
}
