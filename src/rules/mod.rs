//! Rules engine trait for search drivers.
//!
//! `RulesEngine` is the whole contract between a rule set and the search
//! that plays it:
//! - Which moves are legal
//! - How a move produces a successor state
//! - When the game is over and who won
//! - How good a position looks

pub mod engine;

pub use engine::{GameResult, MoveList, RulesEngine};
