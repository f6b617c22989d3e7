//! Oware, the Akan member of the Mancala family.
//!
//! Two rows of six pits, four seeds each. A turn lifts every seed from one
//! of your own pits and sows them counter-clockwise. Landing in an opponent
//! pit that now holds 2 or 3 seeds captures it, along with the unbroken run
//! of such pits behind it. You may not leave a starved opponent unfed if any
//! move can reach them.
//!
//! ```
//! use oware::games::oware::Oware;
//! use oware::rules::RulesEngine;
//! use oware::core::Player;
//!
//! let game = Oware::standard();
//! let state = game.initial_state();
//!
//! let next = game.apply_move(&state, 2).unwrap();
//! assert_eq!(next.board().pits(), &[4, 4, 0, 5, 5, 5, 5, 4, 4, 4, 4, 4]);
//! assert_eq!(next.to_move(), Player::North);
//! ```

mod game;
mod movegen;
mod sowing;

pub use game::{Oware, OwareBuilder};
