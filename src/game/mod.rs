//! Game state machine
//!
//! Tracks the current word, score and used words of one session, validates the
//! player's proposals and drives the computer's replies.

mod engine;
mod error;
mod outcome;

pub use engine::{Game, QUIT_SENTINEL};
pub use error::GameError;
pub use outcome::{AcceptedMove, GameStatus, GameSummary, Rejection, TurnOutcome};
