//! Turn results and game status

use crate::core::Difficulty;
use std::fmt;

/// Where a game stands
///
/// Before a difficulty is chosen there is no `Game` at all, so the only states a
/// game can be in are the ones below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The computer had no reply to the player's last word
    WonBySurvival,
    /// The player entered the quit sentinel
    GaveUp,
    /// The player has no nearagram left to play
    NoMovesLeft,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::WonBySurvival => "computer has no reply",
            Self::GaveUp => "gave up",
            Self::NoMovesLeft => "no nearagrams left",
        })
    }
}

/// Why a proposed word was refused
///
/// A rejected word leaves the game untouched and the player tries again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    AlreadyUsed,
    TooShort,
    WrongLengthDelta,
    NotInDictionary,
    NotAValidMove,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AlreadyUsed => "This word has already been used. Please try another.",
            Self::TooShort => "Words must be at least 3 letters.",
            Self::WrongLengthDelta => {
                "Word must have one more or one fewer letter than the current word."
            }
            Self::NotInDictionary => "Word is not in the dictionary; pick another.",
            Self::NotAValidMove => "Not a valid nearagram. Try again.",
        })
    }
}

/// An accepted player move and the computer's answer to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedMove {
    pub word: String,
    /// Points earned by this word (its length)
    pub points: u32,
    /// Score after this move
    pub score: u32,
    /// The computer's reply, `None` if it had none
    pub reply: Option<String>,
}

/// Result of one call to `Game::play_turn`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Accepted(AcceptedMove),
    Rejected(Rejection),
    /// The player quit; `forgone` lists what they could have played, sorted
    GaveUp { forgone: Vec<String> },
    NoMovesLeft,
    /// The game had already ended
    Finished(GameStatus),
}

/// Final state of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub difficulty: Difficulty,
    pub status: GameStatus,
    pub score: u32,
    /// Number of accepted player moves
    pub turns: u32,
    pub last_word: String,
    /// Moves left on the table when the player quit, sorted
    pub forgone: Vec<String>,
}
