//! Errors that stop a game from being set up

use crate::core::InvalidDifficulty;
use crate::lexicon::LexiconError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// No starting word of the needed length exists
    #[error("cannot start a game: {0}")]
    EmptyLexicon(#[from] LexiconError),

    /// Difficulty input outside `1..=3` under a rejecting policy
    #[error(transparent)]
    InvalidDifficulty(#[from] InvalidDifficulty),
}
