//! Core domain types for nearagrams
//!
//! Letter multisets, difficulty levels and the used-word set. Everything here is
//! independent of the dictionary.

mod difficulty;
mod letters;
mod used_words;

pub use difficulty::{Difficulty, DifficultyPolicy, InvalidDifficulty};
pub use letters::LetterCounts;
pub use used_words::UsedWords;

/// Shortest word allowed anywhere in the game
pub const MIN_WORD_LEN: usize = 3;
