//! Difficulty levels and how invalid level input is resolved

use std::fmt;
use thiserror::Error;

/// How hard the computer plays
///
/// Difficulty picks the starting word length and the computer's move policy:
/// Easy hands the player the word with the most follow-ups, Hard the one with
/// the fewest, Medium picks any nearagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// A difficulty level outside `1..=3`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid difficulty '{input}', expected 1, 2 or 3")]
pub struct InvalidDifficulty {
    pub input: String,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Difficulty for a numeric level: 1 Easy, 2 Medium, 3 Hard
    ///
    /// # Errors
    /// Returns `InvalidDifficulty` for any other level.
    pub fn from_level(level: u8) -> Result<Self, InvalidDifficulty> {
        match level {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hard),
            _ => Err(InvalidDifficulty {
                input: level.to_string(),
            }),
        }
    }

    /// Parse a level typed by the player
    ///
    /// # Errors
    /// Returns `InvalidDifficulty` if the trimmed input is not `1`, `2` or `3`.
    ///
    /// # Examples
    /// ```
    /// use nearagrams::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::parse_level(" 3\n").unwrap(), Difficulty::Hard);
    /// assert!(Difficulty::parse_level("hard").is_err());
    /// ```
    pub fn parse_level(input: &str) -> Result<Self, InvalidDifficulty> {
        let trimmed = input.trim();
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(|level| Self::from_level(level).ok())
            .ok_or_else(|| InvalidDifficulty {
                input: trimmed.to_string(),
            })
    }

    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Length of the random word a game starts from
    #[must_use]
    pub const fn starting_length(self) -> usize {
        match self {
            Self::Easy => 4,
            Self::Medium => 5,
            Self::Hard => 6,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What to do when the player enters a difficulty outside `1..=3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DifficultyPolicy {
    /// Fall back to Medium
    #[default]
    DefaultToMedium,
    /// Abort with an error
    Reject,
}

impl DifficultyPolicy {
    /// Resolve raw level input under this policy
    ///
    /// # Errors
    /// Returns `InvalidDifficulty` for bad input when the policy is `Reject`.
    pub fn resolve(self, input: &str) -> Result<Difficulty, InvalidDifficulty> {
        match (Difficulty::parse_level(input), self) {
            (Ok(difficulty), _) => Ok(difficulty),
            (Err(err), Self::DefaultToMedium) => {
                log::warn!("{err}; defaulting to {}", Difficulty::Medium);
                Ok(Difficulty::Medium)
            }
            (Err(err), Self::Reject) => Err(err),
        }
    }
}
