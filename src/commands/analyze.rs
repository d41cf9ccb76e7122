//! Word analysis command
//!
//! Lists the nearagrams of a word with the branching factor of each, and which of
//! them each difficulty would let the computer choose from.

use crate::core::{Difficulty, LetterCounts, UsedWords};
use crate::lexicon::Lexicon;
use crate::solver::{ScoredMove, eligible_moves, rank_candidates};
use anyhow::{Result, bail};

/// A nearagram and the number of moves it leaves open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub word: String,
    pub branching: usize,
}

impl From<&ScoredMove<'_>> for MoveReport {
    fn from(scored: &ScoredMove<'_>) -> Self {
        Self {
            word: scored.word.to_string(),
            branching: scored.branching,
        }
    }
}

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    /// Nearagrams one letter longer, alphabetical
    pub longer: Vec<MoveReport>,
    /// Nearagrams one letter shorter, alphabetical
    pub shorter: Vec<MoveReport>,
    /// Words each difficulty would pick from, in `Difficulty::ALL` order
    pub picks: Vec<(Difficulty, Vec<String>)>,
}

impl AnalysisResult {
    #[must_use]
    pub fn total(&self) -> usize {
        self.longer.len() + self.shorter.len()
    }
}

/// Analyze the nearagrams of a word in a fresh game
///
/// # Errors
///
/// Returns an error if:
/// - The word has characters other than letters
/// - The word is not in the dictionary
pub fn analyze_word(word: &str, lexicon: &Lexicon) -> Result<AnalysisResult> {
    let word = word.trim().to_lowercase();

    if LetterCounts::from_word(&word).is_none() {
        bail!("Invalid word '{word}': only the letters a-z are allowed");
    }
    if !lexicon.contains(&word) {
        bail!("Word '{word}' not in dictionary");
    }

    let used: UsedWords = std::iter::once(word.as_str()).collect();
    let ranked = rank_candidates(&word, lexicon, &used);

    let (longer, shorter): (Vec<MoveReport>, Vec<MoveReport>) = ranked
        .iter()
        .map(MoveReport::from)
        .partition(|report| report.word.len() > word.len());

    let picks = Difficulty::ALL
        .iter()
        .map(|&difficulty| {
            let words = eligible_moves(&ranked, difficulty)
                .iter()
                .map(|m| m.word.to_string())
                .collect();
            (difficulty, words)
        })
        .collect();

    Ok(AnalysisResult {
        word,
        longer,
        shorter,
        picks,
    })
}
