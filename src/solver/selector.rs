//! Computer move selection
//!
//! One ply of lookahead: every candidate reply is scored by how many nearagrams
//! the player would have against it. Difficulty decides which scores are eligible
//! and ties are broken at random.

use super::finder::{branching_factor, find_near_anagrams};
use crate::core::{Difficulty, UsedWords};
use crate::lexicon::Lexicon;
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;

/// A candidate move with its branching factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove<'a> {
    pub word: &'a str,
    /// Nearagrams available from `word`
    pub branching: usize,
}

/// Score every nearagram of `word` by its branching factor
///
/// Results follow the candidates' alphabetical order.
#[must_use]
pub fn rank_candidates<'a>(
    word: &str,
    lexicon: &'a Lexicon,
    exclude: &UsedWords,
) -> Vec<ScoredMove<'a>> {
    let candidates: Vec<&'a str> = find_near_anagrams(word, lexicon, exclude)
        .into_iter()
        .collect();

    candidates
        .par_iter()
        .map(|&candidate| ScoredMove {
            word: candidate,
            branching: branching_factor(candidate, lexicon, exclude),
        })
        .collect()
}

/// Keep the moves a difficulty allows
///
/// Easy keeps the moves with the most follow-ups, Hard the fewest and Medium
/// keeps everything.
#[must_use]
pub fn eligible_moves<'a>(
    ranked: &[ScoredMove<'a>],
    difficulty: Difficulty,
) -> Vec<ScoredMove<'a>> {
    let target = match difficulty {
        Difficulty::Easy => ranked.iter().map(|m| m.branching).max(),
        Difficulty::Hard => ranked.iter().map(|m| m.branching).min(),
        Difficulty::Medium => return ranked.to_vec(),
    };

    ranked
        .iter()
        .filter(|m| Some(m.branching) == target)
        .copied()
        .collect()
}

/// Pick the computer's reply to `word`
///
/// Returns `None` when `word` has no unused nearagram, which ends the exchange.
///
/// # Examples
/// ```
/// use nearagrams::core::{Difficulty, UsedWords};
/// use nearagrams::lexicon::Lexicon;
/// use nearagrams::solver::select_next;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let lexicon = Lexicon::build(["cat", "cats", "act", "cast", "scat"]);
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let reply = select_next("cat", &lexicon, &UsedWords::new(), Difficulty::Medium, &mut rng);
/// assert!(matches!(reply, Some("cast" | "cats" | "scat")));
/// ```
pub fn select_next<'a, R: Rng + ?Sized>(
    word: &str,
    lexicon: &'a Lexicon,
    exclude: &UsedWords,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<&'a str> {
    let ranked = rank_candidates(word, lexicon, exclude);
    let eligible = eligible_moves(&ranked, difficulty);
    let chosen = eligible.choose(rng)?;

    log::debug!(
        "{difficulty} reply to {word}: {} (branching {}, {} of {} eligible)",
        chosen.word,
        chosen.branching,
        eligible.len(),
        ranked.len()
    );
    Some(chosen.word)
}
