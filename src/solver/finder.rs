//! Near-anagram search
//!
//! A nearagram of a word is a dictionary word one letter longer that contains all
//! of its letters, or one letter shorter whose letters it contains. Only the
//! lexicon bucket of the target length is scanned.

use crate::core::{LetterCounts, MIN_WORD_LEN, UsedWords};
use crate::lexicon::Lexicon;
use std::collections::BTreeSet;

/// Which way a nearagram changes the word length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One letter added
    Longer,
    /// One letter removed
    Shorter,
}

/// Find nearagrams of `word` in one direction, skipping excluded words
///
/// Shrinking is never allowed from a 3-letter word, since the result would
/// fall below the minimum word length.
#[must_use]
pub fn find_in_direction<'a>(
    word: &str,
    lexicon: &'a Lexicon,
    exclude: &UsedWords,
    direction: Direction,
) -> BTreeSet<&'a str> {
    let Some(letters) = LetterCounts::from_word(word) else {
        return BTreeSet::new();
    };
    let len = word.len();

    let target_len = match direction {
        Direction::Longer => len + 1,
        Direction::Shorter if len > MIN_WORD_LEN => len - 1,
        Direction::Shorter => return BTreeSet::new(),
    };

    lexicon
        .bucket(target_len)
        .iter()
        .filter(|entry| match direction {
            Direction::Longer => entry.letters().extra_over(&letters) == 1,
            Direction::Shorter => entry.letters().is_subset_of(&letters),
        })
        .map(|entry| entry.word())
        .filter(|candidate| !exclude.contains(candidate))
        .collect()
}

/// Find all nearagrams of `word` not in `exclude`
///
/// An empty result is normal and means there is no move left.
///
/// # Examples
/// ```
/// use nearagrams::core::UsedWords;
/// use nearagrams::lexicon::Lexicon;
/// use nearagrams::solver::find_near_anagrams;
///
/// let lexicon = Lexicon::build(["cat", "act", "cats", "cast", "scat"]);
/// let found = find_near_anagrams("cats", &lexicon, &UsedWords::new());
///
/// assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["act", "cat"]);
/// ```
#[must_use]
pub fn find_near_anagrams<'a>(
    word: &str,
    lexicon: &'a Lexicon,
    exclude: &UsedWords,
) -> BTreeSet<&'a str> {
    let mut found = find_in_direction(word, lexicon, exclude, Direction::Longer);
    found.extend(find_in_direction(word, lexicon, exclude, Direction::Shorter));
    log::debug!("{word}: {} nearagrams", found.len());
    found
}

/// Number of nearagrams available from `word`
#[must_use]
pub fn branching_factor(word: &str, lexicon: &Lexicon, exclude: &UsedWords) -> usize {
    find_near_anagrams(word, lexicon, exclude).len()
}
