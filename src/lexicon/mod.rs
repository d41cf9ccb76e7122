//! Lexicon index
//!
//! The dictionary grouped into buckets by word length. Every query in the game only
//! ever needs words of one exact length, so each lookup scans a single bucket
//! instead of the whole word list.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

use crate::core::{LetterCounts, MIN_WORD_LEN};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised while building or querying a lexicon
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    /// No dictionary word has the requested length
    #[error("dictionary has no words of length {length}")]
    Empty { length: usize },
}

/// A dictionary word with its letter counts computed once up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    word: String,
    letters: LetterCounts,
}

impl Entry {
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterCounts {
        &self.letters
    }
}

/// Immutable dictionary indexed by word length
///
/// Invariants: every key is at least 3, every bucket is sorted and free of
/// duplicates, and every word is lowercase `a..=z` only.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    buckets: FxHashMap<usize, Vec<Entry>>,
}

impl Lexicon {
    /// Build a lexicon from raw dictionary tokens
    ///
    /// Tokens are trimmed. Anything shorter than 3 letters or not purely lowercase
    /// ASCII alphabetic (proper nouns, abbreviations, hyphenated forms) is dropped.
    ///
    /// # Examples
    /// ```
    /// use nearagrams::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::build(["cat", "Cats", "at", "cast", "cast"]);
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(lexicon.contains("cast"));
    /// assert!(!lexicon.contains("Cats"));
    /// ```
    pub fn build<I, S>(raw_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buckets: FxHashMap<usize, Vec<Entry>> = FxHashMap::default();
        let mut skipped = 0usize;

        for raw in raw_words {
            let word = raw.as_ref().trim();
            if word.len() < MIN_WORD_LEN {
                skipped += 1;
                continue;
            }
            let Some(letters) = LetterCounts::from_word(word) else {
                skipped += 1;
                continue;
            };
            buckets.entry(word.len()).or_default().push(Entry {
                word: word.to_string(),
                letters,
            });
        }

        for bucket in buckets.values_mut() {
            bucket.sort_unstable_by(|a, b| a.word.cmp(&b.word));
            bucket.dedup_by(|a, b| a.word == b.word);
        }

        let lexicon = Self { buckets };
        log::info!(
            "built lexicon: {} words in {} length buckets ({skipped} tokens filtered)",
            lexicon.len(),
            lexicon.buckets.len()
        );
        lexicon
    }

    /// Build a lexicon and require that each of `required_lengths` is populated
    ///
    /// # Errors
    /// Returns `LexiconError::Empty` for the first required length with no words.
    pub fn build_checked<I, S>(
        raw_words: I,
        required_lengths: &[usize],
    ) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lexicon = Self::build(raw_words);
        if let Some(&length) = required_lengths
            .iter()
            .find(|&&length| lexicon.bucket(length).is_empty())
        {
            return Err(LexiconError::Empty { length });
        }
        Ok(lexicon)
    }

    /// All words of exactly `length` letters, sorted
    ///
    /// Returns an empty slice if there are none.
    #[inline]
    #[must_use]
    pub fn bucket(&self, length: usize) -> &[Entry] {
        self.buckets.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Whether `word` is in the dictionary
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.bucket(word.len())
            .binary_search_by(|entry| entry.word.as_str().cmp(word))
            .is_ok()
    }

    /// Total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Vec::is_empty)
    }

    /// Word lengths present, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.buckets.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Pick a uniformly random word of the given length
    ///
    /// # Errors
    /// Returns `LexiconError::Empty` if no word has that length.
    pub fn random_word<R: Rng + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> Result<&str, LexiconError> {
        self.bucket(length)
            .choose(rng)
            .map(Entry::word)
            .ok_or(LexiconError::Empty { length })
    }
}
