//! Words already played in a game

use rustc_hash::FxHashSet;

/// Set of words played so far
///
/// Grows monotonically: there is no way to remove a word once inserted.
#[derive(Debug, Clone, Default)]
pub struct UsedWords {
    words: FxHashSet<String>,
}

impl UsedWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word as played
    ///
    /// Returns `false` if it was already recorded.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Played words in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl<S: Into<String>> FromIterator<S> for UsedWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
