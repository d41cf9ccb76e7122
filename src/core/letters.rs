//! Letter multiset representation
//!
//! `LetterCounts` stores how many times each of `a..=z` occurs in a word. Containment
//! checks between words are pure count arithmetic over those counters.

use std::fmt;

const ALPHABET_SIZE: usize = 26;

/// Count of each lowercase ASCII letter in a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts {
    counts: [u16; ALPHABET_SIZE],
}

impl LetterCounts {
    /// Count the letters of a word
    ///
    /// Returns `None` if the word contains anything outside `a..=z`, or repeats a
    /// letter more than `u16::MAX` times.
    ///
    /// # Examples
    /// ```
    /// use nearagrams::core::LetterCounts;
    ///
    /// let counts = LetterCounts::from_word("teeth").unwrap();
    /// assert_eq!(counts.count(b'e'), 2);
    /// assert_eq!(counts.total(), 5);
    /// assert!(LetterCounts::from_word("Teeth").is_none());
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        let mut counts = [0u16; ALPHABET_SIZE];
        for &byte in word.as_bytes() {
            if !byte.is_ascii_lowercase() {
                return None;
            }
            let slot = &mut counts[usize::from(byte - b'a')];
            *slot = slot.checked_add(1)?;
        }
        Some(Self { counts })
    }

    /// Number of occurrences of `letter`
    ///
    /// Letters outside `a..=z` always count zero.
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u16 {
        if letter.is_ascii_lowercase() {
            self.counts[usize::from(letter - b'a')]
        } else {
            0
        }
    }

    /// Total number of letters
    #[inline]
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }

    /// Total count of the positive residual `self - other`
    ///
    /// This is the number of letter occurrences in `self` that `other` cannot
    /// account for. Letters `other` has in excess are ignored.
    #[inline]
    #[must_use]
    pub fn extra_over(&self, other: &Self) -> u32 {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .map(|(&mine, &theirs)| u32::from(mine.saturating_sub(theirs)))
            .sum()
    }

    /// Whether every letter count in `self` is at most the count in `other`
    #[inline]
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(mine, theirs)| mine <= theirs)
    }
}

impl fmt::Display for LetterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, &count) in (b'a'..=b'z').zip(self.counts.iter()) {
            for _ in 0..count {
                write!(f, "{}", char::from(letter))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(word: &str) -> LetterCounts {
        LetterCounts::from_word(word).unwrap()
    }

    #[test]
    fn counts_repeated_letters() {
        let c = counts("banana");
        assert_eq!(c.count(b'a'), 3);
        assert_eq!(c.count(b'n'), 2);
        assert_eq!(c.count(b'b'), 1);
        assert_eq!(c.count(b'z'), 0);
        assert_eq!(c.total(), 6);
    }

    #[test]
    fn rejects_non_lowercase() {
        assert!(LetterCounts::from_word("Cat").is_none());
        assert!(LetterCounts::from_word("ca t").is_none());
        assert!(LetterCounts::from_word("c4t").is_none());
        assert!(LetterCounts::from_word("café").is_none());
    }

    #[test]
    fn long_runs_keep_counting() {
        let long = "a".repeat(300) + "b";
        let c = counts(&long);
        assert_eq!(c.count(b'a'), 300);
        assert_eq!(c.total(), 301);
        assert_eq!(counts(&"a".repeat(301)).extra_over(&counts(&"a".repeat(300))), 1);
        assert!(!counts(&"a".repeat(300)).is_subset_of(&counts(&"a".repeat(299))));
    }

    #[test]
    fn letter_overflow_is_rejected() {
        let too_long = "e".repeat(usize::from(u16::MAX) + 1);
        assert!(LetterCounts::from_word(&too_long).is_none());
    }

    #[test]
    fn empty_word_has_no_letters() {
        let c = counts("");
        assert_eq!(c.total(), 0);
        assert!(c.is_subset_of(&counts("cat")));
    }

    #[test]
    fn count_ignores_non_letters() {
        assert_eq!(counts("cat").count(b'A'), 0);
        assert_eq!(counts("cat").count(b'!'), 0);
    }

    #[test]
    fn extra_over_one_added_letter() {
        assert_eq!(counts("cats").extra_over(&counts("cat")), 1);
        assert_eq!(counts("scat").extra_over(&counts("act")), 1);
    }

    #[test]
    fn extra_over_counts_repeats() {
        // "teeth" needs two e's; "the" only supplies one
        assert_eq!(counts("teeth").extra_over(&counts("the")), 2);
        assert_eq!(counts("tete").extra_over(&counts("tet")), 1);
    }

    #[test]
    fn extra_over_ignores_surplus_in_other() {
        assert_eq!(counts("cat").extra_over(&counts("cats")), 0);
        assert_eq!(counts("dog").extra_over(&counts("cat")), 3);
    }

    #[test]
    fn subset_respects_multiplicity() {
        assert!(counts("cat").is_subset_of(&counts("cats")));
        assert!(counts("act").is_subset_of(&counts("cast")));
        assert!(!counts("tee").is_subset_of(&counts("ate")));
        assert!(counts("tee").is_subset_of(&counts("tete")));
        assert!(!counts("dog").is_subset_of(&counts("gds")));
    }

    #[test]
    fn display_is_sorted_letters() {
        assert_eq!(counts("stare").to_string(), "aerst");
        assert_eq!(counts("teeth").to_string(), "eehtt");
    }
}
