//! Dictionary gate
//!
//! Decides whether a guess is a real word of the required length.

use crate::core::{WORD_LENGTH, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// The set of legal guesses
///
/// Entries are stored uppercase; lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw entries, skipping anything that is not a
    /// five-letter ASCII word. Duplicates are kept once.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();

        for entry in entries {
            if let Ok(word) = Word::new(entry.as_ref())
                && index.insert(word.text().to_string())
            {
                words.push(word);
            }
        }

        Self { words, index }
    }

    /// Membership test for a submitted guess
    ///
    /// Returns false for unknown words and for input of the wrong length.
    ///
    /// # Examples
    /// ```
    /// use wordquiz::game::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["crane", "slate"]);
    /// assert!(dictionary.is_legal_guess("CRANE"));
    /// assert!(!dictionary.is_legal_guess("qqzzz"));
    /// assert!(!dictionary.is_legal_guess("cranes"));
    /// ```
    #[must_use]
    pub fn is_legal_guess(&self, word: &str) -> bool {
        word.len() == WORD_LENGTH && self.index.contains(&word.to_ascii_uppercase())
    }

    /// Add `word` as a legal guess; returns false if it was already present
    pub fn insert(&mut self, word: &Word) -> bool {
        let added = self.index.insert(word.text().to_string());
        if added {
            self.words.push(word.clone());
        }
        added
    }

    /// Pick a secret word uniformly at random
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
