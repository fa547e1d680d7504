//! Keyboard feedback aggregation
//!
//! Folds the feedback of every submitted guess into one best-known
//! classification per alphabet letter. Always re-derived from the guess
//! history; nothing is cached between calls.

use super::{Feedback, LetterFeedback, Word};

/// Best classification seen for each letter A-Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardState([Option<LetterFeedback>; 26]);

impl KeyboardState {
    /// Aggregate feedback across `history` against `secret`
    ///
    /// Letters that were never guessed have no entry.
    ///
    /// # Examples
    /// ```
    /// use wordquiz::core::{KeyboardState, LetterFeedback, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let history = [Word::new("slate").unwrap()];
    /// let keys = KeyboardState::aggregate(&history, &secret);
    ///
    /// assert_eq!(keys.get('A'), Some(LetterFeedback::Exact));
    /// assert_eq!(keys.get('S'), Some(LetterFeedback::Absent));
    /// assert_eq!(keys.get('C'), None);
    /// ```
    #[must_use]
    pub fn aggregate(history: &[Word], secret: &Word) -> Self {
        let mut keys = [None; 26];

        for guess in history {
            let feedback = Feedback::classify(guess, secret);
            for (&letter, &class) in guess.chars().iter().zip(feedback.letters()) {
                let slot = &mut keys[usize::from(letter - b'A')];
                *slot = Some(slot.map_or(class, |best: LetterFeedback| best.max(class)));
            }
        }

        Self(keys)
    }

    /// Best classification for a letter, if it has been guessed
    ///
    /// Lowercase input is accepted; non-letters return `None`.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterFeedback> {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            self.0[(upper as u8 - b'A') as usize]
        } else {
            None
        }
    }

    /// Iterate over guessed letters with their classification
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterFeedback)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, class)| class.map(|c| (char::from(b'A' + i as u8), c)))
    }
}
