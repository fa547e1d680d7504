//! Per-letter feedback calculation and representation
//!
//! Each position of a guess is classified as:
//! - `Exact` (correct letter, correct position)
//! - `Present` (letter in the secret, wrong position)
//! - `Absent` (letter not in the secret, or all its occurrences already consumed)

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single guessed letter
///
/// Ordered by priority so that the keyboard can keep the best one seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterFeedback {
    Absent,
    Present,
    Exact,
}

impl LetterFeedback {
    /// Emoji tile for this classification
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-character code used in text patterns (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// All exact (perfect match)
    pub const PERFECT: Self = Self([LetterFeedback::Exact; WORD_LENGTH]);

    /// Classify `guess` against `secret`
    ///
    /// Repeated letters are handled by consuming secret letters: the number of
    /// `Exact` and `Present` marks for a letter never exceeds its count in the
    /// secret.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark present-but-misplaced letters from the remaining pool
    ///
    /// # Examples
    /// ```
    /// use wordquiz::core::{Feedback, Word};
    ///
    /// let guess = Word::new("eerie").unwrap();
    /// let secret = Word::new("alert").unwrap();
    ///
    /// // Only one E is marked: ALERT has a single E.
    /// assert_eq!(Feedback::classify(&guess, &secret).to_string(), "Y-Y--");
    /// ```
    #[must_use]
    pub fn classify(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterFeedback::Absent; WORD_LENGTH];
        let mut available = secret.char_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], secret[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == secret.char_at(i) {
                result[i] = LetterFeedback::Exact;

                if let Some(count) = available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters from what is left
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterFeedback::Exact {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = LetterFeedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-position classifications
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Classification at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterFeedback {
        self.0[position]
    }

    /// Check if this is a perfect match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Convert feedback to an emoji string such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(guess: &str, secret: &str) -> Feedback {
        Feedback::classify(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    fn marked(feedback: &Feedback, guess: &str, letter: u8) -> usize {
        guess
            .bytes()
            .zip(feedback.letters())
            .filter(|&(b, &f)| b == letter && f != LetterFeedback::Absent)
            .count()
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = classify("abcde", "fghij");
        assert_eq!(feedback.to_string(), "-----");
        assert!(!feedback.is_perfect());
    }

    #[test]
    fn feedback_identity_is_perfect() {
        for word in ["crane", "slate", "eerie", "zzzzz", "aaaaa"] {
            let feedback = classify(word, word);
            assert!(feedback.is_perfect(), "{word} against itself");
            assert_eq!(feedback.to_string(), "GGGGG");
        }
    }

    #[test]
    fn feedback_repeated_guess_letter_counts_secret_once() {
        // ALERT has one E: only the first E in EERIE may be marked
        let feedback = classify("eerie", "alert");
        assert_eq!(feedback.to_string(), "Y-Y--");
        assert_eq!(marked(&feedback, "EERIE", b'E'), 1);
    }

    #[test]
    fn feedback_exact_takes_priority_over_present() {
        // ROBOT vs FLOOR: the second O is exact, the first is present
        let feedback = classify("robot", "floor");
        assert_eq!(feedback.to_string(), "YY-G-");
    }

    #[test]
    fn feedback_exact_consumes_before_earlier_present() {
        // Only one L in SLATE and it is matched exactly at position 1
        let feedback = classify("llama", "slate");
        assert_eq!(feedback.at(0), LetterFeedback::Absent);
        assert_eq!(feedback.at(1), LetterFeedback::Exact);
        assert_eq!(feedback.at(2), LetterFeedback::Exact);
        assert_eq!(marked(&feedback, "LLAMA", b'L'), 1);
    }

    #[test]
    fn feedback_duplicate_letters_in_both_words() {
        // SPEED vs ERASE: both E's present, ERASE has two
        let feedback = classify("speed", "erase");
        assert_eq!(feedback.to_string(), "Y-YY-");
    }

    #[test]
    fn feedback_marks_never_exceed_secret_count() {
        let words = ["eerie", "alert", "geese", "speed", "erase", "robot", "floor", "mamma"];
        for guess in words {
            for secret in words {
                let feedback = classify(guess, secret);
                let upper = guess.to_ascii_uppercase();
                for letter in b'A'..=b'Z' {
                    let in_secret = secret
                        .to_ascii_uppercase()
                        .bytes()
                        .filter(|&b| b == letter)
                        .count();
                    let in_guess = upper.bytes().filter(|&b| b == letter).count();
                    let marks = marked(&feedback, &upper, letter);
                    assert!(marks <= in_secret, "{guess} vs {secret}: {}", letter as char);
                    assert_eq!(marks, in_guess.min(in_secret), "{guess} vs {secret}");
                }
            }
        }
    }

    #[test]
    fn feedback_is_pure() {
        assert_eq!(classify("slate", "crane"), classify("slate", "crane"));
    }

    #[test]
    fn feedback_real_example() {
        // C, R and N are not in SLATE; A and E are exact
        let feedback = classify("crane", "slate");
        assert_eq!(feedback.to_string(), "--G-G");
        assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
    }

    #[test]
    fn letter_feedback_priority_order() {
        assert!(LetterFeedback::Exact > LetterFeedback::Present);
        assert!(LetterFeedback::Present > LetterFeedback::Absent);
    }
}
