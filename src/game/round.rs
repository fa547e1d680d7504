//! Round state machine
//!
//! Owns the attempt counter, the guess history and the guess being composed.
//! The status moves one way only: `InProgress` to `Won` or `Lost`.

use super::Dictionary;
use crate::core::{Feedback, KeyboardState, WORD_LENGTH, Word};
use crate::error::{GameError, Rejection};

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Outcome of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub feedback: Feedback,
    pub status: GameStatus,
}

/// One game against one secret word
#[derive(Debug, Clone)]
pub struct Round {
    secret: Word,
    round: usize,
    composing: String,
    history: Vec<Word>,
    status: GameStatus,
}

impl Round {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            round: 0,
            composing: String::with_capacity(WORD_LENGTH),
            history: Vec::with_capacity(MAX_ATTEMPTS),
            status: GameStatus::InProgress,
        }
    }

    /// Append a letter to the composing guess
    ///
    /// # Errors
    /// `InputRejected` when the game is over, the key is not an ASCII letter,
    /// or the guess already has five letters.
    pub fn append_letter(&mut self, c: char) -> Result<(), GameError> {
        self.ensure_in_progress()?;

        if !c.is_ascii_alphabetic() {
            return Err(Rejection::NotALetter(c).into());
        }
        if self.composing.len() >= WORD_LENGTH {
            return Err(Rejection::GuessFull.into());
        }

        self.composing.push(c.to_ascii_uppercase());
        Ok(())
    }

    /// Remove the last letter of the composing guess; no-op when empty
    ///
    /// # Errors
    /// `InputRejected(GameOver)` once the game has ended.
    pub fn delete_letter(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.composing.pop();
        Ok(())
    }

    /// Submit the composing guess
    ///
    /// # Errors
    /// - `InputRejected` if the game is over or fewer than five letters are entered
    /// - `IllegalWord` if the dictionary rejects the guess; state is unchanged
    pub fn submit_guess(&mut self, dictionary: &Dictionary) -> Result<Submission, GameError> {
        self.ensure_in_progress()?;

        if self.composing.len() != WORD_LENGTH {
            return Err(Rejection::GuessIncomplete.into());
        }
        if !dictionary.is_legal_guess(&self.composing) {
            return Err(GameError::IllegalWord(self.composing.clone()));
        }

        let guess = Word::new(&self.composing)
            .map_err(|_| GameError::IllegalWord(self.composing.clone()))?;
        let feedback = Feedback::classify(&guess, &self.secret);
        self.history.push(guess);

        if feedback.is_perfect() {
            self.status = GameStatus::Won;
        } else if self.round == MAX_ATTEMPTS - 1 {
            self.status = GameStatus::Lost;
        } else {
            self.round += 1;
            self.composing.clear();
        }

        Ok(Submission {
            feedback,
            status: self.status,
        })
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.status.is_terminal() {
            Err(Rejection::GameOver.into())
        } else {
            Ok(())
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Zero-based index of the current attempt
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub fn composing(&self) -> &str {
        &self.composing
    }

    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    /// Submitted guesses paired with their feedback, oldest first
    #[must_use]
    pub fn feedback_rows(&self) -> Vec<(Word, Feedback)> {
        self.history
            .iter()
            .map(|guess| (guess.clone(), Feedback::classify(guess, &self.secret)))
            .collect()
    }

    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        KeyboardState::aggregate(&self.history, &self.secret)
    }
}
