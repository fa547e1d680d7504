//! Core domain types for the guessing game
//!
//! Pure value types with no I/O: words, per-letter feedback and the derived
//! keyboard state.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterFeedback};
pub use keyboard::KeyboardState;
pub use word::{WORD_LENGTH, Word, WordError};
