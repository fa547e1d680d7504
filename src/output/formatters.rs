//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardState, LetterFeedback, Word};
use crate::game::{GameStatus, MAX_ATTEMPTS, PuzzleMode};
use crate::lookup::{Outcome, PostGameDetails};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Definitions shown per part of speech
pub const MAX_DEFINITIONS: usize = 2;

fn tile(letter: char, feedback: Option<LetterFeedback>) -> ColoredString {
    let text = format!(" {letter} ");
    match feedback {
        Some(LetterFeedback::Exact) => text.black().on_green().bold(),
        Some(LetterFeedback::Present) => text.black().on_yellow().bold(),
        Some(LetterFeedback::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A submitted guess as coloured tiles
#[must_use]
pub fn colored_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.letters())
        .map(|(letter, &mark)| tile(letter, Some(mark)).to_string())
        .collect()
}

/// The keyboard with every guessed letter coloured by its best feedback
#[must_use]
pub fn colored_keyboard(keys: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let line: String = row
                .chars()
                .map(|letter| tile(letter, keys.get(letter)).to_string())
                .collect();
            format!("{}{line}", " ".repeat(i * 2))
        })
        .collect()
}

/// Message for a win in `attempts` guesses
#[must_use]
pub const fn celebration(attempts: usize) -> &'static str {
    match attempts {
        1 => "🎯 HOLE IN ONE! Extraordinary!",
        2 => "🔥 MAGNIFICENT! Two guesses!",
        3 => "✨ SPLENDID! Three guesses!",
        4 => "👏 GREAT JOB! Four guesses!",
        5 => "🎉 NICE WORK! Five guesses!",
        _ => "😅 PHEW! Got it in six!",
    }
}

/// One-line verdict for a finished game
#[must_use]
pub fn verdict(details: &PostGameDetails) -> String {
    match details.outcome {
        Outcome::Won if details.attempts > 0 => celebration(details.attempts).to_string(),
        Outcome::Won => "You solved today's puzzle.".to_string(),
        Outcome::Lost => format!("Out of guesses! The word was {}", details.word),
    }
}

/// Spoiler-free summary: a title line and one emoji row per guess
///
/// # Examples
/// ```
/// use wordquiz::core::{Feedback, Word};
/// use wordquiz::game::{GameStatus, PuzzleMode};
/// use wordquiz::output::formatters::share_text;
///
/// let secret = Word::new("crane").unwrap();
/// let guess = Word::new("slate").unwrap();
/// let rows = vec![
///     (guess.clone(), Feedback::classify(&guess, &secret)),
///     (secret.clone(), Feedback::PERFECT),
/// ];
/// let text = share_text(PuzzleMode::Practice, &rows, GameStatus::Won);
/// assert!(text.starts_with("WordQuiz practice 2/6"));
/// ```
#[must_use]
pub fn share_text(mode: PuzzleMode, rows: &[(Word, Feedback)], status: GameStatus) -> String {
    let label = match mode {
        PuzzleMode::Daily(key) => key.to_string(),
        PuzzleMode::Practice => "practice".to_string(),
    };
    let score = match status {
        GameStatus::Won => rows.len().to_string(),
        GameStatus::Lost | GameStatus::InProgress => "X".to_string(),
    };

    let mut text = format!("WordQuiz {label} {score}/{MAX_ATTEMPTS}");
    for (_, feedback) in rows {
        text.push('\n');
        text.push_str(&feedback.to_emoji());
    }
    text
}

/// Definitions and translation as plain lines
#[must_use]
pub fn details_lines(details: &PostGameDetails) -> Vec<String> {
    let mut lines = Vec::new();

    for meaning in &details.meanings {
        let heading = match &meaning.phonetic {
            Some(phonetic) => format!("{} {phonetic}", meaning.part_of_speech),
            None => meaning.part_of_speech.clone(),
        };
        lines.push(heading);

        for (i, definition) in meaning.definitions.iter().take(MAX_DEFINITIONS).enumerate() {
            lines.push(format!("  {}. {}", i + 1, definition.definition));
            if let Some(example) = &definition.example {
                lines.push(format!("     \"{example}\""));
            }
        }
    }

    if let Some(translation) = &details.translation {
        lines.push(format!("Translation: {translation}"));
    }
    lines
}
