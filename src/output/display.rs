//! Display functions for line mode

use super::formatters::{colored_keyboard, colored_row, details_lines, share_text, verdict};
use crate::game::{MAX_ATTEMPTS, PuzzleMode, Session};
use crate::lookup::PostGameDetails;
use colored::Colorize;
use std::io::{self, Write};

/// Print the banner for a new session
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_banner<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let title = match session.mode() {
        PuzzleMode::Daily(key) => format!("WordQuiz - Daily puzzle {key}"),
        PuzzleMode::Practice => "WordQuiz - Practice".to_string(),
    };

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "  {}", title.bright_white().bold())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    if session.is_offline() {
        writeln!(
            out,
            "{}",
            "Offline: playing a practice word from the built-in list.".yellow()
        )?;
    }
    writeln!(
        out,
        "Guess the five-letter word in {MAX_ATTEMPTS} tries. 'quit' exits.\n"
    )
}

/// Print every submitted guess and the keyboard
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_board<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out)?;
    for (guess, feedback) in session.round().feedback_rows() {
        writeln!(out, "  {}", colored_row(&guess, &feedback))?;
    }
    writeln!(out)?;
    for row in colored_keyboard(&session.keyboard()) {
        writeln!(out, "  {row}")?;
    }
    writeln!(out)
}

/// Print the verdict, the share text and any looked-up details
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_summary<W: Write>(
    out: &mut W,
    session: &Session,
    details: &PostGameDetails,
) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(out, "{}", verdict(details).bright_green().bold())?;

    if !session.is_restored() {
        let rows = session.round().feedback_rows();
        writeln!(out, "\n{}", share_text(session.mode(), &rows, session.status()))?;
    }

    let lines = details_lines(details);
    if !lines.is_empty() {
        writeln!(out, "\n{}", details.word.bright_yellow().bold())?;
        for line in lines {
            writeln!(out, "  {line}")?;
        }
    }
    writeln!(out, "{}", "─".repeat(60).cyan())
}
