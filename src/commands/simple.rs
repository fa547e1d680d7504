//! Simple interactive CLI mode
//!
//! Text-based game without TUI: one guess per line.

use crate::error::GameError;
use crate::game::{MAX_ATTEMPTS, Session, Submission};
use crate::output::{write_banner, write_board, write_summary};
use std::io::{self, BufRead, Write};

/// Run line mode on stdin and stdout
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub fn run_simple(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(session, stdin.lock(), &mut stdout.lock())
}

/// Play from `input` until `quit` or end of input
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub fn play_lines<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    write_banner(out, session)?;

    let mut reported = false;
    let mut lines = input.lines();

    loop {
        let over = session.status().is_terminal();
        if over && !reported {
            report_game_over(session, out)?;
            reported = true;
        }

        if over {
            write!(out, "Command ('practice' or 'quit'): ")?;
        } else {
            write!(out, "Guess {}/{MAX_ATTEMPTS}: ", session.round().round() + 1)?;
        }
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        match line.trim().to_ascii_lowercase().as_str() {
            "" => {}
            "quit" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                break;
            }
            "practice" | "new" => match session.start_practice(&mut rand::rng()) {
                Ok(()) => {
                    reported = false;
                    writeln!(out, "\n🔄 New practice word!\n")?;
                }
                Err(e) => writeln!(out, "❌ {e}")?,
            },
            word => match submit_word(session, word) {
                Ok(submission) if !submission.status.is_terminal() => write_board(out, session)?,
                Ok(_) => {}
                Err(e) => writeln!(out, "❌ {e}")?,
            },
        }
    }

    Ok(())
}

/// Type `word` into the session and submit it
///
/// Rejected input leaves the composing guess empty.
fn submit_word(session: &mut Session, word: &str) -> Result<Submission, GameError> {
    let result = word
        .chars()
        .try_for_each(|c| session.append_letter(c))
        .and_then(|()| session.submit_guess());

    if result.is_err() {
        clear_composing(session);
    }
    result
}

fn clear_composing(session: &mut Session) {
    while !session.round().composing().is_empty() {
        if session.delete_letter().is_err() {
            break;
        }
    }
}

fn report_game_over<W: Write>(session: &mut Session, out: &mut W) -> io::Result<()> {
    if session.is_restored() {
        writeln!(out, "You already played today's puzzle.")?;
    } else {
        write_board(out, session)?;
    }

    if session.lookup_pending() {
        writeln!(out, "Looking up the word...")?;
    }
    let details = session.wait_for_details().cloned();
    if let Some(details) = details {
        write_summary(out, session, &details)?;
    }
    Ok(())
}
