//! TUI application state and logic

use crate::error::GameError;
use crate::game::{GameStatus, PuzzleMode, Session};
use crate::output::formatters::celebration;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a transient message stays on screen
pub const MESSAGE_TTL: Duration = Duration::from_secs(2);

/// Input poll interval; also paces lookup polling and message expiry
const TICK: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub session: Session,
    pub message: Option<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    pub shown_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            message: None,
            should_quit: false,
        };

        if app.session.is_restored() {
            app.show(
                "You already played today's puzzle. Press 'p' to practice.",
                MessageStyle::Info,
            );
        } else if app.session.is_offline() {
            app.show("Offline: practice word from the built-in list", MessageStyle::Info);
        }
        app
    }

    pub fn show(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.message = Some(Message {
            text: text.into(),
            style,
            shown_at: Instant::now(),
        });
    }

    /// Drop the message once it has been visible for `MESSAGE_TTL`
    pub fn expire_message(&mut self, now: Instant) {
        if let Some(message) = &self.message
            && now.duration_since(message.shown_at) >= MESSAGE_TTL
        {
            self.message = None;
        }
    }

    /// Periodic work between key presses
    pub fn tick(&mut self) {
        self.session.poll_details();
        self.expire_message(Instant::now());
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            _ if self.session.status().is_terminal() => self.handle_game_over_key(key.code),
            KeyCode::Char(c) => {
                let result = self.session.append_letter(c);
                self.report(result);
            }
            KeyCode::Backspace => {
                let result = self.session.delete_letter();
                self.report(result);
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn handle_game_over_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n' | 'p') => self.new_practice(),
            // In game-over mode, ignore other keys
            _ => {}
        }
    }

    fn new_practice(&mut self) {
        match self.session.start_practice(&mut rand::rng()) {
            Ok(()) => {
                info!("Switched to practice");
                self.show("New practice word!", MessageStyle::Info);
            }
            Err(e) => self.show(e.to_string(), MessageStyle::Error),
        }
    }

    fn submit(&mut self) {
        match self.session.submit_guess() {
            Ok(submission) => match submission.status {
                GameStatus::Won => {
                    let attempts = self.session.round().attempts_used();
                    self.show(celebration(attempts), MessageStyle::Success);
                }
                GameStatus::Lost => {
                    let text = format!("The word was {}", self.session.secret());
                    self.show(text, MessageStyle::Error);
                }
                GameStatus::InProgress => {}
            },
            Err(e) => self.show(e.to_string(), MessageStyle::Error),
        }
    }

    fn report(&mut self, result: Result<(), GameError>) {
        if let Err(e) = result {
            self.show(e.to_string(), MessageStyle::Error);
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        let mode = match self.session.mode() {
            PuzzleMode::Daily(key) => format!("Daily {key}"),
            PuzzleMode::Practice => "Practice".to_string(),
        };
        if self.session.is_offline() {
            format!("{mode} (offline)")
        } else {
            mode
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::daily::PuzzleSetup;
    use crate::device::MemoryCompletionStore;
    use crate::game::Dictionary;

    fn app(mode: PuzzleMode) -> App {
        let setup = PuzzleSetup {
            dictionary: Dictionary::new(["crane", "slate", "mouth", "audio", "pride", "lemon"]),
            secret: Word::new("crane").unwrap(),
            mode,
            offline: false,
        };
        App::new(Session::new(
            setup,
            Box::new(MemoryCompletionStore::new()),
            None,
        ))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_and_deleting() {
        let mut app = app(PuzzleMode::Practice);
        for c in "slx".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.round().composing(), "SL");
    }

    #[test]
    fn illegal_word_shows_message() {
        let mut app = app(PuzzleMode::Practice);
        type_word(&mut app, "qqzzz");

        let message = app.message.as_ref().unwrap();
        assert_eq!(message.text, "Not in word list");
        assert_eq!(message.style, MessageStyle::Error);
        assert_eq!(app.session.round().round(), 0);
    }

    #[test]
    fn win_celebrates_and_q_quits() {
        let mut app = app(PuzzleMode::Practice);
        type_word(&mut app, "slate");
        type_word(&mut app, "crane");

        assert_eq!(app.session.status(), GameStatus::Won);
        assert_eq!(app.message.as_ref().unwrap().text, celebration(2));

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn q_is_a_letter_while_playing() {
        let mut app = app(PuzzleMode::Practice);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.session.round().composing(), "Q");
    }

    #[test]
    fn practice_after_daily() {
        let mut app = app(PuzzleMode::Daily("2024-02-02".parse().unwrap()));
        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Char('p'));

        assert_eq!(app.session.mode(), PuzzleMode::Practice);
        assert_eq!(app.session.status(), GameStatus::InProgress);
        assert_eq!(app.title(), "Practice");
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app(PuzzleMode::Practice);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_expire() {
        let mut app = app(PuzzleMode::Practice);
        app.show("hello", MessageStyle::Info);
        let shown_at = app.message.as_ref().unwrap().shown_at;

        app.expire_message(shown_at + Duration::from_millis(500));
        assert!(app.message.is_some());
        app.expire_message(shown_at + MESSAGE_TTL);
        assert!(app.message.is_none());
    }
}
