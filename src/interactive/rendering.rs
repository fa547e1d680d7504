//! TUI rendering with ratatui
//!
//! Board, keyboard and post-game panel for the game interface.

use super::app::{App, MessageStyle};
use crate::core::{Feedback, KeyboardState, LetterFeedback, WORD_LENGTH};
use crate::game::{MAX_ATTEMPTS, Round};
use crate::output::formatters::{KEYBOARD_ROWS, details_lines, share_text, verdict};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Main content
            Constraint::Length(3),  // Message
            Constraint::Length(1),  // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Board
            Constraint::Min(5),                           // Keyboard
        ])
        .split(main_chunks[0]);

    render_board(f, app.session.round(), left[0]);
    render_keyboard(f, &app.session.keyboard(), left[1]);
    render_details(f, app, main_chunks[1]);
    render_message(f, app, chunks[2]);
    render_help(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🟩 WORDQUIZ - {}", app.title()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn feedback_color(feedback: LetterFeedback) -> Color {
    match feedback {
        LetterFeedback::Exact => Color::Green,
        LetterFeedback::Present => Color::Yellow,
        LetterFeedback::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, feedback: Option<LetterFeedback>) -> Span<'static> {
    let style = match feedback {
        Some(mark) => Style::default()
            .fg(Color::Black)
            .bg(feedback_color(mark))
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    };
    Span::styled(format!(" {letter} "), style)
}

fn submitted_line(guess: &str, feedback: &Feedback) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for (letter, &mark) in guess.chars().zip(feedback.letters()) {
        spans.push(tile(letter, Some(mark)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn open_line(letters: &str) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    let mut chars = letters.chars();
    for _ in 0..WORD_LENGTH {
        let letter = chars.next().unwrap_or('_');
        spans.push(tile(letter, None));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, round: &Round, area: Rect) {
    let mut lines: Vec<Line> = round
        .feedback_rows()
        .iter()
        .map(|(guess, feedback)| submitted_line(guess.text(), feedback))
        .collect();

    if !round.status().is_terminal() {
        lines.push(open_line(round.composing()));
    }
    while lines.len() < MAX_ATTEMPTS {
        lines.push(open_line(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, keys: &KeyboardState, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| match keys.get(letter) {
                    Some(mark) => tile(letter, Some(mark)),
                    None => Span::styled(
                        format!(" {letter} "),
                        Style::default().fg(Color::Black).bg(Color::Gray),
                    ),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_details(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;

    let content: Vec<Line> = if !session.status().is_terminal() {
        vec![
            Line::from(format!(
                "Guess {}/{MAX_ATTEMPTS}",
                session.round().round() + 1
            )),
            Line::from(""),
            Line::from("Type letters, Enter to submit,"),
            Line::from("Backspace to delete."),
        ]
    } else if let Some(details) = session.details() {
        let mut lines = vec![
            Line::from(Span::styled(
                verdict(details),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                details.word.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        lines.extend(details_lines(details).into_iter().map(Line::from));

        if !session.is_restored() {
            let rows = session.round().feedback_rows();
            lines.push(Line::from(""));
            lines.extend(
                share_text(session.mode(), &rows, session.status())
                    .lines()
                    .map(|line| Line::from(line.to_string())),
            );
        }
        lines
    } else {
        vec![Line::from("Looking up the word...")]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Details ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.message {
        Some(message) => {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            (message.text.as_str(), style)
        }
        None => ("", Style::default()),
    };

    let message = Paragraph::new(text)
        .style(style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.session.status().is_terminal() {
        "p: Practice word | q/Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
