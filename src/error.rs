//! Error taxonomy
//!
//! Game errors are recoverable by the player. Service errors are recoverable by
//! the session through a fallback; none of them ends a game.

use std::fmt;
use std::io;

/// Why a keystroke or command was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The composing guess already has five letters
    GuessFull,
    /// Submit was pressed before five letters were entered
    GuessIncomplete,
    /// The key is not a letter A-Z
    NotALetter(char),
    /// The game is already won or lost
    GameOver,
    /// Reset was requested for the shared daily puzzle
    DailyPuzzle,
    /// Practice was requested before the daily puzzle finished
    DailyInProgress,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GuessFull => write!(f, "Guess is already full"),
            Self::GuessIncomplete => write!(f, "Not enough letters"),
            Self::NotALetter(c) => write!(f, "'{c}' is not a letter"),
            Self::GameOver => write!(f, "The game is over"),
            Self::DailyPuzzle => write!(f, "The daily puzzle cannot be replayed"),
            Self::DailyInProgress => write!(f, "Finish today's puzzle first"),
        }
    }
}

/// Errors raised by the round state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The guess is not in the word list
    IllegalWord(String),
    /// Input ignored; a UI signal rather than a failure
    InputRejected(Rejection),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalWord(_) => write!(f, "Not in word list"),
            Self::InputRejected(reason) => write!(f, "{reason}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<Rejection> for GameError {
    fn from(reason: Rejection) -> Self {
        Self::InputRejected(reason)
    }
}

/// Errors raised by external collaborators
#[derive(Debug)]
pub enum ServiceError {
    /// Word list or daily store unreachable
    NetworkUnavailable(String),
    /// Dictionary or translation lookup failed
    LookupUnavailable(String),
    /// Local storage could not be read or written
    Storage(io::Error),
    /// Stored data could not be decoded
    Corrupt(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkUnavailable(detail) => write!(f, "Network unavailable: {detail}"),
            Self::LookupUnavailable(detail) => write!(f, "Lookup unavailable: {detail}"),
            Self::Storage(err) => write!(f, "Storage error: {err}"),
            Self::Corrupt(detail) => write!(f, "Corrupt record: {detail}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ServiceError {
    fn from(err: io::Error) -> Self {
        Self::Storage(err)
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Corrupt(err.to_string())
    }
}
