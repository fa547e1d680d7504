//! Post-game word lookup
//!
//! Definitions and a translation of the revealed word. Every lookup is best
//! effort: a failed service leaves its part of the details empty.

mod http;
mod task;

pub use http::HttpLookup;
pub use task::LookupTask;

use crate::core::Word;
use crate::error::ServiceError;
use crate::game::GameStatus;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    /// Outcome of a terminal status; `None` while the game is in progress
    #[must_use]
    pub const fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Won => Some(Self::Won),
            GameStatus::Lost => Some(Self::Lost),
            GameStatus::InProgress => None,
        }
    }

    #[must_use]
    pub const fn status(self) -> GameStatus {
        match self {
            Self::Won => GameStatus::Won,
            Self::Lost => GameStatus::Lost,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// One sense of the word, grouped by part of speech
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

/// Everything shown after a game ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostGameDetails {
    pub word: String,
    pub outcome: Outcome,
    pub attempts: usize,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(default)]
    pub translation: Option<String>,
    /// At least one service answered; bare details are looked up again
    #[serde(default)]
    pub looked_up: bool,
}

impl PostGameDetails {
    /// Details with nothing looked up yet
    #[must_use]
    pub fn bare(word: &Word, outcome: Outcome, attempts: usize) -> Self {
        Self {
            word: word.text().to_string(),
            outcome,
            attempts,
            meanings: Vec::new(),
            translation: None,
            looked_up: false,
        }
    }
}

/// Dictionary and translation services
pub trait WordLookup: Send + Sync {
    /// Definitions for a lowercase word
    ///
    /// # Errors
    /// `LookupUnavailable` if the service cannot be reached or knows no entry.
    fn define(&self, word: &str) -> Result<Vec<Meaning>, ServiceError>;

    /// Translation of a lowercase word
    ///
    /// # Errors
    /// `LookupUnavailable` if the service cannot be reached.
    fn translate(&self, word: &str) -> Result<String, ServiceError>;
}

/// Fill in `details` from `lookup`, omitting whatever fails
pub fn enrich(lookup: &dyn WordLookup, mut details: PostGameDetails) -> PostGameDetails {
    let word = details.word.to_ascii_lowercase();

    match lookup.define(&word) {
        Ok(meanings) => {
            debug!("Found {} meanings for {word}", meanings.len());
            details.meanings = meanings;
            details.looked_up = true;
        }
        Err(e) => warn!("Definition lookup for {word} failed: {e}"),
    }

    match lookup.translate(&word) {
        Ok(text) if !text.trim().is_empty() => {
            details.translation = Some(text);
            details.looked_up = true;
        }
        Ok(_) => {
            debug!("Empty translation for {word}");
            details.looked_up = true;
        }
        Err(e) => warn!("Translation lookup for {word} failed: {e}"),
    }

    details
}
