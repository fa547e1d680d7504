//! Word list loading utilities
//!
//! A word list is newline-delimited plain text; entries that are not five ASCII
//! letters are skipped.

use super::FALLBACK;
use crate::core::WORD_LENGTH;
use crate::error::ServiceError;
use crate::game::Dictionary;
use log::{debug, info};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Public list of valid guesses
pub const DEFAULT_WORD_LIST_URL: &str = "https://gist.githubusercontent.com/dracos/dd0668f281e685bad51479e5acaadb93/raw/6bfa15d263d6d5b63840a8e5b64e04b382fdb079/valid-wordle-words.txt";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Split text into lowercase five-letter entries
///
/// # Examples
/// ```
/// use wordquiz::wordlists::parse_word_list;
///
/// let words = parse_word_list("crane\r\nSlate\nno\n\nmouths\n");
/// assert_eq!(words, vec!["crane", "slate"]);
/// ```
#[must_use]
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.len() == WORD_LENGTH && line.bytes().all(|b| b.is_ascii_alphabetic()))
        .map(str::to_ascii_lowercase)
        .collect()
}

/// Dictionary over the embedded fallback list
#[must_use]
pub fn fallback_dictionary() -> Dictionary {
    Dictionary::new(FALLBACK)
}

/// Where the legal-guess list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Url(String),
    File(PathBuf),
}

impl WordSource {
    /// Interpret a command-line value: `http(s)://` is a URL, anything else a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Self::Url(arg.to_string())
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Fetch the raw text of the list
    ///
    /// # Errors
    /// `NetworkUnavailable` if the URL cannot be fetched, `Storage` if the file
    /// cannot be read.
    pub fn fetch_text(&self) -> Result<String, ServiceError> {
        match self {
            Self::Url(url) => {
                debug!("Fetching word list from {url}");
                reqwest::blocking::Client::builder()
                    .timeout(FETCH_TIMEOUT)
                    .build()
                    .and_then(|client| client.get(url).send())
                    .and_then(reqwest::blocking::Response::error_for_status)
                    .and_then(reqwest::blocking::Response::text)
                    .map_err(|e| ServiceError::NetworkUnavailable(e.to_string()))
            }
            Self::File(path) => {
                debug!("Reading word list from {}", path.display());
                Ok(fs::read_to_string(path)?)
            }
        }
    }

    /// Load the list into a dictionary
    ///
    /// # Errors
    /// Any fetch error, or `NetworkUnavailable` when the list holds no
    /// five-letter words.
    pub fn load(&self) -> Result<Dictionary, ServiceError> {
        let dictionary = Dictionary::new(parse_word_list(&self.fetch_text()?));

        if dictionary.is_empty() {
            return Err(ServiceError::NetworkUnavailable(
                "word list contains no five-letter words".to_string(),
            ));
        }

        info!("Loaded {} words", dictionary.len());
        Ok(dictionary)
    }
}

impl Default for WordSource {
    fn default() -> Self {
        Self::Url(DEFAULT_WORD_LIST_URL.to_string())
    }
}
