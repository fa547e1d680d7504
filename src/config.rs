//! Runtime configuration
//!
//! Resolved once from the command line and environment, then passed to the
//! front ends.

use crate::daily::{DateKey, TimeZoneChoice};
use crate::error::ServiceError;
use crate::game::Dictionary;
use crate::lookup::{HttpLookup, WordLookup};
use crate::wordlists::WordSource;
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;

pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
pub const DEFAULT_TRANSLATION_URL: &str = "https://api.mymemory.translated.net/get";
pub const DEFAULT_LANGUAGE_PAIR: &str = "en|hi";

const APP_DIR: &str = "wordquiz";
const LOG_FILE: &str = "wordquiz.log";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub word_source: WordSource,
    /// Skip the word list and daily store entirely
    pub offline: bool,
    pub practice: bool,
    pub timezone: TimeZoneChoice,
    pub lookup_enabled: bool,
    pub dictionary_url: String,
    pub translation_url: String,
    pub language_pair: String,
}

impl Config {
    /// Platform data directory, or the working directory if there is none
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Configuration with every option at its default, rooted at `data_dir`
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            word_source: WordSource::default(),
            offline: false,
            practice: false,
            timezone: TimeZoneChoice::default(),
            lookup_enabled: true,
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
            translation_url: DEFAULT_TRANSLATION_URL.to_string(),
            language_pair: DEFAULT_LANGUAGE_PAIR.to_string(),
        }
    }

    /// Daily puzzle records, shared by every player of this store
    #[must_use]
    pub fn daily_dir(&self) -> PathBuf {
        self.data_dir.join("daily")
    }

    /// Completion records of this device
    #[must_use]
    pub fn device_dir(&self) -> PathBuf {
        self.data_dir.join("device")
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    #[must_use]
    pub fn date_key(&self) -> DateKey {
        DateKey::today(self.timezone)
    }

    /// Load the legal-guess list
    ///
    /// # Errors
    /// `NetworkUnavailable` in offline mode, otherwise any load error of the
    /// configured source.
    pub fn word_list(&self) -> Result<Dictionary, ServiceError> {
        if self.offline {
            return Err(ServiceError::NetworkUnavailable(
                "offline mode requested".to_string(),
            ));
        }
        self.word_source.load()
    }

    /// Lookup client, or `None` when lookups are disabled or unavailable
    #[must_use]
    pub fn lookup(&self) -> Option<Arc<dyn WordLookup>> {
        if !self.lookup_enabled || self.offline {
            info!("Post-game lookup disabled");
            return None;
        }

        match HttpLookup::new(
            &self.dictionary_url,
            &self.translation_url,
            &self.language_pair,
        ) {
            Ok(lookup) => Some(Arc::new(lookup)),
            Err(e) => {
                warn!("Post-game lookup unavailable: {e}");
                None
            }
        }
    }
}
