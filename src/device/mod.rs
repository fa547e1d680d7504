//! Per-device completion records
//!
//! Remembers that this device finished a day's puzzle, with the post-game
//! details cached so a revisit needs no network calls. Each date key maps to
//! two entries: a completion flag holding the outcome, and the serialized
//! details.

use crate::daily::DateKey;
use crate::error::ServiceError;
use crate::lookup::{Outcome, PostGameDetails};
use log::debug;
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRecord {
    pub date: DateKey,
    pub outcome: Outcome,
    pub details: Option<PostGameDetails>,
}

pub trait CompletionStore {
    /// Record for `key`, if this device completed that day
    ///
    /// # Errors
    /// `Storage` on read failure, `Corrupt` if the flag holds an unknown outcome.
    fn load(&self, key: &DateKey) -> Result<Option<CompletionRecord>, ServiceError>;

    /// Write the flag and, when present, the cached details
    ///
    /// # Errors
    /// `Storage` on write failure.
    fn save(&self, record: &CompletionRecord) -> Result<(), ServiceError>;
}

fn outcome_flag(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won => "won",
        Outcome::Lost => "lost",
    }
}

fn parse_flag(flag: &str) -> Result<Outcome, ServiceError> {
    match flag.trim() {
        "won" => Ok(Outcome::Won),
        "lost" => Ok(Outcome::Lost),
        other => Err(ServiceError::Corrupt(format!("completion flag '{other}'"))),
    }
}

/// Flag and details as files under a directory
pub struct FileCompletionStore {
    root: PathBuf,
}

impl FileCompletionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn flag_path(&self, key: &DateKey) -> PathBuf {
        self.root.join(format!("completed-{key}"))
    }

    fn details_path(&self, key: &DateKey) -> PathBuf {
        self.root.join(format!("details-{key}.json"))
    }
}

impl CompletionStore for FileCompletionStore {
    fn load(&self, key: &DateKey) -> Result<Option<CompletionRecord>, ServiceError> {
        let flag = match fs::read_to_string(self.flag_path(key)) {
            Ok(flag) => flag,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let outcome = parse_flag(&flag)?;

        // Missing or unreadable details only cost the cached lookup
        let details = fs::read_to_string(self.details_path(key))
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok());

        Ok(Some(CompletionRecord {
            date: *key,
            outcome,
            details,
        }))
    }

    fn save(&self, record: &CompletionRecord) -> Result<(), ServiceError> {
        fs::create_dir_all(&self.root)?;

        if let Some(details) = &record.details {
            fs::write(
                self.details_path(&record.date),
                serde_json::to_vec_pretty(details)?,
            )?;
        }
        fs::write(self.flag_path(&record.date), outcome_flag(record.outcome))?;

        debug!("Saved completion record for {}", record.date);
        Ok(())
    }
}

/// Completion records kept for the lifetime of the process
#[derive(Default)]
pub struct MemoryCompletionStore {
    records: Mutex<FxHashMap<DateKey, CompletionRecord>>,
}

impl MemoryCompletionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> ServiceError {
    ServiceError::Corrupt("completion lock poisoned".to_string())
}

impl CompletionStore for MemoryCompletionStore {
    fn load(&self, key: &DateKey) -> Result<Option<CompletionRecord>, ServiceError> {
        Ok(self.records.lock().map_err(poisoned)?.get(key).cloned())
    }

    fn save(&self, record: &CompletionRecord) -> Result<(), ServiceError> {
        self.records
            .lock()
            .map_err(poisoned)?
            .insert(record.date, record.clone());
        Ok(())
    }
}
