//! Daily puzzle store
//!
//! Associates each date key with one secret word. A record is created at most
//! once per key and never changes afterwards.

use super::DateKey;
use crate::error::ServiceError;
use chrono::{DateTime, Utc};
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPuzzleRecord {
    pub word: String,
    pub date: DateKey,
    pub timestamp: DateTime<Utc>,
}

impl DailyPuzzleRecord {
    #[must_use]
    pub fn new(word: impl Into<String>, date: DateKey) -> Self {
        Self {
            word: word.into(),
            date,
            timestamp: Utc::now(),
        }
    }
}

/// Key-value store of daily records
///
/// `create_if_absent` must be atomic: when two clients race on the same key,
/// both receive the single record that ends up stored.
pub trait DailyStore {
    /// # Errors
    /// Returns a `ServiceError` if the store is unreachable or the record is unreadable.
    fn get(&self, key: &DateKey) -> Result<Option<DailyPuzzleRecord>, ServiceError>;

    /// Store `record` unless its key already has one; returns the stored record
    ///
    /// # Errors
    /// Returns a `ServiceError` if the store is unreachable.
    fn create_if_absent(
        &self,
        record: DailyPuzzleRecord,
    ) -> Result<DailyPuzzleRecord, ServiceError>;
}

/// One JSON file per date key under a directory
///
/// Creation writes a temporary file and hard-links it into place; the link
/// fails if the target exists, so readers never see a partial record.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &DateKey) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn read(path: &Path) -> Result<Option<DailyPuzzleRecord>, ServiceError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl DailyStore for FileStore {
    fn get(&self, key: &DateKey) -> Result<Option<DailyPuzzleRecord>, ServiceError> {
        Self::read(&self.path_for(key))
    }

    fn create_if_absent(
        &self,
        record: DailyPuzzleRecord,
    ) -> Result<DailyPuzzleRecord, ServiceError> {
        fs::create_dir_all(&self.root)?;

        let target = self.path_for(&record.date);
        let temp = self.root.join(format!(
            ".{}.{}.{:016x}.tmp",
            record.date,
            std::process::id(),
            rand::random::<u64>()
        ));
        fs::write(&temp, serde_json::to_vec_pretty(&record)?)?;

        let linked = fs::hard_link(&temp, &target);
        fs::remove_file(&temp)?;

        match linked {
            Ok(()) => {
                info!("Created daily record for {}", record.date);
                Ok(record)
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                debug!("Daily record for {} already exists", record.date);
                Self::read(&target)?.ok_or_else(|| {
                    ServiceError::Corrupt(format!("record for {} vanished", record.date))
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<FxHashMap<DateKey, DailyPuzzleRecord>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> ServiceError {
    ServiceError::Corrupt("store lock poisoned".to_string())
}

impl DailyStore for MemoryStore {
    fn get(&self, key: &DateKey) -> Result<Option<DailyPuzzleRecord>, ServiceError> {
        Ok(self.records.lock().map_err(poisoned)?.get(key).cloned())
    }

    fn create_if_absent(
        &self,
        record: DailyPuzzleRecord,
    ) -> Result<DailyPuzzleRecord, ServiceError> {
        let mut records = self.records.lock().map_err(poisoned)?;
        Ok(records.entry(record.date).or_insert(record).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    #[test]
    fn memory_store_first_writer_wins() {
        let store = MemoryStore::new();
        let day = key("2024-05-01");

        assert!(store.get(&day).unwrap().is_none());
        let first = store.create_if_absent(DailyPuzzleRecord::new("CRANE", day)).unwrap();
        let second = store.create_if_absent(DailyPuzzleRecord::new("SLATE", day)).unwrap();

        assert_eq!(first.word, "CRANE");
        assert_eq!(second.word, "CRANE");
        assert_eq!(store.get(&day).unwrap().unwrap().word, "CRANE");
    }

    #[test]
    fn file_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.get(&key("2024-05-01")).unwrap().is_none());
    }

    #[test]
    fn file_store_create_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("daily"));
        let day = key("2024-05-01");

        let created = store.create_if_absent(DailyPuzzleRecord::new("MOUTH", day)).unwrap();
        let fetched = store.get(&day).unwrap().unwrap();

        assert_eq!(created, fetched);
        assert!(dir.path().join("daily/2024-05-01.json").exists());
    }

    #[test]
    fn file_store_keeps_existing_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let day = key("2024-05-01");

        store.create_if_absent(DailyPuzzleRecord::new("CRANE", day)).unwrap();
        let again = store.create_if_absent(DailyPuzzleRecord::new("SLATE", day)).unwrap();

        assert_eq!(again.word, "CRANE");
        // No temporary files are left behind
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn file_store_concurrent_creators_agree() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileStore::new(dir.path()));
        let day = key("2024-05-02");

        let handles: Vec<_> = ["CRANE", "SLATE", "MOUTH", "ALERT"]
            .into_iter()
            .map(|word| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.create_if_absent(DailyPuzzleRecord::new(word, day)))
            })
            .collect();

        let words: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap().word)
            .collect();

        assert!(words.iter().all(|w| w == &words[0]));
    }

    #[test]
    fn file_store_corrupt_record() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("2024-05-01.json"), "not json").unwrap();
        let store = FileStore::new(dir.path());

        assert!(matches!(
            store.get(&key("2024-05-01")),
            Err(ServiceError::Corrupt(_))
        ));
    }
}
