//! Daily puzzle selection
//!
//! Reads today's record from the store, or picks a word and creates the record.

use super::{DailyPuzzleRecord, DailyStore, DateKey};
use crate::core::Word;
use crate::error::ServiceError;
use crate::game::Dictionary;
use log::info;
use rand::Rng;

pub struct DailySelector<S: DailyStore> {
    store: S,
}

impl<S: DailyStore> DailySelector<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Resolve the secret word for `key`
    ///
    /// When no record exists a random word from `dictionary` is proposed. The
    /// store arbitrates concurrent creators, so the returned word is whatever
    /// the store holds afterwards, not necessarily the one proposed here.
    ///
    /// # Errors
    /// - `ServiceError` from the store
    /// - `Corrupt` if the stored word is not a valid word or `dictionary` is empty
    pub fn resolve_todays_word<R: Rng + ?Sized>(
        &self,
        key: &DateKey,
        dictionary: &Dictionary,
        rng: &mut R,
    ) -> Result<Word, ServiceError> {
        let record = if let Some(record) = self.store.get(key)? {
            record
        } else {
            let proposed = dictionary
                .random_word(rng)
                .ok_or_else(|| ServiceError::Corrupt("word list is empty".to_string()))?;
            info!("No daily record for {key}, creating one");
            self.store
                .create_if_absent(DailyPuzzleRecord::new(proposed.text(), *key))?
        };

        Word::new(&record.word)
            .map_err(|e| ServiceError::Corrupt(format!("daily word '{}': {e}", record.word)))
    }
}
