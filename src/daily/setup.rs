//! Puzzle setup at startup
//!
//! Combines the word list and the daily selector into the puzzle to play,
//! falling back to the embedded list when either is unavailable.

use super::{DailySelector, DailyStore, DateKey};
use crate::core::Word;
use crate::error::ServiceError;
use crate::game::{Dictionary, PuzzleMode};
use crate::wordlists::fallback_dictionary;
use log::{info, warn};
use rand::Rng;

/// Everything a session needs to start
#[derive(Debug, Clone)]
pub struct PuzzleSetup {
    pub dictionary: Dictionary,
    pub secret: Word,
    pub mode: PuzzleMode,
    /// The embedded list is in use; the daily guarantee does not hold
    pub offline: bool,
}

fn random_secret<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    rng: &mut R,
) -> Result<Word, ServiceError> {
    dictionary
        .random_word(rng)
        .cloned()
        .ok_or_else(|| ServiceError::Corrupt("word list is empty".to_string()))
}

fn offline_setup<R: Rng + ?Sized>(rng: &mut R) -> Result<PuzzleSetup, ServiceError> {
    let dictionary = fallback_dictionary();
    let secret = random_secret(&dictionary, rng)?;

    Ok(PuzzleSetup {
        dictionary,
        secret,
        mode: PuzzleMode::Practice,
        offline: true,
    })
}

/// Decide the puzzle for `key`
///
/// - `practice`: a random word from the list, nothing stored
/// - otherwise: the daily word from the store
/// - word list or store unavailable: a random word from the embedded list,
///   nothing stored, practice mode
///
/// # Errors
/// Only if the embedded list itself is empty.
pub fn prepare_puzzle<S: DailyStore, R: Rng + ?Sized>(
    word_list: Result<Dictionary, ServiceError>,
    selector: &DailySelector<S>,
    key: DateKey,
    practice: bool,
    rng: &mut R,
) -> Result<PuzzleSetup, ServiceError> {
    let mut dictionary = match word_list {
        Ok(dictionary) => dictionary,
        Err(e) => {
            warn!("Word list unavailable, playing offline: {e}");
            return offline_setup(rng);
        }
    };

    if practice {
        let secret = random_secret(&dictionary, rng)?;
        info!("Starting practice game");
        return Ok(PuzzleSetup {
            dictionary,
            secret,
            mode: PuzzleMode::Practice,
            offline: false,
        });
    }

    match selector.resolve_todays_word(&key, &dictionary, rng) {
        Ok(secret) => {
            // The stored word may come from a different list
            if dictionary.insert(&secret) {
                info!("Daily word {secret} is not in the word list; accepting it as a guess");
            }
            info!("Daily puzzle for {key} ready");
            Ok(PuzzleSetup {
                dictionary,
                secret,
                mode: PuzzleMode::Daily(key),
                offline: false,
            })
        }
        Err(e) => {
            warn!("Daily store unavailable, playing offline: {e}");
            offline_setup(rng)
        }
    }
}
