//! Session startup shared by both front ends

use crate::config::Config;
use crate::daily::{DailySelector, FileStore, prepare_puzzle};
use crate::device::FileCompletionStore;
use crate::error::ServiceError;
use crate::game::Session;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::time::Duration;

/// Load the word list, resolve today's puzzle and open the session
///
/// Network and store failures fall back to offline play; a spinner runs while
/// the word list and daily record are fetched.
///
/// # Errors
/// Only if no playable word list exists at all.
pub fn start_session(config: &Config) -> Result<Session, ServiceError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message("Loading word list...");

    let word_list = config.word_list();

    spinner.set_message("Fetching today's puzzle...");
    let selector = DailySelector::new(FileStore::new(config.daily_dir()));
    let setup = prepare_puzzle(
        word_list,
        &selector,
        config.date_key(),
        config.practice,
        &mut rand::rng(),
    );
    spinner.finish_and_clear();
    let setup = setup?;

    info!(
        "Starting {:?} session with {} words",
        setup.mode,
        setup.dictionary.len()
    );

    Ok(Session::new(
        setup,
        Box::new(FileCompletionStore::new(config.device_dir())),
        config.lookup(),
    ))
}
