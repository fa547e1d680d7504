//! WordQuiz - CLI
//!
//! Daily word guessing game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordquiz::{
    commands::{run_simple, start_session},
    config::{Config, DEFAULT_DICTIONARY_URL, DEFAULT_LANGUAGE_PAIR, DEFAULT_TRANSLATION_URL},
    daily::TimeZoneChoice,
    logging,
    wordlists::{DEFAULT_WORD_LIST_URL, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordquiz",
    about = "Guess the daily five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: URL or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORD_LIST_URL)]
    wordlist: String,

    /// Play a practice word from the built-in list without network access
    #[arg(long, global = true)]
    offline: bool,

    /// Play a random practice word instead of the daily puzzle
    #[arg(short, long, global = true)]
    practice: bool,

    /// Time zone that decides the calendar day
    #[arg(long, global = true, value_enum, default_value_t = TimeZoneChoice::Utc)]
    timezone: TimeZoneChoice,

    /// Directory for daily records, completion flags and the log file
    #[arg(long, global = true, env = "WORDQUIZ_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Translation language pair for the post-game lookup
    #[arg(long, global = true, default_value = DEFAULT_LANGUAGE_PAIR)]
    lang: String,

    /// Skip the post-game dictionary and translation lookup
    #[arg(long, global = true)]
    no_lookup: bool,

    /// Dictionary service base URL
    #[arg(long, global = true, env = "WORDQUIZ_DICTIONARY_URL", default_value = DEFAULT_DICTIONARY_URL)]
    dictionary_url: String,

    /// Translation service URL
    #[arg(long, global = true, env = "WORDQUIZ_TRANSLATION_URL", default_value = DEFAULT_TRANSLATION_URL)]
    translation_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,
}

impl Cli {
    fn config(&self) -> Config {
        let data_dir = self
            .data_dir
            .clone()
            .unwrap_or_else(Config::default_data_dir);

        Config {
            word_source: WordSource::from_arg(&self.wordlist),
            offline: self.offline,
            practice: self.practice,
            timezone: self.timezone,
            lookup_enabled: !self.no_lookup,
            dictionary_url: self.dictionary_url.clone(),
            translation_url: self.translation_url.clone(),
            language_pair: self.lang.clone(),
            ..Config::with_data_dir(data_dir)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
    }
}

fn run_play_command(config: &Config) -> Result<()> {
    use wordquiz::interactive::{App, run_tui};

    let log_path = config.log_path();
    logging::init_file(&log_path)
        .with_context(|| format!("cannot open log file {}", log_path.display()))?;

    let session = start_session(config).context("no playable word list")?;
    run_tui(App::new(session))
}

fn run_simple_command(config: &Config) -> Result<()> {
    logging::init_stderr();

    let mut session = start_session(config).context("no playable word list")?;
    run_simple(&mut session)?;
    Ok(())
}
