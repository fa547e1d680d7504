//! Logger setup
//!
//! The TUI owns the terminal, so it logs to a file; line mode logs to stderr.
//! `RUST_LOG` overrides the default filter in both cases.

use env_logger::{Builder, Env, Target};
use log::debug;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

/// Append log records to `path`, creating its directory
///
/// # Errors
/// Returns an error if the log file cannot be opened.
pub fn init_file(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    // A second init keeps the first logger
    if let Err(e) = Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init()
    {
        debug!("Keeping the existing logger: {e}");
    }
    Ok(())
}

/// Log warnings and errors to stderr
pub fn init_stderr() {
    if let Err(e) = Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init()
    {
        debug!("Keeping the existing logger: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_keeps_working() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("wordquiz.log");

        init_file(&path).unwrap();
        init_file(&path).unwrap();
        init_stderr();
        assert!(path.exists());
    }
}
