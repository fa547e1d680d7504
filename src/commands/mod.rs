//! Command implementations

pub mod simple;
mod startup;

pub use simple::{play_lines, run_simple};
pub use startup::start_session;
