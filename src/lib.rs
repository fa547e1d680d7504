//! WordQuiz
//!
//! A daily five-letter word guessing game for the terminal. Everyone playing
//! against the same store gets the same word each day; practice words can be
//! played without limit.
//!
//! # Quick Start
//!
//! ```rust
//! use wordquiz::core::{Feedback, Word};
//!
//! let guess = Word::new("eerie").unwrap();
//! let secret = Word::new("alert").unwrap();
//!
//! // Repeated letters are only marked as often as the secret holds them
//! let feedback = Feedback::classify(&guess, &secret);
//! assert_eq!(feedback.to_string(), "Y-Y--");
//! ```

// Core domain types
pub mod core;

// Game rules and session
pub mod game;

// Daily puzzle selection
pub mod daily;

// Per-device completion records
pub mod device;

// Post-game dictionary and translation lookup
pub mod lookup;

// Word lists
pub mod wordlists;

pub mod config;
pub mod error;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
