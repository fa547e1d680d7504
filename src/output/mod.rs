//! Terminal output formatting
//!
//! Tiles, keyboard and post-game text shared by both front ends.

pub mod display;
pub mod formatters;

pub use display::{write_banner, write_board, write_summary};
