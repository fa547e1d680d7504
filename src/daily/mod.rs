//! Daily puzzle
//!
//! One secret word per calendar day, shared through an external store.

mod date_key;
mod selector;
mod setup;
mod store;

pub use date_key::{DateKey, TimeZoneChoice};
pub use selector::DailySelector;
pub use setup::{PuzzleSetup, prepare_puzzle};
pub use store::{DailyPuzzleRecord, DailyStore, FileStore, MemoryStore};
