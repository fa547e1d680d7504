//! Game rules
//!
//! The dictionary gate, the round state machine and the session that wraps
//! them for front ends.

mod dictionary;
mod round;
mod session;

pub use dictionary::Dictionary;
pub use round::{GameStatus, MAX_ATTEMPTS, Round, Submission};
pub use session::{PuzzleMode, Session};
