//! Game rules: the win pattern table and game results.
//!
//! `Position` calls into these for terminal detection; nothing here knows
//! about search.

pub mod lines;
pub mod outcome;

pub use lines::{winner, winning_line, WIN_PATTERNS};
pub use outcome::GameResult;
