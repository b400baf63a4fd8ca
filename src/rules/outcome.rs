//! Finished-game results.

use serde::{Deserialize, Serialize};

use crate::core::Mark;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Three in a row for this mark.
    Winner(Mark),
    /// Full board, no line.
    Draw,
}

impl GameResult {
    /// Check if a mark won.
    #[must_use]
    pub fn is_winner(&self, mark: Mark) -> bool {
        matches!(self, GameResult::Winner(m) if *m == mark)
    }

    /// The winning mark, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Winner(m) => Some(*m),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(m) => write!(f, "{m} wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}
