//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::core::Mark;

/// Who plays which mark, who opens, and how ties are seeded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Mark placed by the human. The computer takes the other one.
    pub human: Mark,

    /// Mark that moves first (X in the standard game).
    pub first_to_move: Mark,

    /// Seed for the computer's tie-break RNG.
    /// `None` draws a fresh seed for every session.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            human: Mark::X,
            first_to_move: Mark::X,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create a new config with the human playing `mark`.
    pub fn with_human(mut self, mark: Mark) -> Self {
        self.human = mark;
        self
    }

    /// Create a new config with a custom opening mark.
    pub fn with_first_to_move(mut self, mark: Mark) -> Self {
        self.first_to_move = mark;
        self
    }

    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Mark played by the computer.
    #[must_use]
    pub fn computer(&self) -> Mark {
        self.human.opponent()
    }
}
