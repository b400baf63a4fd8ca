//! # rust-ttt
//!
//! Exhaustive minimax solver for 3x3 tic-tac-toe positions.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: `Position` is a 9-cell `Copy` value. Applying a
//!    move returns a new position; nothing is mutated in place.
//!
//! 2. **Full Enumeration**: No pruning, no transposition table. The whole
//!    tree below the empty board is 549,946 positions.
//!
//! 3. **Injected Randomness**: Ties between equally good moves are broken
//!    with a caller-owned `GameRng`, so fixed seeds replay exactly.
//!
//! ## Modules
//!
//! - `core`: Cells, marks, positions, RNG
//! - `rules`: Win pattern table and game results
//! - `minimax`: Scoring and best-move selection
//! - `session`: Headless human-versus-computer driver
//! - `error`: Error type for checked operations

pub mod core;
pub mod error;
pub mod minimax;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Cell, GameRng, GameRngState, Mark, Moves, Position, BOARD_SIZE};

pub use crate::error::{Result, SolverError};

pub use crate::rules::{GameResult, WIN_PATTERNS};

pub use crate::minimax::{Analysis, MinimaxSearch, MoveScore, SearchStats};

pub use crate::session::{GameSession, MoveRecord, SessionConfig};
