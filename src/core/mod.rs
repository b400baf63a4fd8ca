//! Core value types: marks, cells, positions, and the tie-break RNG.
//!
//! Everything here is a plain value with no search knowledge. The minimax
//! engine and the session driver build on these.

pub mod mark;
pub mod position;
pub mod rng;

pub use mark::{Cell, Mark};
pub use position::{Moves, Position, BOARD_SIZE};
pub use rng::{GameRng, GameRngState};
