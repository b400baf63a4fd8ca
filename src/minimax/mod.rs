//! Exhaustive minimax search.
//!
//! ## Overview
//!
//! `MinimaxSearch` scores positions by enumerating the complete game tree
//! below them. No pruning and no caching: the 3x3 tree is small enough that
//! full enumeration runs well within interactive latency.
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::core::{GameRng, Mark, Position};
//! use rust_ttt::minimax::MinimaxSearch;
//!
//! let search = MinimaxSearch::new(Mark::X, Mark::O);
//! let mut rng = GameRng::new(42);
//!
//! // X took the center; O must answer in a corner.
//! let position = Position::new().apply_move(4, Mark::X);
//! let reply = search.find_best_move(&position, &mut rng).unwrap();
//! assert!([0, 2, 6, 8].contains(&reply));
//! ```

pub mod search;
pub mod stats;

pub use search::{Analysis, MinimaxSearch, MoveScore, DRAW, LOSS, WIN};
pub use stats::SearchStats;
