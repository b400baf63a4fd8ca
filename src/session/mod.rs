//! Headless human-versus-computer driver.
//!
//! `GameSession` threads a `Position` through alternating turns. It does no
//! terminal I/O: a front end reads a cell index, calls `play_human`, prints
//! the board, and calls `play_computer` until `is_over`.
//!
//! ```rust
//! use rust_ttt::core::Mark;
//! use rust_ttt::session::{GameSession, SessionConfig};
//!
//! let config = SessionConfig::default().with_human(Mark::O).with_seed(7);
//! let mut session = GameSession::new(config);
//!
//! // The computer plays X and opens.
//! let opening = session.play_computer().unwrap();
//! assert!(opening < 9);
//! assert!(session.is_human_turn());
//! ```

pub mod config;
pub mod game;

pub use config::SessionConfig;
pub use game::{GameSession, MoveRecord};
