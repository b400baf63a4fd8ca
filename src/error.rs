//! Error types for rust-ttt.

use thiserror::Error;

use crate::core::Mark;

/// Errors reported by checked position and session operations.
///
/// The unchecked paths (`Position::apply_move`) panic instead; these variants
/// are what a driver sees when it asks first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SolverError {
    #[error("move {index} is out of range (expected 0-8)")]
    MoveOutOfRange { index: usize },

    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("no available moves")]
    NoAvailableMoves,

    #[error("game already over")]
    GameOver,

    #[error("not {got}'s turn ({expected} to move)")]
    NotYourTurn { expected: Mark, got: Mark },

    #[error("board string has {got} cells, expected {expected}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCellCharacter { character: char, position: usize },
}

/// Result alias using [`SolverError`].
pub type Result<T> = std::result::Result<T, SolverError>;
