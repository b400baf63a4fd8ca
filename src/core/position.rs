//! Immutable 3x3 grid positions.
//!
//! ## Position
//!
//! Nine cells, row-major:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! A `Position` is a `Copy` value. Applying a move returns a new position and
//! leaves the receiver untouched, so search branches never share state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::mark::{Cell, Mark};
use crate::error::{Result, SolverError};
use crate::rules::{self, GameResult};

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Ascending list of cell indices.
pub type Moves = SmallVec<[usize; BOARD_SIZE]>;

/// Snapshot of the grid's contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    cells: [Cell; BOARD_SIZE],
}

impl Position {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    #[must_use]
    pub const fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    #[must_use]
    pub const fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Cell at `index`.
    ///
    /// Panics if `index >= 9`.
    #[must_use]
    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// True iff no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Mark owning a complete row, column, or diagonal; `Cell::Empty` if none.
    ///
    /// Patterns are checked in a fixed order and the first match wins.
    #[must_use]
    pub fn check_winner(&self) -> Cell {
        rules::winner(&self.cells)
    }

    /// True iff someone has won or the board is full.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !self.check_winner().is_empty() || self.is_full()
    }

    /// Result of the game, or `None` while it continues.
    ///
    /// A completed line takes precedence over a full board.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        match self.check_winner().mark() {
            Some(mark) => Some(GameResult::Winner(mark)),
            None if self.is_full() => Some(GameResult::Draw),
            None => None,
        }
    }

    /// Indices of empty cells, ascending.
    ///
    /// Empty iff the board is full. A won board with empty cells still lists
    /// them; callers check `is_game_over` first.
    #[must_use]
    pub fn available_moves(&self) -> Moves {
        (0..BOARD_SIZE).filter(|&i| self.cells[i].is_empty()).collect()
    }

    /// Position with `index` set to `mark`.
    ///
    /// The caller guarantees `index` is in range and empty. Violations panic;
    /// use [`Position::try_apply_move`] to validate untrusted input.
    #[must_use]
    pub fn apply_move(&self, index: usize, mark: Mark) -> Self {
        assert!(index < BOARD_SIZE, "move {index} is out of range");
        assert!(self.cells[index].is_empty(), "cell {index} is already occupied");

        let mut next = *self;
        next.cells[index] = mark.to_cell();
        next
    }

    /// Checked variant of [`Position::apply_move`].
    pub fn try_apply_move(&self, index: usize, mark: Mark) -> Result<Self> {
        if index >= BOARD_SIZE {
            return Err(SolverError::MoveOutOfRange { index });
        }
        if !self.cells[index].is_empty() {
            return Err(SolverError::CellOccupied { index });
        }
        Ok(self.apply_move(index, mark))
    }
}

impl fmt::Display for Position {
    /// Three rows, `-` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(3).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

/// Cell characters of one row, dropping the spacing of a printed row.
fn row_chars(row: &str) -> Vec<char> {
    let chars: Vec<char> = row.chars().filter(|c| !matches!(c, '|' | '\r')).collect();
    match chars.as_slice() {
        [a, ' ', b, ' ', c] => vec![*a, *b, *c],
        _ => chars,
    }
}

impl FromStr for Position {
    type Err = SolverError;

    /// Parse 9 cell characters, optionally split into rows by newlines or
    /// `/`. `-`, `.`, `_` and space are empty cells. A printed row
    /// (`"X - O"`) is read back as three cells.
    ///
    /// ```
    /// use rust_ttt::core::{Cell, Position};
    ///
    /// let position: Position = "XX-/OO-/---".parse().unwrap();
    /// assert_eq!(position.get(0), Cell::X);
    /// assert_eq!(position.available_moves().as_slice(), &[2, 5, 6, 7, 8]);
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .split(|c| c == '\n' || c == '/')
            .flat_map(row_chars)
            .collect();

        if chars.len() != BOARD_SIZE {
            return Err(SolverError::InvalidBoardLength {
                expected: BOARD_SIZE,
                got: chars.len(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c)
                .ok_or(SolverError::InvalidCellCharacter { character: c, position: i })?;
        }

        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board() {
        let p = Position::new();
        assert_eq!(p, Position::default());
        assert_eq!(p.occupied_count(), 0);
        assert!(!p.is_full());
        assert!(!p.is_game_over());
        assert_eq!(p.check_winner(), Cell::Empty);
        assert_eq!(p.available_moves().as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(p.outcome(), None);
    }

    #[test]
    fn test_apply_move_returns_new_position() {
        let parent = Position::new();
        let child = parent.apply_move(4, Mark::X);

        assert_eq!(child.get(4), Cell::X);
        assert_eq!(child.occupied_count(), 1);
        assert_eq!(parent, Position::new());
    }

    #[test]
    #[should_panic(expected = "cell 4 is already occupied")]
    fn test_apply_move_occupied_panics() {
        let _ = Position::new().apply_move(4, Mark::X).apply_move(4, Mark::O);
    }

    #[test]
    #[should_panic(expected = "move 9 is out of range")]
    fn test_apply_move_out_of_range_panics() {
        let _ = Position::new().apply_move(9, Mark::X);
    }

    #[test]
    fn test_try_apply_move() {
        let p = Position::new().apply_move(0, Mark::X);
        assert_eq!(
            p.try_apply_move(0, Mark::O),
            Err(SolverError::CellOccupied { index: 0 })
        );
        assert_eq!(
            p.try_apply_move(12, Mark::O),
            Err(SolverError::MoveOutOfRange { index: 12 })
        );
        assert_eq!(p.try_apply_move(1, Mark::O).unwrap().get(1), Cell::O);
    }

    #[test]
    fn test_won_board_with_empty_cells_is_over() {
        let p = pos("XXX/OO-/---");
        assert_eq!(p.check_winner(), Cell::X);
        assert!(!p.is_full());
        assert!(p.is_game_over());
        assert_eq!(p.outcome(), Some(GameResult::Winner(Mark::X)));
    }

    #[test]
    fn test_full_drawn_board() {
        let p = pos("XOX/XOO/OXX");
        assert!(p.is_full());
        assert_eq!(p.check_winner(), Cell::Empty);
        assert!(p.is_game_over());
        assert!(p.available_moves().is_empty());
        assert_eq!(p.outcome(), Some(GameResult::Draw));
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let p = pos("XOX/OXO/OXX");
        assert!(p.is_full());
        assert_eq!(p.outcome(), Some(GameResult::Winner(Mark::X)));
    }

    #[test]
    fn test_display() {
        let p = pos("XO-/-X-/--O");
        assert_eq!(p.to_string(), "X O -\n- X -\n- - O");
    }

    #[test]
    fn test_parse_printout() {
        let p = pos("XO-/-X-/--O");
        let reparsed: Position = p.to_string().parse().unwrap();
        assert_eq!(reparsed, p);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO".parse::<Position>(),
            Err(SolverError::InvalidBoardLength { expected: 9, got: 2 })
        );
        assert_eq!(
            "XOZ------".parse::<Position>(),
            Err(SolverError::InvalidCellCharacter { character: 'Z', position: 2 })
        );
    }

    #[test]
    fn test_serialization() {
        let p = pos("X-O/---/--X");
        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }
}
