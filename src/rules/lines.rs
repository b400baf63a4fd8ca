//! Win pattern table and winner detection.

use crate::core::Cell;

/// The 8 index triples that win: rows, then columns, then diagonals.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// First win pattern (in table order) fully owned by one mark.
#[must_use]
pub fn winning_line(cells: &[Cell; 9]) -> Option<[usize; 3]> {
    WIN_PATTERNS.iter().copied().find(|&[a, b, c]| {
        !cells[a].is_empty() && cells[a] == cells[b] && cells[b] == cells[c]
    })
}

/// Mark owning the first complete win pattern, or `Cell::Empty`.
#[must_use]
pub fn winner(cells: &[Cell; 9]) -> Cell {
    winning_line(cells).map_or(Cell::Empty, |[a, _, _]| cells[a])
}
