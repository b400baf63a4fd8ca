//! Exhaustive minimax over the full game tree.
//!
//! Scores are from the maximizing side's point of view: `+1` win, `-1` loss,
//! `0` draw. Every reachable line is enumerated; with at most 9 plies the
//! tree never exceeds 549,946 positions.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Mark, Moves, Position};
use crate::error::{Result, SolverError};

use super::stats::SearchStats;

/// Score of a position the maximizing side has won.
pub const WIN: i32 = 1;
/// Score of a position the minimizing side has won.
pub const LOSS: i32 = -1;
/// Score of a full board with no line.
pub const DRAW: i32 = 0;

/// Minimax value of one candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    pub index: usize,
    pub score: i32,
}

/// Full evaluation of a position's candidate moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Every available move with its score, ascending by index.
    pub moves: Vec<MoveScore>,

    /// Highest score among `moves`; `None` when there are no moves.
    pub best_score: Option<i32>,

    /// Moves achieving `best_score`, ascending.
    pub best_moves: Moves,

    pub stats: SearchStats,
}

/// Minimax engine for one fixed pair of marks.
///
/// Holds no state between calls; every method takes `&self` and is a pure
/// function of its arguments (plus the injected RNG for `find_best_move`).
///
/// ```
/// use rust_ttt::core::{Mark, Position};
/// use rust_ttt::minimax::MinimaxSearch;
///
/// let search = MinimaxSearch::new(Mark::O, Mark::X);
/// assert_eq!(search.score(&Position::new(), true), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinimaxSearch {
    minimizing: Mark,
    maximizing: Mark,
}

impl MinimaxSearch {
    /// Create an engine playing for `maximizing` against `minimizing`.
    ///
    /// Panics if both marks are the same.
    #[must_use]
    pub fn new(minimizing: Mark, maximizing: Mark) -> Self {
        assert_ne!(minimizing, maximizing, "Sides must use different marks");
        Self {
            minimizing,
            maximizing,
        }
    }

    /// Engine maximizing for `mark` against its opponent.
    #[must_use]
    pub fn playing_as(mark: Mark) -> Self {
        Self::new(mark.opponent(), mark)
    }

    #[must_use]
    pub fn maximizing(&self) -> Mark {
        self.maximizing
    }

    #[must_use]
    pub fn minimizing(&self) -> Mark {
        self.minimizing
    }

    /// Minimax value of `position` with the given side to move.
    ///
    /// Base cases, in order: maximizing mark has a line (`WIN`), minimizing
    /// mark has a line (`LOSS`), board full (`DRAW`). A line completed on the
    /// last empty cell therefore scores as a win, not a draw.
    #[must_use]
    pub fn score(&self, position: &Position, maximizing_turn: bool) -> i32 {
        self.minimax(position, maximizing_turn, 0, &mut SearchStats::default())
    }

    /// Score every move available to the maximizing side.
    ///
    /// Each child is scored with the minimizing side to move.
    #[must_use]
    pub fn evaluate_moves(&self, position: &Position) -> Vec<MoveScore> {
        self.evaluate_children(position, &mut SearchStats::default())
    }

    /// Every move tied for the best score, ascending.
    ///
    /// Empty iff the board is full.
    #[must_use]
    pub fn best_moves(&self, position: &Position) -> Moves {
        best_of(&self.evaluate_moves(position)).1
    }

    /// Pick an optimal move for the maximizing side.
    ///
    /// Ties are broken uniformly at random with `rng`; the result is always
    /// drawn from the maximal-score set.
    ///
    /// # Errors
    ///
    /// `NoAvailableMoves` if the board is full.
    pub fn find_best_move(&self, position: &Position, rng: &mut GameRng) -> Result<usize> {
        let best = self.best_moves(position);
        rng.choose(&best).copied().ok_or(SolverError::NoAvailableMoves)
    }

    /// Evaluate all moves and report how much of the tree was enumerated.
    #[must_use]
    pub fn analyze(&self, position: &Position) -> Analysis {
        let start = Instant::now();
        let mut stats = SearchStats::new();

        stats.record_node(0);
        if self.terminal_score(position).is_some() {
            stats.terminal_nodes += 1;
        }

        let moves = self.evaluate_children(position, &mut stats);
        let (best_score, best_moves) = best_of(&moves);

        stats.time_us = start.elapsed().as_micros() as u64;

        Analysis {
            moves,
            best_score,
            best_moves,
            stats,
        }
    }

    fn evaluate_children(&self, position: &Position, stats: &mut SearchStats) -> Vec<MoveScore> {
        position
            .available_moves()
            .into_iter()
            .map(|index| {
                let child = position.apply_move(index, self.maximizing);
                MoveScore {
                    index,
                    score: self.minimax(&child, false, 1, stats),
                }
            })
            .collect()
    }

    fn minimax(
        &self,
        position: &Position,
        maximizing_turn: bool,
        depth: u8,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.record_node(depth);

        if let Some(score) = self.terminal_score(position) {
            stats.terminal_nodes += 1;
            return score;
        }

        let (mark, mut best) = if maximizing_turn {
            (self.maximizing, i32::MIN)
        } else {
            (self.minimizing, i32::MAX)
        };

        for index in position.available_moves() {
            let child = position.apply_move(index, mark);
            let score = self.minimax(&child, !maximizing_turn, depth + 1, stats);
            best = if maximizing_turn {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    fn terminal_score(&self, position: &Position) -> Option<i32> {
        let winner = position.check_winner();
        if winner == self.maximizing.to_cell() {
            Some(WIN)
        } else if winner == self.minimizing.to_cell() {
            Some(LOSS)
        } else if position.is_full() {
            Some(DRAW)
        } else {
            None
        }
    }
}

/// Running maximum and its tied moves, in the order given.
fn best_of(moves: &[MoveScore]) -> (Option<i32>, Moves) {
    let mut best_score = None;
    let mut best_moves = Moves::new();

    for m in moves {
        match best_score {
            Some(best) if m.score < best => {}
            Some(best) if m.score == best => best_moves.push(m.index),
            _ => {
                best_score = Some(m.score);
                best_moves.clear();
                best_moves.push(m.index);
            }
        }
    }

    (best_score, best_moves)
}
