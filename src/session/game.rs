//! Headless game loop state.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameRng, GameRngState, Mark, Position};
use crate::error::{Result, SolverError};
use crate::minimax::MinimaxSearch;
use crate::rules::GameResult;

use super::config::SessionConfig;

/// One applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mark: Mark,
    pub index: usize,
}

/// A human-versus-computer game in progress.
///
/// Holds the current position and whose turn it is. Human moves are
/// validated here, so nothing illegal ever reaches the search engine.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    search: MinimaxSearch,
    rng: GameRng,
    position: Position,
    to_move: Mark,
    history: Vec<MoveRecord>,
}

impl GameSession {
    /// Start a game on an empty board.
    pub fn new(config: SessionConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(config, rng)
    }

    /// Rebuild a session from its move history and a captured RNG state.
    ///
    /// `history` is replayed without touching the RNG, so the computer's
    /// later choices match those of the session the state was taken from.
    ///
    /// # Errors
    ///
    /// Whatever `play_human` would return for the first record that does not
    /// fit: `GameOver`, `NotYourTurn`, `MoveOutOfRange` or `CellOccupied`.
    pub fn resume(
        config: SessionConfig,
        history: &[MoveRecord],
        rng_state: &GameRngState,
    ) -> Result<Self> {
        let mut session = Self::with_rng(config, GameRng::from_state(rng_state));

        for record in history {
            session.check_turn(record.mark)?;
            let next = session.position.try_apply_move(record.index, record.mark)?;
            session.commit(record.mark, record.index, next);
        }

        Ok(session)
    }

    fn with_rng(config: SessionConfig, rng: GameRng) -> Self {
        let search = MinimaxSearch::new(config.human, config.computer());

        info!(
            human = %config.human,
            computer = %config.computer(),
            first = %config.first_to_move,
            seed = rng.seed(),
            "starting session"
        );

        Self {
            search,
            rng,
            position: Position::new(),
            to_move: config.first_to_move,
            history: Vec::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Mark whose turn it is. Unchanged once the game is over.
    #[must_use]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.to_move == self.config.human
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.position.is_game_over()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        self.position.outcome()
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Tie-break RNG state; pass to [`GameSession::resume`] with `history()`.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Place the human's mark at `index`.
    ///
    /// # Errors
    ///
    /// `GameOver`, `NotYourTurn`, `MoveOutOfRange` or `CellOccupied`. The
    /// session is unchanged on error, so the caller can ask again.
    pub fn play_human(&mut self, index: usize) -> Result<Position> {
        let human = self.config.human;
        self.check_turn(human)?;

        let next = match self.position.try_apply_move(index, human) {
            Ok(next) => next,
            Err(err) => {
                debug!(index, error = %err, "rejected human move");
                return Err(err);
            }
        };

        self.commit(human, index, next);
        Ok(next)
    }

    /// Let the computer pick and play its move. Returns the chosen index.
    ///
    /// # Errors
    ///
    /// `GameOver` or `NotYourTurn`.
    pub fn play_computer(&mut self) -> Result<usize> {
        let computer = self.config.computer();
        self.check_turn(computer)?;

        let index = self.search.find_best_move(&self.position, &mut self.rng)?;
        let next = self.position.apply_move(index, computer);

        self.commit(computer, index, next);
        Ok(index)
    }

    fn check_turn(&self, mark: Mark) -> Result<()> {
        if self.is_over() {
            return Err(SolverError::GameOver);
        }
        if self.to_move != mark {
            return Err(SolverError::NotYourTurn {
                expected: self.to_move,
                got: mark,
            });
        }
        Ok(())
    }

    fn commit(&mut self, mark: Mark, index: usize, next: Position) {
        self.position = next;
        self.history.push(MoveRecord { mark, index });
        debug!(%mark, index, ply = self.history.len(), "move applied");

        match self.position.outcome() {
            Some(result) => info!(%result, moves = self.history.len(), "game over"),
            None => self.to_move = mark.opponent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(SessionConfig::default().with_seed(42))
    }

    #[test]
    fn test_new_session() {
        let s = session();
        assert_eq!(*s.position(), Position::new());
        assert_eq!(s.to_move(), Mark::X);
        assert!(s.is_human_turn());
        assert!(!s.is_over());
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_human_then_computer() {
        let mut s = session();
        s.play_human(4).unwrap();
        assert_eq!(s.to_move(), Mark::O);
        assert!(!s.is_human_turn());

        let reply = s.play_computer().unwrap();
        assert!([0, 2, 6, 8].contains(&reply));
        assert_eq!(
            s.history(),
            &[
                MoveRecord { mark: Mark::X, index: 4 },
                MoveRecord { mark: Mark::O, index: reply },
            ]
        );
        assert_eq!(s.to_move(), Mark::X);
    }

    #[test]
    fn test_rejected_moves_leave_session_unchanged() {
        let mut s = session();
        s.play_human(0).unwrap();
        s.play_computer().unwrap();
        let before = *s.position();

        let occupied = s.history()[1].index;
        assert_eq!(
            s.play_human(occupied),
            Err(SolverError::CellOccupied { index: occupied })
        );
        assert_eq!(s.play_human(9), Err(SolverError::MoveOutOfRange { index: 9 }));
        assert_eq!(*s.position(), before);
        assert_eq!(s.history().len(), 2);
        assert!(s.is_human_turn());
    }

    #[test]
    fn test_out_of_turn() {
        let mut s = session();
        assert_eq!(
            s.play_computer(),
            Err(SolverError::NotYourTurn {
                expected: Mark::X,
                got: Mark::O,
            })
        );

        s.play_human(4).unwrap();
        assert_eq!(
            s.play_human(0),
            Err(SolverError::NotYourTurn {
                expected: Mark::O,
                got: Mark::X,
            })
        );
    }

    #[test]
    fn test_resume_rejects_bad_history() {
        let state = GameRng::new(1).state();
        let config = SessionConfig::default();

        let out_of_turn = [MoveRecord { mark: Mark::O, index: 4 }];
        assert_eq!(
            GameSession::resume(config.clone(), &out_of_turn, &state).unwrap_err(),
            SolverError::NotYourTurn {
                expected: Mark::X,
                got: Mark::O,
            }
        );

        let repeated = [
            MoveRecord { mark: Mark::X, index: 4 },
            MoveRecord { mark: Mark::O, index: 4 },
        ];
        assert_eq!(
            GameSession::resume(config, &repeated, &state).unwrap_err(),
            SolverError::CellOccupied { index: 4 }
        );
    }
}
