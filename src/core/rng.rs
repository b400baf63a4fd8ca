//! Deterministic random source for breaking ties between equal moves.
//!
//! The search never reaches for a global generator. Callers own a `GameRng`
//! and pass it to `MinimaxSearch::find_best_move`, so a fixed seed replays
//! the same choices.
//!
//! ```
//! use rust_ttt::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! let moves = [0, 2, 6, 8];
//!
//! assert_eq!(a.choose(&moves), b.choose(&moves));
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded ChaCha8 generator with state capture.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh OS-provided seed.
    ///
    /// For interactive play; the chosen seed is still visible via `seed()`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniformly chosen element of `slice`; `None` if it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Capture the current state.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume from a captured state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable snapshot of a [`GameRng`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position.
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOVES: [usize; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

    fn picks(rng: &mut GameRng, n: usize) -> Vec<usize> {
        (0..n).map(|_| *rng.choose(&MOVES).unwrap()).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(picks(&mut rng1, 100), picks(&mut rng2, 100));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        assert_ne!(picks(&mut rng1, 20), picks(&mut rng2, 20));
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let moves = [1, 3, 5, 7];

        for _ in 0..20 {
            let chosen = rng.choose(&moves).unwrap();
            assert!(moves.contains(chosen));
        }

        let empty: [usize; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_choose_reaches_every_element() {
        let mut rng = GameRng::new(3);
        let moves = [0, 2, 6, 8];
        let mut seen = [false; 4];

        for _ in 0..200 {
            let chosen = *rng.choose(&moves).unwrap();
            let slot = moves.iter().position(|&m| m == chosen).unwrap();
            seen[slot] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        picks(&mut rng, 100);

        let state = rng.state();
        let expected = picks(&mut rng, 10);

        let mut restored = GameRng::from_state(&state);
        assert_eq!(restored.seed(), 42);
        assert_eq!(picks(&mut restored, 10), expected);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_from_entropy_records_seed() {
        let rng = GameRng::from_entropy();
        let replay = GameRng::new(rng.seed());
        assert_eq!(rng.state(), replay.state());
    }
}
