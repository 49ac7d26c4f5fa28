//! Random draw sources.
//!
//! The partition engine never touches a concrete RNG. It asks a
//! [`DrawSource`] for an index into the currently available deck, which
//! keeps draws uniform over what is left and lets tests script exact draw
//! order.
//!
//! ## Sources
//!
//! - [`GameRng`]: ChaCha8-backed, seedable, with O(1) state capture
//! - [`ScriptedDraws`]: replays a fixed list of indices
//!
//! ```
//! use skill_duel::core::{DrawSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same picks
//! assert_eq!(a.pick(14), b.pick(14));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Chooses an index in `0..len`.
///
/// Implementations must return a value strictly below `len`. The engine
/// never calls `pick` with `len == 0`.
pub trait DrawSource {
    /// Pick an index in `0..len`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<T: DrawSource + ?Sized> DrawSource for &mut T {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

impl<T: DrawSource + ?Sized> DrawSource for Box<T> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Deterministic RNG for deck draws.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
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

    /// Create an RNG seeded from OS entropy.
    ///
    /// The chosen seed is retained, so `seed()` can be logged and the
    /// session replayed later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
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

impl DrawSource for GameRng {
    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture and restore cost the same no
/// matter how many draws have happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of picks.
///
/// Each pick is reduced modulo the current deck length, so a script of
/// zeros always takes the first remaining deck card. Once the script runs
/// out every further pick is 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDraws {
    picks: VecDeque<usize>,
}

impl ScriptedDraws {
    /// Create a source that yields `picks` in order.
    #[must_use]
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Number of scripted picks not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl DrawSource for ScriptedDraws {
    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().map_or(0, |i| i % len)
    }
}
