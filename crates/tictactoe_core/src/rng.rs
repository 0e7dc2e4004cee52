//! Injectable randomness for the Easy and Intermediate opponents.
//!
//! Strategies draw through [`RandomSource`] so tests can pin a seed or
//! script the exact choices.
//!
//! ```
//! use tictactoe_core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.pick_index(9), b.pick_index(9));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform choices.
pub trait RandomSource {
    /// Returns an index in `0..len`, or 0 when `len` is zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Chooses a uniformly random element, or `None` for an empty slice.
    fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            None
        } else {
            Some(items[self.pick_index(items.len())])
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Deterministic RNG seeded from a `u64`.
///
/// Uses ChaCha8 so the same seed yields the same games on every platform.
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

    /// Create an RNG with a seed drawn from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().r#gen())
    }

    /// The seed this RNG started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.inner.gen_range(0..len)
    }
}

/// Replays a fixed list of indices, wrapping around; each is reduced
/// modulo the requested length.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    picks: Vec<usize>,
    next: usize,
}

impl ScriptedRng {
    /// Creates a source that returns `picks` in order.
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedRng {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.picks.is_empty() || len == 0 {
            return 0;
        }
        let pick = self.picks[self.next % self.picks.len()];
        self.next += 1;
        pick % len
    }
}
