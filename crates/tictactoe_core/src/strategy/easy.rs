//! Uniformly random opponent.

use super::Strategy;
use crate::rng::RandomSource;
use crate::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Picks any empty position with equal probability. No look-ahead.
#[derive(Debug, Clone)]
pub struct Easy<R> {
    rng: R,
}

impl<R: RandomSource> Easy<R> {
    /// Creates a random opponent drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource + std::fmt::Debug> Strategy for Easy<R> {
    fn name(&self) -> &str {
        "Easy"
    }

    #[instrument(skip_all, fields(board = %board.compact()))]
    fn choose(&mut self, board: &mut Board, _cpu: Mark) -> Option<Position> {
        let choice = self.rng.choose(&board.empty_positions());
        debug!(?choice, "Random pick");
        choice
    }
}
