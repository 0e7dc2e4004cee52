//! Computer opponents.
//!
//! Every strategy reads the board through `empty_positions`/`is_empty`,
//! tries candidates with scoped speculative placements, and commits its
//! choice through the checked [`Board::apply`] path.

mod easy;
mod hardcore;
mod intermediate;

pub use easy::Easy;
pub use hardcore::{Hardcore, minimax};
pub use intermediate::Intermediate;

use crate::game::GameError;
use crate::rng::{GameRng, RandomSource};
use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A computer player.
pub trait Strategy: std::fmt::Debug {
    /// Display name.
    fn name(&self) -> &str;

    /// Picks a move for `cpu`.
    ///
    /// The board may be mutated speculatively but is restored before
    /// returning. Returns `None` only when the board is full.
    fn choose(&mut self, board: &mut Board, cpu: Mark) -> Option<Position>;

    /// Chooses a move and commits it.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoMovesLeft` on a full board.
    #[instrument(skip(self, board), fields(strategy = self.name()))]
    fn play(&mut self, board: &mut Board, cpu: Mark) -> Result<Position, GameError> {
        let position = self.choose(board, cpu).ok_or(GameError::NoMovesLeft)?;
        board.apply(position, cpu)?;
        debug!(%position, "Strategy committed move");
        Ok(position)
    }
}

/// Who controls the second mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OpponentMode {
    /// A second human at the same console.
    #[default]
    Human,
    /// Random legal moves.
    Easy,
    /// Wins when it can, blocks when it must, otherwise random.
    Intermediate,
    /// Full minimax search; never loses.
    Hardcore,
}

impl OpponentMode {
    /// Position in the opponent menu (1-4).
    pub fn menu_number(self) -> u8 {
        match self {
            OpponentMode::Human => 1,
            OpponentMode::Easy => 2,
            OpponentMode::Intermediate => 3,
            OpponentMode::Hardcore => 4,
        }
    }

    /// Looks up a menu entry.
    pub fn from_menu_number(n: u8) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter().find(|mode| mode.menu_number() == n)
    }

    /// True for the three computer strengths.
    pub fn is_cpu(self) -> bool {
        self != OpponentMode::Human
    }

    /// Builds the strategy for this mode, or `None` for a human opponent.
    pub fn strategy<R>(self, rng: R) -> Option<Box<dyn Strategy>>
    where
        R: RandomSource + std::fmt::Debug + 'static,
    {
        match self {
            OpponentMode::Human => None,
            OpponentMode::Easy => Some(Box::new(Easy::new(rng))),
            OpponentMode::Intermediate => Some(Box::new(Intermediate::new(rng))),
            OpponentMode::Hardcore => Some(Box::new(Hardcore::new())),
        }
    }

    /// Builds the strategy with a seeded [`GameRng`].
    pub fn seeded_strategy(self, seed: u64) -> Option<Box<dyn Strategy>> {
        self.strategy(GameRng::new(seed))
    }
}

/// A speculative placement that is undone when dropped.
///
/// Holding the board through the guard means every exit path, including
/// early returns and pruning breaks, restores the cell.
pub(crate) struct Speculation<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> Speculation<'a> {
    /// Places `mark` at the empty `position`.
    pub(crate) fn new(board: &'a mut Board, position: Position, mark: Mark) -> Self {
        debug_assert!(board.is_empty(position), "speculating on occupied {position}");
        board.place(position, mark);
        Self { board, position }
    }

    /// The board with the speculative mark in place.
    pub(crate) fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.clear(self.position);
    }
}
