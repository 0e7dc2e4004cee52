//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it is placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is recoverable: the caller asks for another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Input was not a number at all.
    #[display("Not an integer")]
    NotANumber,

    /// The number is not a board position.
    #[display("Position {} is outside 1-9", _0)]
    OutOfRange(u8),

    /// The cell at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    InvalidMove(Position),
}

impl std::error::Error for MoveError {}
