//! Session phases and outcomes.

use crate::Mark;
use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// X to move.
    AwaitingFirstMove,
    /// O to move.
    AwaitingSecondMove,
    /// Decided. Absorbing.
    Terminal(Outcome),
}

impl GamePhase {
    /// The mark to move, or `None` once the game is decided.
    pub fn to_move(self) -> Option<Mark> {
        match self {
            GamePhase::AwaitingFirstMove => Some(Mark::FIRST),
            GamePhase::AwaitingSecondMove => Some(Mark::SECOND),
            GamePhase::Terminal(_) => None,
        }
    }

    /// The outcome once decided.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GamePhase::Terminal(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// True once the game is decided.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Terminal(_))
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// `mark` completed a line; `was_cpu` says whether a strategy played it.
    Win {
        /// The winning mark.
        mark: Mark,
        /// True if the computer won.
        was_cpu: bool,
    },
    /// Full board, no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win { mark, was_cpu: true } => write!(f, "{mark} (computer) wins"),
            Outcome::Win { mark, was_cpu: false } => write!(f, "{mark} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
