//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold after every applied
//! move. They are checked in debug builds and tested independently.

use crate::rules::has_won;
use crate::{Board, Game, Mark};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Cells never change once marked: replaying the history through the
/// checked applier rebuilds the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut rebuilt = Board::new();
        game.history()
            .iter()
            .all(|mov| rebuilt.apply(mov.position, mov.mark).is_ok())
            && rebuilt == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

/// X moves first and the marks alternate.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.mark == if i % 2 == 0 { Mark::X } else { Mark::O })
    }

    fn description() -> &'static str {
        "Players alternate, X first"
    }
}

/// At most one mark owns a line.
pub struct SingleWinnerInvariant;

impl Invariant<Game> for SingleWinnerInvariant {
    fn holds(game: &Game) -> bool {
        !(has_won(game.board(), Mark::X) && has_won(game.board(), Mark::O))
    }

    fn description() -> &'static str {
        "Never two winners"
    }
}

/// Every invariant a session maintains.
pub type SessionInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    SingleWinnerInvariant,
);
