//! Contract-based validation for placing marks.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} apply {Q}`. The precondition is always checked; the postcondition
//! runs in debug builds.

use crate::action::{Move, MoveError};
use crate::types::{Board, Cell, Mark};
use crate::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks that the transition from `before` to `after` did what
    /// `action` describes and nothing else.
    fn post(before: &S, after: &S, action: &A) -> bool;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects a move onto an occupied cell.
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        if board.is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::InvalidMove(mov.position))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Apply Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - Cell must be empty
///
/// Postconditions:
/// - The target cell now holds the mover's mark
/// - Every other cell is unchanged
pub struct ApplyContract;

impl Contract<Board, Move> for ApplyContract {
    fn pre(board: &Board, action: &Move) -> Result<(), MoveError> {
        CellIsEmpty::check(action, board)
    }

    fn post(before: &Board, after: &Board, action: &Move) -> bool {
        before
            .cells()
            .iter()
            .zip(after.cells())
            .enumerate()
            .all(|(index, (was, now))| {
                if index == action.position.index() {
                    was.is_empty() && *now == Cell::Marked(action.mark)
                } else {
                    was == now
                }
            })
    }
}

/// The single checked mutation path for boards.
#[instrument(skip(board))]
pub(crate) fn apply_move(board: &mut Board, pos: Position, mark: Mark) -> Result<(), MoveError> {
    let action = Move::new(mark, pos);
    if let Err(e) = ApplyContract::pre(board, &action) {
        warn!(%action, error = %e, "Rejected move");
        return Err(e);
    }

    #[cfg(debug_assertions)]
    let before = board.clone();

    board.place(pos, mark);

    #[cfg(debug_assertions)]
    debug_assert!(
        ApplyContract::post(&before, board, &action),
        "Apply postcondition violated for {action}"
    );

    Ok(())
}
