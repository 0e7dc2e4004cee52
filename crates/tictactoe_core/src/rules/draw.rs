//! Draw detection logic for tic-tac-toe.

use super::win::has_won;
use crate::{Board, Mark};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winner.
///
/// A board can be full and won at once, so callers check for a win first.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !has_won(board, Mark::X) && !has_won(board, Mark::O)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = "....X....".parse().unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X O / O X O
        let board: Board = "XOXOXOOXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full, but X owns the top row.
        let board: Board = "XXXOOXXOO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
