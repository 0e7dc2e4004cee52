//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position};
use strum::IntoEnumIterator;
use tracing::instrument;

const fn p(n: u8) -> Position {
    Position::ALL[n as usize - 1]
}

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [p(1), p(2), p(3)],
    [p(4), p(5), p(6)],
    [p(7), p(8), p(9)],
    // Columns
    [p(1), p(4), p(7)],
    [p(2), p(5), p(8)],
    [p(3), p(6), p(9)],
    // Diagonals
    [p(1), p(5), p(9)],
    [p(3), p(5), p(7)],
];

/// True if `mark` holds all three cells of any line.
///
/// This does not tell a fresh win from an old one; the game loop checks
/// right after every move.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.mark_at(pos) == Some(mark)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if the mark has three in a row,
/// `None` otherwise. X is checked first.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn winner(board: &Board) -> Option<Mark> {
    Mark::iter().find(|&mark| has_won(board, mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX.O.O..".parse().unwrap();
        assert!(has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
        assert_eq!(winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O.X.OX..O".parse().unwrap();
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = ".XO.XO.X.".parse().unwrap();
        assert_eq!(winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_x_is_reported_first() {
        // Not reachable in play; pins the scan order.
        let board: Board = "XXXOOO...".parse().unwrap();
        assert_eq!(winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX.......".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.place(pos, Mark::O);
            }
            assert!(has_won(&board, Mark::O), "line {line:?}");
        }
    }
}
