//! Core domain types for tic-tac-toe.

use crate::action::MoveError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// The mark that always moves first.
    pub const FIRST: Mark = Mark::X;

    /// The mark that always moves second.
    pub const SECOND: Mark = Mark::O;

    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
///
/// An empty cell keeps its own position so a snapshot can show the label
/// a human types to play there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Not yet played.
    Empty(Position),
    /// Occupied by a mark.
    Marked(Mark),
}

impl Cell {
    /// True if no mark occupies the cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty(_))
    }

    /// The occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Marked(mark) => Some(mark),
            Cell::Empty(_) => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty(pos) => write!(f, "{pos}"),
            Cell::Marked(mark) => write!(f, "{mark}"),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (slot 0 holds position 1).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: Position::ALL.map(Cell::Empty),
        }
    }

    /// Builds a board from per-position marks.
    pub fn from_marks(marks: [Option<Mark>; 9]) -> Self {
        let mut board = Self::new();
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            if let Some(mark) = mark {
                board.place(pos, mark);
            }
        }
        board
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Returns the mark at the given position, if any.
    pub fn mark_at(&self, pos: Position) -> Option<Mark> {
        self.get(pos).mark()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks if a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Checks a raw 1-9 label.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfRange` if `n` is not on the board.
    pub fn is_empty_at(&self, n: u8) -> Result<bool, MoveError> {
        Ok(self.is_empty(Position::new(n)?))
    }

    /// True if no position is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// All unmarked positions, ascending.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }

    /// Writes `mark` at `pos` without checking occupancy.
    ///
    /// Search routines use this with [`Board::clear`] for speculative play.
    /// Everything else goes through [`Board::apply`].
    pub fn place(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.index()] = Cell::Marked(mark);
    }

    /// Restores `pos` to empty.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = Cell::Empty(pos);
    }

    /// Places `mark` at `pos` if the cell is free.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::InvalidMove` if the position is already occupied;
    /// the board is left untouched.
    pub fn apply(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        crate::contracts::apply_move(self, pos, mark)
    }

    /// Nine-character form: `X`, `O`, or `.` per position.
    pub fn compact(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell {
                Cell::Empty(_) => '.',
                Cell::Marked(Mark::X) => 'X',
                Cell::Marked(Mark::O) => 'O',
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells; `X`/`O` (any case) are marks, and `.`, `_`, space
    /// or a digit mark an empty cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 {
            return Err(BoardParseError::Length(chars.len()));
        }
        let mut marks = [None; 9];
        for (slot, c) in marks.iter_mut().zip(chars) {
            *slot = match c {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '_' | ' ' | '1'..='9' => None,
                other => return Err(BoardParseError::Cell(other)),
            };
        }
        Ok(Self::from_marks(marks))
    }
}

/// Board rendering used by the console:
///
/// ```text
///   1 | 2 | 3
///   +---+---+
///   4 | 5 | 6
/// ```
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "  +---+---+")?;
            }
            writeln!(f, "  {} | {} | {}", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Wrong number of cells.
    #[display("Expected 9 cells, got {}", _0)]
    Length(usize),
    /// Unrecognized cell character.
    #[display("Unrecognized cell {:?}", _0)]
    Cell(char),
}

impl std::error::Error for BoardParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(n: u8) -> Position {
        Position::new(n).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_positions(), Position::ALL.to_vec());
        assert!(!board.is_full());
        assert_eq!(board.get(pos(4)), Cell::Empty(pos(4)));
    }

    #[test]
    fn test_place_and_clear_restore_label() {
        let mut board = Board::new();
        board.place(pos(3), Mark::O);
        assert_eq!(board.mark_at(pos(3)), Some(Mark::O));
        board.clear(pos(3));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_empty_positions_ascending() {
        let board: Board = "X...O...X".parse().unwrap();
        let labels: Vec<u8> = board.empty_positions().into_iter().map(Position::get).collect();
        assert_eq!(labels, vec![2, 3, 4, 6, 7, 8]);
    }

    #[test]
    fn test_is_empty_at_guards_range() {
        let board = Board::new();
        assert_eq!(board.is_empty_at(1), Ok(true));
        assert_eq!(board.is_empty_at(0), Err(MoveError::OutOfRange(0)));
        assert_eq!(board.is_empty_at(10), Err(MoveError::OutOfRange(10)));
    }

    #[test]
    fn test_display_shows_labels_for_empty_cells() {
        let board: Board = "X...O....".parse().unwrap();
        let expected = "  X | 2 | 3\n  +---+---+\n  4 | O | 6\n  +---+---+\n  7 | 8 | 9\n";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("XO".parse::<Board>(), Err(BoardParseError::Length(2)));
        assert_eq!("XO.....?.".parse::<Board>(), Err(BoardParseError::Cell('?')));
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XOXOXOOXO".parse().unwrap();
        assert!(board.is_full());
        assert!(board.empty_positions().is_empty());
        assert_eq!(board.count(Mark::X), 4);
        assert_eq!(board.count(Mark::O), 5);
    }

    #[test]
    fn test_serde_round_trip() {
        let board: Board = "X...O...X".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
