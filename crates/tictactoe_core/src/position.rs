//! Board positions, numbered 1-9 in row-major order.

use crate::action::MoveError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A position on the tic-tac-toe board (1-9).
///
/// ```text
///   1 | 2 | 3
///   4 | 5 | 6
///   7 | 8 | 9
/// ```
///
/// The only way to obtain a `Position` is through a range-checked
/// constructor, so every value in circulation is on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// All 9 positions in ascending order.
    pub const ALL: [Position; 9] = [
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
        Position(9),
    ];

    /// Center square.
    pub const CENTER: Position = Position(5);

    /// The four corners.
    pub const CORNERS: [Position; 4] = [Position(1), Position(3), Position(7), Position(9)];

    /// Creates a position from its 1-9 label.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfRange` if `n` is not in 1-9.
    #[instrument]
    pub fn new(n: u8) -> Result<Self, MoveError> {
        if (1..=9).contains(&n) {
            Ok(Self(n))
        } else {
            Err(MoveError::OutOfRange(n))
        }
    }

    /// The 1-9 label.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// True for 1, 3, 7 and 9.
    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }
}

impl TryFrom<u8> for Position {
    type Error = MoveError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> u8 {
        pos.0
    }
}

impl FromStr for Position {
    type Err = MoveError;

    /// Parses a signed decimal label. Any integer that does not fit `u8`,
    /// however many digits, saturates so it still reports as out of range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MoveError::NotANumber);
        }
        let negative = s.starts_with('-');
        let n = match s.parse::<u8>() {
            Ok(n) => n,
            Err(_) if negative => 0,
            Err(_) => u8::MAX,
        };
        Self::new(n)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_checked() {
        assert_eq!(Position::new(0), Err(MoveError::OutOfRange(0)));
        assert_eq!(Position::new(10), Err(MoveError::OutOfRange(10)));
        assert_eq!(Position::new(5).map(Position::get), Ok(5));
    }

    #[test]
    fn test_index_round_trip() {
        for (index, pos) in Position::ALL.into_iter().enumerate() {
            assert_eq!(pos.index(), index);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(" 7 ".parse::<Position>().map(Position::get), Ok(7));
        assert_eq!("x".parse::<Position>(), Err(MoveError::NotANumber));
        assert_eq!("-3".parse::<Position>(), Err(MoveError::OutOfRange(0)));
        assert_eq!("1000".parse::<Position>(), Err(MoveError::OutOfRange(255)));
        assert_eq!("+4".parse::<Position>().map(Position::get), Ok(4));
        assert_eq!("-".parse::<Position>(), Err(MoveError::NotANumber));
        assert_eq!("4.0".parse::<Position>(), Err(MoveError::NotANumber));
    }

    #[test]
    fn test_huge_numbers_are_out_of_range() {
        let huge = "123456789012345678901234567890";
        assert_eq!(huge.parse::<Position>(), Err(MoveError::OutOfRange(u8::MAX)));
        assert_eq!(
            format!("-{huge}").parse::<Position>(),
            Err(MoveError::OutOfRange(0))
        );
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let pos: Position = serde_json::from_str("9").unwrap();
        assert_eq!(pos.get(), 9);
        assert!(serde_json::from_str::<Position>("0").is_err());
    }
}
