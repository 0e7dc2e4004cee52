//! One-ply greedy opponent: win, else block, else random.

use super::{Speculation, Strategy};
use crate::rng::RandomSource;
use crate::rules::has_won;
use crate::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Takes an immediate win if one exists, otherwise blocks the opponent's
/// immediate win, otherwise plays a random empty position.
///
/// After blocking it does not look for a second threat, so a fork still
/// beats it.
#[derive(Debug, Clone)]
pub struct Intermediate<R> {
    rng: R,
}

impl<R: RandomSource> Intermediate<R> {
    /// Creates a greedy opponent with `rng` for the fallback pick.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

/// First empty position (ascending) where `mark` would complete a line.
pub(crate) fn winning_move(board: &mut Board, mark: Mark) -> Option<Position> {
    board.empty_positions().into_iter().find(|&pos| {
        let mut trial = Speculation::new(board, pos, mark);
        has_won(trial.board(), mark)
    })
}

impl<R: RandomSource + std::fmt::Debug> Strategy for Intermediate<R> {
    fn name(&self) -> &str {
        "Intermediate"
    }

    #[instrument(skip_all, fields(board = %board.compact(), cpu = %cpu))]
    fn choose(&mut self, board: &mut Board, cpu: Mark) -> Option<Position> {
        if let Some(pos) = winning_move(board, cpu) {
            debug!(%pos, "Taking the win");
            return Some(pos);
        }
        if let Some(pos) = winning_move(board, cpu.opponent()) {
            debug!(%pos, "Blocking");
            return Some(pos);
        }
        let choice = self.rng.choose(&board.empty_positions());
        debug!(?choice, "No threats, random pick");
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{GameRng, ScriptedRng};

    fn choose(board: &str) -> Option<u8> {
        let mut board: Board = board.parse().unwrap();
        let before = board.clone();
        let mut strategy = Intermediate::new(GameRng::new(9));
        let choice = strategy.choose(&mut board, Mark::O).map(Position::get);
        assert_eq!(board, before, "speculation must be undone");
        choice
    }

    #[test]
    fn test_prefers_win_over_block() {
        // X threatens 3, but O completes 4-5-6 first.
        assert_eq!(choose("XX.OO...."), Some(6));
    }

    #[test]
    fn test_blocks_threat() {
        assert_eq!(choose("XX..O...."), Some(3));
        assert_eq!(choose("X...O.X.."), Some(4));
    }

    #[test]
    fn test_lowest_win_first() {
        // O can win at 3 (column 3-6-9) or 7 (row 7-8-9).
        assert_eq!(choose("XX.X.O.OO"), Some(3));
    }

    #[test]
    fn test_random_fallback() {
        let mut board: Board = "....X....".parse().unwrap();
        let mut strategy = Intermediate::new(ScriptedRng::new(vec![7]));
        // Empty: 1,2,3,4,6,7,8,9; index 7 is 9.
        assert_eq!(strategy.choose(&mut board, Mark::O).map(Position::get), Some(9));
    }

    #[test]
    fn test_play_commits_win() {
        let mut board: Board = "XX.OO....".parse().unwrap();
        let mut strategy = Intermediate::new(GameRng::new(1));
        let pos = strategy.play(&mut board, Mark::O).unwrap();
        assert_eq!(pos.get(), 6);
        assert!(has_won(&board, Mark::O));
    }
}
