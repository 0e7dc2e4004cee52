//! Exhaustive minimax opponent with alpha-beta pruning.
//!
//! The CPU is the maximizer and its opponent the minimizer. Scores are
//! `10 - depth` for a CPU win, `depth - 10` for an opponent win and `0`
//! for a draw, so quicker wins and slower losses rank higher. On a 3x3
//! board this solves the game exactly: the CPU never loses.

use super::{Speculation, Strategy};
use crate::rules::has_won;
use crate::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Score bound standing in for negative infinity.
const NEG_INF: i32 = i32::MIN;
/// Score bound standing in for positive infinity.
const POS_INF: i32 = i32::MAX;

/// Perfect-play opponent. Deterministic: ties go to the lowest position.
#[derive(Debug, Clone, Default)]
pub struct Hardcore {
    nodes: u64,
}

impl Hardcore {
    /// Creates a new minimax opponent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions evaluated during the most recent [`Strategy::choose`].
    pub fn nodes_searched(&self) -> u64 {
        self.nodes
    }

    /// Scores every empty position for `cpu`, ascending by position.
    #[instrument(skip(self, board), fields(board = %board.compact()))]
    pub fn scores(&mut self, board: &mut Board, cpu: Mark) -> Vec<(Position, i32)> {
        self.nodes = 0;
        let mut scored = Vec::new();
        for pos in board.empty_positions() {
            let mut trial = Speculation::new(board, pos, cpu);
            let score = search(trial.board(), cpu, 0, false, NEG_INF, POS_INF, &mut self.nodes);
            scored.push((pos, score));
        }
        scored
    }
}

impl Strategy for Hardcore {
    fn name(&self) -> &str {
        "Hardcore"
    }

    fn choose(&mut self, board: &mut Board, cpu: Mark) -> Option<Position> {
        let mut best: Option<(Position, i32)> = None;
        for (pos, score) in self.scores(board, cpu) {
            // Strictly greater keeps the first maximum.
            if best.is_none_or(|(_, high)| score > high) {
                best = Some((pos, score));
            }
        }
        debug!(?best, nodes = self.nodes, "Minimax choice");
        best.map(|(pos, _)| pos)
    }
}

/// Minimax value of `board` from `cpu`'s point of view.
///
/// `maximizing` says whose turn it is: `true` for the CPU, `false` for its
/// opponent. `depth` counts plies already played below the root move.
/// The board is restored before returning.
pub fn minimax(
    board: &mut Board,
    cpu: Mark,
    depth: i32,
    maximizing: bool,
    alpha: i32,
    beta: i32,
) -> i32 {
    let mut nodes = 0;
    search(board, cpu, depth, maximizing, alpha, beta, &mut nodes)
}

fn search(
    board: &mut Board,
    cpu: Mark,
    depth: i32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    let opponent = cpu.opponent();

    if has_won(board, opponent) {
        return -10 + depth;
    }
    if has_won(board, cpu) {
        return 10 - depth;
    }
    if board.is_full() {
        return 0;
    }

    if maximizing {
        let mut best = NEG_INF;
        for pos in board.empty_positions() {
            let score = {
                let mut trial = Speculation::new(board, pos, cpu);
                search(trial.board(), cpu, depth + 1, false, alpha, beta, nodes)
            };
            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = POS_INF;
        for pos in board.empty_positions() {
            let score = {
                let mut trial = Speculation::new(board, pos, opponent);
                search(trial.board(), cpu, depth + 1, true, alpha, beta, nodes)
            };
            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
