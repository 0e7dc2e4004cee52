//! Game session and turn loop.
//!
//! A [`Game`] owns the board and drives turns between X (always a human)
//! and O (a human or a [`Strategy`]). Everything the player sees goes
//! through the [`Shell`] trait, so the loop itself never touches a
//! terminal.

use crate::action::{Move, MoveError};
use crate::phases::{GamePhase, Outcome};
use crate::rng::GameRng;
use crate::rules::has_won;
use crate::strategy::{OpponentMode, Strategy};
use crate::{Board, Mark, Position};
use tracing::{debug, info, instrument};

/// The console (or test double) a session talks to.
pub trait Shell {
    /// Asks a human for the position to play as `mark`.
    ///
    /// The shell range-checks input; an occupied position comes back
    /// through [`Shell::rejected`] and is asked for again.
    fn request_move(&mut self, mark: Mark, board: &Board) -> Result<Position, ShellError>;

    /// A human move was refused.
    fn rejected(&mut self, _mark: Mark, _error: &MoveError) {}

    /// Snapshot after every applied move.
    fn show_board(&mut self, _board: &Board) {}

    /// Final result, reported exactly once.
    fn report(&mut self, outcome: &Outcome, board: &Board);
}

/// The shell could not produce a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ShellError {
    /// Input ended.
    #[display("Input closed")]
    InputClosed,
    /// Reading input failed.
    #[display("Input error: {}", _0)]
    Io(String),
}

impl std::error::Error for ShellError {}

impl From<std::io::Error> for ShellError {
    fn from(e: std::io::Error) -> Self {
        ShellError::Io(e.to_string())
    }
}

/// Errors that end a turn without a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A move was refused.
    #[display("{}", _0)]
    Move(MoveError),
    /// The shell failed.
    #[display("{}", _0)]
    Shell(ShellError),
    /// The game is already over.
    #[display("Game is already over")]
    Finished,
    /// A strategy was asked to move on a full board.
    #[display("No empty positions left")]
    NoMovesLeft,
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(e) => Some(e),
            GameError::Shell(e) => Some(e),
            GameError::Finished | GameError::NoMovesLeft => None,
        }
    }
}

impl From<MoveError> for GameError {
    fn from(e: MoveError) -> Self {
        GameError::Move(e)
    }
}

impl From<ShellError> for GameError {
    fn from(e: ShellError) -> Self {
        GameError::Shell(e)
    }
}

/// Who plays O.
#[derive(Debug)]
pub enum Controller {
    /// Moves come from the shell.
    Human,
    /// Moves come from a strategy.
    Cpu(Box<dyn Strategy>),
}

impl Controller {
    /// Builds the controller for `mode`, seeding any randomness from `rng`.
    pub fn for_mode(mode: OpponentMode, rng: GameRng) -> Self {
        match mode.strategy(rng) {
            Some(strategy) => Controller::Cpu(strategy),
            None => Controller::Human,
        }
    }

    /// True when a strategy plays.
    pub fn is_cpu(&self) -> bool {
        matches!(self, Controller::Cpu(_))
    }
}

/// One game from empty board to outcome.
#[derive(Debug)]
pub struct Game {
    board: Board,
    second: Controller,
    phase: GamePhase,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game against `mode`.
    ///
    /// `seed` fixes the Easy and Intermediate opponents' choices; `None`
    /// seeds from the operating system.
    #[instrument]
    pub fn new(mode: OpponentMode, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        info!(%mode, seed = rng.seed(), "Starting game");
        Self::with_opponent(Controller::for_mode(mode, rng))
    }

    /// Creates a new game with an explicit controller for O.
    pub fn with_opponent(second: Controller) -> Self {
        Self {
            board: Board::new(),
            second,
            phase: GamePhase::AwaitingFirstMove,
            history: Vec::new(),
        }
    }

    /// Rebuilds a session by applying `positions` in order, X first.
    ///
    /// Strategies are not consulted; every move comes from the list.
    ///
    /// # Errors
    ///
    /// Fails on an occupied position, or with `GameError::Finished` if
    /// moves remain after the game is decided.
    #[instrument(skip(positions), fields(moves = positions.len()))]
    pub fn replay(mode: OpponentMode, positions: &[Position]) -> Result<Self, GameError> {
        let mut game = Self::new(mode, Some(0));
        for &position in positions {
            let mark = game.phase.to_move().ok_or(GameError::Finished)?;
            game.board.apply(position, mark)?;
            game.record(mark, position, mode.is_cpu() && mark == Mark::SECOND);
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the applied moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The outcome once decided.
    pub fn outcome(&self) -> Option<Outcome> {
        self.phase.outcome()
    }

    /// True when a strategy plays O.
    pub fn opponent_is_cpu(&self) -> bool {
        self.second.is_cpu()
    }

    /// Plays one turn.
    ///
    /// # Errors
    ///
    /// `GameError::Finished` if the game is already decided; otherwise
    /// whatever the shell reports when it cannot supply a move.
    #[instrument(skip(self, shell), fields(phase = ?self.phase))]
    pub fn step<S: Shell + ?Sized>(&mut self, shell: &mut S) -> Result<GamePhase, GameError> {
        let mark = self.phase.to_move().ok_or(GameError::Finished)?;

        if self.board.is_full() {
            self.finish(Outcome::Draw, shell);
            return Ok(self.phase);
        }

        let (position, was_cpu) = match (mark, &mut self.second) {
            (Mark::O, Controller::Cpu(strategy)) => (strategy.play(&mut self.board, mark)?, true),
            _ => (Self::human_move(&mut self.board, mark, shell)?, false),
        };

        self.record(mark, position, was_cpu);
        shell.show_board(&self.board);
        if let GamePhase::Terminal(outcome) = self.phase {
            self.finish(outcome, shell);
        }
        Ok(self.phase)
    }

    /// Plays turns until the game is decided.
    ///
    /// # Errors
    ///
    /// Propagates the first [`GameError`] from [`Game::step`].
    pub fn run<S: Shell + ?Sized>(&mut self, shell: &mut S) -> Result<Outcome, GameError> {
        loop {
            if let GamePhase::Terminal(outcome) = self.step(shell)? {
                return Ok(outcome);
            }
        }
    }

    /// Asks the shell until it names an empty cell, then applies it.
    fn human_move<S: Shell + ?Sized>(
        board: &mut Board,
        mark: Mark,
        shell: &mut S,
    ) -> Result<Position, GameError> {
        loop {
            let position = shell.request_move(mark, board)?;
            match board.apply(position, mark) {
                Ok(()) => return Ok(position),
                Err(e) => shell.rejected(mark, &e),
            }
        }
    }

    /// Logs an applied move and advances the phase.
    fn record(&mut self, mark: Mark, position: Position, was_cpu: bool) {
        let action = Move::new(mark, position);
        debug!(%action, was_cpu, "Move applied");
        self.history.push(action);

        self.phase = if has_won(&self.board, mark) {
            GamePhase::Terminal(Outcome::Win { mark, was_cpu })
        } else if self.board.is_full() {
            GamePhase::Terminal(Outcome::Draw)
        } else if mark == Mark::FIRST {
            GamePhase::AwaitingSecondMove
        } else {
            GamePhase::AwaitingFirstMove
        };

        #[cfg(debug_assertions)]
        self.assert_invariants();
    }

    fn finish<S: Shell + ?Sized>(&mut self, outcome: Outcome, shell: &mut S) {
        self.phase = GamePhase::Terminal(outcome);
        info!(%outcome, moves = self.history.len(), "Game over");
        shell.report(&outcome, &self.board);
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use crate::invariants::{InvariantSet, SessionInvariants};

        if let Err(violations) = SessionInvariants::check_all(self) {
            for violation in &violations {
                tracing::warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Session invariants violated");
        }
    }
}
