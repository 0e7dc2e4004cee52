//! Line-based terminal shell.
//!
//! Reads moves and the opponent choice from any `BufRead`, writes prompts
//! and the board to any `Write`. The binary passes locked stdin/stdout;
//! tests pass a `Cursor` and a `Vec<u8>`.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};
use tictactoe_core::{Board, Mark, MoveError, OpponentMode, Outcome, Position, Shell, ShellError};
use tracing::{debug, instrument, warn};

const MENU: &str = "SELECT OPPONENT
1. 2nd Player
2. Computer - Easy
3. Computer - Intermediate
4. Computer - Hardcore";

/// Console front end implementing [`Shell`].
#[derive(Debug)]
pub struct ConsoleShell<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> ConsoleShell<R, W> {
    /// Creates a shell over `input` and `output`.
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Consumes the shell, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows the opponent menu until a valid entry is chosen.
    ///
    /// # Errors
    ///
    /// `ShellError::InputClosed` at end of input.
    #[instrument(skip(self))]
    pub fn select_opponent(&mut self) -> Result<OpponentMode, ShellError> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let line = self.prompt("Enter Choice : ")?;
            self.clear()?;
            let choice = line.trim().parse().ok().and_then(OpponentMode::from_menu_number);
            match choice {
                Some(mode) => {
                    debug!(%mode, "Opponent selected");
                    return Ok(mode);
                }
                None => writeln!(self.output, "\nPlease choose 1-4.\n")?,
            }
        }
    }

    /// Waits for Enter. End of input counts as Enter.
    pub fn pause(&mut self) -> Result<(), ShellError> {
        match self.prompt("Press Enter to exit.") {
            Ok(_) | Err(ShellError::InputClosed) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Writes `message`, flushes, and reads one line.
    fn prompt(&mut self, message: &str) -> Result<String, ShellError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::InputClosed);
        }
        Ok(line)
    }

    fn clear(&mut self) -> std::io::Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn print_board(&mut self, board: &Board) -> std::io::Result<()> {
        write!(self.output, "{board}\n\n")
    }

    fn try_report(&mut self, outcome: &Outcome, board: &Board) -> std::io::Result<()> {
        self.clear()?;
        self.print_board(board)?;
        writeln!(self.output, "{}", outcome_message(outcome))
    }
}

impl<R: BufRead, W: Write> Shell for ConsoleShell<R, W> {
    fn request_move(&mut self, mark: Mark, board: &Board) -> Result<Position, ShellError> {
        loop {
            self.print_board(board)?;
            let line = self.prompt(&format!("Enter Move for {mark} (1-9): "))?;
            self.clear()?;
            match line.parse::<Position>() {
                Ok(position) => return Ok(position),
                Err(e) => writeln!(self.output, "\n{}\n", input_message(&e))?,
            }
        }
    }

    fn rejected(&mut self, mark: Mark, error: &MoveError) {
        debug!(%mark, %error, "Asking again");
        if let Err(e) = writeln!(self.output, "\n{}", input_message(error)) {
            warn!(error = %e, "Failed to write to console");
        }
    }

    fn report(&mut self, outcome: &Outcome, board: &Board) {
        if let Err(e) = self.try_report(outcome, board) {
            warn!(error = %e, "Failed to write to console");
        }
    }
}

/// What the player is told about bad input.
pub fn input_message(error: &MoveError) -> &'static str {
    match error {
        MoveError::NotANumber => "Please enter an Integer.",
        MoveError::OutOfRange(_) => "Integer must be within range 1-9.",
        MoveError::InvalidMove(_) => "That square is already occupied. Please enter valid input.",
    }
}

/// Closing line for a finished game.
pub fn outcome_message(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Draw => "IT'S A DRAW!!\n".to_string(),
        Outcome::Win { mark, was_cpu: true } => format!("{mark} has won. Better luck next time.\n"),
        Outcome::Win { mark, was_cpu: false } => format!("Congrats, {mark} has won."),
    }
}
