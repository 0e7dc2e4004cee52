//! Tic-tac-toe engine: board, rules, computer opponents and the turn loop.
//!
//! # Architecture
//!
//! - **Board**: nine typed cells addressed by [`Position`] 1-9
//! - **Rules**: win and draw detection over the eight [`LINES`]
//! - **Applier**: [`Board::apply`], the one checked way to place a mark
//! - **Strategies**: [`Easy`], [`Intermediate`] and the unbeatable [`Hardcore`]
//! - **Game**: [`Game`] runs turns and reports to a [`Shell`]
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, Hardcore, Mark, Position, Strategy};
//!
//! let mut board = Board::new();
//! board.apply(Position::CENTER, Mark::X)?;
//! let reply = Hardcore::new().play(&mut board, Mark::O)?;
//! assert!(reply.is_corner());
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
pub mod invariants;
mod phases;
mod position;
mod rng;
pub mod rules;
mod strategy;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{ApplyContract, CellIsEmpty, Contract};
pub use game::{Controller, Game, GameError, Shell, ShellError};
pub use phases::{GamePhase, Outcome};
pub use position::Position;
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use rules::{LINES, has_won, is_draw, is_full, winner};
pub use strategy::{Easy, Hardcore, Intermediate, OpponentMode, Strategy, minimax};
pub use types::{Board, BoardParseError, Cell, Mark};
