//! Console front end for [`tictactoe_core`].
//!
//! The binary wires [`Cli`] and [`Settings`] together, installs logging
//! and hands a [`ConsoleShell`] over stdin/stdout to [`play`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;

pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, Settings};
pub use console::{ConsoleShell, input_message, outcome_message};

use std::io::{BufRead, Write};
use tictactoe_core::{Game, GameError, Outcome};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// `RUST_LOG` if set, else `fallback`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Loads settings and applies `cli` on top.
///
/// The configured `log_filter` is not known yet, so loading runs under a
/// scoped subscriber built from `filter` and `writer`.
///
/// # Errors
///
/// See [`Settings::load`].
pub fn load_settings<W>(cli: &Cli, filter: EnvFilter, writer: W) -> Result<Settings, ConfigError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::with_default(subscriber, || Settings::load(cli.config.as_deref()))
        .map(|settings| settings.with_overrides(cli))
}

/// Plays one game through `shell`.
///
/// Uses the configured opponent, or asks through the menu when none is set.
///
/// # Errors
///
/// Fails when input ends before the game is decided.
#[instrument(skip_all, fields(opponent = ?settings.opponent()))]
pub fn play<R: BufRead, W: Write>(
    settings: &Settings,
    shell: &mut ConsoleShell<R, W>,
) -> Result<Outcome, GameError> {
    let mode = match settings.opponent() {
        Some(mode) => *mode,
        None => shell.select_opponent()?,
    };
    let mut game = Game::new(mode, *settings.seed());
    let outcome = game.run(shell)?;
    info!(%outcome, moves = game.history().len(), "Session finished");
    Ok(outcome)
}
