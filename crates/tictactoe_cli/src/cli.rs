//! Command-line interface for the tictactoe console game.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_core::OpponentMode;

/// Tic-tac-toe against a friend or the computer
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Console tic-tac-toe with easy, intermediate and unbeatable opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Opponent for O (human, easy, intermediate, hardcore). Skips the menu.
    #[arg(short, long)]
    pub opponent: Option<OpponentMode>,

    /// Seed for the easy and intermediate opponents
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keep previous output instead of clearing the screen
    #[arg(long)]
    pub no_clear: bool,

    /// Exit without waiting for Enter after the game
    #[arg(long)]
    pub no_pause: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_flags() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--opponent",
            "Hardcore",
            "--seed",
            "7",
            "--no-clear",
        ])
        .unwrap();
        assert_eq!(cli.opponent, Some(OpponentMode::Hardcore));
        assert_eq!(cli.seed, Some(7));
        assert!(cli.no_clear);
        assert!(!cli.no_pause);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_rejects_unknown_opponent() {
        assert!(Cli::try_parse_from(["tictactoe", "--opponent", "grandmaster"]).is_err());
    }
}
