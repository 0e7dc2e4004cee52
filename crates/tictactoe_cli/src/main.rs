//! tictactoe - console tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_cli::{Cli, ConsoleShell, env_filter, load_settings, play};
use tracing::{debug, info};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = load_settings(&cli, env_filter("warn"), std::io::stderr)
        .context("Failed to load settings")?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(settings.log_filter()))
        .init();
    debug!(?settings, "Resolved settings");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = ConsoleShell::new(stdin.lock(), stdout.lock(), *settings.clear_screen());

    let outcome = play(&settings, &mut shell).context("Game ended before a result")?;
    info!(%outcome, "Exiting");

    if !cli.no_pause {
        shell.pause().context("Failed to wait for Enter")?;
    }
    Ok(())
}
