//! Tic-tac-toe against the computer, in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_cli::{Cli, Console, GameConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout(), *config.clear_screen());
    let summary = tictactoe_cli::run(&config, &mut console)?;

    info!(games = summary.games, "Session finished");
    Ok(())
}

#[instrument(skip(cli), fields(path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    info!("Loading game configuration");
    GameConfig::load(&cli.config)
        .and_then(|config| config.with_cli(cli))
        .context("Invalid configuration")
}
