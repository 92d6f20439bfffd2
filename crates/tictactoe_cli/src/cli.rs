//! Command-line interface for the tic-tac-toe terminal game.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_core::Marker;

/// Play tic-tac-toe against the computer, first to five rounds
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game configuration file (ignored if missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Your name (asked for if not given here or in the config)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Your marker, X or O only. The computer plays the other one (asked for if not given here or in the config)
    #[arg(short, long)]
    pub marker: Option<Marker>,

    /// Let the computer open every round
    #[arg(long)]
    pub computer_first: bool,

    /// Rounds needed to win the game
    #[arg(long)]
    pub target_score: Option<u32>,

    /// Seed for the computer's random moves and name
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep the scrollback instead of clearing the screen between frames
    #[arg(long)]
    pub no_clear: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert!(cli.name.is_none());
        assert!(cli.marker.is_none());
        assert!(!cli.computer_first);
        assert!(!cli.no_clear);
    }

    #[test]
    fn test_marker_flag_any_case() {
        let cli = Cli::parse_from(["tictactoe", "--marker", "o", "--seed", "3"]);
        assert_eq!(cli.marker, Some(Marker::O));
        assert_eq!(cli.seed, Some(3));
    }

    #[test]
    fn test_bad_marker_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "-m", "Z"]).is_err());
    }

    #[test]
    fn test_marker_help_names_both_symbols() {
        let help = <Cli as clap::CommandFactory>::command().render_help().to_string();
        assert!(help.contains("X or O only"));
    }
}
