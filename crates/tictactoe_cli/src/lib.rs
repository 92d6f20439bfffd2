//! Terminal front-end for tic-tac-toe against the computer.
//!
//! Reads configuration, asks for the player's name and marker, then plays
//! games to the target score until the player stops.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod game;
pub mod render;
pub mod terminal;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use game::{SessionSummary, run};
pub use terminal::Console;
