//! Game configuration, read from TOML and overridden by command-line flags.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::Marker;
use tracing::{debug, info, instrument};

/// Settings for one session at the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Human player's name. Asked for when missing.
    #[serde(default)]
    human_name: Option<String>,

    /// Human player's marker. Asked for when missing.
    #[serde(default)]
    human_marker: Option<Marker>,

    /// Whether the computer opens each round.
    #[serde(default)]
    computer_first: bool,

    /// Rounds needed to win the game.
    #[serde(default = "default_target_score")]
    target_score: u32,

    /// Seed for the computer's randomness. Entropy when missing.
    #[serde(default)]
    seed: Option<u64>,

    /// Clear the terminal between frames.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,
}

fn default_target_score() -> u32 {
    5
}

fn default_clear_screen() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_name: None,
            human_marker: None,
            computer_first: false,
            target_score: default_target_score(),
            seed: None,
            clear_screen: default_clear_screen(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.target_score == 0 {
            return Err(ConfigError::new("target_score must be at least 1".to_string()));
        }

        info!(target_score = config.target_score, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line flags on top of file values.
    #[instrument(skip_all)]
    pub fn with_cli(mut self, cli: &Cli) -> Result<Self, ConfigError> {
        if let Some(name) = &cli.name {
            self.human_name = Some(name.clone());
        }
        if let Some(marker) = cli.marker {
            self.human_marker = Some(marker);
        }
        if cli.computer_first {
            self.computer_first = true;
        }
        if let Some(target) = cli.target_score {
            if target == 0 {
                return Err(ConfigError::new("--target-score must be at least 1".to_string()));
            }
            self.target_score = target;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if cli.no_clear {
            self.clear_screen = false;
        }
        debug!(config = ?self, "Command-line overrides applied");
        Ok(self)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
