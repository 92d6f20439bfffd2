//! Players and their seats at the table.

use crate::types::Marker;
use derive_getters::Getters;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Names the computer opponent is given.
pub const COMPUTER_NAMES: [&str; 5] = ["HAL9000", "R2-D2", "Turing", "DeepThought", "Project2501"];

/// Picks a name for the computer opponent.
pub fn random_computer_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    COMPUTER_NAMES.choose(rng).copied().unwrap_or(COMPUTER_NAMES[0])
}

/// Who decides a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum PlayerKind {
    /// Moves come from a human input source.
    Human,
    /// Moves come from the move selector.
    Computer,
}

/// A participant in the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker this player places.
    marker: Marker,
    /// Human or computer.
    kind: PlayerKind,
}

impl Player {
    /// Returns true if a human picks this player's moves.
    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }
}

/// The human and the computer of one game.
///
/// The computer always holds the marker the human did not pick.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Seats {
    /// The human player.
    human: Player,
    /// The computer player.
    computer: Player,
}

impl Seats {
    /// Seats a human with the chosen marker against a computer holding the other one.
    #[instrument(skip(human_name, computer_name))]
    pub fn new(
        human_name: impl Into<String>,
        human_marker: Marker,
        computer_name: impl Into<String>,
    ) -> Self {
        Self {
            human: Player::new(human_name.into(), human_marker, PlayerKind::Human),
            computer: Player::new(
                computer_name.into(),
                human_marker.opponent(),
                PlayerKind::Computer,
            ),
        }
    }

    /// The player placing `marker`.
    pub fn owner(&self, marker: Marker) -> &Player {
        if *self.human.marker() == marker {
            &self.human
        } else {
            &self.computer
        }
    }
}
