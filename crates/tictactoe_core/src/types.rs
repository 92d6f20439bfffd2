//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Marker a player places on the board.
///
/// Chosen once when the game is configured and never changed afterwards.
/// Parses case-insensitively (`"x"` and `"X"` are both [`Marker::X`]).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Marker {
    /// The `X` marker.
    X,
    /// The `O` marker.
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Returns the marker as the character drawn on the board.
    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Unmarked square.
    #[default]
    Empty,
    /// Square marked by a player.
    Occupied(Marker),
}

impl Square {
    /// Returns true if nobody has marked this square.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Returns the marker on this square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }
}
