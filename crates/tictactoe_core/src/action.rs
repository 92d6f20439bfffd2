//! Moves as first-class values.

use crate::position::Position;
use crate::types::Marker;
use serde::{Deserialize, Serialize};

/// A marker placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The marker placed.
    pub marker: Marker,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(marker: Marker, position: Position) -> Self {
        Self { marker, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.position)
    }
}
