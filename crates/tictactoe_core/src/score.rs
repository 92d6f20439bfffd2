//! Round wins per marker.

use crate::round::Outcome;
use crate::types::Marker;
use serde::{Deserialize, Serialize};

/// Rounds won by each marker.
///
/// A plain value: recording an outcome returns the next score instead of
/// mutating shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Score {
    x: u32,
    o: u32,
}

impl Score {
    /// Score with no rounds won.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by `marker`.
    pub fn of(&self, marker: Marker) -> u32 {
        match marker {
            Marker::X => self.x,
            Marker::O => self.o,
        }
    }

    /// Score after a round ending in `outcome`. Draws change nothing.
    #[must_use]
    pub fn record(self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win(Marker::X) => Self { x: self.x + 1, ..self },
            Outcome::Win(Marker::O) => Self { o: self.o + 1, ..self },
            Outcome::Draw => self,
        }
    }

    /// The marker that has reached `target` wins, if either has.
    pub fn leader_at(&self, target: u32) -> Option<Marker> {
        if self.x >= target {
            Some(Marker::X)
        } else if self.o >= target {
            Some(Marker::O)
        } else {
            None
        }
    }
}
