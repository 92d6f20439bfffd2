//! Threat detection: a line one move from completion.

use super::lines::{LINES, Line};
use crate::board::Board;
use crate::position::Position;
use crate::types::Marker;
use tracing::instrument;

/// A line holding two identical markers and one empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Threat {
    line: Line,
    marker: Marker,
    gap: Position,
}

impl Threat {
    /// The threatened line.
    pub fn line(&self) -> Line {
        self.line
    }

    /// The marker holding two squares of the line.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// The empty square that completes the line.
    pub fn gap(&self) -> Position {
        self.gap
    }
}

impl Line {
    /// Returns the threat on this line, if it has one.
    ///
    /// Two different markers, or fewer than two marks, are never a threat.
    pub fn threat(&self, board: &Board) -> Option<Threat> {
        let positions = self.positions();

        let mut gaps = positions.iter().copied().filter(|&pos| board.is_empty(pos));
        let gap = gaps.next()?;
        if gaps.next().is_some() {
            return None;
        }

        let mut markers = positions.iter().filter_map(|&pos| board.get(pos).marker());
        let first = markers.next()?;
        let second = markers.next()?;

        (first == second).then_some(Threat {
            line: *self,
            marker: first,
            gap,
        })
    }
}

/// Returns the first threatened line in scan order.
///
/// The owner of the two-in-a-row is reported but not filtered on: a line
/// threatened by either marker counts.
#[instrument(skip(board))]
pub fn threat_line(board: &Board) -> Option<Threat> {
    LINES.iter().find_map(|line| line.threat(board))
}
