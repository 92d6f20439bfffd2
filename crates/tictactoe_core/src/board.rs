//! The 3x3 board.

use crate::error::MoveError;
use crate::position::Position;
use crate::rules::{self, Threat};
use crate::types::{Marker, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// All nine squares exist for the board's whole life; marking and
/// resetting only change what they hold.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (index 0-8, square numbers 1-9).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is unmarked.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Places `marker` on an unmarked square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square is already marked.
    /// The board is left unchanged.
    #[instrument(skip(self))]
    pub fn mark(&mut self, pos: Position, marker: Marker) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            debug!(%pos, "Rejected mark on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }
        self.squares[pos.index()] = Square::Occupied(marker);
        Ok(())
    }

    /// Places `marker` on the square with the given number (1-9).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for numbers outside 1-9 and
    /// [`MoveError::SquareOccupied`] for marked squares.
    #[instrument(skip(self))]
    pub fn mark_number(&mut self, number: u8, marker: Marker) -> Result<Position, MoveError> {
        let pos = Position::try_from(number)?;
        self.mark(pos, marker)?;
        Ok(pos)
    }

    /// Unmarked positions in ascending order. Empty when the board is full.
    pub fn unmarked_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Number of marked squares.
    pub fn marked_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// True when no square is left unmarked.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Marker holding a complete line, first in scan order.
    pub fn winning_marker(&self) -> Option<Marker> {
        rules::winning_marker(self)
    }

    /// First line, in scan order, that is one move from completion.
    pub fn threat_line(&self) -> Option<Threat> {
        rules::threat_line(self)
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }
}
