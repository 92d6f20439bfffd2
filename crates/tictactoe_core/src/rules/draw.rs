//! Draw detection logic for tic-tac-toe.

use super::win::winning_marker;
use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (all squares marked).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| !s.is_empty())
}

/// A full board with no complete line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_marker(board).is_none()
}
