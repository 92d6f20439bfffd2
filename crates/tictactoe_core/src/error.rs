//! Error types for moves, move selection and rounds.

use crate::position::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// A move the board cannot accept.
///
/// Always recoverable: the caller re-prompts and tries again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Square number is not in 1-9.
    #[display("Square {} is not on the board (choose 1-9)", _0)]
    OutOfRange(u8),

    /// Square already carries a marker.
    #[display("Square {} is already marked", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

/// The move selector was asked to move on a full board.
///
/// The round controller never does this; seeing it means the caller broke
/// the selector's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Move selector called on a full board")]
pub struct IllegalSelectorCall;

/// Failure to obtain a move from a human input source.
#[derive(Debug, Clone, Display, Error)]
#[display("Input error: {} at {}:{}", message, file, line)]
pub struct InputError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InputError {
    /// Creates a new input error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for InputError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Error raised while driving a round.
#[derive(Debug, Clone, Display)]
pub enum RoundError {
    /// The chosen move was rejected by the board.
    #[display("Invalid move: {}", _0)]
    InvalidMove(MoveError),

    /// A move was submitted after the round ended.
    #[display("Round is already over")]
    RoundOver,

    /// The computer was asked to move with no squares left.
    #[display("{}", _0)]
    IllegalSelectorCall(IllegalSelectorCall),

    /// The human input source failed.
    #[display("{}", _0)]
    Input(InputError),
}

impl std::error::Error for RoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RoundError::InvalidMove(err) => Some(err),
            RoundError::RoundOver => None,
            RoundError::IllegalSelectorCall(err) => Some(err),
            RoundError::Input(err) => Some(err),
        }
    }
}

impl From<MoveError> for RoundError {
    fn from(err: MoveError) -> Self {
        RoundError::InvalidMove(err)
    }
}

impl From<IllegalSelectorCall> for RoundError {
    fn from(err: IllegalSelectorCall) -> Self {
        RoundError::IllegalSelectorCall(err)
    }
}

impl From<InputError> for RoundError {
    fn from(err: InputError) -> Self {
        RoundError::Input(err)
    }
}
