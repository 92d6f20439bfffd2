//! Tic-tac-toe against a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, win and threat detection
//! - **MoveSelector**: the computer's one-ply heuristic (take the gap of any
//!   two-in-a-row, otherwise a random open square)
//! - **RoundController**: turn order, outcome and scoring for each round
//!
//! Front-ends supply moves through [`HumanInput`] and read the board and
//! [`Score`] to render them.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, InputError, Marker, MoveSelector, Position, RoundController, Score, Seats};
//!
//! let seats = Seats::new("Ada", Marker::X, "Turing");
//! let mut round = RoundController::new(seats, Marker::X, MoveSelector::seeded(42));
//!
//! let mut first_open =
//!     |board: &Board| -> Result<Position, InputError> { Ok(board.unmarked_positions()[0]) };
//! let report = round.play_round(&mut first_open, Score::new()).unwrap();
//! assert!(report.moves().len() <= 9);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod invariants;
mod player;
mod position;
mod round;
pub mod rules;
mod score;
mod selector;
mod types;

pub use action::Move;
pub use board::Board;
pub use error::{IllegalSelectorCall, InputError, MoveError, RoundError};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, RoundInvariants,
};
pub use player::{COMPUTER_NAMES, Player, PlayerKind, Seats, random_computer_name};
pub use position::Position;
pub use round::{HumanInput, Outcome, RoundController, RoundReport, RoundState};
pub use rules::{LINES, Line, Threat};
pub use score::Score;
pub use selector::MoveSelector;
pub use types::{Marker, Square};
