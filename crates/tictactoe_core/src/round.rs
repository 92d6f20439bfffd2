//! Round controller: turn order, outcome detection and scoring.

use crate::action::Move;
use crate::board::Board;
use crate::error::{InputError, RoundError};
use crate::invariants::{InvariantSet, RoundInvariants};
use crate::player::{Player, Seats};
use crate::position::Position;
use crate::score::Score;
use crate::selector::MoveSelector;
use crate::types::Marker;
use derive_getters::Getters;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A marker completed a line.
    Win(Marker),
    /// The board filled up with no complete line.
    Draw,
}

impl Outcome {
    /// Returns the winning marker if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Win(marker) => Some(*marker),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(marker) => write!(f, "{} wins", marker),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    /// Waiting for the holder of this marker to move.
    AwaitingMove(Marker),
    /// The round has ended.
    RoundOver(Outcome),
}

/// Source of the human player's moves.
///
/// Implementations should only return unmarked positions; the controller
/// rejects anything else with [`RoundError::InvalidMove`].
pub trait HumanInput {
    /// Asks for the next move on `board`.
    fn request_move(&mut self, board: &Board) -> Result<Position, InputError>;
}

impl<F> HumanInput for F
where
    F: FnMut(&Board) -> Result<Position, InputError>,
{
    fn request_move(&mut self, board: &Board) -> Result<Position, InputError> {
        self(board)
    }
}

/// Result of a completed round.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RoundReport {
    /// How the round ended.
    outcome: Outcome,
    /// Score including this round.
    score: Score,
    /// Moves in the order they were played.
    moves: Vec<Move>,
}

/// Drives rounds between a human and the computer.
///
/// Sole owner and mutator of the board. Each round starts empty, with the
/// holder of the first-move marker to play.
#[derive(Debug, Clone)]
pub struct RoundController<R = ChaCha8Rng> {
    pub(crate) board: Board,
    seats: Seats,
    first_mover: Marker,
    selector: MoveSelector<R>,
    state: RoundState,
    history: Vec<Move>,
}

impl<R> RoundController<R> {
    /// Creates a controller with an empty board.
    ///
    /// `first_mover` is fixed for the life of the controller; every round
    /// starts with the player holding it.
    #[instrument(skip(seats, selector))]
    pub fn new(seats: Seats, first_mover: Marker, selector: MoveSelector<R>) -> Self {
        Self {
            board: Board::new(),
            seats,
            first_mover,
            selector,
            state: RoundState::AwaitingMove(first_mover),
            history: Vec::new(),
        }
    }

    /// The board of the current round.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The players.
    pub fn seats(&self) -> &Seats {
        &self.seats
    }

    /// Marker that opens every round.
    pub fn first_mover(&self) -> Marker {
        self.first_mover
    }

    /// Current state of the round.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Moves played this round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The player to move, or `None` once the round is over.
    pub fn current_player(&self) -> Option<&Player> {
        match self.state {
            RoundState::AwaitingMove(marker) => Some(self.seats.owner(marker)),
            RoundState::RoundOver(_) => None,
        }
    }

    /// Clears the board and hands the first move back to the first mover.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.state = RoundState::AwaitingMove(self.first_mover);
        debug!(first_mover = %self.first_mover, "Round reset");
    }

    /// Places the current player's marker at `pos` and advances the round.
    ///
    /// # Errors
    ///
    /// - [`RoundError::RoundOver`] if the round has already ended.
    /// - [`RoundError::InvalidMove`] if the square is taken. Board and state
    ///   are unchanged, so the caller can ask again.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn apply(&mut self, pos: Position) -> Result<RoundState, RoundError> {
        let marker = match self.state {
            RoundState::AwaitingMove(marker) => marker,
            RoundState::RoundOver(_) => return Err(RoundError::RoundOver),
        };

        self.board.mark(pos, marker)?;
        self.history.push(Move::new(marker, pos));

        self.state = if let Some(winner) = self.board.winning_marker() {
            RoundState::RoundOver(Outcome::Win(winner))
        } else if self.board.is_full() {
            RoundState::RoundOver(Outcome::Draw)
        } else {
            RoundState::AwaitingMove(marker.opponent())
        };

        debug_assert!(
            RoundInvariants::check_all(&*self).is_ok(),
            "Round invariants violated after {}",
            Move::new(marker, pos)
        );

        if let RoundState::RoundOver(outcome) = self.state {
            info!(%outcome, moves = self.history.len(), "Round over");
        }
        Ok(self.state)
    }
}

impl<R: Rng> RoundController<R> {
    /// Gets one move from whoever is to play and applies it.
    ///
    /// # Errors
    ///
    /// Everything [`apply`](Self::apply) returns, plus input failures and
    /// [`RoundError::IllegalSelectorCall`].
    #[instrument(skip(self, human))]
    pub fn step<H: HumanInput + ?Sized>(&mut self, human: &mut H) -> Result<RoundState, RoundError> {
        let marker = match self.state {
            RoundState::AwaitingMove(marker) => marker,
            RoundState::RoundOver(_) => return Err(RoundError::RoundOver),
        };

        let pos = if self.seats.owner(marker).is_human() {
            human.request_move(&self.board)?
        } else {
            self.selector.select_move(&self.board, marker)?
        };
        debug!(%marker, %pos, "Move chosen");

        self.apply(pos)
    }

    /// Plays a whole round from an empty board.
    ///
    /// Returns the outcome, `score` updated with it, and the moves played.
    /// The finished board stays in place for display until the next reset.
    ///
    /// # Errors
    ///
    /// Stops at the first error from [`step`](Self::step).
    #[instrument(skip(self, human))]
    pub fn play_round<H: HumanInput + ?Sized>(
        &mut self,
        human: &mut H,
        score: Score,
    ) -> Result<RoundReport, RoundError> {
        self.reset();

        let outcome = loop {
            if let RoundState::RoundOver(outcome) = self.step(human)? {
                break outcome;
            }
        };

        Ok(RoundReport {
            outcome,
            score: score.record(outcome),
            moves: self.history.clone(),
        })
    }
}
