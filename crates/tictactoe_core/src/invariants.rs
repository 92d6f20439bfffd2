//! Invariants of a round in progress.
//!
//! Checked by the round controller after every move in debug builds and
//! testable on their own.

use crate::round::{RoundController, RoundState};
use crate::types::Square;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: movers alternate, starting with the configured first mover.
pub struct AlternatingTurnInvariant;

impl<R> Invariant<RoundController<R>> for AlternatingTurnInvariant {
    fn holds(round: &RoundController<R>) -> bool {
        let history = round.history();

        if let Some(first) = history.first()
            && first.marker != round.first_mover()
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].marker == pair[1].marker) {
            return false;
        }

        match round.state() {
            RoundState::AwaitingMove(next) => {
                let expected = match history.last() {
                    Some(last) => last.marker.opponent(),
                    None => round.first_mover(),
                };
                next == expected
            }
            RoundState::RoundOver(_) => !history.is_empty(),
        }
    }

    fn description() -> &'static str {
        "Movers alternate starting from the first mover"
    }
}

/// Invariant: every move in the history is on the board, and nothing else is.
pub struct HistoryConsistentInvariant;

impl<R> Invariant<RoundController<R>> for HistoryConsistentInvariant {
    fn holds(round: &RoundController<R>) -> bool {
        let board = round.board();
        round.history().len() == board.marked_count()
            && round
                .history()
                .iter()
                .all(|mv| board.get(mv.position) == Square::Occupied(mv.marker))
    }

    fn description() -> &'static str {
        "History matches the marked squares"
    }
}

/// All round invariants as a composable set.
pub type RoundInvariants = (AlternatingTurnInvariant, HistoryConsistentInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Seats;
    use crate::position::Position;
    use crate::selector::MoveSelector;
    use crate::types::Marker;

    fn controller(first: Marker) -> RoundController {
        RoundController::new(
            Seats::new("Ada", Marker::X, "Turing"),
            first,
            MoveSelector::seeded(5),
        )
    }

    #[test]
    fn test_fresh_round_holds() {
        let round = controller(Marker::O);
        assert!(RoundInvariants::check_all(&round).is_ok());
    }

    #[test]
    fn test_holds_after_moves() {
        let mut round = controller(Marker::X);
        round.apply(Position::Center).unwrap();
        round.apply(Position::TopLeft).unwrap();
        round.apply(Position::BottomRight).unwrap();
        assert!(AlternatingTurnInvariant::holds(&round));
        assert!(HistoryConsistentInvariant::holds(&round));
    }

    #[test]
    fn test_detects_board_tampering() {
        let mut round = controller(Marker::X);
        round.apply(Position::Center).unwrap();
        round.board.mark(Position::TopLeft, Marker::O).unwrap();

        let violations = RoundInvariants::check_all(&round).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            <HistoryConsistentInvariant as Invariant<RoundController>>::description()
        );
    }
}
