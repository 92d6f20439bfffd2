//! Win detection logic for tic-tac-toe.

use super::lines::LINES;
use crate::board::Board;
use crate::types::{Marker, Square};
use tracing::instrument;

/// Returns the marker holding a complete line, if any.
///
/// Lines are scanned in declared order and the first complete one wins.
/// Other marks on the board play no part.
#[instrument(skip(board))]
pub fn winning_marker(board: &Board) -> Option<Marker> {
    LINES.iter().find_map(|line| match line.squares(board) {
        [Square::Occupied(a), Square::Occupied(b), Square::Occupied(c)] if a == b && b == c => {
            Some(a)
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn board_with(marks: &[(u8, Marker)]) -> Board {
        let mut board = Board::new();
        for &(number, marker) in marks {
            board.mark_number(number, marker).expect("free square");
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_marker(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(1, Marker::X), (2, Marker::X), (3, Marker::X)]);
        assert_eq!(winning_marker(&board), Some(Marker::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(3, Marker::O), (5, Marker::O), (7, Marker::O), (1, Marker::X)]);
        assert_eq!(winning_marker(&board), Some(Marker::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(1, Marker::X), (2, Marker::O), (3, Marker::X)]);
        assert_eq!(winning_marker(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.mark(Position::TopLeft, Marker::X).unwrap();
        board.mark(Position::TopCenter, Marker::X).unwrap();
        assert_eq!(winning_marker(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Impossible under alternating play, but the scan order is still fixed.
        let board = board_with(&[
            (1, Marker::O),
            (4, Marker::O),
            (7, Marker::O),
            (3, Marker::X),
            (6, Marker::X),
            (9, Marker::X),
            (2, Marker::X),
            (5, Marker::O),
            (8, Marker::X),
        ]);
        // No row is uniform; column {1,4,7} is scanned before {3,6,9}.
        assert_eq!(winning_marker(&board), Some(Marker::O));
    }
}
