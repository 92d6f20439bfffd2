//! Board properties checked over every possible arrangement of squares.

use tictactoe_core::{Board, LINES, Marker, MoveError, Position, Square};

/// All 3^9 boards, legal under alternating play or not.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in squares.iter_mut() {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Marker::X),
                _ => Square::Occupied(Marker::O),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    })
}

fn complete_lines(board: &Board) -> Vec<Marker> {
    LINES
        .iter()
        .filter_map(|line| match line.squares(board) {
            [Square::Occupied(a), Square::Occupied(b), Square::Occupied(c)]
                if a == b && b == c =>
            {
                Some(a)
            }
            _ => None,
        })
        .collect()
}

#[test]
fn test_complete_line_is_reported_as_winner() {
    for board in all_boards() {
        let complete = complete_lines(&board);
        match complete.first() {
            // The first complete line in scan order decides.
            Some(first) => assert_eq!(board.winning_marker(), Some(*first), "{:?}", board),
            None => assert_eq!(board.winning_marker(), None, "{:?}", board),
        }
        if !complete.is_empty() && complete.iter().all(|m| *m == complete[0]) {
            assert_eq!(board.winning_marker(), Some(complete[0]));
        }
    }
}

#[test]
fn test_threat_defined_iff_two_and_a_gap() {
    for board in all_boards() {
        let expected = LINES.iter().find(|line| {
            let squares = line.squares(&board);
            let empties = squares.iter().filter(|s| s.is_empty()).count();
            let xs = squares.iter().filter(|s| **s == Square::Occupied(Marker::X)).count();
            let os = squares.iter().filter(|s| **s == Square::Occupied(Marker::O)).count();
            empties == 1 && (xs == 2 || os == 2)
        });

        match (board.threat_line(), expected) {
            (Some(threat), Some(line)) => {
                assert_eq!(threat.line(), *line);
                assert!(board.is_empty(threat.gap()));
                assert!(line.contains(threat.gap()));
                let held = line
                    .positions()
                    .iter()
                    .filter(|&&pos| board.get(pos) == Square::Occupied(threat.marker()))
                    .count();
                assert_eq!(held, 2);
            }
            (None, None) => {}
            (got, want) => panic!("threat {:?} but expected line {:?} on {:?}", got, want, board),
        }
    }
}

#[test]
fn test_full_iff_no_unmarked_positions() {
    for board in all_boards() {
        assert_eq!(board.is_full(), board.unmarked_positions().is_empty());
        assert_eq!(board.unmarked_positions().len() + board.marked_count(), 9);
    }
}

#[test]
fn test_marking_occupied_square_always_fails() {
    for board in all_boards().step_by(37) {
        for pos in Position::ALL {
            if board.is_empty(pos) {
                continue;
            }
            for marker in [Marker::X, Marker::O] {
                let mut copy = board.clone();
                assert_eq!(copy.mark(pos, marker), Err(MoveError::SquareOccupied(pos)));
                assert_eq!(copy, board);
            }
        }
    }
}

#[test]
fn test_reset_from_any_board() {
    for mut board in all_boards().step_by(101) {
        board.reset();
        assert!(!board.is_full());
        assert_eq!(board.unmarked_positions().len(), 9);
    }
}

#[test]
fn test_scenario_threat_on_top_row() {
    let mut board = Board::new();
    board.mark_number(1, Marker::X).unwrap();
    board.mark_number(2, Marker::X).unwrap();

    let threat = board.threat_line().expect("threat on top row");
    assert_eq!(threat.line().positions().map(Position::number), [1, 2, 3]);
    assert_eq!(threat.gap().number(), 3);
}

#[test]
fn test_scenario_top_row_win_on_open_board() {
    let mut board = Board::new();
    for number in 1..=3 {
        board.mark_number(number, Marker::X).unwrap();
    }
    assert_eq!(board.winning_marker(), Some(Marker::X));
    assert!(!board.is_full());
}

#[test]
fn test_scenario_full_board_draw() {
    // O X O / O X X / X O X
    let layout = [
        Marker::O,
        Marker::X,
        Marker::O,
        Marker::O,
        Marker::X,
        Marker::X,
        Marker::X,
        Marker::O,
        Marker::X,
    ];
    let board = Board::from_squares(layout.map(Square::Occupied));
    assert_eq!(board.winning_marker(), None);
    assert!(board.is_full());
    assert!(tictactoe_core::rules::is_draw(&board));
}
