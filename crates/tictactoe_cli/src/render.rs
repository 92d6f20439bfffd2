//! Text rendering of the board, results and scores.

use std::io::{self, Write};
use tictactoe_core::{Board, Marker, Outcome, Score, Seats, Square};

/// The board as three rows of `[ ]` cells.
pub fn board_rows(board: &Board) -> [String; 3] {
    let cell = |square: &Square| match square.marker() {
        Some(marker) => format!("[{}]", marker.symbol()),
        None => "[ ]".to_string(),
    };
    let squares = board.squares();
    [0, 1, 2].map(|row| squares[row * 3..row * 3 + 3].iter().map(cell).collect())
}

/// Who plays which marker, then the board.
pub fn draw_board<W: Write>(out: &mut W, board: &Board, seats: &Seats) -> io::Result<()> {
    for player in [seats.human(), seats.computer()] {
        writeln!(out, "{} is an {}", player.name(), player.marker())?;
    }
    writeln!(out)?;
    for row in board_rows(board) {
        writeln!(out, "{}", row)?;
    }
    writeln!(out)
}

/// Line announcing how a round ended.
pub fn round_result(outcome: Outcome, seats: &Seats) -> String {
    match outcome {
        Outcome::Win(marker) => format!("{} won!", seats.owner(marker).name()),
        Outcome::Draw => "The board is full!".to_string(),
    }
}

/// Both players' points, computer first.
pub fn draw_scores<W: Write>(out: &mut W, score: &Score, seats: &Seats) -> io::Result<()> {
    for player in [seats.computer(), seats.human()] {
        writeln!(out, "{} has {} points", player.name(), score.of(*player.marker()))?;
    }
    Ok(())
}

/// Line announcing the winner of the whole game.
pub fn game_result(champion: Marker, seats: &Seats) -> String {
    format!("{} won the game!", seats.owner(champion).name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_rows() {
        let mut board = Board::new();
        board.mark_number(1, Marker::X).unwrap();
        board.mark_number(5, Marker::O).unwrap();
        board.mark_number(9, Marker::X).unwrap();
        assert_eq!(
            board_rows(&board),
            ["[X][ ][ ]".to_string(), "[ ][O][ ]".to_string(), "[ ][ ][X]".to_string()]
        );
    }

    #[test]
    fn test_draw_board_header() {
        let seats = Seats::new("Ada", Marker::O, "Turing");
        let mut out = Vec::new();
        draw_board(&mut out, &Board::new(), &seats).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Ada is an O\nTuring is an X\n\n[ ][ ][ ]\n"));
    }

    #[test]
    fn test_results_name_owner() {
        let seats = Seats::new("Ada", Marker::X, "HAL9000");
        assert_eq!(round_result(Outcome::Win(Marker::O), &seats), "HAL9000 won!");
        assert_eq!(round_result(Outcome::Draw, &seats), "The board is full!");
        assert_eq!(game_result(Marker::X, &seats), "Ada won the game!");
    }

    #[test]
    fn test_scores() {
        let seats = Seats::new("Ada", Marker::X, "HAL9000");
        let score = Score::new().record(Outcome::Win(Marker::X));
        let mut out = Vec::new();
        draw_scores(&mut out, &score, &seats).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "HAL9000 has 0 points\nAda has 1 points\n"
        );
    }
}
