//! Line-oriented terminal input and output.
//!
//! Every prompt re-asks until the answer is usable, so the core only ever
//! sees valid choices. A closed input stream ends the game with an error.

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tictactoe_core::{Board, HumanInput, InputError, Marker, Position};
use tracing::{instrument, warn};

/// Joins items as `"1, 2, or 3"`, `"1 or 2"` or `"1"`.
pub fn join_or<T: ToString>(items: &[T]) -> String {
    let words: Vec<String> = items.iter().map(ToString::to_string).collect();
    match words.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} or {}", first, second),
        [rest @ .., last] => format!("{}, or {}", rest.join(", "), last),
    }
}

/// Upper-cases the first letter and lower-cases the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Terminal the game talks through.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Output stream, for rendering.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Clears the screen when enabled.
    pub fn clear(&mut self) -> Result<(), InputError> {
        if self.clear_screen {
            crossterm::execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<(), InputError> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Reads one trimmed line.
    fn read_line(&mut self) -> Result<String, InputError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::new("Input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Asks for the player's name until a non-blank one is given.
    #[instrument(skip(self))]
    pub fn ask_name(&mut self) -> Result<String, InputError> {
        self.say("What's your name?")?;
        loop {
            let name = capitalize(&self.read_line()?);
            if !name.is_empty() {
                return Ok(name);
            }
            self.say("Sorry, please type a name")?;
        }
    }

    /// Asks for X or O.
    #[instrument(skip(self))]
    pub fn ask_marker(&mut self, name: &str) -> Result<Marker, InputError> {
        self.say(format!("Pick your marker, {}! (X or O)", name))?;
        loop {
            let answer = self.read_line()?;
            match Marker::from_str(&answer) {
                Ok(marker) => return Ok(marker),
                Err(_) => {
                    warn!(%answer, "Rejected marker");
                    self.say("Sorry, must be X or O")?;
                }
            }
        }
    }

    /// Asks whether to play another game.
    #[instrument(skip(self))]
    pub fn ask_play_again(&mut self) -> Result<bool, InputError> {
        self.say("Would you like to play again? (y/n)")?;
        loop {
            let answer = self.read_line()?.to_lowercase();
            match answer.as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("Sorry, must be y or n")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> HumanInput for Console<R, W> {
    #[instrument(skip_all)]
    fn request_move(&mut self, board: &Board) -> Result<Position, InputError> {
        let open = board.unmarked_positions();
        self.say(format!("Choose a square: ({})", join_or(&open)))?;
        loop {
            let answer = self.read_line()?;
            match Position::from_label_or_number(&answer) {
                Some(pos) if open.contains(&pos) => return Ok(pos),
                _ => {
                    warn!(%answer, "Rejected square");
                    self.say("Sorry, that's not a valid square")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_join_or() {
        assert_eq!(join_or::<u8>(&[]), "");
        assert_eq!(join_or(&[4]), "4");
        assert_eq!(join_or(&[1, 2]), "1 or 2");
        assert_eq!(join_or(&[1, 2, 3]), "1, 2, or 3");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("  aDA \n"), "Ada");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_request_move_retries_until_open_square() {
        let mut board = Board::new();
        board.mark_number(5, Marker::X).unwrap();
        let mut console = scripted("abc\n0\n5\n12\n7\n");

        assert_eq!(console.request_move(&board).unwrap(), Position::BottomLeft);
        let text = output(console);
        assert!(text.starts_with("Choose a square: (1, 2, 3, 4, 6, 7, 8, or 9)"));
        assert_eq!(text.matches("Sorry, that's not a valid square").count(), 4);
    }

    #[test]
    fn test_request_move_accepts_labels() {
        let mut board = Board::new();
        board.mark_number(1, Marker::O).unwrap();
        let mut console = scripted("top-left\nmiddle\nCenter\n");

        assert_eq!(console.request_move(&board).unwrap(), Position::Center);
        assert_eq!(
            output(console).matches("Sorry, that's not a valid square").count(),
            2
        );
    }

    #[test]
    fn test_request_move_closed_input() {
        let mut console = scripted("");
        assert!(console.request_move(&Board::new()).is_err());
    }

    #[test]
    fn test_ask_marker_retries() {
        let mut console = scripted("z\no\n");
        assert_eq!(console.ask_marker("Ada").unwrap(), Marker::O);
        assert!(output(console).contains("Sorry, must be X or O"));
    }

    #[test]
    fn test_ask_play_again() {
        let mut console = scripted("maybe\nY\n");
        assert!(console.ask_play_again().unwrap());
        let mut console = scripted("n\n");
        assert!(!console.ask_play_again().unwrap());
    }

    #[test]
    fn test_ask_name_capitalizes() {
        let mut console = scripted("\n  grace \n");
        assert_eq!(console.ask_name().unwrap(), "Grace");
    }
}
