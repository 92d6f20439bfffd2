//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state. Rules are
//! kept apart from board storage so the board, the move selector and the
//! round controller all read the same line table.

pub mod draw;
pub mod lines;
pub mod threat;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::{LINES, Line};
pub use threat::{Threat, threat_line};
pub use win::winning_marker;
