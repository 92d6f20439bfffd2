//! The computer opponent.
//!
//! One-ply heuristic: complete any line that is one move from finishing,
//! otherwise play a random open square. The selector does not check whose
//! two-in-a-row it found, so the same rule blocks the opponent and finishes
//! its own lines.

use crate::board::Board;
use crate::error::IllegalSelectorCall;
use crate::position::Position;
use crate::types::Marker;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Picks the computer's moves.
///
/// Randomness is injected so games can be replayed from a seed.
#[derive(Debug, Clone)]
pub struct MoveSelector<R = ChaCha8Rng> {
    rng: R,
}

impl MoveSelector<ChaCha8Rng> {
    /// Creates a selector with a reproducible random sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a selector seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> MoveSelector<R> {
    /// Creates a selector drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Chooses a move for the player holding `own_marker`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalSelectorCall`] when the board has no open square.
    #[instrument(skip(self, board))]
    pub fn select_move(
        &mut self,
        board: &Board,
        own_marker: Marker,
    ) -> Result<Position, IllegalSelectorCall> {
        if let Some(threat) = board.threat_line() {
            debug!(
                line = %threat.line(),
                holder = %threat.marker(),
                gap = %threat.gap(),
                "Taking the open square of a threatened line"
            );
            return Ok(threat.gap());
        }

        let open = board.unmarked_positions();
        let pos = open.choose(&mut self.rng).copied().ok_or(IllegalSelectorCall)?;
        debug!(%pos, options = open.len(), "No threat, picked a random square");
        Ok(pos)
    }
}
