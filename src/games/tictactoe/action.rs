//! First-class action types for tic-tac-toe.
//!
//! A move is recorded only after the board accepted it, so the engine's
//! history is always a legal sequence of placements.

use super::Mark;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// The board index (0-8).
    pub index: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Reason a placement was rejected.
///
/// Both variants are recoverable: the engine re-prompts the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell at the index is already occupied.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),

    /// The index lies outside the board.
    #[display("Index {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),
}
