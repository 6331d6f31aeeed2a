//! Player trait and implementations.

mod computer;
mod human;
mod source;

pub use computer::{ComputerPlayer, DEFAULT_COMPUTER_RETRY_LIMIT};
pub use human::HumanPlayer;
pub use source::{ConsoleMoves, MoveSource, ScriptedMoves, SharedMoves};

use crate::games::tictactoe::{Board, Mark};
use anyhow::Result;

/// Trait for players that can make moves.
///
/// Players only read the board; the engine owns it and applies the
/// returned index.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Returns the board index (0-8) for the next move. Implementations
    /// that pick at random always return an empty cell while one exists.
    fn get_move(&mut self, board: &Board) -> Result<usize>;

    /// Returns the mark this player places.
    fn mark(&self) -> Mark;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Consecutive rejected moves tolerated before the engine gives up.
    ///
    /// `None` means unlimited.
    fn retry_limit(&self) -> Option<u32> {
        None
    }
}
