//! Automated player that picks a random empty cell.

use super::Player;
use crate::games::tictactoe::{Board, Mark, random_empty_cell};
use anyhow::Result;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

/// Rejected moves tolerated from a [`ComputerPlayer`] unless overridden.
pub const DEFAULT_COMPUTER_RETRY_LIMIT: u32 = 3;

/// Computer player choosing uniformly among empty cells.
#[derive(Debug)]
pub struct ComputerPlayer {
    name: String,
    mark: Mark,
    rng: StdRng,
    retry_limit: Option<u32>,
}

impl ComputerPlayer {
    /// Creates a computer player with an injected random source.
    pub fn new(mark: Mark, rng: StdRng) -> Self {
        Self {
            name: format!("Computer ({})", mark),
            mark,
            rng,
            retry_limit: Some(DEFAULT_COMPUTER_RETRY_LIMIT),
        }
    }

    /// Overrides the rejected-move limit.
    pub fn with_retry_limit(mut self, limit: Option<u32>) -> Self {
        self.retry_limit = limit;
        self
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip(self, board), fields(mark = %self.mark))]
    fn get_move(&mut self, board: &Board) -> Result<usize> {
        info!("Computer ({}) is making a move...", self.mark);

        let Some(index) = random_empty_cell(board, &mut self.rng) else {
            anyhow::bail!("No valid moves available");
        };

        debug!(index, "Computer chose cell");
        Ok(index)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn retry_limit(&self) -> Option<u32> {
        self.retry_limit
    }
}
