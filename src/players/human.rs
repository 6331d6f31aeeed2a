//! Human player backed by a move source with a random fallback.

use super::{MoveSource, Player};
use crate::games::tictactoe::{Board, Mark, random_empty_cell};
use anyhow::Result;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

/// Human player.
///
/// Moves come from a [`MoveSource`] and are passed to the engine
/// unvalidated. Once the source is exhausted the player picks a random
/// empty cell instead.
#[derive(Debug)]
pub struct HumanPlayer<S> {
    name: String,
    mark: Mark,
    source: S,
    rng: StdRng,
    retry_limit: Option<u32>,
}

impl<S: MoveSource> HumanPlayer<S> {
    /// Creates a human player with unlimited retries.
    pub fn new(mark: Mark, source: S, rng: StdRng) -> Self {
        Self {
            name: format!("Player ({})", mark),
            mark,
            source,
            rng,
            retry_limit: None,
        }
    }

    /// Overrides the rejected-move limit.
    pub fn with_retry_limit(mut self, limit: Option<u32>) -> Self {
        self.retry_limit = limit;
        self
    }

    /// Returns the underlying move source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: MoveSource> Player for HumanPlayer<S> {
    #[instrument(skip(self, board), fields(mark = %self.mark))]
    fn get_move(&mut self, board: &Board) -> Result<usize> {
        if let Some(index) = self.source.next_move(self.mark, board) {
            debug!(index, "Move from source");
            return Ok(index);
        }

        info!("Move source exhausted, choosing a random cell");
        random_empty_cell(board, &mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))
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
