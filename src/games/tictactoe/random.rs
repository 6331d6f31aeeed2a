//! Random legal-move selection shared by every player variant.

use super::Board;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{instrument, trace};

/// Picks an empty cell uniformly at random.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng))]
pub fn random_empty_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let empty = board.empty_cells();
    let choice = empty.choose(rng).copied();
    trace!(candidates = empty.len(), ?choice, "Random cell chosen");
    choice
}
