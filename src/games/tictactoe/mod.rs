//! Tic-tac-toe board, rules, and move selection.

mod action;
mod random;
mod types;
pub mod rules;

pub use action::{Move, MoveError};
pub use random::random_empty_cell;
pub use types::{Board, CELLS, GameStatus, Mark, Square};
