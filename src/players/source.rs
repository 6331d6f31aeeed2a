//! Move sources that drive a [`HumanPlayer`](super::HumanPlayer).

use crate::games::tictactoe::{Board, Mark};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::{debug, instrument, warn};

/// Supplies move indices on behalf of a human.
///
/// Returning `None` signals that the source is exhausted; the player
/// then falls back to a random empty cell.
pub trait MoveSource {
    /// Produces the next requested index, or `None` when exhausted.
    fn next_move(&mut self, mark: Mark, board: &Board) -> Option<usize>;
}

/// A move source several players draw from in turn.
///
/// Both humans at one console read from the same input, which may only
/// be locked once.
pub type SharedMoves = Rc<RefCell<dyn MoveSource>>;

impl<S: MoveSource + ?Sized> MoveSource for Rc<RefCell<S>> {
    fn next_move(&mut self, mark: Mark, board: &Board) -> Option<usize> {
        self.borrow_mut().next_move(mark, board)
    }
}

/// Predetermined moves consumed in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScriptedMoves {
    moves: Vec<usize>,
    cursor: usize,
}

impl ScriptedMoves {
    /// Creates a source that replays `moves` in order.
    pub fn new(moves: Vec<usize>) -> Self {
        Self { moves, cursor: 0 }
    }

    /// Number of scripted moves not yet handed out.
    pub fn remaining(&self) -> usize {
        self.moves.len() - self.cursor
    }
}

impl MoveSource for ScriptedMoves {
    #[instrument(skip(self, _board))]
    fn next_move(&mut self, _mark: Mark, _board: &Board) -> Option<usize> {
        let index = self.moves.get(self.cursor).copied()?;
        self.cursor += 1;
        debug!(index, remaining = self.remaining(), "Scripted move");
        Some(index)
    }
}

/// Interactive source reading one index per line.
///
/// Unparsable lines are reported and re-read. End of input or a read
/// failure exhausts the source.
#[derive(Debug)]
pub struct ConsoleMoves<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleMoves<R, W> {
    /// Creates a console source over the given reader and prompt writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleMoves<R, W> {
    #[instrument(skip(self, _board))]
    fn next_move(&mut self, mark: Mark, _board: &Board) -> Option<usize> {
        loop {
            let prompted = write!(self.output, "Player {}, enter a position (0-8): ", mark)
                .and_then(|_| self.output.flush());
            if let Err(e) = prompted {
                warn!(error = %e, "Failed to write prompt");
                return None;
            }

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    debug!("End of input");
                    return None;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "Failed to read move");
                    return None;
                }
            }

            match line.trim().parse::<usize>() {
                Ok(index) => return Some(index),
                Err(_) => {
                    debug!(input = %line.trim(), "Unparsable move");
                    if let Err(e) = writeln!(self.output, "Please enter a number between 0 and 8.") {
                        warn!(error = %e, "Failed to write message");
                        return None;
                    }
                }
            }
        }
    }
}
