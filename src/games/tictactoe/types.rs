//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Mark a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, " "),
            Square::Occupied(mark) => write!(f, "{}", mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Square::Empty; CELLS],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Square; CELLS] {
        &self.cells
    }

    /// Places `mark` at `index`.
    ///
    /// Only an empty cell inside the board accepts a mark; a rejected
    /// placement leaves the board untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if `index >= 9` and
    /// [`MoveError::Occupied`] if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn update_cell(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        match self.cells.get_mut(index) {
            None => Err(MoveError::OutOfRange(index)),
            Some(Square::Occupied(_)) => Err(MoveError::Occupied(index)),
            Some(cell) => {
                *cell = Square::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Returns true if `mark` holds any row, column, or diagonal.
    pub fn check_winner(&self, mark: Mark) -> bool {
        rules::holds_triple(self, mark)
    }

    /// Returns the mark holding a triple, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Returns true if no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Indices of empty cells, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.is_empty(i)).collect()
    }

    /// Formats the board as three rows separated by dashes.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-----")?;
            }
            write!(f, "{} | {} | {}", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has reached a terminal state.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_update_cell_rejects_occupied() {
        let mut board = Board::new();
        board.update_cell(0, Mark::X).unwrap();
        assert_eq!(board.update_cell(0, Mark::O), Err(MoveError::Occupied(0)));
        assert_eq!(board.get(0), Some(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_update_cell_rejects_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.update_cell(9, Mark::X), Err(MoveError::OutOfRange(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_render_layout() {
        let mut board = Board::new();
        board.update_cell(0, Mark::X).unwrap();
        board.update_cell(4, Mark::O).unwrap();
        assert_eq!(board.render(), "X |   |  \n-----\n  | O |  \n-----\n  |   |  ");
    }

    #[test]
    fn test_mark_parses_from_str() {
        assert_eq!("X".parse::<Mark>().unwrap(), Mark::X);
        assert_eq!(Mark::O.to_string(), "O");
        assert_eq!(Mark::X.opponent(), Mark::O);
    }
}
