//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};
use tracing::instrument;

/// The eight winning triples: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns true if `mark` fills at least one triple.
#[instrument(skip(board))]
pub fn holds_triple(board: &Board, mark: Mark) -> bool {
    let cells = board.cells();
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i] == Square::Occupied(mark)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| holds_triple(board, mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, cells: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in cells {
            board.update_cell(i, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(!holds_triple(&board, Mark::X));
        assert!(!holds_triple(&board, Mark::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_with(Mark::O, &line);
            assert!(holds_triple(&board, Mark::O), "line {:?}", line);
            assert!(!holds_triple(&board, Mark::X), "line {:?}", line);
            assert_eq!(check_winner(&board), Some(Mark::O));
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Mark::X, &[0, 1]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Mark::X, &[0, 1]);
        board.update_cell(2, Mark::O).unwrap();
        assert!(!holds_triple(&board, Mark::X));
        assert!(!holds_triple(&board, Mark::O));
    }
}
