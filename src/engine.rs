//! Turn loop driving a game between two players.

use crate::games::tictactoe::{Board, GameStatus, Mark, Move};
use crate::history::LogSink;
use crate::players::Player;
use crate::screen::Screen;
use derive_more::{Display, Error};
use tracing::{debug, info, instrument, warn};

/// How a completed game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Outcome {
    /// A mark completed a triple.
    #[display("{} wins!", _0)]
    Winner(Mark),
    /// The board filled without a triple.
    #[display("It's a draw!")]
    Draw,
}

impl Outcome {
    /// The line written to the game log.
    pub fn record(self) -> String {
        match self {
            Outcome::Winner(mark) => format!("Winner: {}", mark),
            Outcome::Draw => "Result: Draw".to_string(),
        }
    }
}

/// Failure that stops the turn loop.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A player exceeded its rejected-move limit.
    #[display("{} made {} invalid moves in a row", mark, attempts)]
    Strategy {
        /// Mark of the offending player.
        mark: Mark,
        /// Consecutive rejected moves.
        attempts: u32,
    },
    /// The game already reached a terminal state.
    #[display("Game is already over")]
    GameOver,
    /// Both players carry the same mark.
    #[display("Both players play {}", _0)]
    SameMark(#[error(not(source))] Mark),
    /// A player could not produce a move.
    #[display("Player failed to move: {}", _0)]
    Player(#[error(not(source))] String),
}

/// Message shown when a move is rejected.
pub const INVALID_MOVE: &str = "Invalid move. Try again.";

/// Runs one game between two players.
///
/// The engine owns the board; players, the log sink, and the screen are
/// borrowed from the caller. `first` moves first.
pub struct GameEngine<'a> {
    board: Board,
    status: GameStatus,
    history: Vec<Move>,
    first: &'a mut dyn Player,
    second: &'a mut dyn Player,
    log: &'a mut dyn LogSink,
    screen: &'a mut dyn Screen,
}

impl<'a> GameEngine<'a> {
    /// Creates an engine with an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SameMark`] if both players carry the same mark.
    pub fn new(
        first: &'a mut dyn Player,
        second: &'a mut dyn Player,
        log: &'a mut dyn LogSink,
        screen: &'a mut dyn Screen,
    ) -> Result<Self, GameError> {
        if first.mark() == second.mark() {
            return Err(GameError::SameMark(first.mark()));
        }

        Ok(Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            history: Vec::new(),
            first,
            second,
            log,
            screen,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of accepted moves.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Plays until a win or a draw and logs the result line exactly once.
    ///
    /// Rejected moves are reported and the same player is asked again.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if called after the game ended.
    /// - [`GameError::Strategy`] if a player exceeds its retry limit.
    /// - [`GameError::Player`] if a player fails to produce a move.
    #[instrument(skip(self))]
    pub fn play(&mut self) -> Result<Outcome, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        info!("Starting game");
        let mut first_to_move = true;
        let mut rejected = 0u32;

        loop {
            self.screen.show(&self.board.render());

            let player = if first_to_move {
                &mut *self.first
            } else {
                &mut *self.second
            };
            let mark = player.mark();

            debug!(player = %player.name(), "Waiting for move");
            let index = player
                .get_move(&self.board)
                .map_err(|e| GameError::Player(e.to_string()))?;

            if let Err(e) = self.board.update_cell(index, mark) {
                warn!(%mark, error = %e, "Move rejected");
                self.screen.show(INVALID_MOVE);
                rejected += 1;
                if player.retry_limit().is_some_and(|limit| rejected > limit) {
                    return Err(GameError::Strategy {
                        mark,
                        attempts: rejected,
                    });
                }
                continue;
            }

            rejected = 0;
            let action = Move::new(mark, index);
            debug!(%action, ply = self.history.len() + 1, "Move applied");
            self.history.push(action);

            let outcome = if self.board.check_winner(mark) {
                Outcome::Winner(mark)
            } else if self.board.is_full() {
                Outcome::Draw
            } else {
                first_to_move = !first_to_move;
                continue;
            };

            return Ok(self.finish(outcome));
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.status = match outcome {
            Outcome::Winner(mark) => GameStatus::Won(mark),
            Outcome::Draw => GameStatus::Draw,
        };
        self.screen.show(&self.board.render());
        self.screen.show(&outcome.to_string());
        self.log.log(&outcome.record());
        info!(%outcome, ply = self.history.len(), "Game over");
        outcome
    }
}
