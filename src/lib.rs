//! Strictly Tic-Tac-Toe library - game logic, players, and result log
//!
//! # Architecture
//!
//! - **Games**: board, marks, and win/draw rules
//! - **Players**: scripted or console humans and a random computer
//! - **Engine**: the turn loop, reporting one result line per game
//! - **History**: the log sink and its plain-text file
//!
//! # Example
//!
//! ```no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use strictly_tictactoe::{ComputerPlayer, GameEngine, HumanPlayer, Mark, NullScreen, ScriptedMoves};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut x = HumanPlayer::new(Mark::X, ScriptedMoves::new(vec![4, 0]), StdRng::seed_from_u64(1));
//! let mut o = ComputerPlayer::new(Mark::O, StdRng::seed_from_u64(2));
//! let mut log: Vec<String> = Vec::new();
//! let mut screen = NullScreen;
//! let mut engine = GameEngine::new(&mut x, &mut o, &mut log, &mut screen)?;
//! let outcome = engine.play()?;
//! println!("{}", outcome.record());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod engine;
mod games;
mod history;
mod players;
mod screen;
mod session;

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, CELLS, GameStatus, Mark, Move, MoveError, Square, random_empty_cell, rules,
};

// Crate-level exports - Players
pub use players::{
    ComputerPlayer, ConsoleMoves, DEFAULT_COMPUTER_RETRY_LIMIT, HumanPlayer, MoveSource, Player,
    ScriptedMoves, SharedMoves,
};

// Crate-level exports - Engine
pub use engine::{GameEngine, GameError, INVALID_MOVE, Outcome};

// Crate-level exports - History
pub use history::{GameLog, LogError, LogSink};

// Crate-level exports - Display
pub use screen::{ConsoleScreen, NullScreen, Screen};

// Crate-level exports - Configuration
pub use config::{ConfigError, Overrides, PlayerKind, Settings};

// Crate-level exports - Session
pub use session::{
    WELCOME, build_player, play, play_with_console, rng_for, run_session, show_history, stdin_moves,
};
