//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::PlayerKind;

/// Strictly Tic-Tac-Toe - two players, one board, one log line per game
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe with scripted, console, and random players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game and append the result to the log
    Play {
        /// Settings file (TOML). Missing keys take defaults.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Game log file
        #[arg(long)]
        log_path: Option<PathBuf>,

        /// Seed for random move selection
        #[arg(long)]
        seed: Option<u64>,

        /// Scripted human moves, comma-separated (e.g. 0,4,1)
        #[arg(long, value_delimiter = ',')]
        moves: Option<Vec<usize>>,

        /// Read human moves from the console
        #[arg(short, long)]
        interactive: bool,

        /// Controller of X
        #[arg(short = 'x', long = "x")]
        x: Option<PlayerKind>,

        /// Controller of O
        #[arg(short = 'o', long = "o")]
        o: Option<PlayerKind>,
    },

    /// Print results of previous games
    History {
        /// Game log file
        #[arg(long, default_value = "game_log.txt")]
        log_path: PathBuf,
    },
}
