//! Strictly Tic-Tac-Toe - CLI
//!
//! Plays one game per invocation and keeps an append-only result log.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_tictactoe::{ConsoleScreen, GameLog, Overrides, Settings, play, show_history};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            log_path,
            seed,
            moves,
            interactive,
            x,
            o,
        } => {
            let settings = match config {
                Some(path) => Settings::from_file(path)?,
                None => Settings::default(),
            }
            .apply_overrides(Overrides {
                log_path,
                seed,
                moves,
                interactive,
                x,
                o,
            });
            info!(?settings, "Starting session");

            let mut screen = ConsoleScreen;
            if let Err(e) = play(&settings, &mut screen) {
                error!(error = %e, "Session failed");
                return Err(e);
            }
            Ok(())
        }
        Command::History { log_path } => {
            let log = GameLog::new(log_path);
            show_history(&log, &mut ConsoleScreen)
        }
    }
}
