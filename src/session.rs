//! One play session: show prior history, play a game, save the result.

use crate::config::{PlayerKind, Settings};
use crate::engine::{GameEngine, Outcome};
use crate::games::tictactoe::Mark;
use crate::history::GameLog;
use crate::players::{ComputerPlayer, ConsoleMoves, HumanPlayer, Player, ScriptedMoves, SharedMoves};
use crate::screen::Screen;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, instrument, warn};

/// Banner shown at the start of a session.
pub const WELCOME: &str = "Welcome to Tic-Tac-Toe!";

/// Random source for `mark`, derived from the session seed when present.
#[instrument]
pub fn rng_for(seed: Option<u64>, mark: Mark) -> StdRng {
    match seed {
        Some(seed) => {
            let offset = match mark {
                Mark::X => 0,
                Mark::O => 1,
            };
            StdRng::seed_from_u64(seed.wrapping_add(offset))
        }
        None => StdRng::from_os_rng(),
    }
}

/// Console source over standard input, locked once for the session.
pub fn stdin_moves() -> SharedMoves {
    Rc::new(RefCell::new(ConsoleMoves::new(
        std::io::stdin().lock(),
        std::io::stdout(),
    )))
}

/// Builds the player controlling `mark`.
///
/// Humans draw from `console` when one is given, so two humans share a
/// single input. Otherwise scripted moves go to the first human mark
/// only; a second scripted human starts with an empty script and plays
/// randomly.
#[instrument(skip(settings, console))]
pub fn build_player(
    mark: Mark,
    settings: &Settings,
    console: Option<&SharedMoves>,
) -> Box<dyn Player> {
    let kind = match mark {
        Mark::X => *settings.x(),
        Mark::O => *settings.o(),
    };
    let rng = rng_for(*settings.seed(), mark);

    match (kind, console) {
        (PlayerKind::Computer, _) => Box::new(
            ComputerPlayer::new(mark, rng).with_retry_limit(Some(*settings.computer_retry_limit())),
        ),
        (PlayerKind::Human, Some(console)) => Box::new(
            HumanPlayer::new(mark, Rc::clone(console), rng)
                .with_retry_limit(*settings.human_retry_limit()),
        ),
        (PlayerKind::Human, None) => {
            let owns_script = mark == Mark::X || *settings.x() != PlayerKind::Human;
            let moves = if owns_script {
                settings.moves().clone()
            } else {
                Vec::new()
            };
            Box::new(
                HumanPlayer::new(mark, ScriptedMoves::new(moves), rng)
                    .with_retry_limit(*settings.human_retry_limit()),
            )
        }
    }
}

/// Shows the content of the game log, or a note that none exists.
///
/// # Errors
///
/// Returns an error if the log exists but cannot be read.
#[instrument(skip(log, screen), fields(path = %log.path().display()))]
pub fn show_history(log: &GameLog, screen: &mut dyn Screen) -> Result<()> {
    match log.load()? {
        Some(content) => {
            screen.show("Previous Game Logs:");
            screen.show(&content);
        }
        None => screen.show("No previous game log found."),
    }
    Ok(())
}

/// Runs a full session with the given players.
///
/// A failure to read prior history is only reported. A failure to save
/// the result surfaces after the game has been played.
///
/// # Errors
///
/// Returns an error if the game aborts or the log cannot be saved.
#[instrument(skip_all, fields(path = %log.path().display()))]
pub fn run_session(
    first: &mut dyn Player,
    second: &mut dyn Player,
    log: &mut GameLog,
    screen: &mut dyn Screen,
) -> Result<Outcome> {
    screen.show(WELCOME);
    if let Err(e) = show_history(log, screen) {
        warn!(error = %e, "Could not show previous games");
    }

    let outcome = {
        let mut engine = GameEngine::new(&mut *first, &mut *second, &mut *log, &mut *screen)?;
        engine.play()?
    };

    log.save().context("Failed to save game log")?;
    info!(%outcome, "Session complete");
    Ok(outcome)
}

/// Builds players from `settings` and runs a session against its log file.
///
/// Interactive humans read from standard input.
///
/// # Errors
///
/// See [`run_session`].
#[instrument(skip_all)]
pub fn play(settings: &Settings, screen: &mut dyn Screen) -> Result<Outcome> {
    let console = (*settings.interactive()).then(stdin_moves);
    play_with_console(settings, console, screen)
}

/// Like [`play`], with interactive humans reading from `console`.
///
/// `console` is ignored unless `settings` asks for interactive play.
///
/// # Errors
///
/// See [`run_session`].
#[instrument(skip_all)]
pub fn play_with_console(
    settings: &Settings,
    console: Option<SharedMoves>,
    screen: &mut dyn Screen,
) -> Result<Outcome> {
    let console = console.filter(|_| *settings.interactive());
    let mut first = build_player(Mark::X, settings, console.as_ref());
    let mut second = build_player(Mark::O, settings, console.as_ref());
    let mut log = GameLog::new(settings.log_path().clone());
    run_session(first.as_mut(), second.as_mut(), &mut log, screen)
}
