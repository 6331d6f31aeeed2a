//! Tests for the plain-text game log and full sessions against it.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;
use strictly_tictactoe::{
    Board, ConsoleMoves, GameLog, HumanPlayer, INVALID_MOVE, LogSink, Mark, MoveSource, Outcome,
    Overrides, PlayerKind, ScriptedMoves, Settings, SharedMoves, WELCOME, play, play_with_console,
    run_session, show_history,
};
use tempfile::TempDir;

fn setup_log() -> (TempDir, GameLog) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let log = GameLog::new(dir.path().join("game_log.txt"));
    (dir, log)
}

#[test]
fn test_save_then_load_round_trip() {
    let (_dir, mut log) = setup_log();
    log.log("Winner: X");
    log.log("Result: Draw");
    log.log("Winner: O");
    log.save().expect("Save failed");

    let fresh = GameLog::new(log.path());
    assert_eq!(
        fresh.load_lines().expect("Load failed"),
        ["Winner: X", "Result: Draw", "Winner: O"]
    );
    assert_eq!(
        fresh.load().expect("Load failed").as_deref(),
        Some("Winner: X\nResult: Draw\nWinner: O\n")
    );
}

#[test]
fn test_saves_append_across_sessions() {
    let (_dir, mut first) = setup_log();
    first.log("Winner: X");
    first.save().unwrap();

    let mut second = GameLog::new(first.path());
    second.log("Result: Draw");
    second.save().unwrap();

    assert_eq!(second.load_lines().unwrap(), ["Winner: X", "Result: Draw"]);
}

#[test]
fn test_show_history_without_file() {
    let (_dir, log) = setup_log();
    let mut screen: Vec<String> = Vec::new();
    show_history(&log, &mut screen).unwrap();
    assert_eq!(screen, ["No previous game log found."]);
}

#[test]
fn test_show_history_dumps_content() {
    let (_dir, mut log) = setup_log();
    log.log("Winner: O");
    log.save().unwrap();

    let mut screen: Vec<String> = Vec::new();
    show_history(&log, &mut screen).unwrap();
    assert_eq!(screen, ["Previous Game Logs:", "Winner: O\n"]);
}

#[test]
fn test_run_session_saves_result() {
    let (_dir, mut log) = setup_log();
    let mut x = HumanPlayer::new(Mark::X, ScriptedMoves::new(vec![0, 1, 2]), StdRng::seed_from_u64(1));
    let mut o = HumanPlayer::new(Mark::O, ScriptedMoves::new(vec![3, 4]), StdRng::seed_from_u64(2));
    let mut screen: Vec<String> = Vec::new();

    let outcome = run_session(&mut x, &mut o, &mut log, &mut screen).expect("Session failed");

    assert_eq!(outcome, Outcome::Winner(Mark::X));
    assert_eq!(screen[0], WELCOME);
    assert_eq!(screen[1], "No previous game log found.");
    assert!(log.lines().is_empty());
    assert_eq!(log.load_lines().unwrap(), ["Winner: X"]);
}

#[test]
fn test_run_session_reports_save_failure_after_game() {
    let dir = tempfile::tempdir().unwrap();
    let mut log = GameLog::new(dir.path().join("missing").join("game_log.txt"));
    let mut x = HumanPlayer::new(Mark::X, ScriptedMoves::new(vec![0, 1, 2]), StdRng::seed_from_u64(1));
    let mut o = HumanPlayer::new(Mark::O, ScriptedMoves::new(vec![3, 4]), StdRng::seed_from_u64(2));
    let mut screen: Vec<String> = Vec::new();

    let result = run_session(&mut x, &mut o, &mut log, &mut screen);

    assert!(result.is_err());
    // The game itself finished before the save failed.
    assert_eq!(screen.last().map(String::as_str), Some("X wins!"));
    assert_eq!(log.lines(), ["Winner: X"]);
}

#[test]
fn test_play_from_settings_with_default_script() {
    let (dir, _log) = setup_log();
    let path = dir.path().join("session.txt");
    let settings = Settings::default().apply_overrides(Overrides {
        log_path: Some(path.clone()),
        seed: Some(99),
        o: Some(PlayerKind::Computer),
        ..Overrides::default()
    });
    let mut screen: Vec<String> = Vec::new();

    let outcome = play(&settings, &mut screen).expect("Session failed");

    let lines = GameLog::new(&path).load_lines().unwrap();
    assert_eq!(lines, [outcome.record()]);
}

#[test]
fn test_two_sessions_accumulate() {
    let (dir, _log) = setup_log();
    let path = dir.path().join("twice.txt");
    let settings = Settings::default().apply_overrides(Overrides {
        log_path: Some(path.clone()),
        seed: Some(3),
        x: Some(PlayerKind::Computer),
        o: Some(PlayerKind::Computer),
        ..Overrides::default()
    });

    let first = play(&settings, &mut Vec::<String>::new()).unwrap();
    let mut screen: Vec<String> = Vec::new();
    let second = play(&settings, &mut screen).unwrap();

    assert_eq!(first, second);
    assert_eq!(screen[1], "Previous Game Logs:");
    assert_eq!(
        GameLog::new(&path).load_lines().unwrap(),
        [first.record(), second.record()]
    );
}

#[test]
fn test_interactive_session_with_two_humans() {
    let (dir, _log) = setup_log();
    let path = dir.path().join("console.txt");
    let settings = Settings::default().apply_overrides(Overrides {
        log_path: Some(path.clone()),
        seed: Some(8),
        interactive: true,
        o: Some(PlayerKind::Human),
        ..Overrides::default()
    });
    // X and O alternate on one input; "0" again is rejected and re-read.
    let console: SharedMoves = Rc::new(RefCell::new(ConsoleMoves::new(
        Cursor::new("0\n0\n3\n1\n4\n2\n"),
        Vec::new(),
    )));
    let mut screen: Vec<String> = Vec::new();

    let outcome = play_with_console(&settings, Some(console), &mut screen).expect("Session failed");

    assert_eq!(outcome, Outcome::Winner(Mark::X));
    assert_eq!(screen.iter().filter(|s| *s == INVALID_MOVE).count(), 1);
    assert_eq!(GameLog::new(&path).load_lines().unwrap(), ["Winner: X"]);
}

#[test]
fn test_console_ignored_unless_interactive() {
    let (dir, _log) = setup_log();
    let path = dir.path().join("scripted.txt");
    let settings = Settings::default().apply_overrides(Overrides {
        log_path: Some(path.clone()),
        seed: Some(8),
        moves: Some(vec![0, 1, 2]),
        o: Some(PlayerKind::Human),
        ..Overrides::default()
    });
    let console: SharedMoves = Rc::new(RefCell::new(ConsoleMoves::new(
        Cursor::new("3\n4\n5\n"),
        Vec::new(),
    )));
    let mut screen: Vec<String> = Vec::new();

    play_with_console(&settings, Some(Rc::clone(&console)), &mut screen)
        .expect("Session failed");

    // Nothing was read from the console.
    let mut unread = console;
    assert_eq!(unread.next_move(Mark::X, &Board::new()), Some(3));
    let lines = GameLog::new(&path).load_lines().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(screen[1], "No previous game log found.");
}
