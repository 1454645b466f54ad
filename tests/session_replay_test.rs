//! Tests for sessions backed by a log file and for replaying them.

use std::path::Path;
use strictly_sos::{
    Color, GameConfig, GameRecorder, HEADER_LINES, Letter, Mode, MoveError, PlayerKind,
    ReplayDriver, ReplayError, Session, ValidConfig,
};
use tempfile::TempDir;

fn config(log: &Path, mode: Mode, blue: PlayerKind, red: PlayerKind, seed: u64) -> ValidConfig {
    GameConfig::default()
        .with_board_size(5)
        .with_mode(Some(mode))
        .with_blue(blue)
        .with_red(red)
        .with_log_path(Some(log.to_path_buf()))
        .with_seed(Some(seed))
        .validate()
        .unwrap()
}

#[test]
fn test_log_file_layout() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("game_record.txt");
    let mut session = Session::start(&config(
        &log,
        Mode::Simple,
        PlayerKind::Human,
        PlayerKind::Computer,
        1,
    ))
    .unwrap();
    let turn = session.submit(0, 0, Letter::S).unwrap();

    let text = std::fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        &lines[..HEADER_LINES],
        &["BoardSize,5", "GameMode,Simple", "Blue,HUMAN", "Red,COMPUTER", ""]
    );
    assert_eq!(lines[HEADER_LINES], "Blue,S,0,0");
    assert_eq!(lines.len(), HEADER_LINES + 1 + turn.computer.len());
}

#[test]
fn test_new_session_truncates_log() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("game_record.txt");
    let valid = config(&log, Mode::General, PlayerKind::Human, PlayerKind::Human, 1);

    let mut session = Session::start(&valid).unwrap();
    session.submit(1, 1, Letter::O).unwrap();
    session.submit(1, 2, Letter::S).unwrap();
    drop(session);

    let session = Session::start(&valid).unwrap();
    assert_eq!(session.load_session().unwrap().len(), HEADER_LINES);
}

#[test]
fn test_unwritable_log_does_not_stop_play() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("missing").join("game_record.txt");
    let valid = config(&log, Mode::General, PlayerKind::Human, PlayerKind::Human, 1);

    let mut session = Session::start(&valid).unwrap();
    session.submit(0, 0, Letter::S).unwrap();
    session.submit(0, 1, Letter::O).unwrap();
    assert_eq!(session.game().history().len(), 2);
    assert!(session.load_session().is_err());
    assert!(matches!(session.replay(), Err(ReplayError::Log(_))));
}

#[test]
fn test_replay_reproduces_live_game() {
    for (seed, mode) in [(3, Mode::General), (4, Mode::Simple), (5, Mode::General)] {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("game_record.txt");
        let mut session = Session::start(&config(
            &log,
            mode,
            PlayerKind::Computer,
            PlayerKind::Computer,
            seed,
        ))
        .unwrap();
        session.advance().unwrap();
        assert!(session.game().outcome().is_some());

        let mut driver = ReplayDriver::load(&GameRecorder::to_file(&log)).unwrap();
        driver.run().unwrap();
        assert_eq!(driver.game().scores(), session.game().scores());
        assert_eq!(driver.game().outcome(), session.game().outcome());
        assert_eq!(driver.game().board(), session.game().board());
        assert_eq!(driver.game().history(), session.game().history());

        let summary = driver.summary();
        assert_eq!(summary.moves_replayed, session.game().history().len());
        assert_eq!(summary.mode, mode);
    }
}

#[test]
fn test_replay_does_not_write_log() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("game_record.txt");
    let mut session = Session::start(&config(
        &log,
        Mode::General,
        PlayerKind::Human,
        PlayerKind::Computer,
        8,
    ))
    .unwrap();
    session.submit(2, 2, Letter::S).unwrap();
    let before = std::fs::read_to_string(&log).unwrap();

    session.replay().unwrap().run().unwrap();
    assert_eq!(std::fs::read_to_string(&log).unwrap(), before);
}

#[test]
fn test_replay_rejects_occupied_cell() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("game_record.txt");
    std::fs::write(
        &log,
        "BoardSize,3\nGameMode,General\nBlue,HUMAN\nRed,HUMAN\n\nBlue,S,1,1\nRed,O,1,1\n",
    )
    .unwrap();

    let mut driver = ReplayDriver::load(&GameRecorder::to_file(&log)).unwrap();
    assert!(driver.step().unwrap().is_ok());
    let err = driver.step().unwrap().unwrap_err();
    assert!(matches!(
        err,
        ReplayError::Move {
            line_number: 7,
            source: MoveError::InvalidMove { .. }
        }
    ));
    assert_eq!(driver.game().to_move(), Color::Red);
}

#[test]
fn test_replay_rejects_bad_board_size() {
    let lines: Vec<String> = ["BoardSize,12", "GameMode,Simple", "Blue,HUMAN", "Red,HUMAN", ""]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert!(matches!(
        ReplayDriver::from_lines(&lines),
        Err(ReplayError::BoardSize(_))
    ));
}

#[test]
fn test_replay_reproduces_simple_draw() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("game_record.txt");
    let mut session = Session::start(&config(
        &log,
        Mode::Simple,
        PlayerKind::Human,
        PlayerKind::Human,
        1,
    ))
    .unwrap();
    for row in 0..5 {
        for col in 0..5 {
            session.submit(row, col, Letter::O).unwrap();
        }
    }
    assert!(session.game().outcome().is_some_and(|o| o.is_draw()));

    let mut driver = session.replay().unwrap();
    driver.run().unwrap();
    assert_eq!(driver.game().outcome(), session.game().outcome());
    assert_eq!(driver.game().scores(), session.game().scores());
}
