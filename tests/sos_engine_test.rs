//! Tests for the SOS engine: scoring, mode rules and turn handling.

use std::collections::HashSet;
use strictly_sos::{
    Color, Coord, Direction, Game, Letter, Mode, MoveError, Outcome, PlayerKind, ScoreEvent,
    Strategist, Transition, Window, count_sos, find_completion,
};

fn human_game(size: usize, mode: Mode) -> Game {
    Game::new(size, mode, PlayerKind::Human, PlayerKind::Human).unwrap()
}

#[test]
fn test_simple_first_sos_wins() {
    let mut game = human_game(3, Mode::Simple);
    game.play(0, 0, Letter::S).unwrap();
    game.play(0, 1, Letter::O).unwrap();
    let report = game.play(0, 2, Letter::S).unwrap();

    assert_eq!(report.mov.color, Color::Blue);
    assert_eq!(report.scored.len(), 1);
    assert_eq!(report.transition, Transition::GameOver(Outcome::Winner(Color::Blue)));
    assert_eq!(game.outcome(), Some(Outcome::Winner(Color::Blue)));
    assert_eq!(game.outcome().and_then(|o| o.winner()), Some(Color::Blue));
    assert_eq!(game.scores().blue, 1);
}

#[test]
fn test_simple_full_board_without_sos_is_draw() {
    let mut game = human_game(3, Mode::Simple);
    for row in 0..3 {
        for col in 0..3 {
            assert!(game.is_in_progress());
            game.play(row, col, Letter::O).unwrap();
        }
    }
    let outcome = game.outcome().unwrap();
    assert!(outcome.is_draw());
    assert_eq!(outcome.winner(), None);
    assert_eq!(game.scores().blue + game.scores().red, 0);
}

#[test]
fn test_anti_diagonal_credit_starts_top_right() {
    let mut game = human_game(3, Mode::General);
    game.play(0, 2, Letter::S).unwrap(); // blue
    game.play(1, 1, Letter::O).unwrap(); // red
    game.play(0, 0, Letter::O).unwrap(); // blue
    let report = game.play(2, 0, Letter::S).unwrap(); // red

    assert_eq!(
        report.scored,
        vec![ScoreEvent {
            window: Window {
                start: Coord::new(0, 2),
                end: Coord::new(2, 0),
            },
            color: Color::Red,
        }]
    );
    assert_eq!(game.scores().red, 1);
    assert_eq!(game.to_move(), Color::Red);
}

#[test]
fn test_general_full_board_without_sos_is_draw() {
    let mut game = human_game(3, Mode::General);
    let mut last = None;
    for row in 0..3 {
        for col in 0..3 {
            last = Some(game.play(row, col, Letter::O).unwrap());
        }
    }
    assert!(game.is_full());
    assert_eq!(
        last.map(|r| r.transition),
        Some(Transition::GameOver(Outcome::Draw))
    );
    assert_eq!(game.scores().blue, 0);
    assert_eq!(game.scores().red, 0);
}

#[test]
fn test_diagonal_only_credit() {
    let mut game = human_game(3, Mode::General);
    game.play(0, 0, Letter::S).unwrap();
    game.play(1, 1, Letter::O).unwrap();
    let report = game.play(2, 2, Letter::S).unwrap();

    assert_eq!(report.scored.len(), 1);
    assert_eq!(report.transition, Transition::Continue);
    assert_eq!(game.scores().blue, 1);
    assert_eq!(game.to_move(), Color::Blue, "scorer keeps the turn");
}

#[test]
fn test_one_move_can_score_four_windows() {
    let mut game = human_game(3, Mode::General);
    for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)] {
        game.play(row, col, Letter::S).unwrap();
    }
    let report = game.play(1, 1, Letter::O).unwrap();
    assert_eq!(report.scored.len(), 4);
    assert!(game.is_full());
    assert!(report.transition.is_game_over());
}

#[test]
fn test_invalid_moves_change_nothing() {
    let mut game = human_game(4, Mode::General);
    game.play(1, 1, Letter::S).unwrap();
    let before = game.clone();

    for (row, col) in [(1, 1), (4, 0), (0, 4), (9, 9)] {
        let err = game.play(row, col, Letter::O).unwrap_err();
        assert!(matches!(err, MoveError::InvalidMove { .. }), "{:?}", err);
        assert!(err.is_retryable());
    }
    assert_eq!(game.board(), before.board());
    assert_eq!(game.scores(), before.scores());
    assert_eq!(game.to_move(), before.to_move());
    assert_eq!(game.history(), before.history());
}

#[test]
fn test_moves_after_game_over_rejected() {
    let mut game = human_game(3, Mode::Simple);
    game.play(0, 0, Letter::S).unwrap();
    game.play(0, 1, Letter::O).unwrap();
    game.play(0, 2, Letter::S).unwrap();
    assert_eq!(
        game.play(2, 2, Letter::S).unwrap_err(),
        MoveError::GameNotInProgress
    );
}

#[test]
fn test_score_equals_distinct_windows() {
    for seed in 0..20 {
        let mut game = human_game(6, Mode::General);
        let mut strategist = Strategist::seeded(seed);
        let mut credited = HashSet::new();

        while game.is_in_progress() {
            let s = strategist.choose_move(game.board()).unwrap();
            let report = game.play(s.row, s.col, s.letter).unwrap();
            for event in report.scored {
                assert!(credited.insert(event.window), "window credited twice");
            }
        }

        let scores = game.scores();
        assert_eq!((scores.blue + scores.red) as usize, credited.len());
        assert_eq!(credited.len(), count_sos(game.board()));
    }
}

#[test]
fn test_strategist_follows_scan_priority() {
    let order = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::PrimaryDiagonal,
        Direction::SecondaryDiagonal,
    ];
    for seed in 0..10 {
        let mut game = human_game(5, Mode::General);
        let mut strategist = Strategist::seeded(seed);

        while game.is_in_progress() {
            let expected = order
                .iter()
                .find_map(|&direction| find_completion(game.board(), direction));
            let choice = strategist.choose_move(game.board()).unwrap();
            assert!(game.board().is_empty(choice.row, choice.col));
            if let Some(expected) = expected {
                assert_eq!(choice, expected);
            }
            game.play(choice.row, choice.col, choice.letter).unwrap();
        }
    }
}

#[test]
fn test_general_winner_has_higher_score() {
    for seed in 0..10 {
        let mut game = human_game(4, Mode::General);
        let mut strategist = Strategist::seeded(seed);
        while game.is_in_progress() {
            let s = strategist.choose_move(game.board()).unwrap();
            game.play(s.row, s.col, s.letter).unwrap();
        }
        assert!(game.is_full());
        let scores = game.scores();
        let expected = match scores.blue.cmp(&scores.red) {
            std::cmp::Ordering::Greater => Outcome::Winner(Color::Blue),
            std::cmp::Ordering::Less => Outcome::Winner(Color::Red),
            std::cmp::Ordering::Equal => Outcome::Draw,
        };
        assert_eq!(game.outcome(), Some(expected));
    }
}
