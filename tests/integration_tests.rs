//! Session-level tests driven only through the public engine API

use blockfall::core::{GameConfig, GameState, SequenceSource, SessionState, StepOutcome};
use blockfall::types::{GameAction, PieceKind, GRID_HEIGHT};

fn scripted(kinds: &[PieceKind]) -> GameState<SequenceSource> {
    let source = SequenceSource::new(kinds.iter().copied()).expect("non-empty sequence");
    GameState::with_source(GameConfig::default(), source).expect("default config is valid")
}

#[test]
fn test_game_lifecycle() {
    let game = GameState::new(12345);
    assert_eq!(game.state(), SessionState::Running);
    assert_eq!((game.score(), game.level(), game.lines()), (0, 1, 0));
    assert_eq!(game.drop_interval_ms(), 500);
    assert_eq!(game.board().filled_count(), 0);
}

#[test]
fn test_same_seed_same_session() {
    let mut a = GameState::new(99);
    let mut b = GameState::new(99);
    for _ in 0..20 {
        assert_eq!(a.current().kind, b.current().kind);
        assert_eq!(a.next().kind, b.next().kind);
        a.hard_drop();
        b.hard_drop();
    }
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_gravity_carries_piece_to_floor() {
    let mut game = scripted(&[PieceKind::O]);

    let mut falls = 0;
    loop {
        match game.gravity_step() {
            StepOutcome::Fell => falls += 1,
            StepOutcome::Locked => break,
            StepOutcome::Halted => panic!("session ended"),
        }
    }
    assert_eq!(falls, GRID_HEIGHT as usize - 2);
    assert_eq!(game.board().filled_count(), 4);

    let event = game.take_last_event().expect("lock event");
    assert_eq!(event.kind, PieceKind::O);
    assert_eq!(event.lines_cleared, 0);
    assert!(!event.game_over);
    assert!(game.take_last_event().is_none());
}

#[test]
fn test_single_line_clear_scores_100() {
    // I left, I right, O in the middle completes the bottom row.
    let mut game = scripted(&[PieceKind::I, PieceKind::I, PieceKind::O]);

    for _ in 0..3 {
        game.apply_action(GameAction::MoveLeft);
    }
    game.apply_action(GameAction::HardDrop);

    for _ in 0..3 {
        game.apply_action(GameAction::MoveRight);
    }
    game.apply_action(GameAction::HardDrop);

    assert_eq!(game.current().kind, PieceKind::O);
    game.apply_action(GameAction::HardDrop);

    assert_eq!(game.lines(), 1);
    assert_eq!(game.score(), 100);
    // Only the O's top half survives, now on the floor.
    assert_eq!(game.board().filled_count(), 2);
    assert_eq!(game.board().get(4, 19), Some(Some(PieceKind::O)));
    assert_eq!(game.board().get(5, 19), Some(Some(PieceKind::O)));
}

#[test]
fn test_stacking_to_the_top_ends_the_session() {
    let mut game = scripted(&[PieceKind::O]);

    // Each O adds two rows in columns 4-5; the tenth fills rows 0-1.
    for _ in 0..9 {
        assert!(game.hard_drop());
        assert!(!game.game_over());
    }
    assert!(game.hard_drop());
    assert!(game.game_over());
    assert_eq!(game.state(), SessionState::GameOver);

    let event = game.take_last_event().expect("lock event");
    assert!(event.game_over);
    assert_eq!(event.hidden_cells, 0);
    assert_eq!(game.board().filled_count(), 40);
}

#[test]
fn test_intents_are_ignored_after_game_over() {
    let mut game = scripted(&[PieceKind::O]);
    while !game.game_over() {
        game.hard_drop();
    }
    let before = game.snapshot();

    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
        GameAction::HardDrop,
    ] {
        assert!(!game.apply_action(action));
    }
    assert_eq!(game.gravity_step(), StepOutcome::Halted);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_soft_drop_moves_one_row() {
    let mut game = scripted(&[PieceKind::T]);
    assert!(game.apply_action(GameAction::SoftDrop));
    assert_eq!(game.current().y, 1);
    assert_eq!(game.board().filled_count(), 0);
}

#[test]
fn test_ghost_matches_hard_drop() {
    let mut game = scripted(&[PieceKind::L, PieceKind::J]);
    game.apply_action(GameAction::MoveLeft);
    let ghost = game.ghost_y();
    let x = game.current().x;

    game.hard_drop();
    // L at (x, ghost): its third column bottom cell sits on the floor.
    assert_eq!(ghost, GRID_HEIGHT as i8 - 2);
    assert_eq!(game.board().get(x, ghost + 1), Some(Some(PieceKind::L)));
    assert_eq!(game.board().get(x + 2, ghost), Some(Some(PieceKind::L)));
}

#[test]
fn test_snapshot_reflects_session() {
    let mut game = scripted(&[PieceKind::S, PieceKind::Z]);
    game.gravity_step();
    let snap = game.snapshot();

    assert_eq!(snap.current, *game.current());
    assert_eq!(snap.next.kind, PieceKind::Z);
    assert_eq!(snap.ghost_y, game.ghost_y());
    assert!(snap.playable());
    assert_eq!(snap.drop_interval_ms, 500);
}
