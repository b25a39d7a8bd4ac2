//! Board state machine tests - gravity, locking, rejection and game over

use tui_stacker::core::{get_shape, Board, GameStatus, Grid, TickOutcome};
use tui_stacker::types::{BoardEvent, GameAction, PieceKind, BOARD_WIDTH};

fn board_with(kind: PieceKind) -> Board {
    let mut board = Board::new(1);
    assert!(board.spawn_kind(kind));
    board.take_events();
    board
}

#[test]
fn test_o_piece_falls_and_locks_on_floor() {
    let mut board = board_with(PieceKind::O);
    assert_eq!((board.active().x, board.active().y), (3, 0));

    // The O is two rows tall: 18 free falls take it from row 0 to row 18.
    for expected_y in 1..=18 {
        assert_eq!(board.tick(), TickOutcome::Fell);
        assert_eq!(board.active().y, expected_y);
    }
    assert_eq!(board.tick(), TickOutcome::Locked);

    for y in 18..20 {
        for x in 3..5 {
            assert_eq!(board.grid().get(x, y), Some(Some(PieceKind::O)));
        }
    }
    let filled = board.grid().cells().iter().filter(|c| c.is_some()).count();
    assert_eq!(filled, 4);

    // A fresh piece replaced it at spawn.
    assert_eq!((board.active().x, board.active().y), (3, 0));
    assert_eq!(board.status(), GameStatus::Running);

    let events = board.take_events();
    assert_eq!(
        events[0],
        BoardEvent::Locked {
            kind: PieceKind::O,
            x: 3,
            y: 18,
            lines_cleared: 0,
        }
    );
    assert!(matches!(events[1], BoardEvent::Spawned { .. }));
}

#[test]
fn test_pieces_stack_on_settled_cells() {
    let mut board = board_with(PieceKind::O);
    while board.tick() == TickOutcome::Fell {}

    assert!(board.spawn_kind(PieceKind::O));
    let mut falls = 0;
    while board.tick() == TickOutcome::Fell {
        falls += 1;
    }
    assert_eq!(falls, 16);
    assert_eq!(board.grid().get(3, 16), Some(Some(PieceKind::O)));
    assert_eq!(board.grid().get(4, 17), Some(Some(PieceKind::O)));
}

#[test]
fn test_lock_clears_two_rows() {
    let mut board = board_with(PieceKind::O);
    for y in 18..20 {
        for x in (0..3).chain(5..BOARD_WIDTH as i8) {
            board.grid_mut().set(x, y, Some(PieceKind::J));
        }
    }
    board.grid_mut().set(9, 17, Some(PieceKind::T));

    while board.tick() == TickOutcome::Fell {}

    // Only the marker survives, moved down by two rows.
    assert_eq!(board.grid().get(9, 19), Some(Some(PieceKind::T)));
    let filled = board.grid().cells().iter().filter(|c| c.is_some()).count();
    assert_eq!(filled, 1);

    let events = board.take_events();
    assert!(events.iter().any(|e| matches!(
        e,
        BoardEvent::Locked {
            lines_cleared: 2,
            ..
        }
    )));
}

#[test]
fn test_rejected_moves_leave_piece_unchanged() {
    let mut board = board_with(PieceKind::T);
    board.grid_mut().set(2, 1, Some(PieceKind::Z));

    let before = *board.active();
    assert!(!board.move_left());
    assert_eq!(*board.active(), before);

    // Block the cell under the T's right foot.
    board.grid_mut().set(5, 2, Some(PieceKind::Z));
    assert!(!board.soft_drop());
    assert_eq!(*board.active(), before);

    assert!(board.move_right());
    assert_eq!(board.active().x, 4);
}

#[test]
fn test_rotation_rejected_at_right_wall() {
    let mut board = board_with(PieceKind::I);
    assert!(board.rotate());
    while board.move_right() {}
    assert_eq!(board.active().x, 9);

    // Horizontal would need columns 9..=12.
    let before = *board.active();
    assert!(!board.rotate());
    assert_eq!(*board.active(), before);
    assert_eq!(board.active().shape, get_shape(PieceKind::I).rotated_cw());
}

#[test]
fn test_rotation_rejected_by_settled_cell() {
    let mut board = board_with(PieceKind::T);
    // Clockwise T at (3, 0) covers (3, 0), (3, 1), (4, 1) and (3, 2).
    board.grid_mut().set(3, 2, Some(PieceKind::S));

    let before = *board.active();
    assert!(!board.apply_action(GameAction::Rotate));
    assert_eq!(*board.active(), before);

    board.grid_mut().set(3, 2, None);
    assert!(board.apply_action(GameAction::Rotate));
    let cells: Vec<_> = board.active().cells().collect();
    assert_eq!(cells, vec![(3, 0), (3, 1), (4, 1), (3, 2)]);
}

#[test]
fn test_no_wall_kick_near_left_wall() {
    let mut board = board_with(PieceKind::I);
    assert!(board.rotate());
    while board.move_left() {}
    assert_eq!(board.active().x, 0);

    // Horizontal fits at x = 0 without any offset.
    assert!(board.rotate());
    assert_eq!(board.active().x, 0);
    let cells: Vec<_> = board.active().cells().collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
}

#[test]
fn test_blocked_spawn_ends_game() {
    let mut board = board_with(PieceKind::O);
    for x in 3..7 {
        board.grid_mut().set(x, 0, Some(PieceKind::L));
    }
    let spawned_before = board.pieces_spawned();

    assert!(!board.spawn_kind(PieceKind::I));
    assert!(board.is_game_over());
    assert_eq!(board.pieces_spawned(), spawned_before + 1);
    assert_eq!(
        board.take_events().as_slice(),
        &[BoardEvent::GameOver {
            piece_id: spawned_before + 1
        }]
    );
}

#[test]
fn test_game_over_freezes_board() {
    let mut board = board_with(PieceKind::O);
    for x in 0..BOARD_WIDTH as i8 {
        board.grid_mut().set(x, 0, Some(PieceKind::L));
    }
    assert!(!board.spawn_piece());
    assert!(board.is_game_over());

    let grid: Grid = board.grid().clone();
    let active = *board.active();
    let spawned = board.pieces_spawned();

    for _ in 0..5 {
        assert_eq!(board.tick(), TickOutcome::Halted);
    }
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
    ] {
        assert!(!board.apply_action(action));
    }
    assert!(!board.spawn_piece());
    assert!(!board.spawn_kind(PieceKind::T));
    assert!(board.clear_lines().is_empty());

    assert_eq!(board.grid(), &grid);
    assert_eq!(*board.active(), active);
    assert_eq!(board.pieces_spawned(), spawned);
    assert_eq!(board.status(), GameStatus::GameOver);
}

#[test]
fn test_topping_out_through_play() {
    let mut board = Board::new(2024);
    let outcome = (0..10_000)
        .map(|_| board.tick())
        .find(|o| !matches!(o, TickOutcome::Fell | TickOutcome::Locked));
    // Nobody steers, so the spawn columns fill up.
    assert_eq!(outcome, Some(TickOutcome::ToppedOut));
    assert!(board.is_game_over());
    assert_eq!(board.tick(), TickOutcome::Halted);
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
    ];

    let mut a = Board::new(77);
    let mut b = Board::new(77);
    for step in 0..400 {
        let action = script[step % script.len()];
        assert_eq!(a.apply_action(action), b.apply_action(action));
        assert_eq!(a.tick(), b.tick());
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn test_clear_lines_between_ticks() {
    let mut board = board_with(PieceKind::I);
    for x in 0..BOARD_WIDTH as i8 {
        board.grid_mut().set(x, 19, Some(PieceKind::S));
    }
    board.grid_mut().set(0, 18, Some(PieceKind::Z));

    let cleared = board.clear_lines();
    assert_eq!(cleared.as_slice(), &[19]);
    assert_eq!(board.grid().get(0, 19), Some(Some(PieceKind::Z)));
    assert!(board.clear_lines().is_empty());
}

#[test]
fn test_seeded_grid_completes_rows_on_lock() {
    let grid = Grid::from_rows(&["O.........", "OOO..OOOOO", "OOO..OOOOO"]);
    let mut board = Board::with_grid(grid, 11);
    assert!(board.spawn_kind(PieceKind::O));

    // The O drops into the gap at columns 3..=4 and completes both rows.
    while board.tick() == TickOutcome::Fell {}

    assert_eq!(board.grid(), &Grid::from_rows(&["O........."]));
}
