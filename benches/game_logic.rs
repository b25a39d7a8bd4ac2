use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_stacker::core::{Board, BoardSnapshot, Grid, TickOutcome};
use tui_stacker::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut board = Board::new(12345);

    c.bench_function("board_tick", |b| {
        b.iter(|| {
            if board.tick() == TickOutcome::Halted {
                board = Board::new(12345);
            }
            black_box(board.take_events());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    grid.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut board = Board::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            black_box(board.spawn_piece());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut board = Board::new(12345);

    c.bench_function("move_right", |b| {
        b.iter(|| {
            if !board.move_right() {
                board.spawn_piece();
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut board = Board::new(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(board.apply_action(GameAction::Rotate));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let board = Board::new(12345);
    let mut snap = BoardSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            board.snapshot_into(&mut snap);
            black_box(snap.fingerprint());
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_move,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
