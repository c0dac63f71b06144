use criterion::{black_box, criterion_group, criterion_main, Criterion};
use duel_tetris::core::{Board, Grid, Versus};
use duel_tetris::types::GameAction;

fn bench_soft_drop(c: &mut Criterion) {
    let mut board = Board::new(10, 20, 1, 12345);
    board.reset();

    c.bench_function("soft_drop_or_lock", |b| {
        b.iter(|| {
            if board.game_over() {
                board.reset();
            }
            black_box(board.soft_drop_or_lock());
        })
    });
}

fn bench_hard_drop_and_spawn(c: &mut Criterion) {
    let mut board = Board::new(10, 20, 1, 12345);
    board.reset();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if board.game_over() {
                board.reset();
            }
            board.hard_drop();
        })
    });
}

fn bench_clear_four_lines(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new(10, 20);
            for y in 16..20 {
                for x in 0..10 {
                    grid.set(x, y, 1);
                }
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_ghost_piece(c: &mut Criterion) {
    let mut board = Board::new(10, 20, 1, 12345);
    board.reset();

    c.bench_function("ghost_piece", |b| {
        b.iter(|| {
            black_box(board.ghost_piece());
        })
    });
}

fn bench_versus_round(c: &mut Criterion) {
    c.bench_function("versus_two_hard_drops", |b| {
        b.iter(|| {
            let mut versus = Versus::new(10, 20, [12345, 54321]);
            versus.start();
            versus.apply(0, GameAction::HardDrop);
            versus.apply(1, GameAction::HardDrop);
            black_box(versus.is_over());
        })
    });
}

criterion_group!(
    benches,
    bench_soft_drop,
    bench_hard_drop_and_spawn,
    bench_clear_four_lines,
    bench_ghost_piece,
    bench_versus_round
);
criterion_main!(benches);
