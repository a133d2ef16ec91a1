use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{map_tiles, merge_line, move_board, Board, GameState};
use tui_2048::types::Direction;

fn midgame_board() -> Board {
    Board::from_rows([[2, 2, 4, 4], [8, 0, 8, 0], [0, 2, 0, 2], [4, 4, 4, 4]])
}

fn bench_merge_line(c: &mut Criterion) {
    c.bench_function("merge_line", |b| {
        b.iter(|| merge_line(black_box([2, 2, 4, 4])))
    });
}

fn bench_move_board(c: &mut Criterion) {
    let board = midgame_board();
    for dir in Direction::ALL {
        c.bench_function(&format!("move_board_{}", dir.as_str()), |b| {
            b.iter(|| move_board(black_box(&board), dir))
        });
    }
}

fn bench_can_move(c: &mut Criterion) {
    // Terminal board: the predicate has to scan every adjacency.
    let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    c.bench_function("can_move_terminal", |b| {
        b.iter(|| black_box(&board).can_move())
    });
}

fn bench_map_tiles(c: &mut Criterion) {
    let before = midgame_board();
    let after = move_board(&before, Direction::Left).board;
    c.bench_function("map_tiles", |b| {
        b.iter(|| map_tiles(black_box(&before), black_box(&after)))
    });
}

fn bench_move_undo_churn(c: &mut Criterion) {
    c.bench_function("move_undo_churn", |b| {
        let mut game = GameState::new(12345);
        b.iter(|| {
            for dir in Direction::ALL {
                if game.try_move(dir).is_some() {
                    game.undo();
                }
            }
        })
    });
}

criterion_group!(
    benches,
    bench_merge_line,
    bench_move_board,
    bench_can_move,
    bench_map_tiles,
    bench_move_undo_churn
);
criterion_main!(benches);
