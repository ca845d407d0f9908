//! Benchmarks for move generation and validation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_arbiter::board::{Board, BoardBuilder, Color, PieceKind, Square};

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_move");
    let board = Board::new();

    group.bench_function("startpos_pawn_double_step", |b| {
        b.iter(|| board.is_legal(black_box(Square(1, 4)), black_box(Square(3, 4)), Color::White))
    });

    let open = BoardBuilder::new()
        .piece(Square(0, 0), Color::White, PieceKind::Queen)
        .build();
    group.bench_function("open_queen_far_corner", |b| {
        b.iter(|| open.is_legal(black_box(Square(0, 0)), black_box(Square(7, 7)), Color::White))
    });
    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    let start = Board::new();
    let mut middlegame = Board::new();
    for (from, to, color) in [
        (Square(1, 4), Square(3, 4), Color::White),
        (Square(6, 3), Square(4, 3), Color::Black),
        (Square(0, 6), Square(2, 5), Color::White),
        (Square(7, 1), Square(5, 2), Color::Black),
    ] {
        middlegame
            .apply_move(from, to, color)
            .expect("scripted opening move");
    }

    for (name, board) in [("startpos", &start), ("opening", &middlegame)] {
        group.bench_with_input(BenchmarkId::new("white", name), board, |b, board| {
            b.iter(|| board.legal_moves(black_box(Color::White)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_validate, bench_legal_moves);
criterion_main!(benches);
