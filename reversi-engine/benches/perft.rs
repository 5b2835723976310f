use criterion::*;

use reversi_engine::test_utils::run_perft;
use reversi_engine::{Board, Side};

fn criterion_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(50);

    for depth in 1..6 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| run_perft(black_box(depth)))
        });
    }

    group.finish();
}

fn criterion_legal_moves(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("legal_moves", |b| {
        b.iter(|| black_box(board).legal_moves(black_box(Side::Dark)))
    });
}

criterion_group!(perft, criterion_perft, criterion_legal_moves);
criterion_main!(perft);
