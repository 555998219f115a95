//! Benchmarks for chess engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_core::board::search::best_successor;
use chess_core::board::{CastlingRights, PositionBuilder};
use chess_core::{perft, AttackTables, Position};

const KIWIPETE: [&str; 8] = [
    "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
    "R...K..R",
];

fn kiwipete(tables: &AttackTables) -> Position {
    PositionBuilder::diagram(&KIWIPETE)
        .unwrap()
        .castling(CastlingRights::all())
        .build(tables)
        .unwrap()
}

fn bench_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("attack_tables");
    group.sample_size(10);
    group.bench_function("build", |b| {
        b.iter(|| AttackTables::with_seed(black_box(0x5EED)).unwrap())
    });
    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let tables = AttackTables::with_seed(0x5EED).unwrap();
    let mut group = c.benchmark_group("perft");

    let start = Position::starting();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| perft(&start, &tables, black_box(depth)))
        });
    }

    let kiwipete = kiwipete(&tables);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| perft(&kiwipete, &tables, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let tables = AttackTables::with_seed(0x5EED).unwrap();
    let mut group = c.benchmark_group("movegen");

    let start = Position::starting();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(start.legal_successors(&tables)))
    });

    let kiwipete = kiwipete(&tables);
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(kiwipete.legal_successors(&tables)))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let tables = AttackTables::with_seed(0x5EED).unwrap();
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let start = Position::starting();
    for depth in 2..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| best_successor(&start, &tables, black_box(depth)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tables, bench_perft, bench_movegen, bench_search);
criterion_main!(benches);
