//! Engine throughput: move generation, move application, perft.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use oware::{perft, Oware, RulesEngine};

fn bench_engine(c: &mut Criterion) {
    let game = Oware::standard();
    let start = game.initial_state();
    let midgame = [2, 0, 4].iter().fold(start.clone(), |state, &choice| {
        let moves = game.legal_moves(&state).unwrap();
        let pit = moves[choice % moves.len()];
        game.apply_move(&state, pit).unwrap()
    });

    c.bench_function("legal_moves", |b| {
        b.iter(|| game.legal_moves(black_box(&midgame)).unwrap())
    });

    c.bench_function("apply_move", |b| {
        let pit = game.legal_moves(&midgame).unwrap()[0];
        b.iter(|| game.apply_move(black_box(&midgame), black_box(pit)).unwrap())
    });

    c.bench_function("perft_5", |b| {
        b.iter(|| perft(&game, black_box(&start), 5).unwrap())
    });
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
