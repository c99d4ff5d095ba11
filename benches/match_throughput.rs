use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use haystack::{Engine, MatchConfig, NullObserver};

fn bench_full_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("Full Match");
    group
        .sample_size(50)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));

    for players in [2usize, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(players), &players, |b, &players| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                let config = MatchConfig::new().with_player_count(players).with_seed(seed);
                let mut engine = Engine::with_basic_strategies(&config, NullObserver).unwrap();
                black_box(engine.play_match().unwrap())
            })
        });
    }
    group.finish();
}

fn bench_audited_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("Audited Match");
    group
        .sample_size(50)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    group.bench_function("4 players", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let config = MatchConfig::new().with_seed(seed).with_invariant_checks(true);
            let mut engine = Engine::with_basic_strategies(&config, NullObserver).unwrap();
            black_box(engine.play_match().unwrap())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_full_match, bench_audited_match);
criterion_main!(benches);
