use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use swiss_tournament::tournament::{Standing, pairing::pair_adjacent};

/// Helper to create standings for N players, best record first
fn setup_standings(n_players: usize) -> Vec<Standing> {
    (0..n_players)
        .map(|i| Standing {
            id: i as i32 + 1,
            name: format!("Player {}", i + 1),
            wins: ((n_players - i) / 2) as i64,
            matches: (n_players / 2) as i64,
        })
        .collect()
}

/// Benchmark pairing across tournament sizes
fn bench_pair_adjacent(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair_adjacent");

    for n_players in [8, 64, 512, 4096] {
        let standings = setup_standings(n_players);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_players),
            &standings,
            |b, standings| b.iter(|| pair_adjacent(black_box(standings))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pair_adjacent);
criterion_main!(benches);
