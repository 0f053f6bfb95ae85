//! Benchmarks `build_tree` over a range of point-set sizes.
//!
//! Grounded on `kiddo/benches/build.rs`'s shape: `criterion_group!`/`criterion_main!`
//! with `BenchmarkId` parameterized by `n`, using seeded `rand_chacha` input so runs
//! are reproducible across machines.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use flatkd::build_tree;
use flatkd::test_utils::random_points;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tree");
    for &n in &[100usize, 1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut rng = ChaCha8Rng::seed_from_u64(0);
            let points: Vec<[f32; 3]> = random_points(n, &mut rng);
            b.iter_batched(
                || points.clone(),
                |mut pts| build_tree::<[f32; 3], 3>(&mut pts),
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
