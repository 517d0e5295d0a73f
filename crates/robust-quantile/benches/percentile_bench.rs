use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use robust_quantile::central_percentile;

fn bench_central_percentile(c: &mut Criterion) {
    let mut group = c.benchmark_group("central_percentile");
    let normal = Normal::new(0.0, 1.0).unwrap();

    for size in [100, 1_000, 10_000, 100_000] {
        let mut rng = ChaCha8Rng::seed_from_u64(size as u64);
        let data: Vec<f64> = (0..size).map(|_| normal.sample(&mut rng)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| central_percentile(black_box(data), black_box(95.0)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_central_percentile);
criterion_main!(benches);
