use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use robust_symmetry::{SymmetryTest, WilcoxonMethod, WilcoxonSignedRank};

fn sample(size: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(size as u64);
    let normal = Normal::new(0.0, 1.0).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

fn bench_wilcoxon(c: &mut Criterion) {
    let mut group = c.benchmark_group("wilcoxon_signed_rank");

    for size in [20, 50] {
        let data = sample(size);
        let test = WilcoxonSignedRank::new().with_method(WilcoxonMethod::Exact);
        group.bench_with_input(BenchmarkId::new("exact", size), &data, |b, data| {
            b.iter(|| test.test(black_box(data)).unwrap())
        });
    }

    for size in [100, 1_000, 10_000] {
        let data = sample(size);
        let test = WilcoxonSignedRank::new();
        group.bench_with_input(BenchmarkId::new("approx", size), &data, |b, data| {
            b.iter(|| test.test(black_box(data)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_wilcoxon);
criterion_main!(benches);
