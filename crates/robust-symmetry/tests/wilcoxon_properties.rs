//! Property-based tests for the signed-rank symmetry test

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use robust_symmetry::{SymmetryTest, WilcoxonMethod, WilcoxonSignedRank};

fn nonzero_sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![-100.0f64..-1.0e-3, 1.0e-3f64..100.0],
        1..60,
    )
}

proptest! {
    // Property: p-values are probabilities
    #[test]
    fn prop_p_value_in_unit_interval(sample in nonzero_sample()) {
        let result = WilcoxonSignedRank::new().test(&sample).unwrap();
        prop_assert!((0.0..=1.0).contains(&result.p_value));
    }

    // Property: flipping every sign leaves a two-sided test unchanged
    #[test]
    fn prop_sign_flip_invariant(sample in nonzero_sample()) {
        let mirrored: Vec<f64> = sample.iter().map(|x| -x).collect();
        let a = WilcoxonSignedRank::new().test(&sample).unwrap();
        let b = WilcoxonSignedRank::new().test(&mirrored).unwrap();
        prop_assert_eq!(a.statistic, b.statistic);
        prop_assert!((a.p_value - b.p_value).abs() < 1e-9);
    }

    // Property: the statistic never exceeds half the total rank sum
    #[test]
    fn prop_statistic_bounded(sample in nonzero_sample()) {
        let result = WilcoxonSignedRank::new().test(&sample).unwrap();
        let n = result.n_used as f64;
        prop_assert!(result.statistic >= 0.0);
        prop_assert!(result.statistic <= n * (n + 1.0) / 4.0);
    }

    // Property: exact and approximate p-values agree roughly for moderate n
    #[test]
    fn prop_exact_close_to_approx(seed in 0u64..1_000) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let normal = Normal::new(0.0, 1.0).unwrap();
        let sample: Vec<f64> = (0..40).map(|_| normal.sample(&mut rng)).collect();

        let exact = WilcoxonSignedRank::new()
            .with_method(WilcoxonMethod::Exact)
            .test(&sample)
            .unwrap();
        let approx = WilcoxonSignedRank::new()
            .with_method(WilcoxonMethod::Approx)
            .test(&sample)
            .unwrap();
        prop_assert!((exact.p_value - approx.p_value).abs() < 0.02);
    }
}

#[test]
fn test_shifted_sample_is_significant() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let normal = Normal::new(3.0, 1.0).unwrap();
    let sample: Vec<f64> = (0..300).map(|_| normal.sample(&mut rng)).collect();

    let result = WilcoxonSignedRank::new().test(&sample).unwrap();
    assert_eq!(result.method, WilcoxonMethod::Approx);
    assert!(result.p_value < 1e-10);
}

#[test]
fn test_auto_switches_to_approximation_above_limit() {
    let small: Vec<f64> = (1..=50).map(|i| if i % 2 == 0 { i as f64 } else { -(i as f64) }).collect();
    let large: Vec<f64> = (1..=51).map(|i| if i % 2 == 0 { i as f64 } else { -(i as f64) }).collect();

    let test = WilcoxonSignedRank::new();
    assert_eq!(test.test(&small).unwrap().method, WilcoxonMethod::Exact);
    assert_eq!(test.test(&large).unwrap().method, WilcoxonMethod::Approx);
}
