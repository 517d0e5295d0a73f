//! Wilcoxon signed-rank test
//!
//! Tests whether a sample of paired differences (here: signed errors) has
//! median zero. Zero differences are dropped before ranking, tied magnitudes
//! share their average rank, and the two-sided p-value comes either from the
//! exact distribution of the positive rank sum or from its normal
//! approximation.

use crate::traits::SymmetryTest;
use crate::types::{SymmetryCriterion, SymmetryTestResult, WilcoxonMethod};
use robust_core::{check_finite_sample, Error, Result};
use statrs::function::erf::erfc;
use std::cmp::Ordering;
use std::f64::consts::SQRT_2;
use tracing::{debug, instrument, warn};

/// Default significance threshold of [`is_symmetric`]
pub const DEFAULT_CRITICAL_P: f64 = 0.01;

/// Wilcoxon signed-rank test against median zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WilcoxonSignedRank {
    method: WilcoxonMethod,
    continuity_correction: bool,
}

impl WilcoxonSignedRank {
    /// Create a test with automatic method selection and no continuity correction
    pub fn new() -> Self {
        Self::default()
    }

    /// Select how the p-value is evaluated
    pub fn with_method(mut self, method: WilcoxonMethod) -> Self {
        self.method = method;
        self
    }

    /// Enable continuity correction of the normal approximation
    pub fn with_continuity_correction(mut self) -> Self {
        self.continuity_correction = true;
        self
    }

    /// Configured method
    pub fn method(&self) -> WilcoxonMethod {
        self.method
    }

    fn resolve_method(&self, n: usize, has_zeros: bool, has_ties: bool) -> WilcoxonMethod {
        match self.method {
            WilcoxonMethod::Auto => {
                if n <= WilcoxonMethod::EXACT_LIMIT && !has_zeros && !has_ties {
                    WilcoxonMethod::Exact
                } else {
                    WilcoxonMethod::Approx
                }
            }
            WilcoxonMethod::Exact if has_zeros || has_ties => {
                warn!(
                    has_zeros,
                    has_ties, "exact signed-rank distribution needs distinct non-zero values; using normal approximation"
                );
                WilcoxonMethod::Approx
            }
            WilcoxonMethod::Exact if n > WilcoxonMethod::EXACT_MAX => {
                warn!(
                    n,
                    limit = WilcoxonMethod::EXACT_MAX,
                    "sample too large for the exact signed-rank distribution; using normal approximation"
                );
                WilcoxonMethod::Approx
            }
            method => method,
        }
    }

    fn approx_p_value(&self, n: usize, statistic: f64, tie_sizes: &[usize]) -> f64 {
        let n = n as f64;
        let mean = n * (n + 1.0) / 4.0;
        let tie_term: f64 = tie_sizes
            .iter()
            .filter(|&&t| t > 1)
            .map(|&t| {
                let t = t as f64;
                t * (t * t - 1.0)
            })
            .sum();
        let se = ((n * (n + 1.0) * (2.0 * n + 1.0) - 0.5 * tie_term) / 24.0).sqrt();

        let correction = if self.continuity_correction && statistic != mean {
            0.5 * (statistic - mean).signum()
        } else {
            0.0
        };
        let z = (statistic - mean - correction) / se;
        debug!(z, se, "signed-rank normal approximation");

        erfc(z.abs() / SQRT_2).min(1.0)
    }
}

impl SymmetryTest for WilcoxonSignedRank {
    #[instrument(level = "debug", skip_all, fields(n = sample.len()))]
    fn test(&self, sample: &[f64]) -> Result<SymmetryTestResult> {
        check_finite_sample(sample, "symmetry test sample")?;

        let nonzero: Vec<f64> = sample.iter().copied().filter(|&x| x != 0.0).collect();
        let n = nonzero.len();
        let has_zeros = n < sample.len();

        if n == 0 {
            debug!("all differences are zero; no evidence against median zero");
            return Ok(SymmetryTestResult {
                statistic: 0.0,
                p_value: 1.0,
                n_used: 0,
                method: WilcoxonMethod::Approx,
            });
        }

        let (ranks, tie_sizes) = average_ranks(&nonzero);
        let (r_plus, r_minus) = nonzero.iter().zip(&ranks).fold(
            (0.0, 0.0),
            |(plus, minus), (&x, &rank)| {
                if x > 0.0 {
                    (plus + rank, minus)
                } else {
                    (plus, minus + rank)
                }
            },
        );
        let statistic = r_plus.min(r_minus);
        let has_ties = tie_sizes.iter().any(|&t| t > 1);

        let method = self.resolve_method(n, has_zeros, has_ties);
        let p_value = match method {
            WilcoxonMethod::Exact => exact_p_value(n, r_plus)?,
            _ => self.approx_p_value(n, statistic, &tie_sizes),
        };

        debug!(
            r_plus,
            r_minus,
            statistic,
            p_value,
            method = method.name(),
            "signed-rank test complete"
        );

        Ok(SymmetryTestResult {
            statistic,
            p_value,
            n_used: n,
            method,
        })
    }

    fn name(&self) -> &'static str {
        "Wilcoxon signed-rank"
    }
}

/// Average ranks of `|values|` (1-based) and the sizes of the tie groups.
fn average_ranks(values: &[f64]) -> (Vec<f64>, Vec<usize>) {
    let magnitudes: Vec<f64> = values.iter().map(|x| x.abs()).collect();
    let mut order: Vec<usize> = (0..magnitudes.len()).collect();
    order.sort_by(|&a, &b| {
        magnitudes[a]
            .partial_cmp(&magnitudes[b])
            .unwrap_or(Ordering::Equal)
    });

    let mut ranks = vec![0.0; magnitudes.len()];
    let mut tie_sizes = Vec::new();
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && magnitudes[order[end]] == magnitudes[order[start]] {
            end += 1;
        }
        // positions start..end hold ranks start+1 ..= end
        let rank = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = rank;
        }
        tie_sizes.push(end - start);
        start = end;
    }

    (ranks, tie_sizes)
}

/// Null distribution of the positive rank sum for ranks `1..=n`.
///
/// Entry `s` is `P(R+ = s)`; every rank enters with probability one half.
fn rank_sum_distribution(n: usize) -> Vec<f64> {
    let max_sum = n * (n + 1) / 2;
    let mut probs = vec![0.0; max_sum + 1];
    probs[0] = 1.0;

    for rank in 1..=n {
        let reachable = rank * (rank + 1) / 2;
        for s in (0..=reachable).rev() {
            let with_rank = if s >= rank { probs[s - rank] } else { 0.0 };
            probs[s] = 0.5 * (probs[s] + with_rank);
        }
    }

    probs
}

/// Two-sided exact p-value for an observed positive rank sum
fn exact_p_value(n: usize, r_plus: f64) -> Result<f64> {
    if r_plus.fract() != 0.0 {
        return Err(Error::Computation(format!(
            "exact signed-rank distribution needs an integral rank sum, got {r_plus}"
        )));
    }

    let probs = rank_sum_distribution(n);
    let observed = r_plus as usize;
    let mean = (n * (n + 1)) as f64 / 4.0;

    let one_sided: f64 = if r_plus > mean {
        probs[observed..].iter().sum()
    } else {
        probs[..=observed].iter().sum()
    };

    Ok((2.0 * one_sided).min(1.0))
}

/// Whether `sample` passes the signed-rank symmetry check at `critical_p`
///
/// Returns `true` exactly when the two-sided p-value of the Wilcoxon
/// signed-rank test is at or below `critical_p`
/// (see [`SymmetryCriterion::LowPValue`](crate::SymmetryCriterion::LowPValue)).
///
/// # Examples
///
/// ```rust
/// use robust_symmetry::is_symmetric;
///
/// // All-positive sample: exact p-value 2 / 2^10
/// let shifted: Vec<f64> = (1..=10).map(f64::from).collect();
/// assert!(is_symmetric(&shifted, 0.01).unwrap());
///
/// // Perfectly balanced sample: p-value 1
/// let balanced = [-2.0, -1.0, 1.0, 2.0];
/// assert!(!is_symmetric(&balanced, 0.01).unwrap());
/// ```
pub fn is_symmetric(sample: &[f64], critical_p: f64) -> Result<bool> {
    if !(0.0..=1.0).contains(&critical_p) {
        return Err(Error::invalid_probability("critical_p", critical_p));
    }
    let result = WilcoxonSignedRank::new().test(sample)?;
    Ok(SymmetryCriterion::LowPValue.decide(result.p_value, critical_p))
}
