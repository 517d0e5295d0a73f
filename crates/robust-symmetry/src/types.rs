//! Types shared by symmetry tests

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the null distribution of the signed-rank statistic is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WilcoxonMethod {
    /// Exact for small samples without zeros or ties, normal approximation otherwise
    #[default]
    Auto,
    /// Exact distribution of the rank sum
    Exact,
    /// Normal approximation with tie correction
    Approx,
}

impl WilcoxonMethod {
    /// Largest sample (after dropping zeros) for which `Auto` goes exact
    pub const EXACT_LIMIT: usize = 50;

    /// Largest sample for which an explicit `Exact` request is honoured
    ///
    /// The exact distribution table grows as `n^2` in memory and `n^3` in time.
    pub const EXACT_MAX: usize = 400;

    /// Get the name of this method
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Exact => "exact",
            Self::Approx => "approx",
        }
    }
}

/// Polarity of the symmetric/asymmetric decision drawn from a p-value
///
/// The signed-rank test's null hypothesis is "median is zero". Which side
/// of the threshold counts as *symmetric* is a calibration choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SymmetryCriterion {
    /// Symmetric when `p_value <= critical_p`
    ///
    /// This is the historical calibration of the error-bound tooling and
    /// stays the default so existing `k`/uncertainty settings reproduce.
    #[default]
    LowPValue,
    /// Symmetric when `p_value > critical_p`, i.e. the median-zero
    /// hypothesis is not rejected
    HighPValue,
}

impl SymmetryCriterion {
    /// Decide symmetry from a test p-value
    pub fn decide(&self, p_value: f64, critical_p: f64) -> bool {
        match self {
            Self::LowPValue => p_value <= critical_p,
            Self::HighPValue => p_value > critical_p,
        }
    }
}

/// Outcome of a symmetry test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymmetryTestResult {
    /// Test statistic (for Wilcoxon: `min(R+, R-)`)
    pub statistic: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Number of observations that entered the ranking
    pub n_used: usize,
    /// Method actually used to evaluate the p-value
    pub method: WilcoxonMethod,
}

impl SymmetryTestResult {
    /// Whether the p-value is at or below `critical_p`
    pub fn is_significant(&self, critical_p: f64) -> bool {
        SymmetryCriterion::LowPValue.decide(self.p_value, critical_p)
    }
}

impl fmt::Display for SymmetryTestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "W = {:.1}, p = {:.4} (n = {}, {})",
            self.statistic,
            self.p_value,
            self.n_used,
            self.method.name()
        )
    }
}
