//! Symmetric error intervals
//!
//! [`OptErrorIntervals`] is built once from a sample of errors, a
//! quantization granularity `k` and an uncertainty. The symmetry decision and
//! the confidence level are fixed at construction; the deviation, the
//! interval and the coverage report are recomputed on demand.

use crate::params::BoundsParameters;
use crate::{Error, Result};
use robust_core::check_finite_sample;
use robust_quantile::central_percentile;
use robust_symmetry::{SymmetryTest, SymmetryTestResult};
use tracing::{debug, instrument};

/// Symmetric error bounds of a sample for a `k`-level quantization grid
///
/// The object is in one of two states for its whole lifetime:
///
/// - **symmetric**: [`locate`](Self::locate) returns `(-d, d)` where `d` is
///   the `ci`-th percentile of the absolute errors
/// - **asymmetric**: [`locate`](Self::locate) and
///   [`evaluate`](Self::evaluate) fail with
///   [`Error::AsymmetricDistribution`]
///
/// # Example
///
/// ```rust
/// use robust_bounds::{BoundsParameters, OptErrorIntervals, SymmetryCriterion};
///
/// let errors = vec![-0.3, -0.2, -0.1, 0.1, 0.2, 0.3];
/// let params = BoundsParameters::default().with_criterion(SymmetryCriterion::HighPValue);
/// let bounds = OptErrorIntervals::with_parameters(errors, 10, params).unwrap();
///
/// let (lower, upper) = bounds.locate().unwrap();
/// assert_eq!((lower, upper), (-0.3, 0.3));
///
/// let report = bounds.evaluate().unwrap();
/// assert_eq!(report.num_sizes_covers, 5.0);
/// assert_eq!(report.sensitivity, 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct OptErrorIntervals {
    sample: Vec<f64>,
    k: usize,
    ci: f64,
    params: BoundsParameters,
    symmetry: SymmetryTestResult,
    symmetric: bool,
}

impl OptErrorIntervals {
    /// Bounds with the given uncertainty and default test settings
    pub fn new(sample: impl Into<Vec<f64>>, k: usize, uncertainty: f64) -> Result<Self> {
        Self::with_parameters(
            sample,
            k,
            BoundsParameters::default().with_uncertainty(uncertainty),
        )
    }

    /// Bounds with uncertainty 0.05 (`ci = 95`)
    pub fn with_defaults(sample: impl Into<Vec<f64>>, k: usize) -> Result<Self> {
        Self::with_parameters(sample, k, BoundsParameters::default())
    }

    /// Bounds with explicit parameters, using the signed-rank test they describe
    pub fn with_parameters(
        sample: impl Into<Vec<f64>>,
        k: usize,
        params: BoundsParameters,
    ) -> Result<Self> {
        let test = params.symmetry_test();
        Self::with_test(sample, k, params, &test)
    }

    /// Bounds whose symmetry decision comes from a custom test
    ///
    /// `params.method` and `params.continuity_correction` are ignored; the
    /// test's p-value is compared against `params.critical_p` using
    /// `params.criterion`.
    #[instrument(level = "debug", skip_all, fields(k = k, test = test.name()))]
    pub fn with_test<S: SymmetryTest>(
        sample: impl Into<Vec<f64>>,
        k: usize,
        params: BoundsParameters,
        test: &S,
    ) -> Result<Self> {
        params.validate()?;
        if k == 0 {
            return Err(Error::InvalidParameter(
                "k must be at least 1 representable level".to_string(),
            ));
        }

        let sample = sample.into();
        check_finite_sample(&sample, "error sample")?;

        let symmetry = test.test(&sample)?;
        let symmetric = params.criterion.decide(symmetry.p_value, params.critical_p);
        debug!(
            n = sample.len(),
            p_value = symmetry.p_value,
            critical_p = params.critical_p,
            symmetric,
            "symmetry decided"
        );

        Ok(Self {
            sample,
            k,
            ci: params.ci(),
            params,
            symmetry,
            symmetric,
        })
    }

    /// Number of representable quantization levels
    pub fn k(&self) -> usize {
        self.k
    }

    /// Confidence level in percent
    pub fn ci(&self) -> f64 {
        self.ci
    }

    /// The error sample
    pub fn sample(&self) -> &[f64] {
        &self.sample
    }

    /// Parameters used at construction
    pub fn parameters(&self) -> &BoundsParameters {
        &self.params
    }

    /// Whether the sample passed the symmetry decision
    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    /// Outcome of the symmetry test run at construction
    pub fn symmetry(&self) -> &SymmetryTestResult {
        &self.symmetry
    }

    /// Step between adjacent levels of a `k`-level grid over a unit range
    pub fn unit_scale(&self) -> Result<f64> {
        if self.k < 2 {
            return Err(Error::DegenerateQuantization { k: self.k });
        }
        Ok(1.0 / (self.k - 1) as f64)
    }

    /// The `ci`-th percentile of the absolute errors
    pub fn deviation(&self) -> Result<f64> {
        Ok(central_percentile(&self.sample, self.ci)?)
    }

    /// The symmetric interval `(-deviation, deviation)`
    pub fn locate(&self) -> Result<(f64, f64)> {
        if !self.symmetric {
            return Err(Error::asymmetric());
        }
        let deviation = self.deviation()?;
        debug!(deviation, ci = self.ci, "interval located");
        Ok((-deviation, deviation))
    }
}
