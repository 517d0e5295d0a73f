//! Central percentiles of a distribution centred on zero
//!
//! For a sample of signed errors, the `p`-th central percentile is the
//! magnitude `d` such that `p` percent of the errors lie in `[-d, d]`.

use crate::linear::LinearPercentile;
use crate::traits::PercentileEstimator;
use crate::{Error, Result};
use num_traits::float::FloatCore;
use robust_core::utils::sorted_magnitudes;
use tracing::trace;

/// Percentile of the absolute values of a sample
///
/// The magnitudes are always sorted before the inner estimator runs, so any
/// [`PercentileEstimator`] that expects sorted input can be plugged in.
#[derive(Debug, Clone, Copy, Default)]
pub struct CentralPercentile<E = LinearPercentile> {
    estimator: E,
}

impl CentralPercentile<LinearPercentile> {
    /// Central percentile backed by linear interpolation
    pub fn new() -> Self {
        Self {
            estimator: LinearPercentile,
        }
    }
}

impl<E> CentralPercentile<E> {
    /// Central percentile backed by a custom estimator
    pub fn with_estimator(estimator: E) -> Self {
        Self { estimator }
    }

    /// Estimate the central percentile of `data`
    pub fn estimate<T>(&self, data: &[T], percentile: f64) -> Result<T>
    where
        T: FloatCore,
        E: PercentileEstimator<T>,
    {
        Error::check_non_empty(data)?;
        if data.iter().any(|x| x.is_nan()) {
            return Err(robust_core::Error::non_finite("central percentile input").into());
        }

        let magnitudes = sorted_magnitudes(data);
        let value = self.estimator.percentile_sorted(&magnitudes, percentile)?;
        trace!(
            n = data.len(),
            percentile,
            estimator = self.estimator.name(),
            "central percentile computed"
        );
        Ok(value)
    }
}

/// Magnitude below which `percentile` percent of `|data|` falls
///
/// # Examples
///
/// ```rust
/// use robust_quantile::central_percentile;
///
/// let errors = [-5.0, -3.0, -1.0, 1.0, 3.0, 5.0];
/// assert_eq!(central_percentile(&errors, 100.0).unwrap(), 5.0);
/// assert_eq!(central_percentile(&errors, 0.0).unwrap(), 1.0);
/// ```
pub fn central_percentile<T: FloatCore>(data: &[T], percentile: f64) -> Result<T> {
    CentralPercentile::new().estimate(data, percentile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_central_percentile_symmetric_set() {
        let errors = [
            -5.0, -5.0, -3.0, -3.0, -1.0, -1.0, 1.0, 1.0, 3.0, 3.0, 5.0, 5.0,
        ];
        assert_eq!(central_percentile(&errors, 95.0).unwrap(), 5.0);
        assert_eq!(central_percentile(&errors, 50.0).unwrap(), 3.0);
    }

    #[test]
    fn test_central_percentile_ignores_sign_and_order() {
        let a = [0.3, -0.1, 0.2, -0.4];
        let b = [-0.4, 0.1, -0.2, 0.3];
        assert_eq!(
            central_percentile(&a, 75.0).unwrap(),
            central_percentile(&b, 75.0).unwrap()
        );
        assert_relative_eq!(central_percentile(&a, 75.0).unwrap(), 0.325, epsilon = 1e-12);
    }

    #[test]
    fn test_central_percentile_is_non_negative() {
        let errors = [-10.0, -20.0, -30.0];
        assert!(central_percentile(&errors, 0.0).unwrap() >= 0.0);
        assert_eq!(central_percentile(&errors, 0.0).unwrap(), 10.0);
    }

    #[test]
    fn test_central_percentile_with_estimator() {
        let estimator = CentralPercentile::with_estimator(LinearPercentile::new());
        assert_eq!(estimator.estimate(&[-2.0, 2.0], 40.0).unwrap(), 2.0);
    }

    #[test]
    fn test_central_percentile_rejects_bad_input() {
        let empty: [f64; 0] = [];
        assert!(matches!(central_percentile(&empty, 95.0), Err(Error::EmptyData)));
        assert!(matches!(
            central_percentile(&[1.0, f64::NAN], 95.0),
            Err(Error::Core(_))
        ));
        assert!(matches!(
            central_percentile(&[1.0], -5.0),
            Err(Error::InvalidPercentile { .. })
        ));
    }
}
