//! Core traits for percentile estimation

use crate::{Error, Result};
use num_traits::float::FloatCore;

/// Main trait for percentile estimation
///
/// Percentiles are expressed on the `[0, 100]` scale.
pub trait PercentileEstimator<T: FloatCore = f64> {
    /// Estimate a single percentile
    ///
    /// # Warning
    /// This method will sort the data in place! If you need to preserve the original
    /// order, use `percentile_sorted()` with pre-sorted data or make a copy first.
    fn percentile(&self, data: &mut [T], percentile: f64) -> Result<T> {
        Error::check_non_empty(data)?;
        if data.iter().any(|x| x.is_nan()) {
            return Err(robust_core::Error::non_finite("percentile input").into());
        }
        data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        self.percentile_sorted(data, percentile)
    }

    /// Estimate a single percentile from pre-sorted data
    ///
    /// # Arguments
    /// * `sorted_data` - The data sample, sorted ascending
    /// * `percentile` - The percentile (0.0 to 100.0)
    fn percentile_sorted(&self, sorted_data: &[T], percentile: f64) -> Result<T>;

    /// Estimate several percentiles from pre-sorted data
    fn percentiles_sorted(&self, sorted_data: &[T], percentiles: &[f64]) -> Result<Vec<T>> {
        percentiles
            .iter()
            .map(|&p| self.percentile_sorted(sorted_data, p))
            .collect()
    }

    /// Name of the interpolation scheme
    fn name(&self) -> &'static str;
}
