//! Linearly interpolated percentiles
//!
//! The sample percentile is read off the piecewise-linear curve through the
//! order statistics `x(0), ..., x(n-1)` placed at plotting positions
//! `i / (n - 1)`. This is type 7 of Hyndman & Fan (1996), the default of
//! most numerical packages.

use crate::traits::PercentileEstimator;
use crate::{Error, Result};
use num_traits::float::FloatCore;
use num_traits::NumCast;

/// Linear interpolation between the two closest order statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearPercentile;

impl LinearPercentile {
    /// Create a new linear percentile estimator
    pub fn new() -> Self {
        Self
    }
}

/// Virtual (fractional) index of quantile `q` among `n` order statistics.
///
/// Written in the general `(alpha, beta)` plotting-position form with
/// `alpha = beta = 1`, which reduces to `(n - 1) * q`.
fn virtual_index(n: usize, q: f64) -> f64 {
    const ALPHA: f64 = 1.0;
    const BETA: f64 = 1.0;
    n as f64 * q + (ALPHA + q * (1.0 - ALPHA - BETA)) - 1.0
}

/// Stable linear interpolation: exact at both ends of `[a, b]`.
fn lerp<T: FloatCore>(a: T, b: T, t: T) -> T {
    let diff = b - a;
    let half = T::one() / (T::one() + T::one());
    if t >= half {
        b - diff * (T::one() - t)
    } else {
        a + diff * t
    }
}

impl<T: FloatCore> PercentileEstimator<T> for LinearPercentile {
    fn percentile_sorted(&self, sorted_data: &[T], percentile: f64) -> Result<T> {
        Error::check_non_empty(sorted_data)?;
        Error::check_percentile(percentile)?;

        let n = sorted_data.len();
        let last = (n - 1) as f64;
        let index = virtual_index(n, percentile / 100.0).clamp(0.0, last);
        let previous = index.floor();
        let next = (previous + 1.0).min(last);
        let gamma = <T as NumCast>::from(index - previous).ok_or_else(|| {
            Error::Numerical(format!("cannot represent interpolation weight for index {index}"))
        })?;

        Ok(lerp(
            sorted_data[previous as usize],
            sorted_data[next as usize],
            gamma,
        ))
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

/// Linearly interpolated percentile of pre-sorted data
///
/// # Examples
///
/// ```rust
/// use robust_quantile::percentile_sorted;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(percentile_sorted(&sorted, 50.0).unwrap(), 2.5);
/// ```
pub fn percentile_sorted<T: FloatCore>(sorted_data: &[T], percentile: f64) -> Result<T> {
    LinearPercentile.percentile_sorted(sorted_data, percentile)
}

/// Linearly interpolated percentile of unsorted data
///
/// The input is copied; the caller's ordering is preserved.
pub fn percentile<T: FloatCore>(data: &[T], percentile: f64) -> Result<T> {
    let mut sorted = data.to_vec();
    LinearPercentile.percentile(&mut sorted, percentile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percentile_endpoints() {
        let data = [1.0, 3.0, 5.0, 7.0];
        assert_eq!(percentile_sorted(&data, 0.0).unwrap(), 1.0);
        assert_eq!(percentile_sorted(&data, 100.0).unwrap(), 7.0);
    }

    #[test]
    fn test_percentile_interpolates() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile_sorted(&data, 50.0).unwrap(), 3.0);
        assert_relative_eq!(percentile_sorted(&data, 10.0).unwrap(), 1.4, epsilon = 1e-12);
        assert_relative_eq!(percentile_sorted(&data, 95.0).unwrap(), 4.8, epsilon = 1e-12);
    }

    #[test]
    fn test_percentile_single_element() {
        assert_eq!(percentile_sorted(&[42.0], 0.0).unwrap(), 42.0);
        assert_eq!(percentile_sorted(&[42.0], 37.5).unwrap(), 42.0);
        assert_eq!(percentile_sorted(&[42.0], 100.0).unwrap(), 42.0);
    }

    #[test]
    fn test_percentile_unsorted_input_preserved() {
        let data = vec![5.0, 1.0, 4.0, 2.0, 3.0];
        assert_eq!(percentile(&data, 50.0).unwrap(), 3.0);
        assert_eq!(data, vec![5.0, 1.0, 4.0, 2.0, 3.0]);
    }

    #[test]
    fn test_percentile_in_place_sorts() {
        let mut data = vec![3.0, 1.0, 2.0];
        let value = LinearPercentile.percentile(&mut data, 100.0).unwrap();
        assert_eq!(value, 3.0);
        assert_eq!(data, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_percentile_f32() {
        let data = [0.0f32, 10.0];
        assert_relative_eq!(percentile_sorted(&data, 25.0).unwrap(), 2.5f32);
    }

    #[test]
    fn test_percentile_errors() {
        let empty: [f64; 0] = [];
        assert!(matches!(percentile_sorted(&empty, 50.0), Err(Error::EmptyData)));
        assert!(matches!(
            percentile_sorted(&[1.0], 101.0),
            Err(Error::InvalidPercentile { .. })
        ));
        assert!(matches!(
            percentile(&[1.0, f64::NAN], 50.0),
            Err(Error::Core(_))
        ));
    }

    #[test]
    fn test_several_percentiles() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let values = LinearPercentile
            .percentiles_sorted(&data, &[0.0, 25.0, 50.0, 75.0, 100.0])
            .unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_lerp_is_exact_at_ends() {
        assert_eq!(lerp(0.1, 0.7, 0.0), 0.1);
        assert_eq!(lerp(0.1, 0.7, 1.0), 0.7);
        assert_eq!(lerp(5.0, 5.0, 0.45), 5.0);
    }
}
