//! Utility functions for working with error samples

use crate::{Error, Result};
use num_traits::float::FloatCore;
use ordered_float::OrderedFloat;

/// Reject empty samples and samples carrying NaN or infinite values.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::check_finite_sample;
///
/// assert!(check_finite_sample(&[1.0, -2.0], "errors").is_ok());
/// assert!(check_finite_sample(&[], "errors").is_err());
/// assert!(check_finite_sample(&[1.0, f64::NAN], "errors").is_err());
/// ```
pub fn check_finite_sample(data: &[f64], context: &str) -> Result<()> {
    if data.is_empty() {
        return Err(Error::empty_input());
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}

/// Absolute values of `data`, sorted ascending.
///
/// NaN magnitudes sort after every number.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::sorted_magnitudes;
///
/// assert_eq!(sorted_magnitudes(&[-3.0, 1.0, -2.0]), vec![1.0, 2.0, 3.0]);
/// ```
pub fn sorted_magnitudes<T: FloatCore>(data: &[T]) -> Vec<T> {
    let mut magnitudes: Vec<T> = data.iter().map(|&x| x.abs()).collect();
    magnitudes.sort_by_key(|&x| OrderedFloat(x));
    magnitudes
}

/// Sort data and return a new vector, NaN values last.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted<T: FloatCore>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();
    sorted.sort_by_key(|&x| OrderedFloat(x));
    sorted
}
