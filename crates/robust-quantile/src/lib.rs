//! Percentile estimation for error samples
//!
//! This crate provides the linearly interpolated sample percentile and the
//! *central* percentile used to size symmetric error bands: the percentile
//! of the absolute values of a sample.
//!
//! # Example
//!
//! ```rust
//! use robust_quantile::{central_percentile, percentile, LinearPercentile, PercentileEstimator};
//!
//! let errors = vec![-0.4, 0.1, -0.2, 0.3, 0.05];
//!
//! // 95% of the magnitudes lie below this value
//! let band = central_percentile(&errors, 95.0).unwrap();
//! assert!(band > 0.3 && band <= 0.4);
//!
//! // Plain percentiles over signed values
//! let median = percentile(&errors, 50.0).unwrap();
//! assert_eq!(median, 0.05);
//!
//! // Trait form, on pre-sorted data
//! let q = LinearPercentile.percentile_sorted(&[1.0, 2.0, 3.0], 50.0).unwrap();
//! assert_eq!(q, 2.0);
//! ```

pub mod central;
pub mod error;
pub mod linear;
pub mod traits;

// Re-export main types
pub use central::{central_percentile, CentralPercentile};
pub use error::{Error, Result};
pub use linear::{percentile, percentile_sorted, LinearPercentile};
pub use traits::PercentileEstimator;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        central_percentile, CentralPercentile, Error, LinearPercentile, PercentileEstimator,
        Result,
    };
}
