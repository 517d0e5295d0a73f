//! Symmetric error bounds for quantization
//!
//! Given a sample of observed errors and a quantization granularity `k`,
//! this crate
//!
//! 1. decides whether the errors are symmetric about zero (Wilcoxon
//!    signed-rank test, see [`robust_symmetry`]),
//! 2. sizes a symmetric interval `[-d, d]` holding `ci` percent of the error
//!    magnitudes (see [`robust_quantile::central_percentile`]), and
//! 3. reports how many levels of a `k`-level grid that interval consumes.
//!
//! # Overview
//!
//! | Quantity | Definition |
//! |----------|------------|
//! | `ci` | `(1 - uncertainty) * 100` |
//! | `unit_scale` | `1 / (k - 1)` |
//! | `num_sizes_covers` | `floor(d / unit_scale) * 2 + 1` |
//! | `sensitivity` | `1 - num_sizes_covers / k` |
//!
//! # Example
//!
//! ```rust
//! use robust_bounds::{OptErrorIntervals, Error};
//!
//! // Errors of a quantizer that systematically overshoots
//! let errors: Vec<f64> = (1..=20).map(|i| i as f64 * 0.01).collect();
//! let bounds = OptErrorIntervals::new(errors, 16, 0.05).unwrap();
//!
//! match bounds.evaluate() {
//!     Ok(report) => println!("{report}"),
//!     Err(Error::AsymmetricDistribution { message }) => println!("{message}"),
//!     Err(e) => panic!("{e}"),
//! }
//! ```

pub mod error;
pub mod evaluation;
pub mod intervals;
pub mod params;
pub mod report;

pub use error::{Error, Result, ASYMMETRIC_MESSAGE};
pub use evaluation::EvaluationReport;
pub use intervals::OptErrorIntervals;
pub use params::BoundsParameters;
pub use report::{round_report_values, rounded_report, Report};

// Re-export the symmetry vocabulary used in parameters
pub use robust_symmetry::{SymmetryCriterion, SymmetryTest, SymmetryTestResult, WilcoxonMethod};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BoundsParameters, Error, EvaluationReport, OptErrorIntervals, Result, SymmetryCriterion,
    };
}
