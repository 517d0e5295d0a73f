//! Robust error bounds for quantization
//!
//! Umbrella crate re-exporting the workspace:
//!
//! - [`robust_core`]: shared error type and float helpers
//! - [`robust_quantile`]: linear and central percentiles
//! - [`robust_symmetry`]: Wilcoxon signed-rank symmetry test
//! - [`robust_bounds`]: [`OptErrorIntervals`], coverage reports and the rounding combinator
//!
//! # Example
//!
//! ```rust
//! use robust_error_bounds::prelude::*;
//!
//! let errors = vec![-0.3, -0.2, -0.1, 0.1, 0.2, 0.3];
//! let params = BoundsParameters::default().with_criterion(SymmetryCriterion::HighPValue);
//! let bounds = OptErrorIntervals::with_parameters(errors, 10, params).unwrap();
//!
//! assert_eq!(bounds.locate().unwrap(), (-0.3, 0.3));
//! assert_eq!(bounds.evaluate().unwrap().sensitivity, 0.5);
//! ```

pub use robust_bounds;
pub use robust_core;
pub use robust_quantile;
pub use robust_symmetry;

pub use robust_bounds::{
    round_report_values, rounded_report, BoundsParameters, Error, EvaluationReport,
    OptErrorIntervals, Report, Result,
};
pub use robust_quantile::central_percentile;
pub use robust_symmetry::{is_symmetric, SymmetryCriterion, SymmetryTest, WilcoxonMethod};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use robust_bounds::prelude::*;
    pub use robust_quantile::central_percentile;
    pub use robust_symmetry::{is_symmetric, SymmetryTest, WilcoxonMethod};
}
