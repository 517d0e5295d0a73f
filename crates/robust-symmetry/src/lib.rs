//! Symmetry tests for error samples
//!
//! Before a symmetric band `[-d, d]` is fitted around a sample of errors, the
//! sample is checked for symmetry about zero. This crate provides the
//! Wilcoxon signed-rank test used for that check, a [`SymmetryTest`] trait so
//! other tests can be swapped in, and [`SymmetryCriterion`] to choose how a
//! p-value is turned into a symmetric/asymmetric decision.
//!
//! # Example
//!
//! ```rust
//! use robust_symmetry::{SymmetryTest, WilcoxonMethod, WilcoxonSignedRank};
//!
//! let errors = vec![0.4, -0.3, 0.25, -0.1, 0.05, -0.45, 0.2];
//! let test = WilcoxonSignedRank::new().with_method(WilcoxonMethod::Exact);
//! let result = test.test(&errors).unwrap();
//!
//! assert_eq!(result.n_used, 7);
//! assert!(result.p_value > 0.5);
//! ```

pub mod traits;
pub mod types;
pub mod wilcoxon;

pub use traits::SymmetryTest;
pub use types::{SymmetryCriterion, SymmetryTestResult, WilcoxonMethod};
pub use wilcoxon::{is_symmetric, WilcoxonSignedRank, DEFAULT_CRITICAL_P};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        is_symmetric, SymmetryCriterion, SymmetryTest, SymmetryTestResult, WilcoxonMethod,
        WilcoxonSignedRank,
    };
}
