//! Core trait for symmetry tests

use crate::SymmetryTestResult;
use robust_core::Result;

/// A test of the hypothesis that a sample is centred on zero
pub trait SymmetryTest {
    /// Run the test on `sample`
    fn test(&self, sample: &[f64]) -> Result<SymmetryTestResult>;

    /// Name of the test
    fn name(&self) -> &'static str;
}

impl<S: SymmetryTest + ?Sized> SymmetryTest for &S {
    fn test(&self, sample: &[f64]) -> Result<SymmetryTestResult> {
        (**self).test(sample)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
