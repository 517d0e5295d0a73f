//! Parameters of the error-bound estimation

use crate::{Error, Result};
use robust_symmetry::{SymmetryCriterion, WilcoxonMethod, WilcoxonSignedRank, DEFAULT_CRITICAL_P};
use serde::{Deserialize, Serialize};

/// Parameters for [`OptErrorIntervals`](crate::OptErrorIntervals)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsParameters {
    /// Fraction of errors allowed outside the band; `ci = (1 - uncertainty) * 100`
    pub uncertainty: f64,
    /// Significance threshold of the symmetry test
    pub critical_p: f64,
    /// Which side of `critical_p` counts as symmetric
    pub criterion: SymmetryCriterion,
    /// Evaluation method of the signed-rank test
    pub method: WilcoxonMethod,
    /// Continuity correction for the normal approximation
    pub continuity_correction: bool,
    /// Decimal digits kept in evaluation reports
    pub report_digits: u32,
}

impl Default for BoundsParameters {
    fn default() -> Self {
        Self {
            uncertainty: 0.05,
            critical_p: DEFAULT_CRITICAL_P,
            criterion: SymmetryCriterion::default(),
            method: WilcoxonMethod::default(),
            continuity_correction: false,
            report_digits: 4,
        }
    }
}

impl BoundsParameters {
    /// Largest supported `report_digits`
    pub const MAX_REPORT_DIGITS: u32 = 15;

    /// Set the fraction of errors allowed outside the band
    pub fn with_uncertainty(mut self, uncertainty: f64) -> Self {
        self.uncertainty = uncertainty;
        self
    }

    /// Set the significance threshold of the symmetry test
    pub fn with_critical_p(mut self, critical_p: f64) -> Self {
        self.critical_p = critical_p;
        self
    }

    /// Set which side of `critical_p` counts as symmetric
    pub fn with_criterion(mut self, criterion: SymmetryCriterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// Set the evaluation method of the signed-rank test
    pub fn with_method(mut self, method: WilcoxonMethod) -> Self {
        self.method = method;
        self
    }

    /// Enable or disable continuity correction of the normal approximation
    pub fn with_continuity_correction(mut self, enabled: bool) -> Self {
        self.continuity_correction = enabled;
        self
    }

    /// Set the decimal digits kept in evaluation reports
    pub fn with_report_digits(mut self, digits: u32) -> Self {
        self.report_digits = digits;
        self
    }

    /// Confidence level in percent
    pub fn ci(&self) -> f64 {
        (1.0 - self.uncertainty) * 100.0
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        if !(self.uncertainty > 0.0 && self.uncertainty < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "uncertainty {} must be in (0, 1)",
                self.uncertainty
            )));
        }
        if !(0.0..=1.0).contains(&self.critical_p) {
            return Err(robust_core::Error::invalid_probability("critical_p", self.critical_p).into());
        }
        if self.report_digits > Self::MAX_REPORT_DIGITS {
            return Err(Error::InvalidParameter(format!(
                "report_digits {} must be at most {}",
                self.report_digits,
                Self::MAX_REPORT_DIGITS
            )));
        }
        Ok(())
    }

    /// Signed-rank test configured from these parameters
    pub fn symmetry_test(&self) -> WilcoxonSignedRank {
        let test = WilcoxonSignedRank::new().with_method(self.method);
        if self.continuity_correction {
            test.with_continuity_correction()
        } else {
            test
        }
    }
}
