//! Quantization coverage of a symmetric error interval

use crate::intervals::OptErrorIntervals;
use crate::report::{rounded_report, Report};
use crate::{Error, Result};
use robust_core::floor_div;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// How much of a `k`-level grid the error interval consumes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Number of representable levels
    pub k: usize,
    /// Step between adjacent levels, `1 / (k - 1)`
    pub unit_scale: f64,
    /// Confidence level in percent
    pub ci: f64,
    /// Grid steps covering `[-deviation, deviation]`, both sides plus the centre
    pub num_sizes_covers: f64,
    /// Fraction of the `k` levels left outside the band; negative when the
    /// band needs more levels than the grid has
    pub sensitivity: f64,
}

impl EvaluationReport {
    /// Field names, in declaration order
    pub const KEYS: [&'static str; 5] = ["k", "unit_scale", "ci", "num_sizes_covers", "sensitivity"];
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "k = {}, unit_scale = {}, ci = {}%, covers = {}, sensitivity = {}",
            self.k, self.unit_scale, self.ci, self.num_sizes_covers, self.sensitivity
        )
    }
}

impl OptErrorIntervals {
    /// Unrounded coverage metrics
    ///
    /// `k = 1` fails with [`Error::DegenerateQuantization`] before symmetry is
    /// considered; an asymmetric sample then fails with
    /// [`Error::AsymmetricDistribution`].
    pub fn evaluate_raw(&self) -> Result<EvaluationReport> {
        let unit_scale = self.unit_scale()?;
        if !self.is_symmetric() {
            return Err(Error::asymmetric());
        }

        let deviation = self.deviation()?;
        let num_sizes_covers = floor_div(deviation, unit_scale) * 2.0 + 1.0;
        let sensitivity = 1.0 - num_sizes_covers / self.k() as f64;

        Ok(EvaluationReport {
            k: self.k(),
            unit_scale,
            ci: self.ci(),
            num_sizes_covers,
            sensitivity,
        })
    }

    /// Coverage metrics as a mapping, every value rounded to the configured digits
    pub fn evaluate_report(&self) -> Result<Report> {
        rounded_report(self.parameters().report_digits, || self.evaluate_raw())()
    }

    /// Coverage metrics rounded to the configured digits (4 by default)
    pub fn evaluate(&self) -> Result<EvaluationReport> {
        let report = self.evaluate_report()?;
        let evaluation: EvaluationReport = serde_json::from_value(Value::Object(report))?;
        debug!(%evaluation, "coverage evaluated");
        Ok(evaluation)
    }
}
