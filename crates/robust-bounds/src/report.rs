//! Rounded key-value reports
//!
//! [`rounded_report`] wraps any operation whose result serialises to a
//! mapping of numbers and rounds every value to a fixed number of decimal
//! digits. It knows nothing about what the values mean.

use crate::{Error, Result};
use robust_core::round_to;
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// A report: field name to numeric value
pub type Report = Map<String, Value>;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

fn round_value(key: &str, value: Value, digits: u32) -> Result<Value> {
    match value {
        // integers carry no fractional digits
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(Value::Number(n)),
        Value::Number(n) => {
            let x = n.as_f64().ok_or_else(|| {
                Error::MalformedReport(format!("value of `{key}` is not representable as f64"))
            })?;
            Number::from_f64(round_to(x, digits))
                .map(Value::Number)
                .ok_or_else(|| Error::MalformedReport(format!("value of `{key}` is not finite")))
        }
        other => Err(Error::MalformedReport(format!(
            "value of `{key}` is {}, expected a number",
            kind(&other)
        ))),
    }
}

/// Round every value of a mapping to `digits` decimals
///
/// Fails with [`Error::MalformedReport`] when `value` is not a mapping or
/// holds a non-numeric entry.
pub fn round_report_values(value: Value, digits: u32) -> Result<Report> {
    match value {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, v)| {
                let rounded = round_value(&key, v, digits)?;
                Ok((key, rounded))
            })
            .collect(),
        other => Err(Error::MalformedReport(format!(
            "output is expected to be a mapping, got {}",
            kind(&other)
        ))),
    }
}

/// Wrap `op` so that its output comes back as a rounded [`Report`]
///
/// Errors raised by `op` pass through untouched.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use robust_bounds::rounded_report;
///
/// let op = || Ok(BTreeMap::from([("third", 1.0 / 3.0)]));
/// let report = rounded_report(4, op)().unwrap();
/// assert_eq!(report["third"], 0.3333);
///
/// let scalar = || Ok(3.14159);
/// assert!(rounded_report(4, scalar)().is_err());
/// ```
pub fn rounded_report<F, S>(digits: u32, op: F) -> impl Fn() -> Result<Report>
where
    F: Fn() -> Result<S>,
    S: Serialize,
{
    move || {
        let output = op()?;
        round_report_values(serde_json::to_value(output)?, digits)
    }
}
