//! Floating point helpers shared by the bounding crates
//!
//! Two operations need exact, reproducible semantics rather than the
//! obvious one-liners: floor division of floats and rounding to a fixed
//! number of decimal digits.

/// Floor division of two floats.
///
/// Computed from the `fmod` remainder rather than `(a / b).floor()`, so the
/// quotient is consistent with `a - b * q == a % b`. The two differ when
/// `a / b` rounds up onto an integer, e.g. `1.0 / 0.1`.
///
/// Returns NaN when `b == 0.0`; callers must rule that out first.
///
/// # Examples
///
/// ```rust
/// use robust_core::math::floor_div;
///
/// assert_eq!(floor_div(7.0, 2.0), 3.0);
/// assert_eq!(floor_div(-7.0, 2.0), -4.0);
/// assert_eq!(floor_div(1.0, 0.1), 9.0);
/// ```
pub fn floor_div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return f64::NAN;
    }

    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }

    if div != 0.0 {
        let mut floor = div.floor();
        if div - floor > 0.5 {
            floor += 1.0;
        }
        floor
    } else {
        0.0_f64.copysign(a / b)
    }
}

/// Round `value` to `digits` decimal places.
///
/// Rounds the exact binary value, so `1.0 / 160.0` (stored slightly above
/// `0.00625`) becomes `0.0063`. Non-finite values are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use robust_core::math::round_to;
///
/// assert_eq!(round_to(1.0 / 9.0, 4), 0.1111);
/// assert_eq!(round_to(-8.1, 4), -8.1);
/// assert_eq!(round_to(1.0 / 160.0, 4), 0.0063);
/// ```
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", digits as usize, value)
        .parse()
        .unwrap_or(value)
}
