//! Numeric rounding for G-code output
//!
//! Values are rounded numerically before they are formatted. Ties go away
//! from zero on the last displayed digit, so `0.125` prints as `0.13` and
//! `-0.125` as `-0.13`. A value that rounds to zero always prints unsigned.

/// Fractional digits used for X/Y/Z words.
pub const COORDINATE_DIGITS: usize = 2;

/// Nudge, in ULPs of the scaled value, so decimal ties stored just below the
/// half (`2.675` is `2.67499999...` in binary) still round away from zero.
const TIE_ULPS: f64 = 4.0;

/// Round `value` to `digits` fractional digits, ties away from zero.
///
/// Non-finite values are returned unchanged. Negative zero results are
/// normalised to `0.0`.
pub fn round_half_up(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let scale = 10f64.powi(digits as i32);
    let scaled = value.abs() * scale;
    let rounded = (scaled + scaled * f64::EPSILON * TIE_ULPS).round();
    let result = value.signum() * rounded / scale;

    if result == 0.0 {
        0.0
    } else {
        result
    }
}

/// Format `value` with exactly `digits` fractional digits after half-up rounding.
pub fn format_fixed(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, round_half_up(value, digits))
}
