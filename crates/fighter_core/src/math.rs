//! Integer rounding helpers for deterministic pricing.
//!
//! Every percentage in the pricing rules is stored as a whole percent
//! (`50` for 50%) so that surcharges never pass through floating point.
//! Rounding is always towards positive infinity.

/// Divide and round towards positive infinity.
///
/// `divisor` must be positive.
#[must_use]
pub const fn ceil_div(value: i64, divisor: i64) -> i64 {
    -((-value).div_euclid(divisor))
}

/// Narrow to `i32`, saturating at the bounds.
///
/// Point sums are accumulated in `i64`; an unbounded stat can push them
/// past `i32::MAX`.
#[must_use]
pub fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// `ceil(value * percent / 100)` in exact integer arithmetic.
///
/// Works for negative `value` too, matching a mathematical ceiling
/// (`ceil(-1.5) == -1`).
#[must_use]
pub fn ceil_percent(value: i32, percent: u32) -> i32 {
    saturate(ceil_div(i64::from(value) * i64::from(percent), 100))
}
