//! Numeric value generators.

/// Exclusive upper bound of generated values.
pub const VALUE_UPPER_BOUND: u32 = 100;

/// Map a uniform draw `s` in `[0, 1)` to an integer in `[0, 100)`.
///
/// The scaled draw is truncated toward zero.
pub fn truncate_percent(s: f64) -> u32 {
    (s * f64::from(VALUE_UPPER_BOUND)) as u32
}
