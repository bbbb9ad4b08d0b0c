//! Numeric limits and tolerances (fixed).
//!
//! Policy
//! - Limits are constants, not configuration. Every shape validates against
//!   the same bounds, and the right-angle check uses one absolute tolerance.

/// Largest accepted circle radius. Keeps `π·r²` comfortably finite.
pub const MAX_RADIUS: f64 = 1e10;

/// Largest accepted triangle side length.
pub const MAX_SIDE_LENGTH: f64 = 1e10;

/// Absolute tolerance on `|a² + b² − c²|` for the right-angle test.
///
/// Absolute, not relative: for sides near `MAX_SIDE_LENGTH` the squared sums
/// are ~1e20 and only exact Pythagorean triples pass.
pub const RIGHT_ANGLE_EPS: f64 = 1e-10;

/// `true` iff `value` lies in `(0, max]`. NaN is never in range.
#[inline]
pub(crate) fn in_range(value: f64, max: f64) -> bool {
    value > 0.0 && value <= max
}
