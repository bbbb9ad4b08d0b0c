//! Circle defined by its radius.

use std::f64::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::cfg::{in_range, MAX_RADIUS};
use crate::error::{Result, ShapeError};
use crate::shape::Shape;

/// Circle with a validated radius in `(0, MAX_RADIUS]`.
///
/// Invariants:
/// - `radius` is finite and in range; never changes after `new`.
/// - `area` is `π·r·r`, computed once at construction.
#[derive(Clone, Copy, Debug)]
pub struct Circle {
    radius: f64,
    area: f64,
}

impl Circle {
    pub const MAX_RADIUS: f64 = MAX_RADIUS;

    pub fn new(radius: f64) -> Result<Self> {
        if !in_range(radius, MAX_RADIUS) {
            tracing::debug!(radius, "circle rejected: radius out of range");
            return Err(ShapeError::OutOfRange {
                param: "radius",
                value: radius,
                max: MAX_RADIUS,
            });
        }
        Ok(Self {
            radius,
            area: PI * radius * radius,
        })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    #[inline]
    fn area(&self) -> f64 {
        self.area
    }

    #[inline]
    fn name(&self) -> &'static str {
        "circle"
    }
}

// Equality and hash look at the radius only; `area` is derived from it.
impl PartialEq for Circle {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.radius == other.radius
    }
}

// Sound: NaN never passes construction.
impl Eq for Circle {}

impl Hash for Circle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.radius.to_bits().hash(state);
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle (Radius: {})", self.radius)
    }
}
