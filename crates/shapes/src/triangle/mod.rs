//! Triangle defined by three side lengths.
//!
//! Purpose
//! - Validate a side triple once (per-side range, then strict triangle
//!   inequality) and derive the right-angle flag and area from it.
//!
//! Area selection
//! - Right triangles use `0.5 · leg · leg`. The hypotenuse is the side that
//!   is strictly greater than both others; if A is that side it is swapped
//!   out for C, if B is, B is swapped for C. With no unique maximum, A and B
//!   are taken as the legs.
//! - Everything else goes through Heron's formula.
//!
//! Numerics
//! - The right-angle test is absolute (`RIGHT_ANGLE_EPS` on squared sums), so
//!   large non-integer triangles are effectively never classified as right.
//!
//! Code cross-refs: `cfg::{MAX_SIDE_LENGTH, RIGHT_ANGLE_EPS}`, `ShapeError`.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::cfg::{in_range, MAX_SIDE_LENGTH, RIGHT_ANGLE_EPS};
use crate::error::{Result, ShapeError};
use crate::shape::Shape;

/// Triangle with validated sides `a`, `b`, `c` (in declaration order).
///
/// Invariants:
/// - each side is in `(0, MAX_SIDE_LENGTH]`;
/// - every pair of sides sums to strictly more than the third;
/// - `is_right` and `area` are derived at construction and never change.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
    is_right: bool,
    area: f64,
}

impl Triangle {
    pub const MAX_SIDE_LENGTH: f64 = MAX_SIDE_LENGTH;

    /// Build a triangle, checking each side in order before the inequality.
    pub fn new(side_a: f64, side_b: f64, side_c: f64) -> Result<Self> {
        check_side(side_a, "side_a")?;
        check_side(side_b, "side_b")?;
        check_side(side_c, "side_c")?;

        let (a, b, c) = (side_a, side_b, side_c);
        if a + b <= c || a + c <= b || b + c <= a {
            tracing::debug!(a, b, c, "triangle rejected: inequality violated");
            return Err(ShapeError::MalformedTriangle { a, b, c });
        }

        let is_right = pythagorean(a, b, c);
        let area = if is_right {
            right_area(a, b, c)
        } else {
            heron_area(a, b, c)
        };
        Ok(Self {
            a,
            b,
            c,
            is_right,
            area,
        })
    }

    #[inline]
    pub fn side_a(&self) -> f64 {
        self.a
    }
    #[inline]
    pub fn side_b(&self) -> f64 {
        self.b
    }
    #[inline]
    pub fn side_c(&self) -> f64 {
        self.c
    }

    /// Sides in declaration order `[a, b, c]`.
    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// Whether some assignment of the sides satisfies `x² + y² = z²` within
    /// `RIGHT_ANGLE_EPS`.
    #[inline]
    pub fn is_right(&self) -> bool {
        self.is_right
    }
}

fn check_side(side: f64, param: &'static str) -> Result<()> {
    if in_range(side, MAX_SIDE_LENGTH) {
        return Ok(());
    }
    tracing::debug!(param, side, "triangle rejected: side out of range");
    Err(ShapeError::OutOfRange {
        param,
        value: side,
        max: MAX_SIDE_LENGTH,
    })
}

fn pythagorean(a: f64, b: f64, c: f64) -> bool {
    let a2 = a * a;
    let b2 = b * b;
    let c2 = c * c;
    (a2 + b2 - c2).abs() < RIGHT_ANGLE_EPS
        || (a2 + c2 - b2).abs() < RIGHT_ANGLE_EPS
        || (b2 + c2 - a2).abs() < RIGHT_ANGLE_EPS
}

fn right_area(a: f64, b: f64, c: f64) -> f64 {
    // Drop the unique maximum; without one, A and B are the legs.
    let (leg1, leg2) = if a > b && a > c {
        (c, b)
    } else if b > a && b > c {
        (a, c)
    } else {
        (a, b)
    };
    0.5 * leg1 * leg2
}

fn heron_area(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    // Rounding can push the product just below zero for near-degenerate input.
    (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
}

impl Shape for Triangle {
    #[inline]
    fn area(&self) -> f64 {
        self.area
    }

    #[inline]
    fn name(&self) -> &'static str {
        "triangle"
    }
}

// Positional comparison: (3,4,5) and (4,3,5) are different triangles.
impl PartialEq for Triangle {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b && self.c == other.c
    }
}

impl Eq for Triangle {}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.a.to_bits().hash(state);
        self.b.to_bits().hash(state);
        self.c.to_bits().hash(state);
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Triangle (SideA: {}, SideB: {}, SideC: {})",
            self.a, self.b, self.c
        )
    }
}

#[cfg(test)]
mod tests;
