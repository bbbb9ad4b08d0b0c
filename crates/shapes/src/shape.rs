//! The `Shape` contract and a closed sum type over the concrete shapes.

use std::fmt;

use crate::{Circle, Triangle};

/// Anything with a well-defined area.
///
/// Post: for a validly constructed shape, `area()` is finite and `>= 0`. It is
/// `> 0` except for near-degenerate triangles, where rounding in Heron's
/// formula can collapse the area to zero.
pub trait Shape {
    fn area(&self) -> f64;

    /// Short lowercase kind name, used in reports and logs.
    fn name(&self) -> &'static str;
}

/// Closed set of shapes this crate knows how to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnyShape {
    Circle(Circle),
    Triangle(Triangle),
}

impl Shape for AnyShape {
    #[inline]
    fn area(&self) -> f64 {
        match self {
            AnyShape::Circle(c) => c.area(),
            AnyShape::Triangle(t) => t.area(),
        }
    }

    #[inline]
    fn name(&self) -> &'static str {
        match self {
            AnyShape::Circle(c) => c.name(),
            AnyShape::Triangle(t) => t.name(),
        }
    }
}

impl From<Circle> for AnyShape {
    fn from(c: Circle) -> Self {
        AnyShape::Circle(c)
    }
}

impl From<Triangle> for AnyShape {
    fn from(t: Triangle) -> Self {
        AnyShape::Triangle(t)
    }
}

impl fmt::Display for AnyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyShape::Circle(c) => fmt::Display::fmt(c, f),
            AnyShape::Triangle(t) => fmt::Display::fmt(t, f),
        }
    }
}

/// Sum of areas over heterogeneous shapes.
pub fn total_area(shapes: &[&dyn Shape]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}
