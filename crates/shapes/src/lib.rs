//! Validated planar shapes with closed-form areas.
//!
//! Purpose
//! - Two immutable value types, `Circle` and `Triangle`, that validate their
//!   measurements once at construction and expose area (and, for triangles,
//!   the right-angle predicate) as plain reads afterwards.
//! - A small `Shape` contract so callers can hold heterogeneous shapes and ask
//!   for area uniformly.
//!
//! Conventions
//! - Shapes are defined by scalar measurements only; there are no coordinates.
//! - Construction is the only fallible step. Everything after it is total.
//! - Equality and hashing cover the measured fields only, compared bit-exact.
//!
//! Code cross-refs: `Shape`, `AnyShape`, `Circle`, `Triangle`, `ShapeError`.

pub mod cfg;
pub mod circle;
pub mod error;
pub mod rand;
pub mod shape;
pub mod triangle;

pub use cfg::{MAX_RADIUS, MAX_SIDE_LENGTH, RIGHT_ANGLE_EPS};
pub use circle::Circle;
pub use error::{Result, ShapeError};
pub use shape::{total_area, AnyShape, Shape};
pub use triangle::Triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{
        draw_circle, draw_right_triangle, draw_triangle, ReplayToken, SampleCfg,
        RIGHT_DRAW_MAX_LEN,
    };
    pub use crate::{AnyShape, Circle, Shape, ShapeError, Triangle};
}
