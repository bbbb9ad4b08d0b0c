//! Construction errors.

/// Errors raised while constructing a shape. Nothing fails after construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// A single measurement is non-positive, non-finite, or above its maximum.
    #[error("{param} must be greater than zero and not greater than {max} (got {value})")]
    OutOfRange {
        param: &'static str,
        value: f64,
        max: f64,
    },

    /// Every side is in range on its own, but the three cannot close a triangle.
    #[error(
        "invalid triangle sides: the sum of any two sides must be greater than the third side \
         (side_a = {a}, side_b = {b}, side_c = {c})"
    )]
    MalformedTriangle { a: f64, b: f64, c: f64 },
}

impl ShapeError {
    /// Name of the rejected parameter for out-of-range errors.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            ShapeError::OutOfRange { param, .. } => Some(param),
            ShapeError::MalformedTriangle { .. } => None,
        }
    }

    #[inline]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ShapeError::OutOfRange { .. })
    }

    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(self, ShapeError::MalformedTriangle { .. })
    }
}

pub type Result<T> = std::result::Result<T, ShapeError>;
