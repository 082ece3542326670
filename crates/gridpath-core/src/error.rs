//! Error type for grid construction and checked mutation.

use crate::geom::Point;

/// Errors reported by [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Width or height is not positive, or the cell count overflows `i32`.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// A checked accessor was given a coordinate outside the grid.
    #[error("point {0} is outside the grid")]
    OutOfBounds(Point),

    /// Traversal costs must be strictly positive.
    #[error("invalid traversal cost {0}")]
    InvalidCost(f64),
}
