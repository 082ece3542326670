//! **gridpath-core**: the grid graph searched by `gridpath-search`.
//!
//! This crate provides geometry primitives, the [`Grid`] of [`Cell`]s with
//! precomputed 8-way neighbour links and mutable traversal costs, and the
//! [`Terrain`] cost presets.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod terrain;

pub use cell::{Cell, CellId};
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use terrain::Terrain;
