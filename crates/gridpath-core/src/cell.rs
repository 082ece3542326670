//! The [`Cell`] type: one node of the grid graph.

use std::fmt;

use crate::geom::Point;
use crate::terrain::Terrain;

/// Identity of a cell: its row-major index in the owning [`Grid`](crate::Grid).
///
/// Ids are stable for the lifetime of the grid and are what search state,
/// frontiers and predecessor links refer to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(pub usize);

impl CellId {
    /// The raw index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A grid cell with a fixed position, a fixed neighbour list and a mutable
/// traversal cost.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pos: Point,
    pub(crate) cost: f64,
    pub(crate) neighbors: Vec<CellId>,
}

impl Cell {
    pub(crate) fn new(pos: Point) -> Self {
        Self {
            pos,
            cost: Terrain::GRASS_COST,
            neighbors: Vec::with_capacity(8),
        }
    }

    /// Position of the cell.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Cost of entering this cell.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The terrain tier the cost falls into.
    #[inline]
    pub fn terrain(&self) -> Terrain {
        Terrain::from_cost(self.cost)
    }

    /// Adjacent cells, straight and diagonal, clipped at grid edges.
    #[inline]
    pub fn neighbors(&self) -> &[CellId] {
        &self.neighbors
    }
}
