//! Shortest-path search over a [`gridpath_core::Grid`].
//!
//! The crate provides one search loop parameterized by two small
//! strategy sets:
//!
//! - a [`Heuristic`]: [`Zero`] (uniform-cost / Dijkstra) or [`Octile`] (A*),
//!   selected with [`Algorithm`];
//! - a [`Frontier`]: [`SortedFrontier`] (full sort per extraction) or
//!   [`HeapFrontier`] (binary heap with decrease-key), selected with
//!   [`FrontierKind`].
//!
//! [`SearchEngine`] owns per-cell search state and reuses it across
//! searches through generation stamps, so no search pays for clearing the
//! whole grid.
//!
//! ```
//! use gridpath_core::{Grid, Point, Terrain};
//! use gridpath_search::{Algorithm, FrontierKind, SearchEngine};
//!
//! let mut grid = Grid::new(5, 5).unwrap();
//! grid.set_terrain(Point::new(2, 2), Terrain::Water).unwrap();
//!
//! let mut engine = SearchEngine::new(&grid);
//! let path = engine
//!     .search_points(
//!         &grid,
//!         Point::new(0, 0),
//!         Point::new(4, 4),
//!         Algorithm::HeuristicGuided,
//!         FrontierKind::BinaryHeap,
//!     )
//!     .unwrap();
//! assert_eq!(path.cost(), Some(6.5));
//! ```

mod engine;
mod frontier;
mod heap;
mod heuristic;
mod path;
mod search;

pub use engine::{CellStatus, SearchEngine};
pub use frontier::{Frontier, FrontierKind, HeapFrontier, SortedFrontier};
pub use heap::{HeapError, IndexedHeap};
pub use heuristic::{
    Algorithm, DIAGONAL_FACTOR, Heuristic, Octile, ParseKindError, Zero, route_cost, step_cost,
};
pub use path::Path;
