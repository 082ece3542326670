//! The [`Path`] search result.

use gridpath_core::{CellId, Grid, Point};

/// Result of one search: the route plus the final open and closed sets.
///
/// `open` and `closed` are visualization data. `closed` lists cells in
/// expansion order and is the authoritative "nodes visited" count. `open`
/// is whatever was left in the frontier when the search stopped, in no
/// particular order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    route: Vec<CellId>,
    open: Vec<CellId>,
    closed: Vec<CellId>,
    cost: Option<f64>,
}

impl Path {
    pub(crate) fn new(
        route: Vec<CellId>,
        open: Vec<CellId>,
        closed: Vec<CellId>,
        cost: Option<f64>,
    ) -> Self {
        Self {
            route,
            open,
            closed,
            cost,
        }
    }

    /// Cells from source to destination, or empty if the destination was
    /// not reached.
    #[inline]
    pub fn route(&self) -> &[CellId] {
        &self.route
    }

    /// Cells still in the frontier at termination.
    #[inline]
    pub fn open(&self) -> &[CellId] {
        &self.open
    }

    /// Expanded cells, in expansion order.
    #[inline]
    pub fn closed(&self) -> &[CellId] {
        &self.closed
    }

    /// Whether the destination was reached.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.route.is_empty()
    }

    /// Accumulated cost of the route, `None` if not found.
    #[inline]
    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    /// Number of expanded cells.
    #[inline]
    pub fn nodes_visited(&self) -> usize {
        self.closed.len()
    }

    /// First cell of the route.
    #[inline]
    pub fn start(&self) -> Option<CellId> {
        self.route.first().copied()
    }

    /// Last cell of the route.
    #[inline]
    pub fn destination(&self) -> Option<CellId> {
        self.route.last().copied()
    }

    /// Route positions on `grid`.
    pub fn points(&self, grid: &Grid) -> Vec<Point> {
        self.route.iter().map(|&id| grid.pos(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path() {
        let p = Path::default();
        assert!(!p.is_found());
        assert_eq!(p.cost(), None);
        assert_eq!(p.start(), None);
        assert_eq!(p.destination(), None);
        assert_eq!(p.nodes_visited(), 0);
    }

    #[test]
    fn endpoints_and_points() {
        let g = Grid::new(3, 1).unwrap();
        let route = vec![CellId(0), CellId(1), CellId(2)];
        let p = Path::new(route, vec![], vec![CellId(0), CellId(1), CellId(2)], Some(2.0));
        assert!(p.is_found());
        assert_eq!(p.start(), Some(CellId(0)));
        assert_eq!(p.destination(), Some(CellId(2)));
        assert_eq!(p.nodes_visited(), 3);
        assert_eq!(
            p.points(&g),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }
}
