//! The [`Grid`] type: a fixed-size 2D array of [`Cell`]s.
//!
//! Neighbour links are computed once at construction: every in-bounds cell
//! within Chebyshev distance 1, so interior cells have 8 neighbours, edge
//! cells 5 and corner cells 3. Costs are the only mutable part of the graph.

use std::ops::Index;

use crate::cell::{Cell, CellId};
use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::terrain::Terrain;

/// A `width × height` grid graph stored row-major.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a grid of grass cells and link every cell to its neighbours.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions { width, height };
        if width <= 0 || height <= 0 {
            return Err(invalid);
        }
        // Cell ids are computed as `y * width + x` in i32.
        let len = width.checked_mul(height).ok_or(invalid)? as usize;

        let bounds = Range::new(0, 0, width, height);
        let mut cells: Vec<Cell> = bounds.iter().map(Cell::new).collect();
        debug_assert_eq!(cells.len(), len);

        for cell in cells.iter_mut() {
            let p = cell.pos();
            let min_x = (p.x - 1).max(0);
            let max_x = (p.x + 1).min(width - 1);
            let min_y = (p.y - 1).max(0);
            let max_y = (p.y + 1).min(height - 1);
            for x in min_x..=max_x {
                for y in min_y..=max_y {
                    if x == p.x && y == p.y {
                        continue;
                    }
                    cell.neighbors.push(CellId((y * width + x) as usize));
                }
            }
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The rectangle covered by the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Id of the cell at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn id(&self, p: Point) -> Option<CellId> {
        self.contains(p)
            .then(|| CellId((p.y * self.width + p.x) as usize))
    }

    /// Position of the cell with id `id`.
    #[inline]
    pub fn pos(&self, id: CellId) -> Point {
        self.cells[id.0].pos()
    }

    /// The cell at (x, y) with no bounds check beyond the backing storage.
    ///
    /// Meant for hot paths whose coordinates are already known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> &Cell {
        assert!(
            self.contains(Point::new(x, y)),
            "({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[(y * self.width + x) as usize]
    }

    /// The cell at (x, y), or `None` when the coordinate is out of bounds.
    ///
    /// Use this for untrusted coordinates such as pointer positions.
    #[inline]
    pub fn try_get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.id(Point::new(x, y)).map(|id| &self.cells[id.0])
    }

    /// Traversal cost of the cell `id`.
    #[inline]
    pub fn cost(&self, id: CellId) -> f64 {
        self.cells[id.0].cost
    }

    /// Set the traversal cost of the cell at `p`.
    ///
    /// Costs must be strictly positive. `f64::INFINITY` makes the cell
    /// impassable: searches never step into it.
    ///
    /// Costs below 1 are accepted, but the octile heuristic assumes every
    /// step costs at least 1. On grids with such cells A* may return a
    /// costlier route than Dijkstra.
    pub fn set_cost(&mut self, p: Point, cost: f64) -> Result<(), GridError> {
        check_cost(cost)?;
        let id = self.id(p).ok_or(GridError::OutOfBounds(p))?;
        self.cells[id.0].cost = cost;
        Ok(())
    }

    /// Set the cell at `p` to a terrain preset.
    pub fn set_terrain(&mut self, p: Point, terrain: Terrain) -> Result<(), GridError> {
        self.set_cost(p, terrain.cost())
    }

    /// Set the cost of every in-bounds cell of `r`. Cells of `r` outside the
    /// grid are skipped. Returns the number of cells painted.
    pub fn fill(&mut self, r: Range, cost: f64) -> Result<usize, GridError> {
        check_cost(cost)?;
        let mut painted = 0;
        for p in r.intersect(self.bounds()) {
            let i = (p.y * self.width + p.x) as usize;
            self.cells[i].cost = cost;
            painted += 1;
        }
        Ok(painted)
    }

    /// Restore every cell to grass.
    pub fn reset_costs(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.cost = Terrain::GRASS_COST;
        }
    }

    /// Row-major iterator over `(CellId, &Cell)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (CellId, &Cell)> + '_ {
        self.cells.iter().enumerate().map(|(i, c)| (CellId(i), c))
    }
}

impl Index<CellId> for Grid {
    type Output = Cell;

    #[inline]
    fn index(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }
}

fn check_cost(cost: f64) -> Result<(), GridError> {
    if cost > 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidCost(cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            GridError::InvalidDimensions {
                width: 0,
                height: 5
            }
        );
        assert!(Grid::new(5, -1).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn rejects_cell_count_past_i32() {
        assert_eq!(
            Grid::new(65536, 65536).unwrap_err(),
            GridError::InvalidDimensions {
                width: 65536,
                height: 65536
            }
        );
        assert!(Grid::new(i32::MAX, 2).is_err());
    }

    #[test]
    fn new_grid_is_grass() {
        let g = Grid::new(4, 3).unwrap();
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.len(), 12);
        assert!(g.iter().all(|(_, c)| c.cost() == 1.0));
        assert!(g.iter().all(|(_, c)| c.terrain() == Terrain::Grass));
    }

    #[test]
    fn neighbor_counts() {
        let g = Grid::new(5, 4).unwrap();
        assert_eq!(g.get(0, 0).neighbors().len(), 3);
        assert_eq!(g.get(4, 3).neighbors().len(), 3);
        assert_eq!(g.get(2, 0).neighbors().len(), 5);
        assert_eq!(g.get(0, 2).neighbors().len(), 5);
        assert_eq!(g.get(2, 2).neighbors().len(), 8);
    }

    #[test]
    fn neighbors_are_chebyshev_adjacent() {
        let g = Grid::new(6, 6).unwrap();
        for (id, cell) in g.iter() {
            for &n in cell.neighbors() {
                assert_ne!(n, id);
                let d = g.pos(n) - cell.pos();
                assert!(d.x.abs() <= 1 && d.y.abs() <= 1);
                assert!(g[n].neighbors().contains(&id));
            }
        }
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let g = Grid::new(1, 1).unwrap();
        assert!(g.get(0, 0).neighbors().is_empty());
    }

    #[test]
    fn try_get_bounds() {
        let g = Grid::new(3, 3).unwrap();
        assert_eq!(g.try_get(2, 2).map(|c| c.pos()), Some(Point::new(2, 2)));
        assert!(g.try_get(3, 0).is_none());
        assert!(g.try_get(0, -1).is_none());
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds_panics() {
        let g = Grid::new(3, 3).unwrap();
        let _ = g.get(3, 1);
    }

    #[test]
    fn id_and_pos_agree() {
        let g = Grid::new(7, 3).unwrap();
        for p in g.bounds() {
            let id = g.id(p).unwrap();
            assert_eq!(g.pos(id), p);
            assert_eq!(g[id].pos(), p);
        }
        assert_eq!(g.id(Point::new(7, 0)), None);
    }

    #[test]
    fn set_cost_validates() {
        let mut g = Grid::new(3, 3).unwrap();
        let p = Point::new(1, 1);
        g.set_cost(p, 10.0).unwrap();
        assert_eq!(g.get(1, 1).cost(), 10.0);
        assert_eq!(g.set_cost(p, 0.0), Err(GridError::InvalidCost(0.0)));
        assert!(g.set_cost(p, f64::NAN).is_err());
        assert!(g.set_cost(p, -2.0).is_err());
        g.set_cost(p, 0.5).unwrap();
        assert_eq!(g.get(1, 1).cost(), 0.5);
        g.set_cost(p, f64::INFINITY).unwrap();
        assert_eq!(g.get(1, 1).terrain(), Terrain::Water);
        assert_eq!(
            g.set_cost(Point::new(5, 5), 1.0),
            Err(GridError::OutOfBounds(Point::new(5, 5)))
        );
        g.set_terrain(p, Terrain::Water).unwrap();
        assert_eq!(g.get(1, 1).terrain(), Terrain::Water);
    }

    #[test]
    fn fill_clips_to_bounds() {
        let mut g = Grid::new(4, 4).unwrap();
        let painted = g.fill(Range::around(Point::new(0, 0), 1), 10.0).unwrap();
        assert_eq!(painted, 4);
        assert_eq!(g.get(1, 1).cost(), 10.0);
        assert_eq!(g.get(2, 2).cost(), 1.0);
        g.reset_costs();
        assert!(g.iter().all(|(_, c)| c.cost() == 1.0));
    }
}
