use gridpath_core::{CellId, Grid, Point};

use crate::engine::{CellStatus, Node, SearchEngine};
use crate::frontier::{Frontier, FrontierKind, HeapFrontier, SortedFrontier};
use crate::heuristic::{Algorithm, Heuristic, Octile, Zero, step_cost};
use crate::path::Path;

impl SearchEngine {
    /// Find the cheapest route from `start` to `destination`.
    ///
    /// `algorithm` picks the heuristic and `frontier` the open-set
    /// strategy. Both strategies return routes of equal cost; they may break
    /// ties differently. An unreachable destination yields a [`Path`] with an
    /// empty route. Searching from a cell to itself yields a one-cell route.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `destination` is not a cell of `grid`.
    pub fn search(
        &mut self,
        grid: &Grid,
        start: CellId,
        destination: CellId,
        algorithm: Algorithm,
        frontier: FrontierKind,
    ) -> Path {
        let path = match algorithm {
            Algorithm::UniformCost => self.search_kind(grid, start, destination, &Zero, frontier),
            Algorithm::HeuristicGuided => {
                self.search_kind(grid, start, destination, &Octile, frontier)
            }
        };
        log::debug!(
            "{algorithm} search ({frontier} frontier) {} -> {}: found={} visited={} route={} cost={:?}",
            grid.pos(start),
            grid.pos(destination),
            path.is_found(),
            path.nodes_visited(),
            path.route().len(),
            path.cost(),
        );
        path
    }

    /// [`search`](Self::search) between two coordinates. Returns `None` if
    /// either point is outside the grid.
    pub fn search_points(
        &mut self,
        grid: &Grid,
        start: Point,
        destination: Point,
        algorithm: Algorithm,
        frontier: FrontierKind,
    ) -> Option<Path> {
        let s = grid.id(start)?;
        let d = grid.id(destination)?;
        Some(self.search(grid, s, d, algorithm, frontier))
    }

    fn search_kind<H: Heuristic>(
        &mut self,
        grid: &Grid,
        start: CellId,
        destination: CellId,
        heuristic: &H,
        kind: FrontierKind,
    ) -> Path {
        match kind {
            FrontierKind::SortedList => {
                self.search_with(grid, start, destination, heuristic, SortedFrontier::new())
            }
            FrontierKind::BinaryHeap => {
                self.search_with(grid, start, destination, heuristic, HeapFrontier::new())
            }
        }
    }

    /// The shared search loop, for any heuristic and frontier.
    ///
    /// `frontier` should be empty; it is consumed and whatever remains in it
    /// at termination becomes the path's open set.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `destination` is not a cell of `grid`.
    pub fn search_with<H: Heuristic, F: Frontier>(
        &mut self,
        grid: &Grid,
        start: CellId,
        destination: CellId,
        heuristic: &H,
        mut frontier: F,
    ) -> Path {
        let cur_gen = self.begin_run(grid.len());
        let goal = grid.pos(destination);

        {
            let node = &mut self.nodes[start.index()];
            *node = Node {
                g: 0.0,
                h: heuristic.estimate(grid.pos(start), goal),
                parent: None,
                generation: cur_gen,
                status: CellStatus::Open,
            };
            frontier.insert(start, node.key());
        }

        let mut closed = Vec::new();
        let mut found = false;

        while let Some(active) = frontier.extract_min() {
            let node = &mut self.nodes[active.index()];
            node.status = CellStatus::Closed;
            let active_g = node.g;
            closed.push(active);

            if active == destination {
                found = true;
                break;
            }

            for &nb in grid[active].neighbors() {
                let n = &mut self.nodes[nb.index()];
                if n.generation != cur_gen {
                    *n = Node {
                        generation: cur_gen,
                        ..Node::default()
                    };
                }

                let tentative = active_g + step_cost(grid, active, nb);
                if !tentative.is_finite() {
                    continue;
                }
                match n.status {
                    CellStatus::Closed => {}
                    CellStatus::Unvisited => {
                        n.parent = Some(active);
                        n.g = tentative;
                        n.h = heuristic.estimate(grid.pos(nb), goal);
                        n.status = CellStatus::Open;
                        frontier.insert(nb, n.key());
                    }
                    CellStatus::Open => {
                        if tentative < n.g {
                            n.parent = Some(active);
                            n.g = tentative;
                            frontier.decrease_key(nb, n.key());
                        }
                    }
                }
            }
        }

        let (route, cost) = if found {
            (
                self.build_route(destination),
                Some(self.nodes[destination.index()].g),
            )
        } else {
            (Vec::new(), None)
        };
        Path::new(route, frontier.into_cells(), closed, cost)
    }
}
