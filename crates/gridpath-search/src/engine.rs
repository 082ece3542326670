use gridpath_core::{CellId, Grid};

// ---------------------------------------------------------------------------
// Per-cell search state
// ---------------------------------------------------------------------------

/// Where a cell stands in the most recent search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CellStatus {
    #[default]
    Unvisited,
    Open,
    Closed,
}

/// Transient search state for one cell. Only meaningful when `generation`
/// equals the engine's current generation; anything else reads as
/// [`CellStatus::Unvisited`].
#[derive(Clone, Debug, Default)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) parent: Option<CellId>,
    pub(crate) generation: u32,
    pub(crate) status: CellStatus,
}

impl Node {
    #[inline]
    pub(crate) fn key(&self) -> f64 {
        self.g + self.h
    }
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// Runs shortest-path searches over a [`Grid`].
///
/// The engine owns one [`Node`] per cell and reuses them across searches.
/// Instead of clearing the table before each run it bumps a generation
/// counter: a node stamped with an older generation is treated as
/// unvisited, so starting a search costs O(1) rather than O(cells).
///
/// Searches take `&mut self`, so two searches can never interleave on the
/// same state.
#[derive(Clone, Debug)]
pub struct SearchEngine {
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
}

impl SearchEngine {
    /// Create an engine sized for `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self::with_capacity(grid.len())
    }

    /// Create an engine with node storage for `cells` cells. The table grows
    /// on demand if a larger grid is searched later.
    pub fn with_capacity(cells: usize) -> Self {
        Self {
            nodes: vec![Node::default(); cells],
            generation: 0,
        }
    }

    /// Generation of the most recent search (0 before the first one).
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Status of `id` as left by the most recent search.
    pub fn status(&self, id: CellId) -> CellStatus {
        match self.current(id) {
            Some(n) => n.status,
            None => CellStatus::Unvisited,
        }
    }

    /// Accumulated cost from the source of the most recent search, if the
    /// cell was reached by it.
    pub fn path_cost(&self, id: CellId) -> Option<f64> {
        self.current(id)
            .filter(|n| n.status != CellStatus::Unvisited)
            .map(|n| n.g)
    }

    #[inline]
    fn current(&self, id: CellId) -> Option<&Node> {
        self.nodes
            .get(id.index())
            .filter(|n| self.generation != 0 && n.generation == self.generation)
    }

    /// Start a new run over `cells` cells and return its generation.
    ///
    /// Grows the node table if needed. On counter wrap-around every node is
    /// restamped to 0 once so that no stale stamp can match a new
    /// generation.
    pub(crate) fn begin_run(&mut self, cells: usize) -> u32 {
        if self.nodes.len() < cells {
            self.nodes.resize(cells, Node::default());
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            log::trace!("search generation wrapped, resetting {} nodes", self.nodes.len());
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.generation
    }

    /// Walk predecessor links back from `destination`.
    pub(crate) fn build_route(&self, destination: CellId) -> Vec<CellId> {
        let mut route = Vec::new();
        let mut cur = Some(destination);
        while let Some(id) = cur {
            route.push(id);
            cur = self.nodes[id.index()].parent;
        }
        route.reverse();
        route
    }
}
