//! Open-set strategies for the search loop.
//!
//! A [`Frontier`] holds the discovered-but-unexpanded cells ordered by
//! ascending priority key. Two strategies are provided:
//!
//! | Strategy | `insert` | `extract_min` | `decrease_key` |
//! |---|---|---|---|
//! | [`SortedFrontier`] | O(1) | O(n log n) full sort | O(n) key rewrite |
//! | [`HeapFrontier`] | O(log n) | O(log n) | O(log n) |

use std::fmt;
use std::str::FromStr;

use gridpath_core::CellId;

use crate::heap::IndexedHeap;
use crate::heuristic::ParseKindError;

/// An open set of cells ordered by priority key.
pub trait Frontier {
    /// Add a cell that is not currently in the frontier.
    fn insert(&mut self, cell: CellId, key: f64);

    /// Remove and return the cell with the smallest key.
    fn extract_min(&mut self) -> Option<CellId>;

    /// Tell the frontier that `cell`, already inside it, now has the lower
    /// key `key`.
    fn decrease_key(&mut self, cell: CellId, key: f64);

    /// Number of cells in the frontier.
    fn len(&self) -> usize;

    /// Whether no cell is waiting.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the frontier, returning whatever is left in it, in no
    /// particular order.
    fn into_cells(self) -> Vec<CellId>;
}

// ---------------------------------------------------------------------------
// SortedFrontier
// ---------------------------------------------------------------------------

/// Unoptimized baseline: a plain list sorted in full before every
/// extraction.
#[derive(Clone, Debug, Default)]
pub struct SortedFrontier {
    items: Vec<(CellId, f64)>,
}

impl SortedFrontier {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for SortedFrontier {
    fn insert(&mut self, cell: CellId, key: f64) {
        self.items.push((cell, key));
    }

    fn extract_min(&mut self) -> Option<CellId> {
        if self.items.is_empty() {
            return None;
        }
        self.items.sort_by(|a, b| a.1.total_cmp(&b.1));
        Some(self.items.remove(0).0)
    }

    fn decrease_key(&mut self, cell: CellId, key: f64) {
        // Order is restored by the next extraction's sort.
        if let Some(entry) = self.items.iter_mut().find(|(c, _)| *c == cell) {
            entry.1 = key;
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn into_cells(self) -> Vec<CellId> {
        self.items.into_iter().map(|(c, _)| c).collect()
    }
}

// ---------------------------------------------------------------------------
// HeapFrontier
// ---------------------------------------------------------------------------

/// Binary min-heap with O(log n) decrease-key.
#[derive(Clone, Debug, Default)]
pub struct HeapFrontier {
    heap: IndexedHeap<CellId, f64>,
}

impl HeapFrontier {
    /// An empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty heap with room for `capacity` cells.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: IndexedHeap::with_capacity(capacity),
        }
    }
}

impl Frontier for HeapFrontier {
    fn insert(&mut self, cell: CellId, key: f64) {
        debug_assert!(!self.heap.contains(cell), "{cell} inserted twice");
        self.heap.push(cell, key);
    }

    fn extract_min(&mut self) -> Option<CellId> {
        self.heap.pop().map(|(cell, _)| cell)
    }

    fn decrease_key(&mut self, cell: CellId, key: f64) {
        let res = self.heap.decrease_key(cell, key);
        debug_assert!(res.is_ok(), "decrease_key on {cell} which is not in the frontier");
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn into_cells(self) -> Vec<CellId> {
        self.heap.into_vec()
    }
}

// ---------------------------------------------------------------------------
// FrontierKind
// ---------------------------------------------------------------------------

/// Which [`Frontier`] strategy a search uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FrontierKind {
    /// [`SortedFrontier`].
    SortedList,
    /// [`HeapFrontier`].
    #[default]
    BinaryHeap,
}

impl FrontierKind {
    /// Every frontier kind, in report order.
    pub const ALL: [FrontierKind; 2] = [FrontierKind::SortedList, FrontierKind::BinaryHeap];
}

impl fmt::Display for FrontierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FrontierKind::SortedList => "sorted",
            FrontierKind::BinaryHeap => "heap",
        })
    }
}

impl FromStr for FrontierKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sorted" | "sorted-list" | "list" => Ok(FrontierKind::SortedList),
            "heap" | "binary-heap" => Ok(FrontierKind::BinaryHeap),
            _ => Err(ParseKindError {
                kind: "frontier",
                name: s.to_owned(),
            }),
        }
    }
}
