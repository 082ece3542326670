//! Heuristics, algorithm selection and the grid step cost.

use std::fmt;
use std::str::FromStr;

use gridpath_core::{CellId, Grid, Point};

/// Cost multiplier for a diagonal step.
pub const DIAGONAL_FACTOR: f64 = 1.5;

/// Cost of stepping from `from` into the adjacent cell `to`: the cost of
/// `to`, times [`DIAGONAL_FACTOR`] when the step is diagonal.
#[inline]
pub fn step_cost(grid: &Grid, from: CellId, to: CellId) -> f64 {
    let cost = grid.cost(to);
    if grid.pos(from).dist_sq(grid.pos(to)) > 1 {
        cost * DIAGONAL_FACTOR
    } else {
        cost
    }
}

/// Sum of [`step_cost`] along `route`. The first cell is free.
pub fn route_cost(grid: &Grid, route: &[CellId]) -> f64 {
    route
        .windows(2)
        .map(|w| step_cost(grid, w[0], w[1]))
        .sum()
}

/// An estimate of the remaining cost from one cell to the destination.
///
/// Implementations must never overestimate the true cost (admissible), or
/// searches may return a suboptimal route.
pub trait Heuristic {
    /// Lower bound on the cost of reaching `to` from `from`.
    fn estimate(&self, from: Point, to: Point) -> f64;
}

/// The zero heuristic; searching with it is uniform-cost search.
#[derive(Copy, Clone, Debug, Default)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: Point, _to: Point) -> f64 {
        0.0
    }
}

/// Octile-style distance for straight cost 1 and diagonal cost 1.5:
/// `dx + dy - 0.5 * min(dx, dy)`.
///
/// Admissible only while every cell costs at least 1, which holds for all
/// [`Terrain`](gridpath_core::Terrain) presets.
#[derive(Copy, Clone, Debug, Default)]
pub struct Octile;

impl Heuristic for Octile {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        f64::from(dx + dy) - 0.5 * f64::from(dx.min(dy))
    }
}

/// Which search to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    /// Dijkstra: [`Zero`] heuristic.
    #[default]
    UniformCost,
    /// A*: [`Octile`] heuristic.
    HeuristicGuided,
}

impl Algorithm {
    /// Every algorithm, in report order.
    pub const ALL: [Algorithm; 2] = [Algorithm::UniformCost, Algorithm::HeuristicGuided];

    /// Human-readable mode name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::UniformCost => "Dijkstra",
            Algorithm::HeuristicGuided => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::UniformCost => "dijkstra",
            Algorithm::HeuristicGuided => "astar",
        })
    }
}

/// Error parsing an [`Algorithm`] or [`FrontierKind`](crate::FrontierKind) name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{name}`")]
pub struct ParseKindError {
    pub(crate) kind: &'static str,
    pub(crate) name: String,
}

impl FromStr for Algorithm {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" | "uniform-cost" | "ucs" => Ok(Algorithm::UniformCost),
            "astar" | "a*" | "heuristic-guided" => Ok(Algorithm::HeuristicGuided),
            _ => Err(ParseKindError {
                kind: "algorithm",
                name: s.to_owned(),
            }),
        }
    }
}
