//! Terrain cost presets.
//!
//! The grid itself only stores a positive cost per cell. These presets are
//! the three tiers editors paint with.

use std::fmt;

/// A named traversal-cost tier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Terrain {
    /// Open ground.
    #[default]
    Grass,
    /// Difficult terrain.
    Forest,
    /// Impassable in practice.
    Water,
}

impl Terrain {
    pub const GRASS_COST: f64 = 1.0;
    pub const FOREST_COST: f64 = 10.0;
    pub const WATER_COST: f64 = 1000.0;

    /// Traversal cost of this tier.
    #[inline]
    pub const fn cost(self) -> f64 {
        match self {
            Terrain::Grass => Self::GRASS_COST,
            Terrain::Forest => Self::FOREST_COST,
            Terrain::Water => Self::WATER_COST,
        }
    }

    /// Classify an arbitrary cost into the closest tier at or below it.
    pub fn from_cost(cost: f64) -> Self {
        if cost >= Self::WATER_COST {
            Terrain::Water
        } else if cost >= Self::FOREST_COST {
            Terrain::Forest
        } else {
            Terrain::Grass
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Terrain::Grass => "Grass",
            Terrain::Forest => "Forest",
            Terrain::Water => "Water",
        })
    }
}
