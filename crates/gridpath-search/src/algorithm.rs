//! The closed set of search strategies and their static descriptors.

use std::fmt;
use std::str::FromStr;

use crate::astar::AStar;
use crate::bfs::BreadthFirst;
use crate::dijkstra::Dijkstra;
use crate::error::UnknownAlgorithm;
use crate::traits::Strategy;

/// Supported search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// A* search (heuristic guided, weighted, optimal).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "a-star"))]
    AStar,
    /// Uniform-cost search (weighted, optimal).
    #[cfg_attr(feature = "serde", serde(rename = "dijkstra"))]
    Dijkstra,
    /// Breadth-first search (unweighted).
    #[cfg_attr(feature = "serde", serde(rename = "bfs"))]
    BreadthFirst,
}

impl Algorithm {
    /// Every strategy, in listing order.
    pub const ALL: [Algorithm; 3] = [Self::AStar, Self::Dijkstra, Self::BreadthFirst];

    /// Display name for selection lists.
    pub fn name(self) -> &'static str {
        match self {
            Self::AStar => "A* Search",
            Self::Dijkstra => "Dijkstra's Algorithm",
            Self::BreadthFirst => "Breadth-First Search",
        }
    }

    /// One-line description for selection lists.
    pub fn description(self) -> &'static str {
        match self {
            Self::AStar => {
                "Weighted and guided by a Manhattan-distance heuristic; guarantees the shortest path."
            }
            Self::Dijkstra => {
                "Weighted; expands the cheapest frontier cell first and guarantees the shortest path."
            }
            Self::BreadthFirst => {
                "Unweighted; explores in rings of equal hop count and guarantees the fewest steps."
            }
        }
    }

    /// Whether cell weights affect the result.
    pub fn is_weighted(self) -> bool {
        !matches!(self, Self::BreadthFirst)
    }

    /// The shared-behaviour object driving this strategy.
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Self::AStar => &AStar,
            Self::Dijkstra => &Dijkstra,
            Self::BreadthFirst => &BreadthFirst,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::AStar => "a-star",
            Self::Dijkstra => "dijkstra",
            Self::BreadthFirst => "bfs",
        };
        f.write_str(value)
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a-star" | "astar" | "a*" => Ok(Self::AStar),
            "dijkstra" | "ucs" => Ok(Self::Dijkstra),
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
