//! Side-by-side runs of several strategies on the same problem.

use gridpath_core::{Cost, Grid};

use crate::{Algorithm, Search, SearchResult, path_cost};

/// One strategy's run over its own copy of the grid.
#[derive(Debug, Clone)]
pub struct Alternative {
    pub algorithm: Algorithm,
    /// The clone the strategy ran on, with its visited and path marks.
    pub grid: Grid,
    pub result: SearchResult,
}

impl Alternative {
    /// Weighted cost of the path found, or `None` when there is none.
    pub fn cost(&self) -> Option<Cost> {
        self.result
            .path_found
            .then(|| path_cost(&self.grid, &self.result.path))
    }
}

/// Run each of `algorithms` on an independent clone of `grid`.
///
/// Walls, weights and roles must be settled before calling; `grid` itself is
/// left untouched.
pub fn compare(grid: &Grid, algorithms: &[Algorithm], visualize: bool) -> Vec<Alternative> {
    algorithms
        .iter()
        .map(|&algorithm| {
            let mut copy = grid.clone();
            let result = Search::new(&mut copy, algorithm).run(visualize);
            Alternative {
                algorithm,
                grid: copy,
                result,
            }
        })
        .collect()
}

/// The alternative with the lowest path cost; ties go to the earlier entry.
pub fn cheapest(alternatives: &[Alternative]) -> Option<&Alternative> {
    alternatives
        .iter()
        .filter_map(|alt| alt.cost().map(|c| (c, alt)))
        .min_by_key(|(c, _)| *c)
        .map(|(_, alt)| alt)
}
