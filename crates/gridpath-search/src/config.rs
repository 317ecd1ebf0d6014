use gridpath_core::Grid;

use crate::{Algorithm, Search, SearchResult};

/// What a front end chooses before pressing "run".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    /// Keep the finalization order in [`SearchResult::visited`] for replay.
    pub visualize: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AStar,
            visualize: true,
        }
    }
}

impl SearchConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Run the configured strategy to completion on `grid`.
    pub fn run(&self, grid: &mut Grid) -> SearchResult {
        Search::new(grid, self.algorithm).run(self.visualize)
    }
}
