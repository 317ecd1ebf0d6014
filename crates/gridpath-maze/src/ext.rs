use gridpath_core::Grid;

use crate::error::Result;
use crate::mapgen::{MazeGen, Skew};

/// Maze generation as methods on [`Grid`], drawing from the thread RNG.
///
/// Use [`MazeGen`] directly (or a seeded [`MazeConfig`](crate::MazeConfig))
/// for reproducible mazes.
pub trait MazeExt {
    /// See [`MazeGen::random_maze`].
    fn generate_random_maze(&mut self, density: f64) -> Result<usize>;

    /// See [`MazeGen::recursive_division`].
    fn generate_recursive_division_maze(&mut self, skew: Skew) -> Result<usize>;
}

impl MazeExt for Grid {
    fn generate_random_maze(&mut self, density: f64) -> Result<usize> {
        MazeGen::with_grid(self, rand::rng()).random_maze(density)
    }

    fn generate_recursive_division_maze(&mut self, skew: Skew) -> Result<usize> {
        MazeGen::with_grid(self, rand::rng()).recursive_division(skew)
    }
}
