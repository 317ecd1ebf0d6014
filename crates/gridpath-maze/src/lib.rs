//! Maze generators for gridpath grids.
//!
//! [`MazeGen`] borrows a [`Grid`](gridpath_core::Grid) and an RNG and can fill
//! it with random walls or a recursive-division maze. [`MazeExt`] offers the
//! same as methods on the grid, and [`MazeConfig`] bundles the choices into a
//! reproducible recipe.

mod config;
mod error;
mod ext;
mod mapgen;

pub use config::{MazeConfig, MazeKind};
pub use error::{MazeError, Result};
pub use ext::MazeExt;
pub use mapgen::{DEFAULT_DENSITY, MazeGen, Skew};
