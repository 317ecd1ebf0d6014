use std::fmt;
use std::str::FromStr;

use gridpath_core::Grid;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{MazeError, Result};
use crate::mapgen::{DEFAULT_DENSITY, MazeGen, Skew};

/// Which generator a [`MazeConfig`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MazeKind {
    /// Independent walls at a fixed density.
    Random,
    /// Recursive division.
    #[default]
    Division,
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Random => "random",
            Self::Division => "division",
        })
    }
}

impl FromStr for MazeKind {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "division" | "recursive-division" => Ok(Self::Division),
            _ => Err(MazeError::UnknownKind(s.to_string())),
        }
    }
}

/// A reproducible maze recipe.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    pub kind: MazeKind,
    /// Wall probability for [`MazeKind::Random`].
    pub density: f64,
    /// Split preference for [`MazeKind::Division`].
    pub skew: Skew,
    /// Seed for the generator; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            kind: MazeKind::default(),
            density: DEFAULT_DENSITY,
            skew: Skew::default(),
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Generate into `grid`, returning the number of walls placed.
    pub fn generate(&self, grid: &mut Grid) -> Result<usize> {
        match self.seed {
            Some(seed) => self.generate_with(grid, StdRng::seed_from_u64(seed)),
            None => self.generate_with(grid, rand::rng()),
        }
    }

    fn generate_with<R: rand::Rng>(&self, grid: &mut Grid, rng: R) -> Result<usize> {
        let mut mg = MazeGen::with_grid(grid, rng);
        match self.kind {
            MazeKind::Random => mg.random_maze(self.density),
            MazeKind::Division => mg.recursive_division(self.skew),
        }
    }
}
