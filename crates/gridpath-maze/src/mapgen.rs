//! Maze generators.
//!
//! Provides two generators over a borrowed [`Grid`]:
//! - **Random density**: every free cell becomes a wall independently.
//! - **Recursive division**: walls the border, then splits the interior with
//!   wall lines that each keep a single passage.
//!
//! Both clear the grid first and pick fresh start and end cells.

use std::fmt;
use std::str::FromStr;

use gridpath_core::{Grid, Pos, Rect};
use log::debug;
use rand::{Rng, RngExt};

use crate::error::{MazeError, Result};

/// Wall probability used when a caller has no preference.
pub const DEFAULT_DENSITY: f64 = 0.35;

/// Preferred split orientation for square sub-rectangles in
/// [`MazeGen::recursive_division`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Skew {
    #[default]
    Balanced,
    Vertical,
    Horizontal,
}

impl Skew {
    pub const ALL: [Skew; 3] = [Self::Balanced, Self::Vertical, Self::Horizontal];

    /// Probability of a vertical wall when width and height are equal.
    pub fn vertical_probability(self) -> f64 {
        match self {
            Self::Balanced => 0.5,
            Self::Vertical => 0.7,
            Self::Horizontal => 0.3,
        }
    }
}

impl fmt::Display for Skew {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Balanced => "balanced",
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        })
    }
}

impl FromStr for Skew {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "balanced" => Ok(Self::Balanced),
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            _ => Err(MazeError::UnknownSkew(s.to_string())),
        }
    }
}

/// Maze generator operating on a borrowed [`Grid`].
pub struct MazeGen<'g, R: Rng> {
    pub rng: R,
    pub grid: &'g mut Grid,
}

impl<'g, R: Rng> MazeGen<'g, R> {
    pub fn with_grid(grid: &'g mut Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Scatter walls uniformly.
    ///
    /// Clears the grid, picks a random start and end, then walls every other
    /// cell with probability `density` (clamped to `[0, 1]`; NaN and
    /// infinities count as zero). Nothing guarantees the end stays reachable.
    ///
    /// Returns the number of walls placed.
    pub fn random_maze(&mut self, density: f64) -> Result<usize> {
        self.check_size()?;
        self.grid.reset_grid();
        let density = if density.is_finite() {
            density.clamp(0.0, 1.0)
        } else {
            0.0
        };

        let all: Vec<Pos> = self.grid.bounds().iter().collect();
        self.place_endpoints(&all);

        for p in all {
            if self.rng.random_bool(density) {
                // start and end refuse walls
                self.grid.set_wall(p.row, p.col, true);
            }
        }
        let walls = self.walls();
        debug!(
            "random maze: {walls} walls on a {}x{} grid (density {density:.2})",
            self.grid.rows(),
            self.grid.cols()
        );
        Ok(walls)
    }

    /// Build a recursive-division maze.
    ///
    /// Clears the grid and walls the border. Wall lines then fall on even
    /// rows or columns and passages on odd ones, with start and end on
    /// odd/odd cells inside the border whenever the grid has two of them,
    /// otherwise on any interior cells. When the border encloses at least
    /// two cells every open cell ends up reachable from the start; with odd
    /// dimensions the maze is also perfect.
    ///
    /// Returns the number of walls placed.
    pub fn recursive_division(&mut self, skew: Skew) -> Result<usize> {
        self.check_size()?;
        self.grid.reset_grid();
        let bounds = self.grid.bounds();

        // With an even dimension the last odd row or column is border.
        let inner = bounds.inner();
        let interior: Vec<Pos> = inner.iter().collect();
        let rooms: Vec<Pos> = interior
            .iter()
            .copied()
            .filter(|p| p.row % 2 == 1 && p.col % 2 == 1)
            .collect();
        let (start, end) = if rooms.len() >= 2 {
            self.place_endpoints(&rooms)
        } else if interior.len() >= 2 {
            self.place_endpoints(&interior)
        } else {
            let all: Vec<Pos> = bounds.iter().collect();
            self.place_endpoints(&all)
        };

        for p in bounds.iter().filter(|&p| bounds.on_border(p)) {
            self.grid.set_wall(p.row, p.col, true);
        }

        // Work list instead of recursion: thin strips can nest deeply.
        let mut pending = vec![inner];
        while let Some(area) = pending.pop() {
            if area.width() < 3 || area.height() < 3 {
                continue;
            }
            let vertical = match area.width().cmp(&area.height()) {
                std::cmp::Ordering::Greater => true,
                std::cmp::Ordering::Less => false,
                std::cmp::Ordering::Equal => self.rng.random_bool(skew.vertical_probability()),
            };
            let (a, b) = if vertical {
                self.divide_vertically(area, start, end)
            } else {
                self.divide_horizontally(area, start, end)
            };
            pending.push(a);
            pending.push(b);
        }

        let walls = self.walls();
        debug!(
            "division maze: {walls} walls on a {}x{} grid ({skew} skew)",
            self.grid.rows(),
            self.grid.cols()
        );
        Ok(walls)
    }

    fn divide_horizontally(&mut self, area: Rect, start: Pos, end: Pos) -> (Rect, Rect) {
        let (r0, r1) = (area.min.row, area.max.row);
        let (c0, c1) = (area.min.col, area.max.col);
        let wall = self.pick_even(r0, r1);
        let gap = self.pick_odd(c0, c1);
        for col in c0..c1 {
            let p = Pos::new(wall, col);
            if col != gap && p != start && p != end {
                self.grid.set_wall(wall, col, true);
            }
        }
        (Rect::new(r0, c0, wall, c1), Rect::new(wall + 1, c0, r1, c1))
    }

    fn divide_vertically(&mut self, area: Rect, start: Pos, end: Pos) -> (Rect, Rect) {
        let (r0, r1) = (area.min.row, area.max.row);
        let (c0, c1) = (area.min.col, area.max.col);
        let wall = self.pick_even(c0, c1);
        let gap = self.pick_odd(r0, r1);
        for row in r0..r1 {
            let p = Pos::new(row, wall);
            if row != gap && p != start && p != end {
                self.grid.set_wall(row, wall, true);
            }
        }
        (Rect::new(r0, c0, r1, wall), Rect::new(r0, wall + 1, r1, c1))
    }

    /// An even offset strictly inside `[lo, hi)`, neither edge. `lo` is odd
    /// and `hi - lo >= 3`.
    fn pick_even(&mut self, lo: i32, hi: i32) -> i32 {
        let choices = (hi - lo - 1) / 2;
        lo + 1 + 2 * self.rng.random_range(0..choices)
    }

    /// An odd offset in `[lo, hi)`. `lo` is odd.
    fn pick_odd(&mut self, lo: i32, hi: i32) -> i32 {
        let choices = (hi - lo + 1) / 2;
        lo + 2 * self.rng.random_range(0..choices)
    }

    /// Choose two distinct cells from `cells` (at least two) as start and end.
    fn place_endpoints(&mut self, cells: &[Pos]) -> (Pos, Pos) {
        let s = self.rng.random_range(0..cells.len());
        let mut e = self.rng.random_range(0..cells.len() - 1);
        if e >= s {
            e += 1;
        }
        let (start, end) = (cells[s], cells[e]);
        self.grid.set_start(start.row, start.col);
        self.grid.set_end(end.row, end.col);
        (start, end)
    }

    fn check_size(&self) -> Result<()> {
        if self.grid.len() < 2 {
            return Err(MazeError::GridTooSmall {
                rows: self.grid.rows(),
                cols: self.grid.cols(),
            });
        }
        Ok(())
    }

    fn walls(&self) -> usize {
        self.grid.count(|n| n.is_wall)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn skew_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Skew::Horizontal).unwrap(), "\"horizontal\"");
        let s: Skew = serde_json::from_str("\"vertical\"").unwrap();
        assert_eq!(s, Skew::Vertical);
    }
}
