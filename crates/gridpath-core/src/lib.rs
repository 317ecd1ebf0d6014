//! The grid and node model of the gridpath engine.
//!
//! A [`Grid`] owns a row-major collection of [`Node`]s, tracks the start and
//! end cells, and exposes the mutation API a front end uses to place walls,
//! weights and endpoints. Search strategies live in `gridpath-search`; maze
//! generators in `gridpath-maze`.

pub mod error;
pub mod geom;
pub mod grid;
pub mod node;

pub use error::{GridError, Result};
pub use geom::{Pos, Rect, RectIter};
pub use grid::{Grid, MAX_CELLS};
pub use node::{Cost, DEFAULT_WEIGHT, MAX_WEIGHT, Node, UNREACHABLE};
