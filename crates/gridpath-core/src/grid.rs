//! The owned 2D node grid.
//!
//! [`Grid`] stores its [`Node`]s in a flat row-major vector. The start and
//! end relations, like every node's back-link, are indices into that vector,
//! so a derived `Clone` is a complete deep copy whose relations already point
//! into the copy.

use std::fmt;

use crate::error::{GridError, Result};
use crate::geom::{Pos, Rect};
use crate::node::{Cost, DEFAULT_WEIGHT, MAX_WEIGHT, Node};

/// Largest cell count a grid may hold. A simple path over this many cells at
/// [`MAX_WEIGHT`] each, plus a Manhattan estimate, still fits in a [`Cost`].
pub const MAX_CELLS: usize = 2_000_000;

/// A rectangular grid of [`Node`]s with designated start and end cells.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: i32,
    cols: i32,
    nodes: Vec<Node>,
    start: Option<usize>,
    end: Option<usize>,
}

impl Grid {
    /// Create a grid of fresh floor nodes. Both dimensions must be ≥ 1 and
    /// the cell count at most [`MAX_CELLS`].
    pub fn new(rows: i32, cols: i32) -> Result<Self> {
        let mut grid = Self {
            rows: 0,
            cols: 0,
            nodes: Vec::new(),
            start: None,
            end: None,
        };
        grid.resize(rows, cols)?;
        Ok(grid)
    }

    /// Discard every node and reinitialise with the new dimensions.
    ///
    /// Start and end are dropped. On error the grid is left untouched.
    pub fn resize(&mut self, rows: i32, cols: i32) -> Result<()> {
        if rows < 1 || cols < 1 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        if i64::from(rows) * i64::from(cols) > MAX_CELLS as i64 {
            return Err(GridError::TooLarge {
                rows,
                cols,
                max: MAX_CELLS,
            });
        }
        self.rows = rows;
        self.cols = cols;
        self.nodes = Rect::new(0, 0, rows, cols)
            .iter()
            .map(|p| Node::new(p.row, p.col))
            .collect();
        self.start = None;
        self.end = None;
        Ok(())
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a constructed grid; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The grid rectangle `[0, rows) × [0, cols)`.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.rows, self.cols)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some((p.row * self.cols + p.col) as usize)
    }

    /// Position of the node at flat index `idx`.
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        let cols = self.cols as usize;
        Pos::new((idx / cols) as i32, (idx % cols) as i32)
    }

    // -----------------------------------------------------------------------
    // Access
    // -----------------------------------------------------------------------

    /// The node at `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn node(&self, row: i32, col: i32) -> Option<&Node> {
        self.node_at(Pos::new(row, col))
    }

    /// The node at `p`, or `None` if out of bounds.
    #[inline]
    pub fn node_at(&self, p: Pos) -> Option<&Node> {
        self.index(p).map(|i| &self.nodes[i])
    }

    /// The node at flat index `idx`.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Node> {
        self.nodes.get(idx)
    }

    /// Mutable access for search drivers updating scratch fields.
    ///
    /// Role flags should be changed through the grid's mutation methods so
    /// the start/end relations stay consistent.
    #[inline]
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Node> {
        self.nodes.get_mut(idx)
    }

    /// All nodes in row-major order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterate over nodes in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Count nodes satisfying a predicate.
    pub fn count(&self, f: impl Fn(&Node) -> bool) -> usize {
        self.nodes.iter().filter(|n| f(n)).count()
    }

    #[inline]
    pub fn start_index(&self) -> Option<usize> {
        self.start
    }

    #[inline]
    pub fn end_index(&self) -> Option<usize> {
        self.end
    }

    pub fn start(&self) -> Option<&Node> {
        self.start.map(|i| &self.nodes[i])
    }

    pub fn end(&self) -> Option<&Node> {
        self.end.map(|i| &self.nodes[i])
    }

    pub fn start_pos(&self) -> Option<Pos> {
        self.start.map(|i| self.pos(i))
    }

    pub fn end_pos(&self) -> Option<Pos> {
        self.end.map(|i| self.pos(i))
    }

    // -----------------------------------------------------------------------
    // Neighbours
    // -----------------------------------------------------------------------

    /// In-bounds, non-wall nodes one orthogonal step from `p`, in the order
    /// up, right, down, left.
    pub fn neighbors(&self, p: Pos) -> Vec<&Node> {
        p.neighbors_4()
            .into_iter()
            .filter_map(|n| self.node_at(n))
            .filter(|n| !n.is_wall)
            .collect()
    }

    /// Index flavour of [`neighbors`](Self::neighbors): clears `buf`, then
    /// appends the indices of passable orthogonal neighbours of `idx`.
    pub fn neighbor_indices(&self, idx: usize, buf: &mut Vec<usize>) {
        buf.clear();
        for n in self.pos(idx).neighbors_4() {
            if let Some(ni) = self.index(n) {
                if !self.nodes[ni].is_wall {
                    buf.push(ni);
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Role and terrain mutation
    // -----------------------------------------------------------------------

    /// Make `(row, col)` the start cell. No-op out of bounds.
    ///
    /// The previous start is cleared. If the cell was the end, the end is
    /// dropped. The cell loses any wall flag and weight.
    pub fn set_start(&mut self, row: i32, col: i32) {
        let Some(i) = self.index(Pos::new(row, col)) else {
            return;
        };
        if let Some(old) = self.start.take() {
            self.nodes[old].is_start = false;
        }
        if self.end == Some(i) {
            self.nodes[i].is_end = false;
            self.end = None;
        }
        self.claim(i);
        self.nodes[i].is_start = true;
        self.start = Some(i);
    }

    /// Make `(row, col)` the end cell. No-op out of bounds.
    ///
    /// Mirror image of [`set_start`](Self::set_start).
    pub fn set_end(&mut self, row: i32, col: i32) {
        let Some(i) = self.index(Pos::new(row, col)) else {
            return;
        };
        if let Some(old) = self.end.take() {
            self.nodes[old].is_end = false;
        }
        if self.start == Some(i) {
            self.nodes[i].is_start = false;
            self.start = None;
        }
        self.claim(i);
        self.nodes[i].is_end = true;
        self.end = Some(i);
    }

    fn claim(&mut self, i: usize) {
        let n = &mut self.nodes[i];
        n.is_wall = false;
        n.weight = DEFAULT_WEIGHT;
        n.is_weighted = false;
    }

    /// Flip the wall flag of `(row, col)`. Start/end cells are refused.
    pub fn toggle_wall(&mut self, row: i32, col: i32) {
        if let Some(n) = self.unprotected_mut(Pos::new(row, col)) {
            n.is_wall = !n.is_wall;
        }
    }

    /// Set the wall flag of `(row, col)`. Start/end cells are refused.
    pub fn set_wall(&mut self, row: i32, col: i32, wall: bool) {
        if let Some(n) = self.unprotected_mut(Pos::new(row, col)) {
            n.is_wall = wall;
        }
    }

    /// Set the step cost of `(row, col)`.
    ///
    /// Weights below one, start/end cells and out-of-range targets are
    /// ignored. Weights above [`MAX_WEIGHT`] are clamped to it. Weights above
    /// one mark the cell as weighted terrain.
    pub fn set_weight(&mut self, row: i32, col: i32, weight: Cost) {
        if weight < DEFAULT_WEIGHT {
            return;
        }
        let weight = weight.min(MAX_WEIGHT);
        if let Some(n) = self.unprotected_mut(Pos::new(row, col)) {
            n.weight = weight;
            n.is_weighted = weight > DEFAULT_WEIGHT;
        }
    }

    fn unprotected_mut(&mut self, p: Pos) -> Option<&mut Node> {
        let i = self.index(p)?;
        let n = &mut self.nodes[i];
        if n.is_protected() { None } else { Some(n) }
    }

    /// Remove every wall, leaving roles and weights alone.
    pub fn clear_walls(&mut self) {
        for n in &mut self.nodes {
            n.is_wall = false;
        }
    }

    /// Reset every weight to the default, leaving roles and walls alone.
    pub fn clear_weights(&mut self) {
        for n in &mut self.nodes {
            n.weight = DEFAULT_WEIGHT;
            n.is_weighted = false;
        }
    }

    /// Clear per-search scratch on every node. Idempotent.
    pub fn reset_path(&mut self) {
        for n in &mut self.nodes {
            n.reset();
        }
    }

    /// Clear every flag and scratch field and drop start/end.
    pub fn reset_grid(&mut self) {
        for n in &mut self.nodes {
            n.reset_all();
        }
        self.start = None;
        self.end = None;
    }

    // -----------------------------------------------------------------------
    // Text layouts
    // -----------------------------------------------------------------------

    /// Build a grid from a text layout.
    ///
    /// Each line is one row; surrounding whitespace on the whole string and
    /// on each line is ignored. Alphabet: `.` floor, `#` wall, `S` start,
    /// `E` end, `1`–`9` floor with that weight.
    pub fn parse(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim).collect();
        let expected = lines.first().map_or(0, |l| l.chars().count()) as i32;
        if expected == 0 {
            return Err(GridError::EmptyLayout);
        }
        let mut grid = Self::new(lines.len() as i32, expected)?;

        for (row, line) in lines.iter().enumerate() {
            let row = row as i32;
            let width = line.chars().count() as i32;
            if width != expected {
                return Err(GridError::InconsistentWidth {
                    row,
                    width,
                    expected,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Pos::new(row, col as i32);
                match ch {
                    '.' => {}
                    '#' => grid.set_wall(pos.row, pos.col, true),
                    'S' => {
                        if grid.start.is_some() {
                            return Err(GridError::DuplicateRole { role: "start", pos });
                        }
                        grid.set_start(pos.row, pos.col);
                    }
                    'E' => {
                        if grid.end.is_some() {
                            return Err(GridError::DuplicateRole { role: "end", pos });
                        }
                        grid.set_end(pos.row, pos.col);
                    }
                    '1'..='9' => {
                        let w = ch.to_digit(10).map_or(DEFAULT_WEIGHT, |d| d as Cost);
                        grid.set_weight(pos.row, pos.col, w);
                    }
                    _ => return Err(GridError::InvalidChar { ch, pos }),
                }
            }
        }
        Ok(grid)
    }

    fn glyph(n: &Node) -> char {
        if n.is_start {
            'S'
        } else if n.is_end {
            'E'
        } else if n.is_wall {
            '#'
        } else if n.is_path {
            '*'
        } else if n.is_visited {
            'o'
        } else if n.weight > 9 {
            '+'
        } else if n.is_weighted {
            char::from_digit(n.weight as u32, 10).unwrap_or('+')
        } else {
            '.'
        }
    }
}

/// Renders the layout alphabet accepted by [`Grid::parse`], plus `*` for path
/// cells, `o` for visited cells and `+` for weights above nine.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.nodes.chunks(self.cols as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for n in row {
                write!(f, "{}", Self::glyph(n))?;
            }
        }
        Ok(())
    }
}
