//! A single grid cell: identity, role flags, terrain, and per-search scratch.

use crate::geom::Pos;

/// Accumulated path cost. Step costs are the destination cell's weight.
pub type Cost = i32;

/// Sentinel meaning "not reached yet" for every cost field.
pub const UNREACHABLE: Cost = Cost::MAX;

/// Weight of plain floor.
pub const DEFAULT_WEIGHT: Cost = 1;

/// Heaviest terrain [`Grid::set_weight`](crate::Grid::set_weight) accepts.
/// Together with [`MAX_CELLS`](crate::grid::MAX_CELLS) this keeps every
/// path cost below [`UNREACHABLE`].
pub const MAX_WEIGHT: Cost = 1_000;

/// A grid cell.
///
/// Equality compares coordinates only: two nodes at the same `(row, col)`
/// are interchangeable for lookups regardless of their flags.
#[derive(Debug, Clone)]
pub struct Node {
    pos: Pos,

    pub is_start: bool,
    pub is_end: bool,
    pub is_wall: bool,

    pub is_visited: bool,
    pub is_path: bool,
    pub is_current: bool,

    /// Display hint; `weight` is what searches charge.
    pub is_weighted: bool,
    pub weight: Cost,

    /// Accumulated cost for uniform-cost and breadth-first strategies.
    pub distance: Cost,
    /// A*: accumulated cost from the start.
    pub g_score: Cost,
    /// A*: `g_score + h_score`.
    pub f_score: Cost,
    /// A*: heuristic estimate to the end, kept for inspection.
    pub h_score: Cost,
    /// Back-link: index of the predecessor in the owning grid's storage.
    pub previous: Option<usize>,
}

impl Node {
    /// A fresh floor node at `(row, col)`.
    pub fn new(row: i32, col: i32) -> Self {
        Self {
            pos: Pos::new(row, col),
            is_start: false,
            is_end: false,
            is_wall: false,
            is_visited: false,
            is_path: false,
            is_current: false,
            is_weighted: false,
            weight: DEFAULT_WEIGHT,
            distance: UNREACHABLE,
            g_score: UNREACHABLE,
            f_score: UNREACHABLE,
            h_score: UNREACHABLE,
            previous: None,
        }
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Whether the node is a start or end cell, which mutation APIs refuse
    /// to wall or weight.
    #[inline]
    pub fn is_protected(&self) -> bool {
        self.is_start || self.is_end
    }

    /// Clear per-search scratch: costs, back-link, and visualization flags.
    pub fn reset(&mut self) {
        self.is_visited = false;
        self.is_path = false;
        self.is_current = false;
        self.distance = UNREACHABLE;
        self.g_score = UNREACHABLE;
        self.f_score = UNREACHABLE;
        self.h_score = UNREACHABLE;
        self.previous = None;
    }

    /// Clear roles, terrain and obstacles, then scratch.
    pub fn reset_all(&mut self) {
        self.is_start = false;
        self.is_end = false;
        self.is_wall = false;
        self.is_weighted = false;
        self.weight = DEFAULT_WEIGHT;
        self.reset();
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Node {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_node_defaults() {
        let n = Node::new(2, 3);
        assert_eq!((n.row(), n.col()), (2, 3));
        assert_eq!(n.weight, DEFAULT_WEIGHT);
        assert_eq!(n.distance, UNREACHABLE);
        assert_eq!(n.g_score, UNREACHABLE);
        assert!(n.previous.is_none());
        assert!(!n.is_wall && !n.is_start && !n.is_end);
    }

    #[test]
    fn equality_ignores_flags() {
        let a = Node::new(1, 1);
        let mut b = Node::new(1, 1);
        b.is_wall = true;
        b.distance = 4;
        assert_eq!(a, b);
        assert_ne!(a, Node::new(1, 2));
    }

    #[test]
    fn reset_keeps_roles_and_weight() {
        let mut n = Node::new(0, 0);
        n.is_start = true;
        n.weight = 5;
        n.is_weighted = true;
        n.is_visited = true;
        n.is_path = true;
        n.distance = 3;
        n.previous = Some(7);
        n.reset();
        assert!(n.is_start);
        assert_eq!(n.weight, 5);
        assert!(!n.is_visited && !n.is_path);
        assert_eq!(n.distance, UNREACHABLE);
        assert!(n.previous.is_none());
    }

    #[test]
    fn reset_all_clears_everything() {
        let mut n = Node::new(0, 0);
        n.is_end = true;
        n.is_wall = true;
        n.weight = 9;
        n.is_weighted = true;
        n.g_score = 2;
        n.reset_all();
        assert!(!n.is_end && !n.is_wall && !n.is_weighted);
        assert_eq!(n.weight, DEFAULT_WEIGHT);
        assert_eq!(n.g_score, UNREACHABLE);
    }

    #[test]
    fn clone_is_independent() {
        let mut a = Node::new(3, 4);
        a.is_visited = true;
        a.weight = 3;
        a.distance = 6;
        let mut b = a.clone();
        assert!(b.is_visited);
        assert_eq!((b.weight, b.distance), (3, 6));
        b.weight = 8;
        b.is_visited = false;
        assert_eq!(a.weight, 3);
        assert!(a.is_visited);
    }
}
