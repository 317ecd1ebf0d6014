use std::cmp::Ordering;

use gridpath_core::{Cost, Node, Pos};

use crate::Algorithm;

/// A frontier entry: a node index plus the keys it was enqueued with.
///
/// Keys are snapshots. When a node is improved it is enqueued again and the
/// older entry goes stale; the driver skips it once the node is finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontier {
    pub idx: usize,
    /// Primary key, smaller first.
    pub priority: Cost,
    /// Secondary key consulted by strategies that break ties on it.
    pub tie: Cost,
}

/// Frontier ordering handed to the [`PriorityQueue`](crate::PriorityQueue).
pub type Comparator = fn(&Frontier, &Frontier) -> Ordering;

/// The per-strategy half of a search; the shared loop lives in
/// [`Search`](crate::Search).
///
/// Implementations are stateless: all per-run state sits in the grid's node
/// scratch fields and in the driver.
pub trait Strategy: Sync {
    /// The configuration value selecting this strategy.
    fn algorithm(&self) -> Algorithm;

    /// Estimate of the remaining cost from `from` to `to`. Zero for
    /// uninformed strategies.
    fn heuristic(&self, _from: Pos, _to: Pos) -> Cost {
        0
    }

    /// Accumulated cost recorded on `node`.
    fn cost(&self, node: &Node) -> Cost;

    /// Seed the start node's cost fields and return its frontier entry.
    fn seed(&self, idx: usize, start: &mut Node, end: Pos) -> Frontier;

    /// Offer `neighbor` a path whose cost up to the current node is `via`.
    ///
    /// On improvement the neighbour's cost fields are rewritten and the entry
    /// to enqueue is returned. The driver sets the back-link.
    fn relax(&self, via: Cost, idx: usize, neighbor: &mut Node, end: Pos) -> Option<Frontier>;

    /// Frontier ordering. Ties left `Equal` fall back to insertion order.
    fn comparator(&self) -> Comparator {
        |a, b| a.priority.cmp(&b.priority)
    }
}
