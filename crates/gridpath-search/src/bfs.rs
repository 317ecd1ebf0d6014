use gridpath_core::{Cost, Node, Pos, UNREACHABLE};

use crate::Algorithm;
use crate::traits::{Frontier, Strategy};

/// Breadth-first search. Every step counts as one hop regardless of weight,
/// so with the queue's FIFO tie-break this explores in plain discovery
/// order. On grids where every weight is one it matches [`Dijkstra`].
///
/// [`Dijkstra`]: crate::Dijkstra
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl Strategy for BreadthFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BreadthFirst
    }

    fn cost(&self, node: &Node) -> Cost {
        node.distance
    }

    fn seed(&self, idx: usize, start: &mut Node, _end: Pos) -> Frontier {
        start.distance = 0;
        Frontier {
            idx,
            priority: 0,
            tie: 0,
        }
    }

    fn relax(&self, via: Cost, idx: usize, neighbor: &mut Node, _end: Pos) -> Option<Frontier> {
        if via == UNREACHABLE {
            return None;
        }
        let hops = via + 1;
        if hops >= neighbor.distance {
            return None;
        }
        neighbor.distance = hops;
        Some(Frontier {
            idx,
            priority: hops,
            tie: 0,
        })
    }
}
