use gridpath_core::{Cost, Node, Pos, UNREACHABLE};

use crate::Algorithm;
use crate::traits::{Frontier, Strategy};

/// Uniform-cost search: frontier ordered by accumulated `distance`, each
/// step charging the destination cell's weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl Strategy for Dijkstra {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
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
        let tentative = via.saturating_add(neighbor.weight);
        if tentative >= neighbor.distance {
            return None;
        }
        neighbor.distance = tentative;
        Some(Frontier {
            idx,
            priority: tentative,
            tie: 0,
        })
    }
}
