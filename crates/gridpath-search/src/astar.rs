use gridpath_core::{Cost, Node, Pos, UNREACHABLE};

use crate::Algorithm;
use crate::traits::{Comparator, Frontier, Strategy};

/// A* with the Manhattan heuristic.
///
/// Stepping onto a cell costs that cell's weight. Manhattan distance is
/// admissible and consistent only while every weight is at least one, the
/// cheapest possible step; grids with smaller weights are outside the
/// optimality guarantee. [`Grid::set_weight`](gridpath_core::Grid::set_weight)
/// refuses weights below one, so grids built through the mutation API
/// always satisfy it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl Strategy for AStar {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn heuristic(&self, from: Pos, to: Pos) -> Cost {
        from.manhattan(to)
    }

    fn cost(&self, node: &Node) -> Cost {
        node.g_score
    }

    fn seed(&self, idx: usize, start: &mut Node, end: Pos) -> Frontier {
        let h = self.heuristic(start.pos(), end);
        start.g_score = 0;
        start.h_score = h;
        start.f_score = h;
        Frontier {
            idx,
            priority: h,
            tie: h,
        }
    }

    fn relax(&self, via: Cost, idx: usize, neighbor: &mut Node, end: Pos) -> Option<Frontier> {
        if via == UNREACHABLE {
            return None;
        }
        let g = via.saturating_add(neighbor.weight);
        if g >= neighbor.g_score {
            return None;
        }
        let h = self.heuristic(neighbor.pos(), end);
        neighbor.g_score = g;
        neighbor.h_score = h;
        neighbor.f_score = g.saturating_add(h);
        Some(Frontier {
            idx,
            priority: neighbor.f_score,
            tie: h,
        })
    }

    /// Smaller `f` first; among equal `f`, the node closer to the goal.
    fn comparator(&self) -> Comparator {
        |a, b| a.priority.cmp(&b.priority).then(a.tie.cmp(&b.tie))
    }
}
