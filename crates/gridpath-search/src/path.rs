//! Path reconstruction from back-links.

use gridpath_core::{Cost, Grid, Pos};

/// Follow back-links from `end` to the node without a predecessor and return
/// the chain in start→end order, both endpoints included.
///
/// Returns an empty path when `end` is out of bounds or when the chain does
/// not terminate within `grid.len()` steps (a cycle or corrupted link).
pub fn shortest_path(grid: &Grid, end: Pos) -> Vec<Pos> {
    let Some(mut idx) = grid.index(end) else {
        return Vec::new();
    };
    let mut path = Vec::new();
    for _ in 0..grid.len() {
        path.push(grid.pos(idx));
        match grid.get(idx).and_then(|n| n.previous) {
            Some(prev) => idx = prev,
            None => {
                path.reverse();
                return path;
            }
        }
    }
    Vec::new()
}

/// Total cost of walking `path`: the sum of every cell's weight after the
/// first. Out-of-range positions contribute nothing; the sum saturates at
/// [`Cost::MAX`].
pub fn path_cost(grid: &Grid, path: &[Pos]) -> Cost {
    path.iter()
        .skip(1)
        .filter_map(|&p| grid.node_at(p))
        .map(|n| n.weight)
        .fold(0, Cost::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(grid: &mut Grid, from: Pos, to: Pos) {
        let prev = grid.index(from);
        if let Some(n) = grid.index(to).and_then(|i| grid.get_mut(i)) {
            n.previous = prev;
        }
    }

    #[test]
    fn follows_links_and_reverses() {
        let mut g = Grid::new(2, 3).unwrap();
        let chain = [Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1), Pos::new(1, 2)];
        for w in chain.windows(2) {
            link(&mut g, w[0], w[1]);
        }
        assert_eq!(shortest_path(&g, Pos::new(1, 2)), chain.to_vec());
    }

    #[test]
    fn unlinked_end_is_a_single_node_path() {
        let g = Grid::new(2, 2).unwrap();
        assert_eq!(shortest_path(&g, Pos::new(1, 1)), vec![Pos::new(1, 1)]);
    }

    #[test]
    fn out_of_range_end_yields_nothing() {
        let g = Grid::new(2, 2).unwrap();
        assert!(shortest_path(&g, Pos::new(5, 0)).is_empty());
    }

    #[test]
    fn cycle_yields_nothing() {
        let mut g = Grid::new(2, 2).unwrap();
        link(&mut g, Pos::new(0, 0), Pos::new(0, 1));
        link(&mut g, Pos::new(0, 1), Pos::new(1, 1));
        link(&mut g, Pos::new(1, 1), Pos::new(0, 0));
        assert!(shortest_path(&g, Pos::new(1, 1)).is_empty());
    }

    #[test]
    fn cost_skips_the_first_cell() {
        let mut g = Grid::new(1, 4).unwrap();
        g.set_weight(0, 0, 9);
        g.set_weight(0, 2, 5);
        let path: Vec<Pos> = (0..4).map(|c| Pos::new(0, c)).collect();
        assert_eq!(path_cost(&g, &path), 1 + 5 + 1);
        assert_eq!(path_cost(&g, &[]), 0);
    }

    #[test]
    fn cost_saturates_instead_of_overflowing() {
        let mut g = Grid::new(1, 3).unwrap();
        // bypass the setter's clamp
        for i in 1..3 {
            g.get_mut(i).unwrap().weight = Cost::MAX;
        }
        let path: Vec<Pos> = (0..3).map(|c| Pos::new(0, c)).collect();
        assert_eq!(path_cost(&g, &path), Cost::MAX);
    }
}
