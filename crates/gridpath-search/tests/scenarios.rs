use gridpath_core::{Grid, MAX_WEIGHT, Pos};
use gridpath_maze::{MazeGen, Skew};
use gridpath_search::{Algorithm, Search, SearchConfig, SearchState, Step, compare, path_cost};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

fn open_grid(rows: i32, cols: i32, start: Pos, end: Pos) -> Grid {
    let mut g = Grid::new(rows, cols).unwrap();
    g.set_start(start.row, start.col);
    g.set_end(end.row, end.col);
    g
}

/// Random weights in 1..=9 and a sprinkle of walls, endpoints in opposite
/// corners.
fn weighted_grid(rng: &mut StdRng, rows: i32, cols: i32) -> Grid {
    let mut g = open_grid(rows, cols, Pos::new(0, 0), Pos::new(rows - 1, cols - 1));
    for p in g.bounds() {
        if rng.random_bool(0.15) {
            g.set_wall(p.row, p.col, true);
        } else {
            g.set_weight(p.row, p.col, rng.random_range(1..=9));
        }
    }
    g
}

fn assert_contiguous(path: &[Pos]) {
    for w in path.windows(2) {
        assert_eq!(w[0].manhattan(w[1]), 1, "{} -> {}", w[0], w[1]);
    }
}

#[test]
fn open_grid_astar_walks_the_manhattan_distance() {
    let mut g = open_grid(5, 5, Pos::new(0, 0), Pos::new(4, 4));
    let result = Search::new(&mut g, Algorithm::AStar).run(true);
    assert!(result.path_found);
    assert_eq!(result.path.len(), 9);
    assert_eq!(result.path.first(), Some(&Pos::new(0, 0)));
    assert_eq!(result.path.last(), Some(&Pos::new(4, 4)));
    assert_contiguous(&result.path);
    assert!(result.visited.len() <= 25);
}

#[test]
fn walled_off_end_exhausts_every_reachable_cell_once() {
    let mut g = Grid::parse(
        "
        S..
        ###
        ..E
        ",
    )
    .unwrap();
    for algo in Algorithm::ALL {
        let result = SearchConfig::new(algo).run(&mut g);
        assert!(!result.path_found, "{algo}");
        assert!(result.path.is_empty());
        let mut visited = result.visited.clone();
        visited.sort();
        assert_eq!(visited, vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)]);
    }
}

#[test]
fn setting_end_on_the_start_cell_drops_the_start() {
    let mut g = Grid::new(3, 3).unwrap();
    g.set_start(1, 1);
    g.set_end(1, 1);
    assert!(g.start().is_none());
    let end = g.end().unwrap();
    assert!(end.is_end && !end.is_start);

    let mut s = Search::new(&mut g, Algorithm::AStar);
    assert!(s.initialize().is_err());
    assert_eq!(s.state(), SearchState::Terminated);
}

#[test]
fn astar_and_dijkstra_agree_on_cost() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut checked = 0;
    for _ in 0..60 {
        let rows = rng.random_range(2..14);
        let cols = rng.random_range(2..14);
        let g = weighted_grid(&mut rng, rows, cols);
        let alts = compare(&g, &[Algorithm::AStar, Algorithm::Dijkstra], false);
        let (astar, dijkstra) = (&alts[0], &alts[1]);
        assert_eq!(astar.result.path_found, dijkstra.result.path_found);
        if astar.result.path_found {
            assert_contiguous(&astar.result.path);
            assert_eq!(astar.cost(), dijkstra.cost());
            checked += 1;
        }
    }
    assert!(checked > 10);
}

#[test]
fn bfs_matches_dijkstra_on_unit_weights() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..40 {
        let mut g = open_grid(9, 9, Pos::new(0, 0), Pos::new(8, 8));
        for p in g.bounds() {
            if rng.random_bool(0.25) {
                g.set_wall(p.row, p.col, true);
            }
        }
        let alts = compare(&g, &[Algorithm::BreadthFirst, Algorithm::Dijkstra], false);
        let (bfs, dijkstra) = (&alts[0].result, &alts[1].result);
        assert_eq!(bfs.path_found, dijkstra.path_found);
        assert_eq!(bfs.path.len(), dijkstra.path.len());
    }
}

#[test]
fn bfs_ignores_weights() {
    let mut g = Grid::parse(
        "
        S99E
        ....
        ",
    )
    .unwrap();
    let bfs = Search::new(&mut g, Algorithm::BreadthFirst).run(false);
    assert_eq!(bfs.path.len(), 4);
    assert_eq!(path_cost(&g, &bfs.path), 19);

    let dijkstra = Search::new(&mut g, Algorithm::Dijkstra).run(false);
    assert_eq!(dijkstra.path.len(), 6);
    assert_eq!(path_cost(&g, &dijkstra.path), 5);
}

#[test]
fn heaviest_weights_still_find_the_path() {
    let mut g = open_grid(1, 3, Pos::new(0, 0), Pos::new(0, 2));
    g.set_weight(0, 1, i32::MAX - 1);
    assert_eq!(g.node(0, 1).unwrap().weight, MAX_WEIGHT);
    for alt in compare(&g, &Algorithm::ALL, false) {
        assert!(alt.result.path_found, "{}", alt.algorithm);
        assert_eq!(alt.cost(), Some(MAX_WEIGHT + 1));
    }
}

#[test]
fn long_heavy_corridor_costs_fit() {
    let mut g = open_grid(3, 400, Pos::new(0, 0), Pos::new(2, 399));
    for p in g.bounds() {
        g.set_weight(p.row, p.col, MAX_WEIGHT);
    }
    let alts = compare(&g, &[Algorithm::AStar, Algorithm::Dijkstra], false);
    for alt in &alts {
        assert!(alt.result.path_found, "{}", alt.algorithm);
        assert_eq!(alt.cost(), Some(400 * MAX_WEIGHT + 1));
    }
}

#[test]
fn clones_do_not_share_state() {
    let mut original = open_grid(4, 4, Pos::new(0, 0), Pos::new(3, 3));
    let mut copy = original.clone();

    Search::new(&mut copy, Algorithm::Dijkstra).run(true);
    assert_eq!(original.count(|n| n.is_visited), 0);

    original.set_wall(1, 1, true);
    original.set_end(2, 2);
    assert!(!copy.node(1, 1).unwrap().is_wall);
    assert_eq!(copy.end_pos(), Some(Pos::new(3, 3)));
    assert!(copy.node(2, 2).map(|n| !n.is_end).unwrap());
}

#[test]
fn stop_from_another_thread() {
    let mut g = open_grid(30, 30, Pos::new(0, 0), Pos::new(29, 29));
    let mut s = Search::new(&mut g, Algorithm::BreadthFirst);
    s.initialize().unwrap();
    let handle = s.stop_handle();
    std::thread::spawn(move || handle.request_stop()).join().unwrap();

    assert_eq!(s.step(), Ok(Step::Stopped));
    let result = s.finish(true);
    assert!(result.cancelled);
    assert!(!result.path_found);
    assert!(result.visited.is_empty());
}

#[test]
fn odd_division_mazes_are_always_solvable() {
    for seed in 0..25 {
        for (rows, cols) in [(7, 7), (11, 21), (15, 9)] {
            let mut g = Grid::new(rows, cols).unwrap();
            MazeGen::with_grid(&mut g, StdRng::seed_from_u64(seed))
                .recursive_division(Skew::Balanced)
                .unwrap();
            for algo in Algorithm::ALL {
                let result = SearchConfig::new(algo).run(&mut g);
                assert!(result.path_found, "{algo} failed on seed {seed} ({rows}x{cols})");
                assert_contiguous(&result.path);
                assert!(result.path.iter().all(|&p| !g.node_at(p).unwrap().is_wall));
            }
        }
    }
}

#[test]
fn random_mazes_may_be_unsolvable() {
    let mut found = 0;
    let mut missed = 0;
    for seed in 0..40 {
        let mut g = Grid::new(12, 12).unwrap();
        MazeGen::with_grid(&mut g, StdRng::seed_from_u64(seed))
            .random_maze(0.45)
            .unwrap();
        let result = SearchConfig::new(Algorithm::AStar).run(&mut g);
        if result.path_found {
            assert_contiguous(&result.path);
            found += 1;
        } else {
            assert!(result.path.is_empty());
            assert!(!result.visited.is_empty());
            missed += 1;
        }
    }
    assert_eq!(found + missed, 40);
}

#[test]
fn incremental_steps_match_a_full_run() {
    let mut g = Grid::new(9, 9).unwrap();
    MazeGen::with_grid(&mut g, StdRng::seed_from_u64(3))
        .recursive_division(Skew::Vertical)
        .unwrap();
    let full = SearchConfig::new(Algorithm::AStar).run(&mut g.clone());

    let mut s = Search::new(&mut g, Algorithm::AStar);
    s.initialize().unwrap();
    let mut trace = Vec::new();
    loop {
        match s.step().unwrap() {
            Step::Visited(p) => trace.push(p),
            Step::Found(p) => {
                trace.push(p);
                break;
            }
            other => panic!("unexpected {other:?}"),
        }
    }
    let stepped = s.finish(true);
    assert_eq!(trace, full.visited);
    assert_eq!(stepped, full);
}
