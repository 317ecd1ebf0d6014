//! The shared search loop and its per-run state machine.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use gridpath_core::{Grid, Pos};
use log::{debug, trace, warn};

use crate::Algorithm;
use crate::error::SearchError;
use crate::path::shortest_path;
use crate::queue::PriorityQueue;
use crate::traits::{Frontier, Strategy};

/// Lifecycle of one run.
///
/// `NotStarted → Initializing → Running → {Found | Exhausted} → Terminated`.
/// A failed initialization or a requested stop goes straight to
/// `Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    NotStarted,
    Initializing,
    Running,
    Found,
    Exhausted,
    Terminated,
}

/// What a single [`Search::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A node was finalized and its neighbours relaxed.
    Visited(Pos),
    /// The end node was finalized.
    Found(Pos),
    /// The frontier ran dry without reaching the end.
    Exhausted,
    /// A stop was requested; the run is over.
    Stopped,
}

/// The record handed back to a front end after a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Positions in the order they were finalized. Empty unless the run was
    /// asked to visualize.
    pub visited: Vec<Pos>,
    /// Start to end inclusive; empty when no path was found.
    pub path: Vec<Pos>,
    pub path_found: bool,
    /// The run ended because a stop was requested.
    pub cancelled: bool,
}

/// Cooperative cancellation flag shared between a [`Search`] and whoever
/// wants to stop it. Checked once per step, never mid-relaxation.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the search to stop before its next step.
    pub fn request_stop(&self) {
        self.0.store(true, AtomicOrdering::Relaxed);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.0.load(AtomicOrdering::Relaxed)
    }

    fn clear(&self) {
        self.0.store(false, AtomicOrdering::Relaxed);
    }
}

/// One strategy bound to one grid.
///
/// The search borrows the grid mutably for its whole lifetime: node scratch
/// fields are the search state. Run several strategies over the same
/// problem by giving each its own [`Grid::clone`].
pub struct Search<'g> {
    grid: &'g mut Grid,
    algorithm: Algorithm,
    strategy: &'static dyn Strategy,
    state: SearchState,
    open: PriorityQueue<Frontier>,
    visited: Vec<usize>,
    current: Option<usize>,
    end: Option<usize>,
    end_pos: Pos,
    cancelled: bool,
    stop: StopHandle,
    // scratch buffer for neighbour queries
    nbuf: Vec<usize>,
}

impl<'g> Search<'g> {
    pub fn new(grid: &'g mut Grid, algorithm: Algorithm) -> Self {
        let strategy = algorithm.strategy();
        Self {
            grid,
            algorithm,
            strategy,
            state: SearchState::NotStarted,
            open: PriorityQueue::new(strategy.comparator()),
            visited: Vec::new(),
            current: None,
            end: None,
            end_pos: Pos::ZERO,
            cancelled: false,
            stop: StopHandle::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The grid as the search currently sees it, for incremental rendering.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// Number of nodes finalized so far in this run.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of frontier entries, stale ones included.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.open.len()
    }

    /// A handle that can stop this search from outside the loop.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Ask the search to stop before its next step.
    pub fn request_stop(&self) {
        self.stop.request_stop();
    }

    /// Prepare a run: check for start and end, clear per-run scratch on
    /// every cell, seed the start node and enqueue it.
    ///
    /// Any earlier stop request is forgotten; each run starts uncancelled.
    pub fn initialize(&mut self) -> Result<(), SearchError> {
        self.state = SearchState::Initializing;
        self.stop.clear();
        self.cancelled = false;
        self.open.clear();
        self.visited.clear();
        self.current = None;
        self.end = None;

        let start = self.grid.start_index();
        let end = self.grid.end_index();
        let (start, end) = match (start, end) {
            (Some(s), Some(e)) => (s, e),
            (None, _) => return Err(self.abort(SearchError::MissingStart)),
            (_, None) => return Err(self.abort(SearchError::MissingEnd)),
        };

        self.grid.reset_path();
        self.end = Some(end);
        self.end_pos = self.grid.pos(end);
        if let Some(node) = self.grid.get_mut(start) {
            let entry = self.strategy.seed(start, node, self.end_pos);
            self.open.enqueue(entry);
        }
        self.state = SearchState::Running;
        debug!(
            "{}: searching {} -> {} on a {}x{} grid",
            self.algorithm,
            self.grid.pos(start),
            self.end_pos,
            self.grid.rows(),
            self.grid.cols()
        );
        Ok(())
    }

    fn abort(&mut self, err: SearchError) -> SearchError {
        self.state = SearchState::Terminated;
        err
    }

    /// Finalize the next node.
    ///
    /// Stale frontier entries (nodes finalized through a cheaper entry) are
    /// skipped silently and do not count as a step.
    pub fn step(&mut self) -> Result<Step, SearchError> {
        if self.state != SearchState::Running {
            return Err(SearchError::NotRunning(self.state));
        }
        if self.stop.is_stop_requested() {
            self.clear_current();
            self.cancelled = true;
            self.state = SearchState::Terminated;
            debug!("{}: stopped after {} visits", self.algorithm, self.visited.len());
            return Ok(Step::Stopped);
        }

        loop {
            let Some(entry) = self.open.pop() else {
                self.clear_current();
                self.state = SearchState::Exhausted;
                return Ok(Step::Exhausted);
            };
            let ci = entry.idx;

            let Some(node) = self.grid.get_mut(ci) else {
                continue;
            };
            if node.is_visited || node.is_wall {
                continue;
            }
            node.is_visited = true;
            node.is_current = true;
            let pos = node.pos();
            let via = self.strategy.cost(node);

            if let Some(prev) = self.current.replace(ci) {
                if let Some(p) = self.grid.get_mut(prev) {
                    p.is_current = false;
                }
            }
            self.visited.push(ci);
            trace!("{}: finalized {} at cost {}", self.algorithm, pos, via);

            if self.end == Some(ci) {
                self.state = SearchState::Found;
                return Ok(Step::Found(pos));
            }

            self.grid.neighbor_indices(ci, &mut self.nbuf);
            for &ni in &self.nbuf {
                let Some(n) = self.grid.get_mut(ni) else {
                    continue;
                };
                if n.is_visited {
                    continue;
                }
                if let Some(next) = self.strategy.relax(via, ni, n, self.end_pos) {
                    n.previous = Some(ci);
                    self.open.enqueue(next);
                }
            }
            return Ok(Step::Visited(pos));
        }
    }

    fn clear_current(&mut self) {
        if let Some(c) = self.current.take() {
            if let Some(n) = self.grid.get_mut(c) {
                n.is_current = false;
            }
        }
    }

    /// Initialize, step until the run ends, and collect the result.
    ///
    /// A grid without start or end yields an empty, not-found result.
    pub fn run(&mut self, visualize: bool) -> SearchResult {
        if let Err(err) = self.initialize() {
            warn!("{}: {err}; nothing to search", self.algorithm);
            return SearchResult::default();
        }
        while let Ok(Step::Visited(_)) = self.step() {}
        self.finish(visualize)
    }

    /// Close a run that has stopped stepping: rebuild and mark the path when
    /// the end was reached, and hand back the visitation record.
    pub fn finish(&mut self, visualize: bool) -> SearchResult {
        let reached = self.state == SearchState::Found;
        self.clear_current();

        let path = if reached {
            shortest_path(&*self.grid, self.end_pos)
        } else {
            Vec::new()
        };
        for &p in &path {
            if let Some(n) = self.grid.index(p).and_then(|i| self.grid.get_mut(i)) {
                n.is_path = true;
            }
        }

        let visited = if visualize {
            self.visited.iter().map(|&i| self.grid.pos(i)).collect()
        } else {
            Vec::new()
        };
        self.state = SearchState::Terminated;

        let result = SearchResult {
            visited,
            path_found: !path.is_empty(),
            path,
            cancelled: self.cancelled,
        };
        debug!(
            "{}: {} after {} visits (path length {})",
            self.algorithm,
            if result.path_found { "found" } else { "no path" },
            self.visited.len(),
            result.path.len()
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(rows: i32, cols: i32) -> Grid {
        let mut g = Grid::new(rows, cols).unwrap();
        g.set_start(0, 0);
        g.set_end(rows - 1, cols - 1);
        g
    }

    #[test]
    fn states_progress_through_a_run() {
        let mut g = open_grid(1, 3);
        let mut s = Search::new(&mut g, Algorithm::Dijkstra);
        assert_eq!(s.state(), SearchState::NotStarted);
        assert_eq!(s.step(), Err(SearchError::NotRunning(SearchState::NotStarted)));

        s.initialize().unwrap();
        assert_eq!(s.state(), SearchState::Running);
        assert_eq!(s.step(), Ok(Step::Visited(Pos::new(0, 0))));
        assert_eq!(s.step(), Ok(Step::Visited(Pos::new(0, 1))));
        assert_eq!(s.step(), Ok(Step::Found(Pos::new(0, 2))));
        assert_eq!(s.state(), SearchState::Found);

        let result = s.finish(true);
        assert_eq!(s.state(), SearchState::Terminated);
        assert!(result.path_found);
        assert_eq!(result.path.len(), 3);
    }

    #[test]
    fn missing_roles_fail_initialization() {
        let mut g = Grid::new(2, 2).unwrap();
        g.set_end(1, 1);
        let mut s = Search::new(&mut g, Algorithm::AStar);
        assert_eq!(s.initialize(), Err(SearchError::MissingStart));
        assert_eq!(s.state(), SearchState::Terminated);

        let mut g = Grid::new(2, 2).unwrap();
        g.set_start(0, 0);
        let mut s = Search::new(&mut g, Algorithm::AStar);
        assert_eq!(s.initialize(), Err(SearchError::MissingEnd));
        let result = s.run(true);
        assert_eq!(result, SearchResult::default());
    }

    #[test]
    fn current_marker_follows_the_frontier() {
        let mut g = open_grid(1, 4);
        let mut s = Search::new(&mut g, Algorithm::BreadthFirst);
        s.initialize().unwrap();
        s.step().unwrap();
        s.step().unwrap();
        assert_eq!(s.grid().count(|n| n.is_current), 1);
        assert!(s.grid().node(0, 1).unwrap().is_current);
        let _ = s.run(false);
        assert_eq!(g.count(|n| n.is_current), 0);
    }

    #[test]
    fn run_marks_path_cells() {
        let mut g = open_grid(3, 3);
        let result = Search::new(&mut g, Algorithm::AStar).run(true);
        assert!(result.path_found);
        for p in &result.path {
            assert!(g.node_at(*p).unwrap().is_path);
        }
        assert_eq!(g.count(|n| n.is_path), result.path.len());
    }

    #[test]
    fn visualize_false_keeps_visited_empty() {
        let mut g = open_grid(4, 4);
        let result = Search::new(&mut g, Algorithm::Dijkstra).run(false);
        assert!(result.path_found);
        assert!(result.visited.is_empty());
        assert!(g.count(|n| n.is_visited) > 0);
    }

    #[test]
    fn stop_before_first_step_cancels() {
        let mut g = open_grid(5, 5);
        let mut s = Search::new(&mut g, Algorithm::AStar);
        s.initialize().unwrap();
        let handle = s.stop_handle();
        handle.request_stop();
        assert_eq!(s.step(), Ok(Step::Stopped));
        let result = s.finish(true);
        assert!(result.cancelled);
        assert!(!result.path_found);
        assert!(result.visited.is_empty());
        assert!(result.path.is_empty());
    }

    #[test]
    fn stop_mid_run_keeps_partial_trace() {
        let mut g = open_grid(6, 6);
        let mut s = Search::new(&mut g, Algorithm::BreadthFirst);
        s.initialize().unwrap();
        for _ in 0..5 {
            assert!(matches!(s.step(), Ok(Step::Visited(_))));
        }
        s.request_stop();
        assert_eq!(s.step(), Ok(Step::Stopped));
        let result = s.finish(true);
        assert_eq!(result.visited.len(), 5);
        assert!(result.cancelled && !result.path_found);
    }

    #[test]
    fn rerun_resets_scratch_and_stop_flag() {
        let mut g = open_grid(3, 3);
        let mut s = Search::new(&mut g, Algorithm::AStar);
        s.request_stop();
        let first = s.run(true);
        assert!(first.path_found && !first.cancelled);
        let second = s.run(true);
        assert_eq!(first, second);
    }

    #[test]
    fn detours_around_heavy_cells() {
        let mut g = Grid::parse(
            "
            S9E
            ...
            ",
        )
        .unwrap();
        let result = Search::new(&mut g, Algorithm::Dijkstra).run(true);
        assert!(result.path_found);
        let unique: std::collections::HashSet<_> = result.visited.iter().collect();
        assert_eq!(unique.len(), result.visited.len());
        assert_eq!(
            result.path,
            vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(1, 1), Pos::new(1, 2), Pos::new(0, 2)]
        );
    }
}
