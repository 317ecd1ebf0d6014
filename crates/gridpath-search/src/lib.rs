//! Grid search strategies for gridpath.
//!
//! Three strategies share one driver, [`Search`]:
//!
//! - **A\*** guided by Manhattan distance ([`AStar`])
//! - **Dijkstra** uniform-cost search ([`Dijkstra`])
//! - **Breadth-first** unweighted search ([`BreadthFirst`])
//!
//! The driver owns the frontier and the state machine; a [`Strategy`]
//! only says how to seed, cost, relax and order nodes. Per-run scratch lives
//! on the grid's nodes, so a search borrows its grid mutably and records the
//! visited order for step-by-step replay.
//!
//! ```
//! use gridpath_core::Grid;
//! use gridpath_search::{Algorithm, Search};
//!
//! let mut grid = Grid::parse("S..\n##.\nE..").unwrap();
//! let result = Search::new(&mut grid, Algorithm::AStar).run(true);
//! assert!(result.path_found);
//! assert_eq!(result.path.len(), 7);
//! ```

mod algorithm;
mod astar;
mod bfs;
mod compare;
mod config;
mod dijkstra;
mod error;
mod path;
mod queue;
mod search;
mod traits;

pub use algorithm::Algorithm;
pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use compare::{Alternative, cheapest, compare};
pub use config::SearchConfig;
pub use dijkstra::Dijkstra;
pub use error::{QueueError, SearchError, UnknownAlgorithm};
pub use path::{path_cost, shortest_path};
pub use queue::PriorityQueue;
pub use search::{Search, SearchResult, SearchState, Step, StopHandle};
pub use traits::{Comparator, Frontier, Strategy};
