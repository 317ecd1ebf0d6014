use thiserror::Error;

use crate::search::SearchState;

/// Errors reported by a [`Search`](crate::Search).
///
/// None of these abort a [`run`](crate::Search::run): a run that cannot
/// initialize returns an empty, not-found result instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The grid has no start cell.
    #[error("grid has no start cell")]
    MissingStart,

    /// The grid has no end cell.
    #[error("grid has no end cell")]
    MissingEnd,

    /// `step` was called outside the `Running` state.
    #[error("search is not running (state: {0:?})")]
    NotRunning(SearchState),
}

/// Contract violations on a [`PriorityQueue`](crate::PriorityQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("dequeue from an empty priority queue")]
    Empty,
}

/// Raised when parsing an [`Algorithm`](crate::Algorithm) name fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm \u{201c}{0}\u{201d}; expected one of a-star, dijkstra, bfs")]
pub struct UnknownAlgorithm(pub String);
