//! Comparator-ordered priority queue used as the search frontier.
//!
//! Items are kept in a [`BinaryHeap`] ordered by a comparator supplied at
//! construction. Ties are broken by insertion order (FIFO), so the queue is
//! stable. There is no decrease-key: callers re-enqueue on improvement and
//! skip stale entries when they surface.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::QueueError;

#[derive(Debug, Clone)]
struct Entry<T> {
    item: T,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
    cmp: fn(&T, &T) -> Ordering,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural order; the heap holds entries in `Reverse`.
        (self.cmp)(&self.item, &other.item).then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A stable min-priority queue keyed by an injected comparator.
///
/// `cmp(a, b)` returning [`Ordering::Less`] means `a` is dequeued before `b`.
/// Duplicate entries for the same logical item are allowed.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
    cmp: fn(&T, &T) -> Ordering,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue ordered by `cmp`.
    pub fn new(cmp: fn(&T, &T) -> Ordering) -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
            cmp,
        }
    }

    /// Insert an item.
    pub fn enqueue(&mut self, item: T) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            item,
            seq,
            cmp: self.cmp,
        }));
    }

    /// Remove and return the minimum, failing on an empty queue.
    ///
    /// An empty dequeue is a contract violation; loops should guard with
    /// [`is_empty`](Self::is_empty) or use [`pop`](Self::pop).
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.pop().ok_or(QueueError::Empty)
    }

    /// Remove and return the minimum, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(e)| e.item)
    }

    /// The minimum without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(e)| &e.item)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Drop every entry. The tie-break counter keeps counting.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
