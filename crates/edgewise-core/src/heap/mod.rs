//! Indexable priority queues
//!
//! Queues hold `usize` items that index into an external arena. The arena
//! owns the keys and records each item's current queue slot, so arbitrary
//! removal and decrease-key never search the queue:
//! - `binary`: array-backed binary min-heap, O(log n) for every update
//! - `linear`: unordered array, O(1) decrease-key and O(n) extraction
//! - `keyed`: a standalone arena for plain keys, plus heap sort

pub mod binary;
pub mod keyed;
pub mod linear;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

pub use binary::MinHeap;
pub use keyed::{heap_sort, KeyedSlots};
pub use linear::LinearHeap;

/// Storage for the elements a queue orders.
///
/// `slot` is `None` whenever the item is not enqueued.
pub trait SlotArena {
    /// True if item `a` has a strictly smaller key than item `b`
    fn less(&self, a: usize, b: usize) -> bool;
    fn slot(&self, item: usize) -> Option<usize>;
    fn set_slot(&mut self, item: usize, slot: Option<usize>);
}

/// Operations shared by both queue backends
pub trait IndexedQueue {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enqueue an item; its key must already be set in the arena
    fn push<A: SlotArena>(&mut self, arena: &mut A, item: usize);

    /// Item with the smallest key, without removing it
    fn peek<A: SlotArena>(&self, arena: &A) -> Option<usize>;

    /// Remove and return the item with the smallest key
    fn pop_min<A: SlotArena>(&mut self, arena: &mut A) -> Result<usize>;

    /// Remove an arbitrary item. Returns false if it was not enqueued.
    fn remove<A: SlotArena>(&mut self, arena: &mut A, item: usize) -> bool;

    /// Restore queue order after the item's key shrank. No-op for items not enqueued.
    fn decrease_key<A: SlotArena>(&mut self, arena: &mut A, item: usize);

    fn contains<A: SlotArena>(&self, arena: &A, item: usize) -> bool;
}

pub(crate) fn empty_queue() -> GraphError {
    GraphError::empty_structure("priority queue")
}

/// Which queue backend weighted shortest paths should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueueStrategy {
    /// Choose per call from the graph's edge density
    #[default]
    Auto,
    BinaryHeap,
    LinearScan,
}

impl QueueStrategy {
    /// Resolve `Auto` into a concrete backend for a graph of the given size.
    ///
    /// Dense graphs relax far more edges than they extract vertices, which
    /// favours the linear-scan queue's constant-time decrease-key.
    pub fn resolve(self, vertices: usize, edges: usize, dense_slack: usize) -> QueueStrategy {
        match self {
            QueueStrategy::Auto => {
                let n = vertices as i64;
                let threshold = n * (n - 1) / 2 - dense_slack as i64 * n;
                if edges as i64 > threshold {
                    QueueStrategy::LinearScan
                } else {
                    QueueStrategy::BinaryHeap
                }
            }
            concrete => concrete,
        }
    }
}

impl FromStr for QueueStrategy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(QueueStrategy::Auto),
            "binary-heap" | "binary" => Ok(QueueStrategy::BinaryHeap),
            "linear-scan" | "linear" => Ok(QueueStrategy::LinearScan),
            other => Err(GraphError::invalid_argument(
                "queue strategy",
                format!("{} (expected: auto, binary-heap, linear-scan)", other),
            )),
        }
    }
}

impl fmt::Display for QueueStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueStrategy::Auto => write!(f, "auto"),
            QueueStrategy::BinaryHeap => write!(f, "binary-heap"),
            QueueStrategy::LinearScan => write!(f, "linear-scan"),
        }
    }
}

/// A queue backend chosen at runtime
#[derive(Debug, Clone)]
pub enum DijkstraQueue {
    Binary(MinHeap),
    Linear(LinearHeap),
}

impl DijkstraQueue {
    /// Build a queue over `items` with the given backend. `Auto` builds a binary heap.
    pub fn build<A: SlotArena>(
        strategy: QueueStrategy,
        arena: &mut A,
        items: impl IntoIterator<Item = usize>,
    ) -> Self {
        match strategy {
            QueueStrategy::LinearScan => DijkstraQueue::Linear(LinearHeap::from_items(arena, items)),
            QueueStrategy::Auto | QueueStrategy::BinaryHeap => {
                DijkstraQueue::Binary(MinHeap::from_items(arena, items))
            }
        }
    }

    pub fn strategy(&self) -> QueueStrategy {
        match self {
            DijkstraQueue::Binary(_) => QueueStrategy::BinaryHeap,
            DijkstraQueue::Linear(_) => QueueStrategy::LinearScan,
        }
    }
}

impl IndexedQueue for DijkstraQueue {
    fn len(&self) -> usize {
        match self {
            DijkstraQueue::Binary(q) => q.len(),
            DijkstraQueue::Linear(q) => q.len(),
        }
    }

    fn push<A: SlotArena>(&mut self, arena: &mut A, item: usize) {
        match self {
            DijkstraQueue::Binary(q) => q.push(arena, item),
            DijkstraQueue::Linear(q) => q.push(arena, item),
        }
    }

    fn peek<A: SlotArena>(&self, arena: &A) -> Option<usize> {
        match self {
            DijkstraQueue::Binary(q) => q.peek(arena),
            DijkstraQueue::Linear(q) => q.peek(arena),
        }
    }

    fn pop_min<A: SlotArena>(&mut self, arena: &mut A) -> Result<usize> {
        match self {
            DijkstraQueue::Binary(q) => q.pop_min(arena),
            DijkstraQueue::Linear(q) => q.pop_min(arena),
        }
    }

    fn remove<A: SlotArena>(&mut self, arena: &mut A, item: usize) -> bool {
        match self {
            DijkstraQueue::Binary(q) => q.remove(arena, item),
            DijkstraQueue::Linear(q) => q.remove(arena, item),
        }
    }

    fn decrease_key<A: SlotArena>(&mut self, arena: &mut A, item: usize) {
        match self {
            DijkstraQueue::Binary(q) => q.decrease_key(arena, item),
            DijkstraQueue::Linear(q) => q.decrease_key(arena, item),
        }
    }

    fn contains<A: SlotArena>(&self, arena: &A, item: usize) -> bool {
        match self {
            DijkstraQueue::Binary(q) => q.contains(arena, item),
            DijkstraQueue::Linear(q) => q.contains(arena, item),
        }
    }
}
