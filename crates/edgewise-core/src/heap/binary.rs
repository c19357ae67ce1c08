use super::{empty_queue, IndexedQueue, SlotArena};
use crate::error::Result;

/// Array-backed binary min-heap.
///
/// The arena records each item's array position, so removing an arbitrary
/// item or restoring order after a key decrease costs O(log n).
#[derive(Debug, Clone, Default)]
pub struct MinHeap {
    tree: Vec<usize>,
}

impl MinHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: Vec::with_capacity(capacity),
        }
    }

    /// Build a heap from all items at once in O(n), sifting down from the
    /// last internal node to the root.
    pub fn from_items<A: SlotArena>(arena: &mut A, items: impl IntoIterator<Item = usize>) -> Self {
        let tree: Vec<usize> = items.into_iter().collect();
        for (i, &item) in tree.iter().enumerate() {
            arena.set_slot(item, Some(i));
        }
        let mut heap = Self { tree };
        for i in (0..heap.tree.len() / 2).rev() {
            heap.sift_down(arena, i);
        }
        heap
    }

    /// Item stored at array position `i` (level order)
    pub fn get(&self, i: usize) -> Option<usize> {
        self.tree.get(i).copied()
    }

    /// Items in level order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.tree.iter().copied()
    }

    /// Empty the heap, marking every item as no longer enqueued
    pub fn clear<A: SlotArena>(&mut self, arena: &mut A) {
        for item in self.tree.drain(..) {
            arena.set_slot(item, None);
        }
    }

    fn position<A: SlotArena>(&self, arena: &A, item: usize) -> Option<usize> {
        arena
            .slot(item)
            .filter(|&i| self.tree.get(i) == Some(&item))
    }

    fn swap<A: SlotArena>(&mut self, arena: &mut A, i: usize, j: usize) {
        self.tree.swap(i, j);
        arena.set_slot(self.tree[i], Some(i));
        arena.set_slot(self.tree[j], Some(j));
    }

    fn sift_up<A: SlotArena>(&mut self, arena: &mut A, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !arena.less(self.tree[i], self.tree[parent]) {
                break;
            }
            self.swap(arena, i, parent);
            i = parent;
        }
        i
    }

    fn sift_down<A: SlotArena>(&mut self, arena: &mut A, mut i: usize) {
        let len = self.tree.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && arena.less(self.tree[left], self.tree[smallest]) {
                smallest = left;
            }
            if right < len && arena.less(self.tree[right], self.tree[smallest]) {
                smallest = right;
            }
            if smallest == i {
                return;
            }
            self.swap(arena, i, smallest);
            i = smallest;
        }
    }

    fn reorder<A: SlotArena>(&mut self, arena: &mut A, i: usize) {
        let i = self.sift_up(arena, i);
        self.sift_down(arena, i);
    }
}

impl IndexedQueue for MinHeap {
    fn len(&self) -> usize {
        self.tree.len()
    }

    fn push<A: SlotArena>(&mut self, arena: &mut A, item: usize) {
        let i = self.tree.len();
        self.tree.push(item);
        arena.set_slot(item, Some(i));
        self.sift_up(arena, i);
    }

    fn peek<A: SlotArena>(&self, _arena: &A) -> Option<usize> {
        self.tree.first().copied()
    }

    fn pop_min<A: SlotArena>(&mut self, arena: &mut A) -> Result<usize> {
        let item = *self.tree.first().ok_or_else(empty_queue)?;
        self.remove(arena, item);
        Ok(item)
    }

    fn remove<A: SlotArena>(&mut self, arena: &mut A, item: usize) -> bool {
        let Some(i) = self.position(arena, item) else {
            return false;
        };
        let last = self.tree.len() - 1;
        self.swap(arena, i, last);
        self.tree.pop();
        arena.set_slot(item, None);
        if i < self.tree.len() {
            self.reorder(arena, i);
        }
        true
    }

    fn decrease_key<A: SlotArena>(&mut self, arena: &mut A, item: usize) {
        if let Some(i) = self.position(arena, item) {
            self.reorder(arena, i);
        }
    }

    fn contains<A: SlotArena>(&self, arena: &A, item: usize) -> bool {
        self.position(arena, item).is_some()
    }
}
