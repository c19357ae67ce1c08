use super::{empty_queue, IndexedQueue, SlotArena};
use crate::error::Result;

/// Unordered array queue.
///
/// Decrease-key does no structural work because keys live in the arena;
/// extracting the minimum scans every slot. Wins on dense graphs where
/// relaxations vastly outnumber extractions.
#[derive(Debug, Clone, Default)]
pub struct LinearHeap {
    items: Vec<usize>,
}

impl LinearHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<A: SlotArena>(arena: &mut A, items: impl IntoIterator<Item = usize>) -> Self {
        let items: Vec<usize> = items.into_iter().collect();
        for (i, &item) in items.iter().enumerate() {
            arena.set_slot(item, Some(i));
        }
        Self { items }
    }

    pub fn get(&self, i: usize) -> Option<usize> {
        self.items.get(i).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().copied()
    }

    pub fn clear<A: SlotArena>(&mut self, arena: &mut A) {
        for item in self.items.drain(..) {
            arena.set_slot(item, None);
        }
    }

    fn position<A: SlotArena>(&self, arena: &A, item: usize) -> Option<usize> {
        arena
            .slot(item)
            .filter(|&i| self.items.get(i) == Some(&item))
    }

    fn min_position<A: SlotArena>(&self, arena: &A) -> Option<usize> {
        let mut best = None;
        for (i, &item) in self.items.iter().enumerate() {
            match best {
                Some(b) if !arena.less(item, self.items[b]) => {}
                _ => best = Some(i),
            }
        }
        best
    }

    fn take_at<A: SlotArena>(&mut self, arena: &mut A, i: usize) -> usize {
        let item = self.items.swap_remove(i);
        if let Some(&moved) = self.items.get(i) {
            arena.set_slot(moved, Some(i));
        }
        arena.set_slot(item, None);
        item
    }
}

impl IndexedQueue for LinearHeap {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn push<A: SlotArena>(&mut self, arena: &mut A, item: usize) {
        arena.set_slot(item, Some(self.items.len()));
        self.items.push(item);
    }

    fn peek<A: SlotArena>(&self, arena: &A) -> Option<usize> {
        self.min_position(arena).map(|i| self.items[i])
    }

    fn pop_min<A: SlotArena>(&mut self, arena: &mut A) -> Result<usize> {
        let i = self.min_position(arena).ok_or_else(empty_queue)?;
        Ok(self.take_at(arena, i))
    }

    fn remove<A: SlotArena>(&mut self, arena: &mut A, item: usize) -> bool {
        match self.position(arena, item) {
            Some(i) => {
                self.take_at(arena, i);
                true
            }
            None => false,
        }
    }

    fn decrease_key<A: SlotArena>(&mut self, _arena: &mut A, _item: usize) {}

    fn contains<A: SlotArena>(&self, arena: &A, item: usize) -> bool {
        self.position(arena, item).is_some()
    }
}
