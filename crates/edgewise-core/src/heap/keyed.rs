use super::{IndexedQueue, MinHeap, SlotArena};

/// A `Vec`-backed arena pairing each key with its queue slot.
///
/// Lets the queues order plain values without a surrounding graph.
#[derive(Debug, Clone, Default)]
pub struct KeyedSlots<K> {
    keys: Vec<K>,
    slots: Vec<Option<usize>>,
}

impl<K: PartialOrd> KeyedSlots<K> {
    pub fn new(keys: Vec<K>) -> Self {
        let slots = vec![None; keys.len()];
        Self { keys, slots }
    }

    /// Append a key, returning the item index that refers to it
    pub fn insert(&mut self, key: K) -> usize {
        self.keys.push(key);
        self.slots.push(None);
        self.keys.len() - 1
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn key(&self, item: usize) -> Option<&K> {
        self.keys.get(item)
    }

    /// Overwrite a key, returning `false` if `item` was never inserted.
    ///
    /// Callers decreasing a key must follow with `decrease_key` on the queue.
    pub fn set_key(&mut self, item: usize, key: K) -> bool {
        match self.keys.get_mut(item) {
            Some(slot) => {
                *slot = key;
                true
            }
            None => false,
        }
    }

    pub fn into_keys(self) -> Vec<K> {
        self.keys
    }
}

impl<K: PartialOrd> SlotArena for KeyedSlots<K> {
    fn less(&self, a: usize, b: usize) -> bool {
        self.keys[a] < self.keys[b]
    }

    fn slot(&self, item: usize) -> Option<usize> {
        self.slots.get(item).copied().flatten()
    }

    fn set_slot(&mut self, item: usize, slot: Option<usize>) {
        self.slots[item] = slot;
    }
}

/// Sort values in ascending order with a bottom-up built min-heap
pub fn heap_sort<K: PartialOrd>(values: Vec<K>) -> Vec<K> {
    let n = values.len();
    let mut arena = KeyedSlots::new(values);
    let mut heap = MinHeap::from_items(&mut arena, 0..n);

    let mut order = Vec::with_capacity(n);
    while let Ok(item) = heap.pop_min(&mut arena) {
        order.push(item);
    }

    let mut keys: Vec<Option<K>> = arena.into_keys().into_iter().map(Some).collect();
    order.into_iter().filter_map(|i| keys[i].take()).collect()
}
