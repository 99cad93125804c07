//! Slot arena for edge attribute records
//!
//! Undirected edges are reachable from two adjacency entries. Instead of
//! reference-counted cells, both entries store an [`EdgeId`] that indexes a
//! single slot here. Freed slots are recycled through a free list.

use super::types::EdgeId;

#[derive(Debug, Clone)]
pub struct SlotArena<T> {
    /// Slot storage; `None` marks a released slot
    slots: Vec<Option<T>>,

    /// Released slot ids for reuse
    free_ids: Vec<u64>,

    /// Number of occupied slots
    live: usize,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        SlotArena {
            slots: Vec::new(),
            free_ids: Vec::new(),
            live: 0,
        }
    }

    /// Store a record and return its handle
    pub fn insert(&mut self, value: T) -> EdgeId {
        self.live += 1;
        if let Some(id) = self.free_ids.pop() {
            self.slots[id as usize] = Some(value);
            return EdgeId::new(id);
        }
        self.slots.push(Some(value));
        EdgeId::new((self.slots.len() - 1) as u64)
    }

    pub fn get(&self, id: EdgeId) -> Option<&T> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: EdgeId) -> Option<&mut T> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Release a slot, returning the record it held
    pub fn remove(&mut self, id: EdgeId) -> Option<T> {
        let value = self.slots.get_mut(id.index()).and_then(Option::take)?;
        self.free_ids.push(id.as_u64());
        self.live -= 1;
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_ids.clear();
        self.live = 0;
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
