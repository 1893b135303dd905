//! Slot arena that owns every node of a tree.
//!
//! Nodes are addressed by `NodeId` instead of references so that child links
//! and parent back-references can coexist without ownership cycles. Freed slots
//! go on a free list and are handed out again by later allocations.

use std::ops::{Index, IndexMut};

use crate::types::{NodeId, NULL_NODE};

/// Statistics for an arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
    pub fragmentation: f64,
}

/// Arena allocator with a free list for slot reuse.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    slots: Vec<Option<T>>,
    free_list: Vec<usize>,
    allocated: usize,
}

impl<T> Arena<T> {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            allocated: 0,
        }
    }

    /// Create a new arena with room for `capacity` items before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            allocated: 0,
        }
    }

    /// Store `item`, reusing a freed slot when one exists, and return its ID
    ///
    /// # Panics
    /// Panics once `u32::MAX` slots are in use, since that value is `NULL_NODE`.
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = if let Some(free_index) = self.free_list.pop() {
            self.slots[free_index] = Some(item);
            free_index
        } else {
            let index = self.slots.len();
            self.slots.push(Some(item));
            index
        };
        self.allocated += 1;

        NodeId::try_from(index)
            .ok()
            .filter(|&id| id != NULL_NODE)
            .expect("arena exhausted the NodeId space")
    }

    /// Deallocate an item and return it, or `None` if the ID is not live
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<T> {
        let index = Self::index_of(id)?;
        let item = self.slots.get_mut(index)?.take()?;
        self.free_list.push(index);
        self.allocated -= 1;
        Some(item)
    }

    /// Deallocate a live item.
    ///
    /// # Panics
    /// Panics if `id` does not refer to a live slot.
    pub fn remove(&mut self, id: NodeId) -> T {
        match self.deallocate(id) {
            Some(item) => item,
            None => panic!("remove of dangling NodeId {}", id),
        }
    }

    /// The item stored under `id`, if that slot is live
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slots.get(Self::index_of(id)?)?.as_ref()
    }

    /// Mutable access to the item stored under `id`, if that slot is live
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(Self::index_of(id)?)?.as_mut()
    }

    /// Borrow two distinct live items mutably at once.
    ///
    /// # Panics
    /// Panics if `a == b` or either ID is not live.
    pub fn pair_mut(&mut self, a: NodeId, b: NodeId) -> (&mut T, &mut T) {
        assert_ne!(a, b, "pair_mut needs two distinct ids");
        let (ia, ib) = (a as usize, b as usize);
        let (low, high) = if ia < ib { (ia, ib) } else { (ib, ia) };
        let (head, tail) = self.slots.split_at_mut(high);
        let (low_item, high_item) = match (head[low].as_mut(), tail[0].as_mut()) {
            (Some(l), Some(h)) => (l, h),
            _ => panic!("pair_mut on dangling NodeId ({}, {})", a, b),
        };
        if ia < ib {
            (low_item, high_item)
        } else {
            (high_item, low_item)
        }
    }

    /// Whether `id` names a live slot
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Get arena statistics
    pub fn stats(&self) -> ArenaStats {
        let total_capacity = self.slots.capacity();
        let allocated_count = self.allocated;
        let free_count = self.free_list.len();
        let utilization = if total_capacity > 0 {
            allocated_count as f64 / total_capacity as f64
        } else {
            0.0
        };
        let fragmentation = if allocated_count > 0 {
            free_count as f64 / (allocated_count + free_count) as f64
        } else {
            0.0
        };

        ArenaStats {
            total_capacity,
            allocated_count,
            free_count,
            utilization,
            fragmentation,
        }
    }

    /// Live items, not counting freed slots
    pub fn len(&self) -> usize {
        self.allocated
    }

    /// True when no slot is live
    pub fn is_empty(&self) -> bool {
        self.allocated == 0
    }

    /// Drop every item and forget the free list
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.allocated = 0;
    }

    /// Freed slots waiting for reuse
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    fn index_of(id: NodeId) -> Option<usize> {
        if id == NULL_NODE {
            return None;
        }
        usize::try_from(id).ok()
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            Some(item) => item,
            None => panic!("dangling NodeId {}", id),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.get_mut(id) {
            Some(item) => item,
            None => panic!("dangling NodeId {}", id),
        }
    }
}
