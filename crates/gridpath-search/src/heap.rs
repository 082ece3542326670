//! A binary min-heap with decrease-key by identity.
//!
//! [`IndexedHeap`] stores `(item, priority)` entries in a 0-indexed array
//! (children of `i` at `2i + 1` and `2i + 2`, parent at `(i - 1) / 2`) and
//! keeps a side map from item to its current slot. The map is updated on
//! every swap, so locating an item for [`decrease_key`](IndexedHeap::decrease_key)
//! or [`remove`](IndexedHeap::remove) never scans the array.
//!
//! Invariants after every mutating call:
//! - every entry's priority is ≤ the priorities of its children;
//! - `index[item] == slot` for every entry.

use std::collections::HashMap;
use std::hash::Hash;

/// Errors for heap operations whose precondition was not met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HeapError {
    /// Extraction or peek on an empty heap.
    #[error("heap is empty")]
    Empty,
    /// `remove_at` past the last occupied slot.
    #[error("heap index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// The item is not currently in the heap.
    #[error("item is not in the heap")]
    Missing,
}

#[derive(Clone, Debug)]
struct Entry<T, P> {
    item: T,
    priority: P,
}

/// Array-backed binary min-heap keyed by item identity.
///
/// Items are unique: pushing an item already present replaces its priority
/// and restores the ordering.
#[derive(Clone, Debug)]
pub struct IndexedHeap<T, P> {
    entries: Vec<Entry<T, P>>,
    index: HashMap<T, usize>,
}

impl<T, P> Default for IndexedHeap<T, P>
where
    T: Copy + Eq + Hash,
    P: Copy + PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> IndexedHeap<T, P>
where
    T: Copy + Eq + Hash,
    P: Copy + PartialOrd,
{
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create an empty heap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `item` is in the heap.
    #[inline]
    pub fn contains(&self, item: T) -> bool {
        self.index.contains_key(&item)
    }

    /// Current priority of `item`, if present.
    pub fn priority(&self, item: T) -> Option<P> {
        self.index.get(&item).map(|&i| self.entries[i].priority)
    }

    /// Insert `item`. If it is already present its priority is replaced and
    /// the entry moved in whichever direction restores the ordering.
    pub fn push(&mut self, item: T, priority: P) {
        if let Some(&i) = self.index.get(&item) {
            self.entries[i].priority = priority;
            let i = self.sift_up(i);
            self.sift_down(i);
            return;
        }
        let pos = self.entries.len();
        self.entries.push(Entry { item, priority });
        self.index.insert(item, pos);
        self.sift_up(pos);
    }

    /// The minimum entry without removing it.
    pub fn peek(&self) -> Option<(T, P)> {
        self.entries.first().map(|e| (e.item, e.priority))
    }

    /// Like [`peek`](Self::peek) but reports an empty heap as an error.
    pub fn expect_peek(&self) -> Result<(T, P), HeapError> {
        self.peek().ok_or(HeapError::Empty)
    }

    /// Remove and return the minimum entry.
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.take(0)
    }

    /// Like [`pop`](Self::pop) but reports an empty heap as an error.
    pub fn expect_pop(&mut self) -> Result<(T, P), HeapError> {
        self.pop().ok_or(HeapError::Empty)
    }

    /// Lower the priority of an item already in the heap and move it toward
    /// the root. A priority that is not lower is stored as well, but the
    /// entry is only sifted up.
    pub fn decrease_key(&mut self, item: T, priority: P) -> Result<(), HeapError> {
        let &i = self.index.get(&item).ok_or(HeapError::Missing)?;
        self.entries[i].priority = priority;
        self.sift_up(i);
        Ok(())
    }

    /// Remove `item` wherever it is.
    pub fn remove(&mut self, item: T) -> Result<P, HeapError> {
        let &i = self.index.get(&item).ok_or(HeapError::Missing)?;
        self.take(i).map(|(_, p)| p).ok_or(HeapError::Missing)
    }

    /// Remove the entry at array slot `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<(T, P), HeapError> {
        let len = self.entries.len();
        if index >= len {
            return Err(HeapError::IndexOutOfRange { index, len });
        }
        self.take(index)
            .ok_or(HeapError::IndexOutOfRange { index, len })
    }

    /// Remove every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Entries in array order (not sorted).
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (T, P)> + '_ {
        self.entries.iter().map(|e| (e.item, e.priority))
    }

    /// Items in array order (not sorted).
    pub fn into_vec(self) -> Vec<T> {
        self.entries.into_iter().map(|e| e.item).collect()
    }

    /// Verify the ordering and the index map. Meant for tests and debug
    /// assertions; O(n).
    pub fn check_invariants(&self) -> bool {
        if self.index.len() != self.entries.len() {
            return false;
        }
        self.entries.iter().enumerate().all(|(i, e)| {
            let ordered = i == 0 || !(e.priority < self.entries[(i - 1) / 2].priority);
            ordered && self.index.get(&e.item) == Some(&i)
        })
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Swap `i` with the last entry, shrink, then sift the replacement in
    /// whichever direction it needs.
    fn take(&mut self, i: usize) -> Option<(T, P)> {
        let last = self.entries.len().checked_sub(1)?;
        self.swap(i, last);
        let removed = self.entries.pop()?;
        self.index.remove(&removed.item);
        if i < self.entries.len() {
            let i = self.sift_up(i);
            self.sift_down(i);
        }
        Some((removed.item, removed.priority))
    }

    /// Bubble toward the root while the entry is ≤ its parent. Equal
    /// priorities still swap. Returns the final slot.
    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.entries[pos].priority <= self.entries[parent].priority {
                self.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
        pos
    }

    /// Descend to the smaller child while the entry is strictly greater.
    fn sift_down(&mut self, mut pos: usize) {
        loop {
            let child = self.smaller_child(pos);
            if child == pos {
                break;
            }
            if self.entries[pos].priority > self.entries[child].priority {
                self.swap(pos, child);
                pos = child;
            } else {
                break;
            }
        }
    }

    /// The child with the smaller priority, preferring the right one on
    /// ties. Returns `pos` for a leaf.
    fn smaller_child(&self, pos: usize) -> usize {
        let left = 2 * pos + 1;
        if left >= self.entries.len() {
            return pos;
        }
        let right = left + 1;
        if right >= self.entries.len() || self.entries[left].priority < self.entries[right].priority
        {
            left
        } else {
            right
        }
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.index.insert(self.entries[a].item, a);
        self.index.insert(self.entries[b].item, b);
    }
}
