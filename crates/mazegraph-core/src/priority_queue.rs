//! 4-ary min-heap.
//!
//! Layout (0-indexed, `D = 4`):
//!
//! ```text
//! parent(i)      = (i - 1) / D
//! children(i)    = D*i + 1 ..= D*i + D
//! heap order     : items[parent(i)] <= items[i]  for every i > 0
//! ```
//!
//! `insert` appends and sifts up; `remove_min` moves the last item to the
//! root and sifts down, each in O(log4 n). Equal items come out in no
//! particular order.
use std::fmt;

use crate::config::ContainerConfig;
use crate::error::CollectionError;

const NUM_CHILDREN: usize = 4;

/// A min-priority queue backed by a 4-ary heap in a contiguous buffer.
#[derive(Clone)]
pub struct ArrayHeap<T> {
    items: Vec<T>,
}

impl<T: Ord> ArrayHeap<T> {
    /// Creates an empty heap with the default starting capacity.
    pub fn new() -> Self {
        Self::with_config(&ContainerConfig::default())
    }

    /// Creates an empty heap that can hold `capacity` items before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity.max(1)),
        }
    }

    /// Creates an empty heap sized by [`ContainerConfig::initial_heap_capacity`].
    pub fn with_config(config: &ContainerConfig) -> Self {
        Self::with_capacity(config.initial_heap_capacity)
    }

    /// Number of items in the heap.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `item`, doubling the buffer first if it is full.
    pub fn insert(&mut self, item: T) {
        if self.items.len() == self.items.capacity() {
            let grow_by = self.items.capacity().max(1);
            self.items.reserve_exact(grow_by);
            tracing::trace!(capacity = self.items.capacity(), "grew heap buffer");
        }
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Returns the smallest item without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the heap is empty.
    pub fn peek_min(&self) -> Result<&T, CollectionError> {
        self.items.first().ok_or(CollectionError::EmptyContainer)
    }

    /// Removes and returns the smallest item.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the heap is empty.
    pub fn remove_min(&mut self) -> Result<T, CollectionError> {
        if self.items.is_empty() {
            return Err(CollectionError::EmptyContainer);
        }
        let min = self.items.swap_remove(0);
        self.sift_down(0);
        Ok(min)
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / NUM_CHILDREN;
            if self.items[child] >= self.items[parent] {
                break;
            }
            self.items.swap(child, parent);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        while let Some(child) = self.min_child(parent) {
            if self.items[child] >= self.items[parent] {
                break;
            }
            self.items.swap(child, parent);
            parent = child;
        }
    }

    /// Index of the smallest child of `parent`, or `None` for a leaf.
    fn min_child(&self, parent: usize) -> Option<usize> {
        let first = NUM_CHILDREN * parent + 1;
        let last = (first + NUM_CHILDREN).min(self.items.len());
        (first..last).min_by(|&a, &b| self.items[a].cmp(&self.items[b]))
    }
}

impl<T: Ord> Default for ArrayHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayHeap")
            .field("len", &self.items.len())
            .field("items", &self.items)
            .finish()
    }
}

impl<T: Ord> Extend<T> for ArrayHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for ArrayHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
