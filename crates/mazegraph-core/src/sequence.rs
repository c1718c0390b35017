//! Doubly linked sequence stored in an index arena.
//!
//! Nodes live in a `Vec` of slots and refer to their neighbours by slot
//! index, so there are no owning cycles and no `unsafe`. Freed slots go on a
//! free list and are reused by later insertions.
//!
//! Invariants, checked by the tests below:
//! - `front` has no `prev`, `back` has no `next`;
//! - following `next` from `front` visits exactly `len` nodes and ends at
//!   `back`;
//! - the empty list has `front == back == None` and `len == 0`.
use std::fmt;

use crate::error::CollectionError;

#[derive(Debug, Clone)]
struct Node<T> {
    item: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// An insertion-ordered list with O(1) operations at both ends.
///
/// Positional operations walk from whichever end is closer, costing
/// O(min(index, len - index)).
#[derive(Clone)]
pub struct DoubleLinkedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    front: Option<usize>,
    back: Option<usize>,
    len: usize,
}

impl<T> DoubleLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            front: None,
            back: None,
            len: 0,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first element, if any.
    pub fn front(&self) -> Option<&T> {
        self.front.and_then(|slot| self.node(slot)).map(|n| &n.item)
    }

    /// The last element, if any.
    pub fn back(&self) -> Option<&T> {
        self.back.and_then(|slot| self.node(slot)).map(|n| &n.item)
    }

    /// Appends `item` at the back.
    pub fn add(&mut self, item: T) {
        let slot = self.allocate(Node {
            item,
            prev: self.back,
            next: None,
        });
        match self.back.and_then(|back| self.node_mut(back)) {
            Some(old_back) => old_back.next = Some(slot),
            None => self.front = Some(slot),
        }
        self.back = Some(slot);
        self.len += 1;
    }

    /// Prepends `item` at the front.
    pub fn push_front(&mut self, item: T) {
        let slot = self.allocate(Node {
            item,
            prev: None,
            next: self.front,
        });
        match self.front.and_then(|front| self.node_mut(front)) {
            Some(old_front) => old_front.prev = Some(slot),
            None => self.back = Some(slot),
        }
        self.front = Some(slot);
        self.len += 1;
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the list is empty.
    pub fn remove(&mut self) -> Result<T, CollectionError> {
        let back = self.back.ok_or(CollectionError::EmptyContainer)?;
        self.unlink(back)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] unless `index < len`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        let slot = self.slot_at(index)?;
        self.node(slot)
            .map(|n| &n.item)
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Replaces the element at `index`, returning the old one.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] unless `index < len`.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, CollectionError> {
        let len = self.len;
        let slot = self.slot_at(index)?;
        self.node_mut(slot)
            .map(|n| std::mem::replace(&mut n.item, item))
            .ok_or(CollectionError::IndexOutOfRange { index, len })
    }

    /// Inserts `item` so that it ends up at position `index`.
    ///
    /// `index == len` appends. Existing nodes are relinked, never moved.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] unless `index <= len`.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), CollectionError> {
        if index == self.len {
            self.add(item);
            return Ok(());
        }
        let successor = self.slot_at(index)?;
        let predecessor = self.node(successor).and_then(|n| n.prev);
        let slot = self.allocate(Node {
            item,
            prev: predecessor,
            next: Some(successor),
        });
        if let Some(node) = self.node_mut(successor) {
            node.prev = Some(slot);
        }
        match predecessor.and_then(|p| self.node_mut(p)) {
            Some(node) => node.next = Some(slot),
            None => self.front = Some(slot),
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] unless `index < len`.
    pub fn delete(&mut self, index: usize) -> Result<T, CollectionError> {
        let slot = self.slot_at(index)?;
        self.unlink(slot)
    }

    /// Iterates front to back. Each call starts a fresh walk from the front.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.front,
            remaining: self.len,
        }
    }

    fn node(&self, slot: usize) -> Option<&Node<T>> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Finds the arena slot holding position `index`, walking from the
    /// nearer end.
    fn slot_at(&self, index: usize) -> Result<usize, CollectionError> {
        let out_of_range = CollectionError::IndexOutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }
        let mut cursor;
        if index < self.len / 2 {
            cursor = self.front;
            for _ in 0..index {
                cursor = cursor.and_then(|slot| self.node(slot)).and_then(|n| n.next);
            }
        } else {
            cursor = self.back;
            for _ in index + 1..self.len {
                cursor = cursor.and_then(|slot| self.node(slot)).and_then(|n| n.prev);
            }
        }
        cursor.ok_or(out_of_range)
    }

    fn unlink(&mut self, slot: usize) -> Result<T, CollectionError> {
        let node = self
            .slots
            .get_mut(slot)
            .and_then(Option::take)
            .ok_or(CollectionError::EmptyContainer)?;
        match node.prev.and_then(|p| self.node_mut(p)) {
            Some(prev) => prev.next = node.next,
            None => self.front = node.next,
        }
        match node.next.and_then(|n| self.node_mut(n)) {
            Some(next) => next.prev = node.prev,
            None => self.back = node.prev,
        }
        self.free.push(slot);
        self.len -= 1;
        if self.len == 0 {
            self.slots.clear();
            self.free.clear();
        }
        Ok(node.item)
    }
}

impl<T: PartialEq> DoubleLinkedList<T> {
    /// Position of the first element equal to `item`, or `None`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == item)
    }

    /// Returns `true` if some element equals `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T> Default for DoubleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoubleLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DoubleLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoubleLinkedList<T> {}

impl<T> FromIterator<T> for DoubleLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoubleLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a DoubleLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DoubleLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            cursor: self.front,
            slots: self.slots,
            remaining: self.len,
        }
    }
}

/// Borrowing front-to-back iterator over a [`DoubleLinkedList`].
pub struct Iter<'a, T> {
    list: &'a DoubleLinkedList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning front-to-back iterator over a [`DoubleLinkedList`].
pub struct IntoIter<T> {
    slots: Vec<Option<Node<T>>>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let node = self.slots.get_mut(slot).and_then(Option::take)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
