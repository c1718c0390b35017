//! Disjoint-set forest over arbitrary hashable items.
//!
//! Items are mapped to dense indices in registration order through a
//! [`ChainedHashDictionary`]. Each index owns one [`Pointer`] cell: either the
//! root of a set (carrying its rank) or a link to its parent.
//!
//! Union-by-rank keeps trees shallow: the root with the larger rank absorbs
//! the other, and on a tie the first argument's root absorbs the second's
//! and its rank grows by one. No path compression is performed, so
//! [`ArrayDisjointSet::find_set`] costs O(depth) and never mutates.
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use crate::config::ContainerConfig;
use crate::dictionary::{ChainedHashDictionary, Dictionary};

/// One cell of the forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    /// This index is the representative of its set.
    Root {
        /// Upper bound on the height of the tree under this root.
        rank: u32,
    },
    /// This index hangs under `parent`.
    Child {
        /// Index of the parent cell.
        parent: usize,
    },
}

/// Errors raised by [`ArrayDisjointSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisjointSetError {
    /// `make_set` was called for an item that is already registered.
    DuplicateItem,
    /// An item passed to `find_set` or `union` was never registered.
    ItemNotFound,
    /// `union` was called for two items that already share a root.
    AlreadySameSet,
}

impl fmt::Display for DisjointSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateItem => write!(f, "item is already registered"),
            Self::ItemNotFound => write!(f, "item is not registered"),
            Self::AlreadySameSet => write!(f, "items are already in the same set"),
        }
    }
}

impl std::error::Error for DisjointSetError {}

/// A union-find forest with union-by-rank and no path compression.
pub struct ArrayDisjointSet<T> {
    indices: ChainedHashDictionary<T, usize>,
    pointers: Vec<Pointer>,
}

impl<T: Hash + Eq> ArrayDisjointSet<T> {
    /// Creates an empty forest with the default starting capacity.
    pub fn new() -> Self {
        Self::with_config(&ContainerConfig::default())
    }

    /// Creates an empty forest sized by the config's forest capacity and
    /// bucket count.
    pub fn with_config(config: &ContainerConfig) -> Self {
        Self {
            indices: ChainedHashDictionary::with_config(config),
            pointers: Vec::with_capacity(config.initial_forest_capacity.max(1)),
        }
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    /// Returns `true` if no item has been registered.
    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    /// Returns `true` if `item` has been registered.
    pub fn contains(&self, item: &T) -> bool {
        self.indices.contains_key(item)
    }

    /// Registers `item` as a singleton set of rank 0 and returns its index.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::DuplicateItem`] if `item` is already
    /// registered.
    pub fn make_set(&mut self, item: T) -> Result<usize, DisjointSetError> {
        if self.indices.contains_key(&item) {
            return Err(DisjointSetError::DuplicateItem);
        }
        if self.pointers.len() == self.pointers.capacity() {
            let grow_by = self.pointers.capacity().max(1);
            self.pointers.reserve_exact(grow_by);
            tracing::trace!(capacity = self.pointers.capacity(), "grew forest buffer");
        }
        let index = self.pointers.len();
        self.pointers.push(Pointer::Root { rank: 0 });
        self.indices.put(item, index);
        Ok(index)
    }

    /// Returns the index of the root of the set containing `item`.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::ItemNotFound`] if `item` is unregistered.
    pub fn find_set(&self, item: &T) -> Result<usize, DisjointSetError> {
        let index = self.index_of(item)?;
        Ok(self.root_of(index))
    }

    /// Merges the sets containing `first` and `second`.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::ItemNotFound`] if either item is
    /// unregistered and [`DisjointSetError::AlreadySameSet`] if both already
    /// share a root. The forest is unchanged on error.
    pub fn union(&mut self, first: &T, second: &T) -> Result<(), DisjointSetError> {
        let root1 = self.find_set(first)?;
        let root2 = self.find_set(second)?;
        if root1 == root2 {
            return Err(DisjointSetError::AlreadySameSet);
        }
        let rank1 = self.rank_of(root1);
        let rank2 = self.rank_of(root2);
        match rank1.cmp(&rank2) {
            Ordering::Less => self.pointers[root1] = Pointer::Child { parent: root2 },
            Ordering::Greater => self.pointers[root2] = Pointer::Child { parent: root1 },
            Ordering::Equal => {
                self.pointers[root2] = Pointer::Child { parent: root1 };
                self.pointers[root1] = Pointer::Root { rank: rank1 + 1 };
            }
        }
        Ok(())
    }

    /// The raw pointer cells, indexed by registration order.
    pub fn pointers(&self) -> &[Pointer] {
        &self.pointers
    }

    fn index_of(&self, item: &T) -> Result<usize, DisjointSetError> {
        self.indices
            .get(item)
            .copied()
            .map_err(|_| DisjointSetError::ItemNotFound)
    }

    fn root_of(&self, mut index: usize) -> usize {
        while let Some(Pointer::Child { parent }) = self.pointers.get(index) {
            index = *parent;
        }
        index
    }

    fn rank_of(&self, root: usize) -> u32 {
        match self.pointers.get(root) {
            Some(Pointer::Root { rank }) => *rank,
            Some(Pointer::Child { .. }) | None => 0,
        }
    }
}

impl<T: Hash + Eq> Default for ArrayDisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayDisjointSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayDisjointSet")
            .field("indices", &self.indices)
            .field("pointers", &self.pointers)
            .finish()
    }
}
