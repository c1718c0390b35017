//! Hash set built on [`ChainedHashDictionary`] with unit values.
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::config::ContainerConfig;
use crate::dictionary::{self, ChainedHashDictionary, Dictionary};
use crate::error::CollectionError;

/// An unordered set of unique items.
///
/// Resizing and iteration order follow the underlying
/// [`ChainedHashDictionary`].
pub struct ChainedHashSet<T, S = RandomState> {
    map: ChainedHashDictionary<T, (), S>,
}

impl<T> ChainedHashSet<T, RandomState> {
    /// Creates an empty set with the default bucket count.
    pub fn new() -> Self {
        Self {
            map: ChainedHashDictionary::new(),
        }
    }

    /// Creates an empty set sized by [`ContainerConfig::initial_bucket_count`].
    pub fn with_config(config: &ContainerConfig) -> Self {
        Self {
            map: ChainedHashDictionary::with_config(config),
        }
    }
}

impl<T, S> ChainedHashSet<T, S> {
    /// Iterates over the items.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.map.iter(),
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher> ChainedHashSet<T, S> {
    /// Number of items.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set holds no items.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Adds `item`, returning `true` if it was not already present.
    pub fn add(&mut self, item: T) -> bool {
        self.map.put(item, ()).is_none()
    }

    /// Removes `item`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ItemNotFound`] if `item` is absent.
    pub fn remove(&mut self, item: &T) -> Result<(), CollectionError> {
        self.map.remove(item)
    }

    /// Returns `true` if `item` is present.
    pub fn contains(&self, item: &T) -> bool {
        self.map.contains_key(item)
    }
}

impl<T> Default for ChainedHashSet<T, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, S: Clone> Clone for ChainedHashSet<T, S> {
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
        }
    }
}

impl<T: fmt::Debug, S> fmt::Debug for ChainedHashSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for ChainedHashSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for ChainedHashSet<T, S> {}

impl<T: Hash + Eq> FromIterator<T> for ChainedHashSet<T, RandomState> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for ChainedHashSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T, S> IntoIterator for &'a ChainedHashSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> IntoIterator for ChainedHashSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.map.into_iter(),
        }
    }
}

/// Borrowing iterator over a [`ChainedHashSet`].
pub struct Iter<'a, T> {
    inner: dictionary::Iter<'a, T, ()>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(item, ())| item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over a [`ChainedHashSet`].
pub struct IntoIter<T> {
    inner: dictionary::IntoIter<T, ()>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(item, ())| item)
    }
}
