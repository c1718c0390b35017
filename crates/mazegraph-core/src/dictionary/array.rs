use std::fmt;

use super::Dictionary;
use crate::error::CollectionError;

/// A dictionary backed by an unordered buffer of pairs.
///
/// Lookups compare keys with `==` one by one, so every operation is O(n).
/// Removal moves the last pair into the vacated slot, which is why iteration
/// order is not insertion order once anything has been removed.
#[derive(Clone, PartialEq, Eq)]
pub struct ArrayDictionary<K, V> {
    pairs: Vec<(K, V)>,
}

impl<K, V> ArrayDictionary<K, V> {
    /// Creates an empty dictionary without allocating.
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Iterates over `(key, value)` pairs in buffer order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.pairs.iter(),
        }
    }
}

impl<K: Eq, V> ArrayDictionary<K, V> {
    fn position(&self, key: &K) -> Option<usize> {
        self.pairs.iter().position(|(k, _)| k == key)
    }
}

impl<K: Eq, V> Dictionary<K, V> for ArrayDictionary<K, V> {
    fn get(&self, key: &K) -> Result<&V, CollectionError> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or(CollectionError::ItemNotFound)
    }

    fn get_mut(&mut self, key: &K) -> Result<&mut V, CollectionError> {
        self.pairs
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or(CollectionError::ItemNotFound)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.pairs[index].1, value)),
            None => {
                self.pairs.push((key, value));
                None
            }
        }
    }

    fn remove(&mut self, key: &K) -> Result<V, CollectionError> {
        let index = self.position(key).ok_or(CollectionError::ItemNotFound)?;
        Ok(self.pairs.swap_remove(index).1)
    }

    fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    fn len(&self) -> usize {
        self.pairs.len()
    }
}

impl<K, V> Default for ArrayDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ArrayDictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> IntoIterator for ArrayDictionary<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a ArrayDictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over an [`ArrayDictionary`].
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
