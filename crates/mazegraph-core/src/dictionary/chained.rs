use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::{ArrayDictionary, ArrayIter, Dictionary};
use crate::config::ContainerConfig;
use crate::error::CollectionError;

/// Separate-chaining hash table.
///
/// Keys are placed in bucket `hash(key) % bucket_count`. Buckets are created
/// on first insertion and are themselves [`ArrayDictionary`] instances.
///
/// # Load factor
///
/// After every `put` that adds a new key, `len / bucket_count` is compared
/// with 2/3. If it is strictly greater, the table doubles its bucket count
/// and re-inserts every pair. `get`, `remove`, and overwriting puts never
/// resize.
pub struct ChainedHashDictionary<K, V, S = RandomState> {
    chains: Vec<Option<ArrayDictionary<K, V>>>,
    len: usize,
    hasher: S,
}

const LOAD_NUMERATOR: usize = 2;
const LOAD_DENOMINATOR: usize = 3;

fn empty_chains<K, V>(count: usize) -> Vec<Option<ArrayDictionary<K, V>>> {
    std::iter::repeat_with(|| None).take(count).collect()
}

impl<K, V> ChainedHashDictionary<K, V, RandomState> {
    /// Creates an empty table with the default bucket count.
    pub fn new() -> Self {
        Self::with_config(&ContainerConfig::default())
    }

    /// Creates an empty table with `bucket_count` buckets (at least one).
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        Self::with_bucket_count_and_hasher(bucket_count, RandomState::new())
    }

    /// Creates an empty table sized by [`ContainerConfig::initial_bucket_count`].
    pub fn with_config(config: &ContainerConfig) -> Self {
        Self::with_bucket_count(config.initial_bucket_count)
    }
}

impl<K, V, S> ChainedHashDictionary<K, V, S> {
    /// Creates an empty table that hashes keys with `hasher`.
    pub fn with_bucket_count_and_hasher(bucket_count: usize, hasher: S) -> Self {
        Self {
            chains: empty_chains(bucket_count.max(1)),
            len: 0,
            hasher,
        }
    }

    /// Current number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.chains.len()
    }

    /// Iterates over all pairs. Order follows bucket index, then bucket
    /// order, and is stable while the table is not mutated.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            chains: self.chains.iter(),
            current: None,
            remaining: self.len,
        }
    }

    /// Iterates over all keys.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Iterates over all values.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ChainedHashDictionary<K, V, S> {
    fn bucket_index(&self, key: &K) -> usize {
        // `chains` is never empty, so the modulus is well defined.
        (self.hasher.hash_one(key) % self.chains.len() as u64) as usize
    }

    fn chain(&self, key: &K) -> Option<&ArrayDictionary<K, V>> {
        self.chains
            .get(self.bucket_index(key))
            .and_then(Option::as_ref)
    }

    fn chain_mut(&mut self, key: &K) -> Option<&mut ArrayDictionary<K, V>> {
        let index = self.bucket_index(key);
        self.chains.get_mut(index).and_then(Option::as_mut)
    }

    fn insert_into_chain(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        match self.chains.get_mut(index) {
            Some(slot) => slot.get_or_insert_with(ArrayDictionary::new).put(key, value),
            None => None,
        }
    }

    fn exceeds_load_factor(&self) -> bool {
        self.len * LOAD_DENOMINATOR > self.chains.len() * LOAD_NUMERATOR
    }

    fn rehash(&mut self) {
        let old_count = self.chains.len();
        let old_chains = std::mem::replace(&mut self.chains, empty_chains(old_count * 2));
        for chain in old_chains.into_iter().flatten() {
            for (key, value) in chain {
                self.insert_into_chain(key, value);
            }
        }
        tracing::debug!(
            old_buckets = old_count,
            new_buckets = self.chains.len(),
            len = self.len,
            "rehashed chained dictionary"
        );
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Dictionary<K, V> for ChainedHashDictionary<K, V, S> {
    fn get(&self, key: &K) -> Result<&V, CollectionError> {
        self.chain(key)
            .ok_or(CollectionError::ItemNotFound)?
            .get(key)
    }

    fn get_mut(&mut self, key: &K) -> Result<&mut V, CollectionError> {
        self.chain_mut(key)
            .ok_or(CollectionError::ItemNotFound)?
            .get_mut(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.insert_into_chain(key, value);
        if previous.is_none() {
            self.len += 1;
            if self.exceeds_load_factor() {
                self.rehash();
            }
        }
        previous
    }

    fn remove(&mut self, key: &K) -> Result<V, CollectionError> {
        let value = self
            .chain_mut(key)
            .ok_or(CollectionError::ItemNotFound)?
            .remove(key)?;
        self.len -= 1;
        Ok(value)
    }

    fn contains_key(&self, key: &K) -> bool {
        self.chain(key).is_some_and(|chain| chain.contains_key(key))
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<K, V> Default for ChainedHashDictionary<K, V, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, S: Clone> Clone for ChainedHashDictionary<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            chains: self.chains.clone(),
            len: self.len,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ChainedHashDictionary<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for ChainedHashDictionary<K, V, RandomState> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Extend<(K, V)> for ChainedHashDictionary<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a ChainedHashDictionary<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> IntoIterator for ChainedHashDictionary<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            chains: self.chains.into_iter(),
            current: None,
        }
    }
}

/// Borrowing iterator over a [`ChainedHashDictionary`].
///
/// Walks the bucket buffer front to back and drains each bucket's own
/// iterator before moving on.
pub struct Iter<'a, K, V> {
    chains: std::slice::Iter<'a, Option<ArrayDictionary<K, V>>>,
    current: Option<ArrayIter<'a, K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.current.as_mut().and_then(Iterator::next) {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(pair);
            }
            let chain = self.chains.next()?;
            self.current = chain.as_ref().map(ArrayDictionary::iter);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Owning iterator over a [`ChainedHashDictionary`].
pub struct IntoIter<K, V> {
    chains: std::vec::IntoIter<Option<ArrayDictionary<K, V>>>,
    current: Option<std::vec::IntoIter<(K, V)>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.current.as_mut().and_then(Iterator::next) {
                return Some(pair);
            }
            let chain = self.chains.next()?;
            self.current = chain.map(IntoIterator::into_iter);
        }
    }
}

/// Iterator over the keys of a [`ChainedHashDictionary`].
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Iterator over the values of a [`ChainedHashDictionary`].
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
