//! Key/value dictionaries.
//!
//! Two implementations share the [`Dictionary`] interface:
//!
//! - [`ArrayDictionary`] keeps its pairs in one unordered buffer and finds
//!   keys by linear equality scan. It is cheap for a handful of entries and
//!   serves as the bucket type of the hash table.
//! - [`ChainedHashDictionary`] is an indexed buffer of optional
//!   [`ArrayDictionary`] buckets. Hashing and resizing live in the outer
//!   table; equality lookup lives in the buckets.
//!
//! A "null" key is expressed by choosing an `Option<K>` key type. `None` is
//! then an ordinary, distinct key.

mod array;
mod chained;

pub use array::{ArrayDictionary, Iter as ArrayIter};
pub use chained::{ChainedHashDictionary, IntoIter, Iter, Keys, Values};

use crate::error::CollectionError;

/// Operations common to every dictionary in this crate.
pub trait Dictionary<K, V> {
    /// Returns a reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ItemNotFound`] if `key` is absent.
    fn get(&self, key: &K) -> Result<&V, CollectionError>;

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ItemNotFound`] if `key` is absent.
    fn get_mut(&mut self, key: &K) -> Result<&mut V, CollectionError>;

    /// Stores `value` under `key`, returning the value it replaced, if any.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Removes `key` and returns the value that was stored under it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ItemNotFound`] if `key` is absent.
    fn remove(&mut self, key: &K) -> Result<V, CollectionError>;

    /// Returns `true` if `key` is present.
    fn contains_key(&self, key: &K) -> bool;

    /// Number of stored pairs.
    fn len(&self) -> usize;

    /// Returns `true` if no pairs are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
