//! Construction and initialization logic for HashTable.
//!
//! A table always starts with a prime bucket count: the requested capacity
//! hint is rounded up to the nearest entry of the prime list.

use super::{empty_buckets, HashTable, DEFAULT_CAPACITY_HINT};
use crate::primes::next_prime;
use std::marker::PhantomData;

impl<V, K, H: Default, X: Default, E: Default> HashTable<V, K, H, X, E> {
    /// Create a table whose bucket count is the smallest listed prime `>= n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use primehash::HashTable;
    ///
    /// let table: HashTable<u32, u32> = HashTable::new(60);
    /// assert_eq!(table.bucket_count(), 97);
    /// assert!(table.is_empty());
    /// ```
    pub fn new(n: usize) -> Self {
        Self::with_policies(n, H::default(), X::default(), E::default())
    }
}

impl<V, K, H, X, E> HashTable<V, K, H, X, E> {
    /// Create a table with explicit hash, extraction and equality policies.
    pub fn with_policies(n: usize, hasher: H, extract: X, equals: E) -> Self {
        Self {
            buckets: empty_buckets(next_prime(n)),
            num_elements: 0,
            hasher,
            extract,
            equals,
            _key: PhantomData,
        }
    }
}

impl<V, K, H: Default, X: Default, E: Default> Default for HashTable<V, K, H, X, E> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY_HINT)
    }
}
