//! GET operations for HashTable.
//!
//! Lookups hash the key once and scan a single chain. They accept any
//! borrowed form `Q` of the key, so a `String`-keyed table can be probed with
//! a `&str`.

use super::HashTable;
use crate::error::{CollectionError, KeyResult};
use crate::policy::{ExtractKey, KeyEquals, KeyHasher};
use std::borrow::Borrow;

impl<V, K, H, X, E> HashTable<V, K, H, X, E>
where
    X: ExtractKey<V, K>,
{
    /// Bucket index of `key` in a table of `bucket_count` buckets.
    #[inline]
    pub(crate) fn bucket_for<Q>(hasher: &H, key: &Q, bucket_count: usize) -> usize
    where
        Q: ?Sized,
        H: KeyHasher<Q>,
    {
        hasher.hash_key(key) % bucket_count
    }

    /// Position of the first value filed under `key` within bucket `index`.
    pub(crate) fn position_in_bucket<Q>(&self, index: usize, key: &Q) -> Option<usize>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        E: KeyEquals<Q>,
    {
        let bucket = self.buckets.get(index).ok()?;
        bucket
            .iter()
            .position(|value| {
                self.equals
                    .equals(Borrow::<Q>::borrow(self.extract.extract(value)), key)
            })
    }

    /// Get a reference to the value filed under `key`.
    ///
    /// # Returns
    ///
    /// The first matching value in the key's chain, or `KeyNotFound`.
    ///
    /// # Examples
    ///
    /// ```
    /// use primehash::HashTable;
    ///
    /// let mut table: HashTable<i32, i32> = HashTable::new(10);
    /// table.insert_unique(7);
    /// assert_eq!(table.find(&7), Ok(&7));
    /// assert!(table.find(&8).is_err());
    /// ```
    pub fn find<Q>(&self, key: &Q) -> KeyResult<&V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        H: KeyHasher<Q>,
        E: KeyEquals<Q>,
    {
        let index = Self::bucket_for(&self.hasher, key, self.buckets.len());
        let position = self
            .position_in_bucket(index, key)
            .ok_or(CollectionError::KeyNotFound)?;
        Ok(&self.buckets[index][position])
    }

    /// Get a mutable reference to the value filed under `key`.
    ///
    /// The caller must not change the value's key through this reference.
    pub fn find_mut<Q>(&mut self, key: &Q) -> KeyResult<&mut V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        H: KeyHasher<Q>,
        E: KeyEquals<Q>,
    {
        let index = Self::bucket_for(&self.hasher, key, self.buckets.len());
        let position = self
            .position_in_bucket(index, key)
            .ok_or(CollectionError::KeyNotFound)?;
        Ok(&mut self.buckets[index][position])
    }

    /// Check if any value is filed under `key`. Never fails.
    pub fn has_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized,
        K: Borrow<Q>,
        H: KeyHasher<Q>,
        E: KeyEquals<Q>,
    {
        let index = Self::bucket_for(&self.hasher, key, self.buckets.len());
        self.position_in_bucket(index, key).is_some()
    }
}
