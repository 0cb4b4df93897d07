//! Bucket array growth for HashTable.
//!
//! Growth allocates a fresh prime-sized bucket array and moves every stored
//! value into its new chain. Values are moved, never cloned, so a rehash is
//! linear in the number of stored values.

use super::{empty_buckets, HashTable};
use crate::policy::{ExtractKey, KeyHasher};
use crate::primes::next_prime;

impl<V, K, H, X, E> HashTable<V, K, H, X, E>
where
    H: KeyHasher<K>,
    X: ExtractKey<V, K>,
{
    /// Grow the bucket array so it holds at least `hint` buckets.
    ///
    /// Never shrinks. When `hint` exceeds the current bucket count, the new
    /// count is the smallest listed prime `>= hint` and every value is
    /// rehashed into it.
    ///
    /// # Examples
    ///
    /// ```
    /// use primehash::HashTable;
    ///
    /// let mut table: HashTable<u32, u32> = HashTable::new(0);
    /// table.insert_unique(1);
    /// table.resize(200);
    /// assert_eq!(table.bucket_count(), 389);
    /// table.resize(10);
    /// assert_eq!(table.bucket_count(), 389);
    /// assert!(table.has_key(&1));
    /// ```
    pub fn resize(&mut self, hint: usize) {
        let previous = self.buckets.len();
        if hint <= previous {
            return;
        }
        let count = next_prime(hint);
        if count == previous {
            return;
        }

        log::debug!(
            "rehashing {} values from {} to {} buckets",
            self.num_elements,
            previous,
            count
        );
        let mut fresh = empty_buckets(count);
        for bucket in self.buckets.iter_mut() {
            for value in bucket.drain(..) {
                let index = Self::bucket_for(&self.hasher, self.extract.extract(&value), count);
                fresh[index].push(value);
            }
        }
        self.buckets.swap(&mut fresh);
    }
}
