//! Chained hash table with prime-sized bucket growth.
//!
//! The table is split by operation family the same way across files:
//! construction, lookups, insertion, deletion, rehashing, iteration and
//! invariant checks each live in their own module.

use crate::policy::{BucketHash, Identity, StdEquals};
use crate::vector::Vector;
use std::marker::PhantomData;

mod construction;
mod delete_operations;
mod get_operations;
mod insert_operations;
mod iteration;
mod rehash;
mod validation;

pub use iteration::Iter;

/// Capacity hint used by [`HashTable::default`] and the map adapters.
pub const DEFAULT_CAPACITY_HINT: usize = 50;

/// One slot of the bucket array: every value whose key hashes here.
pub(crate) type Bucket<V> = Vec<V>;

/// Generic chained hash table.
///
/// Values are filed under a key obtained through the extractor `X`, hashed
/// with `H` and compared with `E`. The bucket count is always a prime from
/// [`PRIME_LIST`](crate::primes::PRIME_LIST); it only grows, except that
/// [`clear`](HashTable::clear) returns it to the first prime.
///
/// # Type Parameters
///
/// * `V` - Stored value type
/// * `K` - Key type produced by the extractor
/// * `H` - Key hash policy
/// * `X` - Key extraction policy
/// * `E` - Key equality policy
///
/// # Examples
///
/// ```
/// use primehash::HashTable;
///
/// let mut set: HashTable<String, String> = HashTable::new(10);
/// assert_eq!(set.bucket_count(), 53);
/// assert!(set.insert_unique("first".to_string()));
/// assert!(!set.insert_unique("first".to_string()));
/// assert!(set.has_key("first"));
/// assert_eq!(set.erase("first"), 1);
/// assert!(set.is_empty());
/// ```
pub struct HashTable<V, K, H = BucketHash, X = Identity, E = StdEquals> {
    pub(crate) buckets: Vector<Bucket<V>>,
    pub(crate) num_elements: usize,
    pub(crate) hasher: H,
    pub(crate) extract: X,
    pub(crate) equals: E,
    pub(crate) _key: PhantomData<fn() -> K>,
}

/// A table whose values are their own keys.
pub type HashSet<T, H = BucketHash> = HashTable<T, T, H, Identity, StdEquals>;

impl<V, K, H, X, E> HashTable<V, K, H, X, E> {
    /// Number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_elements
    }

    /// Returns true if the table holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_elements == 0
    }

    /// Current number of buckets.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Largest bucket count the table can grow to.
    #[inline]
    pub fn max_bucket_count(&self) -> usize {
        crate::primes::max_bucket_count()
    }

    /// Number of values chained in bucket `index`.
    pub fn bucket_len(&self, index: usize) -> crate::CollectionResult<usize> {
        self.buckets.get(index).map(|bucket| bucket.len())
    }
}

pub(crate) fn empty_buckets<V>(count: usize) -> Vector<Bucket<V>> {
    let mut buckets = Vector::with_capacity(count);
    for _ in 0..count {
        buckets.push_back(Bucket::new());
    }
    buckets
}

impl<V: Clone, K, H: Clone, X: Clone, E: Clone> Clone for HashTable<V, K, H, X, E> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            num_elements: self.num_elements,
            hasher: self.hasher.clone(),
            extract: self.extract.clone(),
            equals: self.equals.clone(),
            _key: PhantomData,
        }
    }
}

impl<V: std::fmt::Debug, K, H, X, E> std::fmt::Debug for HashTable<V, K, H, X, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashTable")
            .field("len", &self.num_elements)
            .field("bucket_count", &self.buckets.len())
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
