//! Pluggable strategies for [`HashTable`](crate::HashTable).
//!
//! A table is parameterized by three independent policies:
//!
//! - [`KeyHasher`] maps a key to a bucket hash,
//! - [`ExtractKey`] maps a stored value to its key,
//! - [`KeyEquals`] decides whether two keys are the same.
//!
//! Swapping the extractor is what lets one engine back both a set (the value
//! is its own key, [`Identity`]) and a map (the key is a field of the stored
//! pair, see [`PairKey`](crate::map::PairKey)).

use std::hash::{BuildHasher, Hash};

/// Maps a key to a hash; the table reduces it modulo the bucket count.
///
/// Implementations used with borrowed lookups must hash a key and its
/// borrowed form identically (e.g. `String` and `str`).
pub trait KeyHasher<K: ?Sized> {
    /// Hash of `key`.
    fn hash_key(&self, key: &K) -> usize;
}

/// Maps a stored value to the key it is filed under.
pub trait ExtractKey<V, K> {
    /// Borrow the key out of `value`.
    fn extract<'a>(&self, value: &'a V) -> &'a K;
}

/// Key equality used when scanning a bucket.
pub trait KeyEquals<K: ?Sized> {
    /// Returns true if `a` and `b` name the same entry.
    fn equals(&self, a: &K, b: &K) -> bool;
}

/// Keys with a built-in bucket hash.
///
/// Strings use the multiplicative `h = 5 * h + byte` hash; integers hash to
/// themselves.
pub trait HashKey {
    /// Bucket hash of this key.
    fn bucket_hash(&self) -> usize;
}

/// Multiplicative string hash: `h = 5 * h + byte`, with wrapping.
pub fn hash_bytes(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .fold(0usize, |h, &b| h.wrapping_mul(5).wrapping_add(b as usize))
}

impl HashKey for str {
    fn bucket_hash(&self) -> usize {
        hash_bytes(self.as_bytes())
    }
}

impl HashKey for String {
    fn bucket_hash(&self) -> usize {
        self.as_str().bucket_hash()
    }
}

impl HashKey for char {
    fn bucket_hash(&self) -> usize {
        *self as usize
    }
}

impl<T: HashKey + ?Sized> HashKey for &T {
    fn bucket_hash(&self) -> usize {
        (**self).bucket_hash()
    }
}

macro_rules! impl_identity_hash_key {
    ($($t:ty),*) => {
        $(
            impl HashKey for $t {
                #[inline]
                fn bucket_hash(&self) -> usize {
                    *self as usize
                }
            }
        )*
    };
}

impl_identity_hash_key!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Default hasher: delegates to [`HashKey`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketHash;

impl<K: HashKey + ?Sized> KeyHasher<K> for BucketHash {
    #[inline]
    fn hash_key(&self, key: &K) -> usize {
        key.bucket_hash()
    }
}

/// Plugs any `std` [`BuildHasher`] into a table.
///
/// ```
/// use primehash::policy::{BuildHasherAdapter, KeyHasher};
/// use std::collections::hash_map::RandomState;
///
/// let hasher = BuildHasherAdapter::new(RandomState::new());
/// assert_eq!(hasher.hash_key("abc"), hasher.hash_key(&String::from("abc")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BuildHasherAdapter<S> {
    build: S,
}

impl<S: BuildHasher> BuildHasherAdapter<S> {
    /// Wraps a `BuildHasher`.
    pub fn new(build: S) -> Self {
        Self { build }
    }
}

impl<K: Hash + ?Sized, S: BuildHasher> KeyHasher<K> for BuildHasherAdapter<S> {
    fn hash_key(&self, key: &K) -> usize {
        self.build.hash_one(key) as usize
    }
}

/// Extractor for sets: each value is its own key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<V> ExtractKey<V, V> for Identity {
    #[inline]
    fn extract<'a>(&self, value: &'a V) -> &'a V {
        value
    }
}

/// Equality through [`PartialEq`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdEquals;

impl<K: PartialEq + ?Sized> KeyEquals<K> for StdEquals {
    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        a == b
    }
}
