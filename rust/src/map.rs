//! Key/value adapters over [`HashTable`].
//!
//! `HashMap<K, V>` stores [`Pair`]s and files them under their first field.
//! It exposes two insertion idioms with different collision policies:
//! [`get_or_insert_default`](HashMap::get_or_insert_default) upserts a
//! default value, while [`insert`](HashMap::insert) refuses to overwrite and
//! reports [`CollectionError::DuplicateKey`].

use crate::error::{CollectionError, KeyResult, ModifyResult};
use crate::policy::{BucketHash, ExtractKey, KeyEquals, KeyHasher, StdEquals};
use crate::table::{self, HashTable, DEFAULT_CAPACITY_HINT};
use std::borrow::Borrow;

/// A key and its value, as stored in a [`HashMap`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pair<K, V> {
    /// The key.
    pub first: K,
    /// The value.
    pub second: V,
}

impl<K, V> Pair<K, V> {
    /// Builds a pair.
    pub fn new(first: K, second: V) -> Self {
        Self { first, second }
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((first, second): (K, V)) -> Self {
        Self { first, second }
    }
}

/// Extractor that files a [`Pair`] under its first field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairKey;

impl<K, V> ExtractKey<Pair<K, V>, K> for PairKey {
    #[inline]
    fn extract<'a>(&self, pair: &'a Pair<K, V>) -> &'a K {
        &pair.first
    }
}

/// Hash map built on the chained [`HashTable`].
///
/// # Examples
///
/// ```
/// use primehash::HashMap;
///
/// let mut m: HashMap<String, i32> = HashMap::new();
/// m.insert("a".to_string(), 1).unwrap();
/// assert_eq!(*m.get_or_insert_default("a".to_string()), 1);
/// assert_eq!(*m.get_or_insert_default("b".to_string()), 0);
/// assert!(m.has_key("b"));
/// assert!(m.insert("a".to_string(), 2).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct HashMap<K, V, H = BucketHash> {
    table: HashTable<Pair<K, V>, K, H, PairKey, StdEquals>,
}

/// Map keyed by owned strings.
pub type StringHashMap<V> = HashMap<String, V>;

impl<K, V> HashMap<K, V, BucketHash> {
    /// Create an empty map with the default capacity hint.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY_HINT)
    }

    /// Create an empty map sized for `hint` buckets.
    pub fn with_capacity(hint: usize) -> Self {
        Self::with_hasher(hint, BucketHash)
    }
}

impl<K, V, H: Default> Default for HashMap<K, V, H> {
    fn default() -> Self {
        Self::with_hasher(DEFAULT_CAPACITY_HINT, H::default())
    }
}

impl<K, V, H> HashMap<K, V, H> {
    /// Create an empty map sized for `hint` buckets using `hasher`.
    pub fn with_hasher(hint: usize, hasher: H) -> Self {
        Self {
            table: HashTable::with_policies(hint, hasher, PairKey, StdEquals),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Current number of buckets in the underlying table.
    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    /// Largest bucket count the underlying table can grow to.
    pub fn max_size(&self) -> usize {
        self.table.max_bucket_count()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.table.clear()
    }

    /// Iterate over `(key, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.table.iter().map(|pair| (&pair.first, &pair.second))
    }

    /// Iterate over the stored pairs.
    pub fn pairs(&self) -> table::Iter<'_, Pair<K, V>> {
        self.table.iter()
    }
}

impl<K: PartialEq, V, H: KeyHasher<K>> HashMap<K, V, H> {
    /// Return the value for `key`, inserting `V::default()` first if absent.
    ///
    /// The lookup alone is enough to create the entry.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        &mut self.table.find_or_insert(Pair::new(key, V::default())).second
    }

    /// Insert `key -> value` only if `key` is absent.
    ///
    /// # Errors
    ///
    /// `DuplicateKey` if the key is already stored; the existing value is
    /// left untouched.
    pub fn insert(&mut self, key: K, value: V) -> ModifyResult<()> {
        self.insert_pair(Pair::new(key, value))
    }

    /// Insert a whole [`Pair`] under the strict-once policy of [`insert`](HashMap::insert).
    pub fn insert_pair(&mut self, pair: Pair<K, V>) -> ModifyResult<()> {
        if self.table.insert_unique(pair) {
            Ok(())
        } else {
            Err(CollectionError::DuplicateKey)
        }
    }

    /// Grow the underlying table to at least `hint` buckets.
    pub fn resize(&mut self, hint: usize) {
        self.table.resize(hint)
    }
}

impl<K, V, H> HashMap<K, V, H> {
    /// Get the stored pair for `key`.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` if the key is absent; probe with [`has_key`](HashMap::has_key) first.
    pub fn find<Q>(&self, key: &Q) -> KeyResult<&Pair<K, V>>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        H: KeyHasher<Q>,
        StdEquals: KeyEquals<Q>,
    {
        self.table.find(key)
    }

    /// Get the key and a mutable value for `key`.
    pub fn find_mut<Q>(&mut self, key: &Q) -> KeyResult<(&K, &mut V)>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        H: KeyHasher<Q>,
        StdEquals: KeyEquals<Q>,
    {
        let pair = self.table.find_mut(key)?;
        Ok((&pair.first, &mut pair.second))
    }

    /// Get the value for `key`, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        H: KeyHasher<Q>,
        StdEquals: KeyEquals<Q>,
    {
        self.table.find(key).ok().map(|pair| &pair.second)
    }

    /// Get a mutable value for `key`, if present.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        H: KeyHasher<Q>,
        StdEquals: KeyEquals<Q>,
    {
        self.table.find_mut(key).ok().map(|pair| &mut pair.second)
    }

    /// Check if `key` is present. Never fails.
    pub fn has_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized,
        K: Borrow<Q>,
        H: KeyHasher<Q>,
        StdEquals: KeyEquals<Q>,
    {
        self.table.has_key(key)
    }

    /// Remove the entry for `key`, returning how many entries were removed.
    pub fn erase<Q>(&mut self, key: &Q) -> usize
    where
        Q: ?Sized,
        K: Borrow<Q>,
        H: KeyHasher<Q>,
        StdEquals: KeyEquals<Q>,
    {
        self.table.erase(key)
    }
}
