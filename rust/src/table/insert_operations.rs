//! INSERT operations for HashTable.
//!
//! Unique insertion grows the bucket array for `len + 1` before hashing, so
//! the load factor never exceeds one value per bucket. `find_or_insert`
//! scans first and only grows when it actually inserts.

use super::HashTable;
use crate::policy::{ExtractKey, KeyEquals, KeyHasher};

impl<V, K, H, X, E> HashTable<V, K, H, X, E>
where
    H: KeyHasher<K>,
    X: ExtractKey<V, K>,
    E: KeyEquals<K>,
{
    /// Insert `value` unless a value with the same key is already stored.
    ///
    /// # Returns
    ///
    /// `true` if the value was inserted, `false` (with the table untouched
    /// apart from a possible rehash) if its key was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use primehash::HashTable;
    ///
    /// let mut table: HashTable<i32, i32> = HashTable::new(0);
    /// assert!(table.insert_unique(5));
    /// assert!(!table.insert_unique(5));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn insert_unique(&mut self, value: V) -> bool {
        self.resize(self.num_elements + 1);
        let index = Self::bucket_for(
            &self.hasher,
            self.extract.extract(&value),
            self.buckets.len(),
        );
        if self
            .position_in_bucket(index, self.extract.extract(&value))
            .is_some()
        {
            return false;
        }
        self.buckets[index].push(value);
        self.num_elements += 1;
        true
    }

    /// Insert `value` even if other values share its key.
    ///
    /// Used when the table stores a multiset; [`erase`](HashTable::erase)
    /// then removes every value under the key.
    pub fn insert_equal(&mut self, value: V) {
        self.resize(self.num_elements + 1);
        let index = Self::bucket_for(
            &self.hasher,
            self.extract.extract(&value),
            self.buckets.len(),
        );
        self.buckets[index].push(value);
        self.num_elements += 1;
    }

    /// Return the stored value under `value`'s key, inserting `value` first
    /// if the key is absent.
    ///
    /// When the key is already present, `value` is dropped unused. This is
    /// the get-or-default primitive behind the map adapters.
    ///
    /// # Examples
    ///
    /// ```
    /// use primehash::HashTable;
    ///
    /// let mut table: HashTable<i32, i32> = HashTable::new(0);
    /// assert_eq!(*table.find_or_insert(4), 4);
    /// assert_eq!(*table.find_or_insert(4), 4);
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn find_or_insert(&mut self, value: V) -> &mut V {
        let index = Self::bucket_for(
            &self.hasher,
            self.extract.extract(&value),
            self.buckets.len(),
        );
        if let Some(position) = self.position_in_bucket(index, self.extract.extract(&value)) {
            return &mut self.buckets[index][position];
        }

        self.resize(self.num_elements + 1);
        let index = Self::bucket_for(
            &self.hasher,
            self.extract.extract(&value),
            self.buckets.len(),
        );
        self.num_elements += 1;
        let bucket = &mut self.buckets[index];
        bucket.push(value);
        let last = bucket.len() - 1;
        &mut bucket[last]
    }
}

#[cfg(test)]
mod tests {
    use crate::HashTable;

    #[test]
    fn test_insert_unique_rejects_without_mutation() {
        let mut table: HashTable<String, String> = HashTable::new(0);
        assert!(table.insert_unique("k".to_string()));
        let buckets = table.bucket_count();
        assert!(!table.insert_unique("k".to_string()));
        assert_eq!(table.len(), 1);
        assert_eq!(table.bucket_count(), buckets);
        assert_eq!(table.find("k").map(String::as_str), Ok("k"));
    }

    #[test]
    fn test_insert_unique_grows_past_load_one() {
        let mut table: HashTable<u32, u32> = HashTable::new(0);
        for i in 0..53 {
            assert!(table.insert_unique(i));
        }
        assert_eq!(table.bucket_count(), 53);
        assert!(table.insert_unique(53));
        assert_eq!(table.bucket_count(), 97);
        assert_eq!(table.len(), 54);
    }

    #[test]
    fn test_insert_equal_keeps_duplicates() {
        let mut table: HashTable<&str, &str> = HashTable::new(0);
        table.insert_equal("x");
        table.insert_equal("x");
        table.insert_equal("x");
        assert_eq!(table.len(), 3);
        assert_eq!(table.iter().filter(|v| **v == "x").count(), 3);
    }

    #[test]
    fn test_find_or_insert_does_not_grow_on_hit() {
        let mut table: HashTable<u32, u32> = HashTable::new(0);
        for i in 0..53 {
            table.insert_unique(i);
        }
        // Full table: a hit must not trigger the growth a miss would.
        assert_eq!(*table.find_or_insert(10), 10);
        assert_eq!(table.bucket_count(), 53);
        assert_eq!(*table.find_or_insert(100), 100);
        assert_eq!(table.bucket_count(), 97);
        assert_eq!(table.len(), 54);
    }
}
