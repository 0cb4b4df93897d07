//! DELETE operations for HashTable.

use super::HashTable;
use crate::policy::{ExtractKey, KeyEquals, KeyHasher};
use crate::primes::PRIME_LIST;
use std::borrow::Borrow;

impl<V, K, H, X, E> HashTable<V, K, H, X, E>
where
    X: ExtractKey<V, K>,
{
    /// Remove every value filed under `key`.
    ///
    /// Tables filled with [`insert_equal`](HashTable::insert_equal) may hold
    /// several values per key; all of them are removed.
    ///
    /// # Returns
    ///
    /// The number of values removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use primehash::HashTable;
    ///
    /// let mut table: HashTable<&str, &str> = HashTable::new(0);
    /// table.insert_equal("x");
    /// table.insert_equal("x");
    /// table.insert_equal("y");
    /// assert_eq!(table.erase(&"x"), 2);
    /// assert_eq!(table.erase(&"x"), 0);
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn erase<Q>(&mut self, key: &Q) -> usize
    where
        Q: ?Sized,
        K: Borrow<Q>,
        H: KeyHasher<Q>,
        E: KeyEquals<Q>,
    {
        let index = Self::bucket_for(&self.hasher, key, self.buckets.len());
        let extract = &self.extract;
        let equals = &self.equals;
        let bucket = &mut self.buckets[index];
        let before = bucket.len();
        bucket.retain(|value| !equals.equals(Borrow::<Q>::borrow(extract.extract(value)), key));
        let removed = before - bucket.len();
        self.num_elements -= removed;
        removed
    }
}

impl<V, K, H, X, E> HashTable<V, K, H, X, E> {
    /// Drop every value and return the bucket array to the first prime size.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.num_elements = 0;
        self.buckets.resize(PRIME_LIST[0]);
    }
}

#[cfg(test)]
mod tests {
    use crate::HashTable;

    #[test]
    fn test_erase_removes_exactly_matching_keys() {
        let mut table: HashTable<String, String> = HashTable::new(0);
        for _ in 0..3 {
            table.insert_equal("x".to_string());
        }
        table.insert_equal("y".to_string());
        assert_eq!(table.erase("x"), 3);
        assert!(!table.has_key("x"));
        assert!(table.has_key("y"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_erase_keeps_colliding_neighbours() {
        let mut table: HashTable<u32, u32> = HashTable::new(0);
        table.insert_unique(2);
        table.insert_unique(55);
        table.insert_unique(108);
        assert_eq!(table.erase(&55), 1);
        assert_eq!(table.bucket_len(2), Ok(2));
        assert!(table.has_key(&2));
        assert!(table.has_key(&108));
    }

    #[test]
    fn test_clear_resets_to_first_prime() {
        let mut table: HashTable<u32, u32> = HashTable::new(0);
        for i in 0..500 {
            table.insert_unique(i);
        }
        assert_eq!(table.bucket_count(), 769);
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.bucket_count(), 53);
        assert!(!table.has_key(&1));
        assert!(table.insert_unique(1));
        assert!(table.check_invariants());
    }
}
