//! Validation and debugging utilities for HashTable.

use super::HashTable;
use crate::policy::{ExtractKey, KeyEquals, KeyHasher};
use crate::primes::PRIME_LIST;

impl<V, K, H, X, E> HashTable<V, K, H, X, E>
where
    H: KeyHasher<K>,
    X: ExtractKey<V, K>,
{
    /// Check if the table maintains its structural invariants.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies that the bucket count is a listed prime, that the element
    /// count matches the chains, and that every value sits in the bucket its
    /// key hashes to.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        let count = self.buckets.len();
        if !PRIME_LIST.contains(&count) {
            return Err(format!("Bucket count {} is not a listed prime", count));
        }

        let chained: usize = self.buckets.iter().map(|bucket| bucket.len()).sum();
        if chained != self.num_elements {
            return Err(format!(
                "Chains hold {} values but element count is {}",
                chained, self.num_elements
            ));
        }

        for (index, bucket) in self.buckets.iter().enumerate() {
            for value in bucket {
                let expected = Self::bucket_for(&self.hasher, self.extract.extract(value), count);
                if expected != index {
                    return Err(format!(
                        "Value in bucket {} hashes to bucket {}",
                        index, expected
                    ));
                }
            }
        }
        Ok(())
    }

    /// Check that no two values share a key.
    ///
    /// Holds for tables filled only through `insert_unique` and
    /// `find_or_insert`.
    pub fn check_unique_keys(&self) -> Result<(), String>
    where
        E: KeyEquals<K>,
    {
        for (index, bucket) in self.buckets.iter().enumerate() {
            for (i, a) in bucket.iter().enumerate() {
                let key = self.extract.extract(a);
                if bucket[i + 1..]
                    .iter()
                    .any(|b| self.equals.equals(key, self.extract.extract(b)))
                {
                    return Err(format!("Duplicate key in bucket {}", index));
                }
            }
        }
        Ok(())
    }
}
