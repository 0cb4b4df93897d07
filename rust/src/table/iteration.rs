//! Iterator implementations for HashTable.
//!
//! Iteration walks the bucket array in index order and each chain in
//! insertion order; the overall order is unspecified and changes on rehash.

use super::{Bucket, HashTable};

/// Iterator over the values of a [`HashTable`].
pub struct Iter<'a, V> {
    buckets: std::slice::Iter<'a, Bucket<V>>,
    current: std::slice::Iter<'a, V>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.next() {
                self.remaining -= 1;
                return Some(value);
            }
            self.current = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V, K, H, X, E> HashTable<V, K, H, X, E> {
    /// Returns an iterator over all stored values.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            current: Default::default(),
            remaining: self.num_elements,
        }
    }
}

impl<'a, V, K, H, X, E> IntoIterator for &'a HashTable<V, K, H, X, E> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
