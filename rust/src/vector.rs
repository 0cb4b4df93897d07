//! Growable contiguous buffer with an explicit capacity policy.
//!
//! `Vector<T>` tracks its own logical capacity instead of deferring to the
//! allocator's growth strategy: it doubles when full and gives memory back
//! once the logical length drops below a quarter of the capacity. Backing
//! storage is a `Vec<T>`, so element copies go through `Clone` and drops run
//! normally for any element type.

use crate::error::{CollectionError, CollectionResult};
use std::ops::{Index, IndexMut};

/// Capacity of a vector created with [`Vector::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Capacity at or above which the shrink policy is allowed to run.
pub const LOWER_BOUND: usize = 8;

/// Growable array with doubling growth and hysteresis shrinking.
///
/// # Examples
///
/// ```
/// use primehash::Vector;
///
/// let mut v = Vector::new();
/// for i in 0..20 {
///     v.push_back(i);
/// }
/// assert_eq!(v.len(), 20);
/// assert_eq!(v.capacity(), 20);
/// assert_eq!(v.get(3), Ok(&3));
/// assert!(v.get(20).is_err());
/// ```
#[derive(Debug)]
pub struct Vector<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> Vector<T> {
    /// Creates an empty vector with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty vector able to hold `capacity` elements before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates a vector holding `n` clones of `value`.
    pub fn from_elem(n: usize, value: T) -> Self
    where
        T: Clone,
    {
        if n == 0 {
            return Self::new();
        }
        Self {
            data: vec![value; n],
            capacity: n,
        }
    }

    /// Number of elements in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Logical capacity under the growth and shrink policy.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends an element, doubling the capacity when full.
    pub fn push_back(&mut self, value: T) {
        if self.data.len() == self.capacity {
            self.extend_capacity();
        }
        self.data.push(value);
    }

    /// Removes and returns the last element.
    ///
    /// Popping an empty vector is not an error: it logs a warning and
    /// returns `None`.
    pub fn pop_back(&mut self) -> Option<T> {
        match self.data.pop() {
            Some(value) => {
                self.try_shrink();
                Some(value)
            }
            None => {
                log::warn!("pop_back called on an empty vector");
                None
            }
        }
    }

    /// Bounds-checked shared access.
    pub fn get(&self, index: usize) -> CollectionResult<&T> {
        let len = self.data.len();
        self.data
            .get(index)
            .ok_or(CollectionError::index_out_of_range(index, len))
    }

    /// Bounds-checked mutable access.
    pub fn get_mut(&mut self, index: usize) -> CollectionResult<&mut T> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(CollectionError::index_out_of_range(index, len))
    }

    /// Returns the last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Sets the logical length to `new_len`.
    ///
    /// Grows the capacity to exactly `new_len` when needed, fills new slots
    /// with `T::default()`, then evaluates the shrink policy.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        if new_len > self.capacity {
            self.reallocate(new_len);
        }
        self.data.resize_with(new_len, T::default);
        self.try_shrink();
    }

    /// Ensures room for `additional` more elements without changing the length.
    pub fn reserve(&mut self, additional: usize) {
        let needed = self.data.len() + additional;
        if needed > self.capacity {
            self.reallocate(needed);
        }
    }

    /// Drops every element and lets the shrink policy reclaim memory.
    pub fn clear(&mut self) {
        self.data.clear();
        self.try_shrink();
    }

    /// Overwrites every element with a clone of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Exchanges buffers, lengths and capacities with `other` in O(1).
    pub fn swap(&mut self, other: &mut Vector<T>) {
        std::mem::swap(self, other);
    }

    /// Swaps the elements at `a` and `b`.
    pub fn swap_elements(&mut self, a: usize, b: usize) -> CollectionResult<()> {
        let len = self.data.len();
        if a >= len {
            return Err(CollectionError::index_out_of_range(a, len));
        }
        if b >= len {
            return Err(CollectionError::index_out_of_range(b, len));
        }
        self.data.swap(a, b);
        Ok(())
    }

    /// Iterates over the elements front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates mutably over the elements front to back.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Views the logical range as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Views the logical range as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the vector, returning the backing `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn extend_capacity(&mut self) {
        let new_capacity = if self.capacity == 0 {
            2
        } else {
            self.capacity * 2
        };
        self.reallocate(new_capacity);
    }

    /// Gives memory back once `len < capacity / 4`.
    fn try_shrink(&mut self) {
        let len = self.data.len();
        if len < self.capacity / 4 && self.capacity >= LOWER_BOUND {
            self.reallocate((len + 1) * 2);
        }
    }

    fn reallocate(&mut self, new_capacity: usize) {
        if new_capacity == self.capacity {
            return;
        }
        log::debug!(
            "vector reallocating from {} to {} slots (len {})",
            self.capacity,
            new_capacity,
            self.data.len()
        );
        if new_capacity > self.data.capacity() {
            self.data.reserve_exact(new_capacity - self.data.len());
        } else {
            self.data.truncate(new_capacity);
            self.data.shrink_to(new_capacity);
        }
        self.capacity = new_capacity;
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        let capacity = data.len().max(DEFAULT_CAPACITY);
        let mut vector = Self::with_capacity(capacity);
        vector.data.extend(data);
        vector
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vector = Self::new();
        for value in iter {
            vector.push_back(value);
        }
        vector
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Panics with the `IndexOutOfRange` message; use [`Vector::get`] to recover.
impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}
