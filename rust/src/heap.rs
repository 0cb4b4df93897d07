//! Binary heap ordered by a pluggable comparator.
//!
//! `MinHeap<T, C>` keeps the comparator-minimal element at index 0 of an
//! implicit binary tree stored in a [`Vector`]: the children of index `i`
//! live at `2i + 1` and `2i + 2`. The default comparator [`Less`] gives an
//! ascending min-heap; [`Greater`] turns the same code into a max-heap.

use crate::error::{CollectionError, HeapResult};
use crate::vector::Vector;
use std::ops::{Deref, DerefMut};

/// Strict weak order used to arrange a [`MinHeap`].
///
/// `less(a, b)` returns true if `a` must sit above `b`. Any
/// `Fn(&T, &T) -> bool` closure is a comparator.
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` orders strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;
}

/// Ascending order through `<`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Less;

impl<T: PartialOrd + ?Sized> Compare<T> for Less {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Descending order through `>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greater;

impl<T: PartialOrd + ?Sized> Compare<T> for Greater {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Binary heap with the comparator-minimal element on top.
///
/// # Examples
///
/// ```
/// use primehash::{Greater, MinHeap};
///
/// let mut heap = MinHeap::from_vec(vec![5, 3, 8, 1, 9, 2]);
/// assert_eq!(heap.peek(), Ok(&1));
/// assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 5, 8, 9]);
///
/// let mut max_heap = MinHeap::with_comparator(Greater);
/// max_heap.push(1);
/// max_heap.push(7);
/// assert_eq!(max_heap.pop(), Ok(7));
/// ```
#[derive(Debug, Clone)]
pub struct MinHeap<T, C = Less> {
    data: Vector<T>,
    compare: C,
}

impl<T: PartialOrd> MinHeap<T> {
    /// Creates an empty ascending heap.
    pub fn new() -> Self {
        Self::with_comparator(Less)
    }

    /// Builds an ascending heap from `values` in O(n).
    pub fn from_vec(values: Vec<T>) -> Self {
        Self::from_vec_with_comparator(values, Less)
    }

    /// Builds an ascending heap from an existing [`Vector`] in O(n).
    pub fn from_vector(values: Vector<T>) -> Self {
        Self::from_vector_with_comparator(values, Less)
    }
}

impl<T, C: Compare<T> + Default> Default for MinHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Compare<T>> MinHeap<T, C> {
    /// Creates an empty heap ordered by `compare`.
    pub fn with_comparator(compare: C) -> Self {
        Self {
            data: Vector::new(),
            compare,
        }
    }

    /// Builds a heap ordered by `compare` from `values` in O(n).
    pub fn from_vec_with_comparator(values: Vec<T>, compare: C) -> Self {
        Self::from_vector_with_comparator(Vector::from(values), compare)
    }

    /// Builds a heap ordered by `compare` from `values` in O(n).
    ///
    /// Sinks every internal node once, from the last non-leaf up to the root.
    pub fn from_vector_with_comparator(values: Vector<T>, compare: C) -> Self {
        let mut heap = Self {
            data: values,
            compare,
        };
        let len = heap.data.len();
        if len > 1 {
            for root in (0..=(len - 2) / 2).rev() {
                heap.sink(root);
            }
        }
        heap
    }

    /// Number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Adds an element and sifts it up.
    pub fn push(&mut self, value: T) {
        self.data.push_back(value);
        self.swim(self.data.len() - 1);
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// `HeapEmpty` if the heap has no elements.
    pub fn pop(&mut self) -> HeapResult<T> {
        let len = self.data.len();
        if len == 0 {
            return Err(CollectionError::HeapEmpty);
        }
        self.data.as_mut_slice().swap(0, len - 1);
        let top = self.data.pop_back().ok_or(CollectionError::HeapEmpty)?;
        self.sink(0);
        Ok(top)
    }

    /// Returns the top element without removing it.
    ///
    /// # Errors
    ///
    /// `HeapEmpty` if the heap has no elements.
    pub fn peek(&self) -> HeapResult<&T> {
        self.data.as_slice().first().ok_or(CollectionError::HeapEmpty)
    }

    /// Returns a mutable handle to the top element.
    ///
    /// The heap is repaired when the handle is dropped, so the top may be
    /// changed freely.
    ///
    /// ```
    /// use primehash::MinHeap;
    ///
    /// let mut heap = MinHeap::from_vec(vec![1, 4, 6]);
    /// *heap.peek_mut().unwrap() = 5;
    /// assert_eq!(heap.peek(), Ok(&4));
    /// ```
    pub fn peek_mut(&mut self) -> HeapResult<PeekMut<'_, T, C>> {
        if self.data.is_empty() {
            return Err(CollectionError::HeapEmpty);
        }
        Ok(PeekMut { heap: self })
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the elements in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Drains the heap in comparator order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Returns true if no child orders strictly before its parent.
    pub fn check_invariants(&self) -> bool {
        let data = self.data.as_slice();
        (1..data.len()).all(|i| !self.compare.less(&data[i], &data[(i - 1) / 2]))
    }

    /// Sifts the element at `root` down below every better child.
    fn sink(&mut self, root: usize) {
        let data = self.data.as_mut_slice();
        let len = data.len();
        let mut parent = root;
        let mut child = parent * 2 + 1;
        while child < len {
            // Right child wins only when strictly better than the left.
            if child + 1 < len && self.compare.less(&data[child + 1], &data[child]) {
                child += 1;
            }
            if self.compare.less(&data[child], &data[parent]) {
                data.swap(child, parent);
                parent = child;
                child = parent * 2 + 1;
            } else {
                break;
            }
        }
    }

    /// Sifts the element at `child` up while it beats its parent.
    fn swim(&mut self, mut child: usize) {
        let data = self.data.as_mut_slice();
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.compare.less(&data[child], &data[parent]) {
                data.swap(child, parent);
                child = parent;
            } else {
                break;
            }
        }
    }
}

/// Mutable access to the top of a [`MinHeap`]; re-sinks on drop.
pub struct PeekMut<'a, T, C: Compare<T>> {
    heap: &'a mut MinHeap<T, C>,
}

impl<T, C: Compare<T>> PeekMut<'_, T, C> {
    /// Removes the peeked element from the heap and returns it.
    pub fn pop(mut this: Self) -> HeapResult<T> {
        // The guard's own drop then sinks a heap that is already valid.
        this.heap.pop()
    }
}

impl<T, C: Compare<T>> Deref for PeekMut<'_, T, C> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.heap.data[0]
    }
}

impl<T, C: Compare<T>> DerefMut for PeekMut<'_, T, C> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.heap.data[0]
    }
}

impl<T, C: Compare<T>> Drop for PeekMut<'_, T, C> {
    fn drop(&mut self) {
        self.heap.sink(0);
    }
}
