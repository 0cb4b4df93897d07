//! Huffman merge cost on top of [`MinHeap`].

use crate::error::HeapResult;
use crate::heap::MinHeap;
use std::ops::Add;

/// Result of repeatedly merging the two smallest weights.
///
/// Every merge pushes the sum back into the heap and records it; the sum of
/// those records is the weighted path length of the Huffman tree.
///
/// ```
/// use primehash::HuffmanCost;
///
/// let huffman = HuffmanCost::build(vec![1, 1, 4, 5, 1, 2, 1, 3]).unwrap();
/// assert_eq!(huffman.value(), 18);
/// assert_eq!(huffman.cost(), 49);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HuffmanCost<T> {
    value: T,
    merges: Vec<T>,
}

impl<T> HuffmanCost<T>
where
    T: Copy + PartialOrd + Add<Output = T> + Default,
{
    /// Merges `values` down to a single root.
    ///
    /// # Errors
    ///
    /// `HeapEmpty` if `values` is empty.
    pub fn build(values: Vec<T>) -> HeapResult<Self> {
        let mut heap = MinHeap::from_vec(values);
        let mut merges = Vec::with_capacity(heap.len().saturating_sub(1));
        while heap.len() > 1 {
            let first = heap.pop()?;
            let second = heap.pop()?;
            let sum = first + second;
            heap.push(sum);
            merges.push(sum);
        }
        let value = heap.pop()?;
        Ok(Self { value, merges })
    }

    /// Root weight, the sum of every input.
    pub fn value(&self) -> T {
        self.value
    }

    /// Total of every recorded merge.
    pub fn cost(&self) -> T {
        self.merges.iter().fold(T::default(), |acc, &m| acc + m)
    }

    /// Merge sums in the order they happened.
    pub fn merges(&self) -> &[T] {
        &self.merges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollectionError;

    #[test]
    fn test_fixture_cost() {
        let huffman = HuffmanCost::build(vec![1, 1, 4, 5, 1, 2, 1, 3]).unwrap();
        assert_eq!(huffman.value(), 18);
        assert_eq!(huffman.merges(), &[2, 2, 4, 5, 8, 10, 18]);
        assert_eq!(huffman.cost(), 49);
    }

    #[test]
    fn test_single_value_costs_nothing() {
        let huffman = HuffmanCost::build(vec![7u64]).unwrap();
        assert_eq!(huffman.value(), 7);
        assert_eq!(huffman.cost(), 0);
        assert!(huffman.merges().is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            HuffmanCost::<i32>::build(Vec::new()),
            Err(CollectionError::HeapEmpty)
        );
    }

    #[test]
    fn test_float_weights() {
        let huffman = HuffmanCost::build(vec![0.5, 0.25, 0.25]).unwrap();
        assert_eq!(huffman.value(), 1.0);
        assert_eq!(huffman.cost(), 1.5);
    }
}
