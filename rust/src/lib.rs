//! Prime-sized chained hash tables and the containers built around them.
//!
//! This crate provides a small family of generic containers:
//!
//! - [`Vector`], a growable array with explicit doubling and shrink rules,
//! - [`HashTable`], a separately chained table whose bucket count steps
//!   through a fixed list of primes (see [`primes`]),
//! - [`HashMap`] and [`StringHashMap`], key/value adapters over the table,
//! - [`MinHeap`], a binary heap with a pluggable comparator,
//! - [`Queue`], a circular FIFO.
//!
//! On top of those sit a few algorithms: [`HuffmanCost`], the minimum
//! spanning tree of a [`Graph`], and the topological order of a
//! [`DependencyGraph`].
//!
//! # Example
//!
//! ```
//! use primehash::{HashMap, HashTable};
//!
//! let mut set: HashTable<u32, u32> = HashTable::new(0);
//! assert!(set.insert_unique(7));
//! assert!(!set.insert_unique(7));
//! assert_eq!(set.bucket_count(), 53);
//!
//! let mut counts: HashMap<String, u32> = HashMap::new();
//! for word in "a b a c a".split(' ') {
//!     *counts.get_or_insert_default(word.to_string()) += 1;
//! }
//! assert_eq!(counts.get("a"), Some(&3));
//! ```

mod error;
mod graph;
mod heap;
mod huffman;
mod map;
pub mod policy;
pub mod primes;
mod queue;
mod schedule;
mod table;
mod vector;

pub use error::{
    CollectionError, CollectionResult, CollectionResultExt, GraphResult, HeapResult, KeyResult,
    ModifyResult,
};
pub use graph::{Graph, Weight};
pub use heap::{Compare, Greater, Less, MinHeap, PeekMut};
pub use huffman::HuffmanCost;
pub use map::{HashMap, Pair, PairKey, StringHashMap};
pub use queue::{Queue, INIT_SIZE as QUEUE_INIT_SIZE};
pub use schedule::DependencyGraph;
pub use table::{HashSet, HashTable, Iter, DEFAULT_CAPACITY_HINT};
pub use vector::{Vector, DEFAULT_CAPACITY, LOWER_BOUND};
