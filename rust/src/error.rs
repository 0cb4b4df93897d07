//! Error handling and result types for the collections in this crate.
//!
//! Every fallible operation reports one of the variants of [`CollectionError`].
//! Low-level table primitives such as [`HashTable::insert_unique`] report
//! duplicates through a `bool` instead; the map adapters turn that status
//! into [`CollectionError::DuplicateKey`].
//!
//! [`HashTable::insert_unique`]: crate::HashTable::insert_unique

use thiserror::Error;

/// Error type for the collections and graph algorithms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// Element access outside `[0, len)`.
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Logical length at the time of the access.
        len: usize,
    },
    /// Lookup of a key that is not stored.
    #[error("Key not found")]
    KeyNotFound,
    /// `pop`/`peek` on a heap with no elements.
    #[error("Heap is empty")]
    HeapEmpty,
    /// Strict insertion of a key that already exists.
    #[error("Duplicate key")]
    DuplicateKey,
    /// A vertex tag that the graph does not know.
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),
    /// A vertex tag that the graph already holds.
    #[error("Duplicate vertex: {0}")]
    DuplicateVertex(String),
    /// Spanning tree construction could not reach every vertex.
    #[error("Graph is disconnected: reached {reached} of {total} vertices")]
    Disconnected {
        /// Vertices joined to the tree.
        reached: usize,
        /// Vertices in the source graph.
        total: usize,
    },
    /// Topological ordering found a dependency cycle.
    #[error("Dependency cycle detected: {remaining} nodes never became ready")]
    CycleDetected {
        /// Nodes left with a non-zero in-degree.
        remaining: usize,
    },
}

impl CollectionError {
    /// Create an IndexOutOfRange error for `index` against `len`.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an UnknownVertex error from any debug-printable tag.
    pub fn unknown_vertex(tag: &impl std::fmt::Debug) -> Self {
        Self::UnknownVertex(format!("{:?}", tag))
    }

    /// Create a DuplicateVertex error from any debug-printable tag.
    pub fn duplicate_vertex(tag: &impl std::fmt::Debug) -> Self {
        Self::DuplicateVertex(format!("{:?}", tag))
    }

    /// Check if this error came from a keyed lookup or insertion.
    pub fn is_key_error(&self) -> bool {
        matches!(self, Self::KeyNotFound | Self::DuplicateKey)
    }

    /// Check if this error came from graph construction or traversal.
    pub fn is_graph_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownVertex(_)
                | Self::DuplicateVertex(_)
                | Self::Disconnected { .. }
                | Self::CycleDetected { .. }
        )
    }
}

/// Public result type for collection operations that may fail
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, CollectionError>;

/// Result type for modification operations
pub type ModifyResult<T> = Result<T, CollectionError>;

/// Result type for heap operations
pub type HeapResult<T> = Result<T, CollectionError>;

/// Result type for graph construction and traversal
pub type GraphResult<T> = Result<T, CollectionError>;

/// Result extension trait for improved error handling
pub trait CollectionResultExt<T> {
    /// Prefix message-bearing errors with additional context.
    fn with_context(self, context: &str) -> CollectionResult<T>;

    /// Log error and continue with default value
    fn or_default_with_log(self) -> T
    where
        T: Default;
}

impl<T> CollectionResultExt<T> for Result<T, CollectionError> {
    fn with_context(self, context: &str) -> CollectionResult<T> {
        self.map_err(|e| match e {
            CollectionError::UnknownVertex(msg) => {
                CollectionError::UnknownVertex(format!("{}: {}", context, msg))
            }
            CollectionError::DuplicateVertex(msg) => {
                CollectionError::DuplicateVertex(format!("{}: {}", context, msg))
            }
            other => other,
        })
    }

    fn or_default_with_log(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                log::warn!("collection operation failed, using default: {}", e);
                T::default()
            }
        }
    }
}
