//! Dependency ordering with Kahn's algorithm.

use crate::error::{CollectionError, GraphResult};
use crate::graph::VertexIndex;
use crate::policy::HashKey;
use crate::queue::Queue;
use crate::vector::Vector;
use std::fmt::Debug;

/// Directed graph of "must come before" constraints.
///
/// ```
/// use primehash::DependencyGraph;
///
/// let mut deps = DependencyGraph::new();
/// for task in ["wake", "shower", "dress", "coffee"] {
///     deps.add_node(task).unwrap();
/// }
/// deps.add_dependency(&"wake", &"shower").unwrap();
/// deps.add_dependency(&"shower", &"dress").unwrap();
/// deps.add_dependency(&"wake", &"coffee").unwrap();
///
/// let order = deps.topological_order().unwrap();
/// assert_eq!(order, vec![&"wake", &"shower", &"coffee", &"dress"]);
/// ```
#[derive(Debug, Clone)]
pub struct DependencyGraph<Tag> {
    nodes: VertexIndex<Tag>,
    successors: Vector<Vec<usize>>,
    dependency_count: usize,
}

impl<Tag> DependencyGraph<Tag> {
    /// Creates a graph with no nodes.
    pub fn new() -> Self {
        Self {
            nodes: VertexIndex::new(),
            successors: Vector::new(),
            dependency_count: 0,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of recorded dependencies.
    pub fn dependency_count(&self) -> usize {
        self.dependency_count
    }

    /// Orders every node so that each comes after all of its prerequisites.
    ///
    /// Among nodes that are ready at the same time, the one added first is
    /// emitted first.
    ///
    /// # Errors
    ///
    /// `CycleDetected` if the dependencies contain a cycle.
    pub fn topological_order(&self) -> GraphResult<Vec<&Tag>>
    where
        Tag: Debug,
    {
        let count = self.node_count();
        let mut in_degree = vec![0usize; count];
        for after in self.successors.iter().flatten() {
            in_degree[*after] += 1;
        }

        let mut ready = Queue::new();
        ready.extend((0..count).filter(|&id| in_degree[id] == 0));

        let mut order = Vec::with_capacity(count);
        while let Some(id) = ready.dequeue() {
            let tag = self.nodes.tag(id);
            log::trace!("topological order emits {:?}", tag);
            order.push(tag);
            for &next in &self.successors[id] {
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    ready.enqueue(next);
                }
            }
        }

        if order.len() < count {
            return Err(CollectionError::CycleDetected {
                remaining: count - order.len(),
            });
        }
        Ok(order)
    }
}

impl<Tag> Default for DependencyGraph<Tag> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tag: Clone + PartialEq + HashKey + Debug> DependencyGraph<Tag> {
    /// Adds a node.
    ///
    /// # Errors
    ///
    /// `DuplicateVertex` if `tag` is already present.
    pub fn add_node(&mut self, tag: Tag) -> GraphResult<()> {
        self.nodes.add(tag)?;
        self.successors.push_back(Vec::new());
        Ok(())
    }

    /// Returns true if `tag` names a node.
    pub fn contains(&self, tag: &Tag) -> bool {
        self.nodes.contains(tag)
    }

    /// Records that `before` must precede `after`.
    ///
    /// # Errors
    ///
    /// `UnknownVertex` if either node is absent.
    pub fn add_dependency(&mut self, before: &Tag, after: &Tag) -> GraphResult<()> {
        let from = self.nodes.id(before)?;
        let to = self.nodes.id(after)?;
        self.successors[from].push(to);
        self.dependency_count += 1;
        Ok(())
    }
}
