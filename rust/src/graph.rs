//! Undirected weighted graph with a lazy Prim minimum spanning tree.
//!
//! Vertices are addressed by caller-chosen tags. Each tag is mapped to a
//! dense id through the crate's own [`HashMap`], and adjacency is kept per id.

use crate::error::{CollectionError, GraphResult};
use crate::heap::{Compare, MinHeap};
use crate::map::HashMap;
use crate::policy::HashKey;
use crate::vector::Vector;
use std::fmt::Debug;

/// Edge weight.
pub type Weight = i64;

/// Tag to dense id registry shared by the graph types.
#[derive(Debug, Clone)]
pub(crate) struct VertexIndex<Tag> {
    tags: Vector<Tag>,
    ids: HashMap<Tag, usize>,
}

impl<Tag> VertexIndex<Tag> {
    pub(crate) fn new() -> Self {
        Self {
            tags: Vector::new(),
            ids: HashMap::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.tags.len()
    }

    pub(crate) fn tag(&self, id: usize) -> &Tag {
        &self.tags[id]
    }

    pub(crate) fn tags(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }
}

impl<Tag: Clone + PartialEq + HashKey + Debug> VertexIndex<Tag> {
    /// Registers `tag` and returns its new id.
    pub(crate) fn add(&mut self, tag: Tag) -> GraphResult<usize> {
        let id = self.tags.len();
        self.ids
            .insert(tag.clone(), id)
            .map_err(|_| CollectionError::duplicate_vertex(&tag))?;
        self.tags.push_back(tag);
        Ok(id)
    }

    pub(crate) fn id(&self, tag: &Tag) -> GraphResult<usize> {
        self.ids
            .get(tag)
            .copied()
            .ok_or_else(|| CollectionError::unknown_vertex(tag))
    }

    pub(crate) fn contains(&self, tag: &Tag) -> bool {
        self.ids.has_key(tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge {
    from: usize,
    to: usize,
    weight: Weight,
}

/// Undirected graph with weighted edges.
///
/// ```
/// use primehash::Graph;
///
/// let mut g = Graph::new();
/// for tag in ["a", "b", "c"] {
///     g.add_vertex(tag).unwrap();
/// }
/// g.add_edge(&"a", &"b", 3).unwrap();
/// g.add_edge(&"b", &"c", 1).unwrap();
/// g.add_edge(&"a", &"c", 2).unwrap();
///
/// let tree = g.minimum_spanning_tree(&"a").unwrap();
/// assert_eq!(tree.edge_count(), 2);
/// assert_eq!(tree.total_weight(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<Tag> {
    vertices: VertexIndex<Tag>,
    adjacency: Vector<Vec<(usize, Weight)>>,
    edge_count: usize,
}

impl<Tag> Graph<Tag> {
    /// Creates a graph with no vertices.
    pub fn new() -> Self {
        Self {
            vertices: VertexIndex::new(),
            adjacency: Vector::new(),
            edge_count: 0,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges, parallel edges counted separately.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Vertex tags in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Tag> + '_ {
        self.vertices.tags()
    }

    /// Every edge once, as `(u, v, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (&Tag, &Tag, Weight)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(u, list)| {
            list.iter()
                .filter(move |&&(v, _)| u < v)
                .map(move |&(v, w)| (self.vertices.tag(u), self.vertices.tag(v), w))
        })
    }

    /// Sum of every edge weight.
    pub fn total_weight(&self) -> Weight {
        self.edges().map(|(_, _, w)| w).sum()
    }
}

impl<Tag> Default for Graph<Tag> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tag: Clone + PartialEq + HashKey + Debug> Graph<Tag> {
    /// Adds a vertex.
    ///
    /// # Errors
    ///
    /// `DuplicateVertex` if `tag` is already present.
    pub fn add_vertex(&mut self, tag: Tag) -> GraphResult<()> {
        self.vertices.add(tag)?;
        self.adjacency.push_back(Vec::new());
        Ok(())
    }

    /// Returns true if `tag` names a vertex.
    pub fn has_vertex(&self, tag: &Tag) -> bool {
        self.vertices.contains(tag)
    }

    /// Connects `u` and `v` with an edge of `weight`.
    ///
    /// Self-loops are ignored. A second edge between the same pair is kept
    /// alongside the first.
    ///
    /// # Errors
    ///
    /// `UnknownVertex` if either endpoint is absent.
    pub fn add_edge(&mut self, u: &Tag, v: &Tag, weight: Weight) -> GraphResult<()> {
        let a = self.vertices.id(u)?;
        let b = self.vertices.id(v)?;
        if a == b {
            return Ok(());
        }
        if self.adjacency[a].iter().any(|&(n, _)| n == b) {
            log::debug!("parallel edge {:?} - {:?} ({})", u, v, weight);
        }
        self.adjacency[a].push((b, weight));
        self.adjacency[b].push((a, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Neighbors of `tag` with the connecting weights.
    pub fn neighbors(&self, tag: &Tag) -> GraphResult<impl Iterator<Item = (&Tag, Weight)> + '_> {
        let id = self.vertices.id(tag)?;
        Ok(self.adjacency[id]
            .iter()
            .map(move |&(v, w)| (self.vertices.tag(v), w)))
    }

    /// Minimum spanning tree grown from `start` with a lazy Prim search.
    ///
    /// Candidate edges sit in a [`MinHeap`] ordered by weight; stale
    /// candidates whose far end already joined the tree are skipped when
    /// popped.
    ///
    /// # Errors
    ///
    /// `UnknownVertex` if `start` is absent, `Disconnected` if some vertex
    /// cannot be reached from it.
    pub fn minimum_spanning_tree(&self, start: &Tag) -> GraphResult<Graph<Tag>> {
        let root = self.vertices.id(start)?;
        let total = self.vertex_count();
        let mut in_tree = vec![false; total];
        let mut frontier = MinHeap::with_comparator(|a: &Edge, b: &Edge| a.weight < b.weight);
        let mut tree = Graph::new();

        tree.add_vertex(start.clone())?;
        in_tree[root] = true;
        self.push_frontier(root, &in_tree, &mut frontier);

        while let Ok(edge) = frontier.pop() {
            if in_tree[edge.to] {
                continue;
            }
            in_tree[edge.to] = true;
            let from = self.vertices.tag(edge.from);
            let to = self.vertices.tag(edge.to);
            log::trace!("mst accepts {:?} - {:?} ({})", from, to, edge.weight);
            tree.add_vertex(to.clone())?;
            tree.add_edge(from, to, edge.weight)?;
            self.push_frontier(edge.to, &in_tree, &mut frontier);
        }

        if tree.vertex_count() < total {
            return Err(CollectionError::Disconnected {
                reached: tree.vertex_count(),
                total,
            });
        }
        Ok(tree)
    }

    fn push_frontier<C: Compare<Edge>>(
        &self,
        from: usize,
        in_tree: &[bool],
        frontier: &mut MinHeap<Edge, C>,
    ) {
        for &(to, weight) in &self.adjacency[from] {
            if !in_tree[to] {
                frontier.push(Edge { from, to, weight });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph<&'static str> {
        let mut g = Graph::new();
        for tag in ["A", "B", "C", "D", "E"] {
            g.add_vertex(tag).unwrap();
        }
        for (u, v, w) in [
            ("A", "B", 4),
            ("A", "C", 1),
            ("C", "B", 2),
            ("B", "D", 5),
            ("C", "D", 8),
            ("D", "E", 3),
        ] {
            g.add_edge(&u, &v, w).unwrap();
        }
        g
    }

    #[test]
    fn test_mst_weight_and_shape() {
        let g = sample();
        let tree = g.minimum_spanning_tree(&"A").unwrap();
        assert_eq!(tree.vertex_count(), 5);
        assert_eq!(tree.edge_count(), 4);
        assert_eq!(tree.total_weight(), 11);
        assert!(tree.edges().all(|(_, _, w)| w != 4 && w != 8));
    }

    #[test]
    fn test_mst_from_any_root_has_same_weight() {
        let g = sample();
        for start in ["A", "B", "C", "D", "E"] {
            assert_eq!(g.minimum_spanning_tree(&start).unwrap().total_weight(), 11);
        }
    }

    #[test]
    fn test_disconnected_graph() {
        let mut g = sample();
        g.add_vertex("F").unwrap();
        assert_eq!(
            g.minimum_spanning_tree(&"A").unwrap_err(),
            CollectionError::Disconnected {
                reached: 5,
                total: 6
            }
        );
    }

    #[test]
    fn test_vertex_errors() {
        let mut g = sample();
        assert!(matches!(
            g.add_vertex("A"),
            Err(CollectionError::DuplicateVertex(_))
        ));
        assert!(matches!(
            g.add_edge(&"A", &"Z", 1),
            Err(CollectionError::UnknownVertex(_))
        ));
        assert!(g.minimum_spanning_tree(&"Z").is_err());
        assert!(g.has_vertex(&"E"));
        assert!(!g.has_vertex(&"Z"));
    }

    #[test]
    fn test_self_loops_ignored_parallel_edges_kept() {
        let mut g = Graph::new();
        g.add_vertex(1u32).unwrap();
        g.add_vertex(2u32).unwrap();
        g.add_edge(&1, &1, 7).unwrap();
        g.add_edge(&1, &2, 9).unwrap();
        g.add_edge(&2, &1, 3).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(&1).unwrap().count(), 2);

        let tree = g.minimum_spanning_tree(&1).unwrap();
        assert_eq!(tree.total_weight(), 3);
    }
}
