/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use indexmap::IndexSet;
use std::hash::Hash;
use webgraph::graphs::vec_graph::VecGraph;
use webgraph::traits::{RandomAccessGraph, RandomAccessLabeling, SequentialLabeling};
use webgraph::transform;

/// Batch size used by [`DiGraph::reverse_index`] to sort arcs.
const TRANSPOSE_BATCH_SIZE: usize = 1 << 20;

/// A directed graph whose nodes are identified by values of type `N`.
///
/// Each identifier is interned to a dense index the first time it is seen,
/// either as a node or as the endpoint of an arc, and arcs are stored by
/// index in a [`VecGraph`], which is what the algorithms of this crate visit.
/// Indices follow first-appearance order, which makes every algorithm run on
/// a `DiGraph` deterministic for a given construction sequence.
/// [`into_sorted`] provides an order that does not depend on the
/// construction sequence.
///
/// Successors are kept sorted by index and duplicate arcs are stored once.
///
/// # Examples
///
/// ```
/// use keyed_sccs::graphs::DiGraph;
///
/// let graph = DiGraph::from_adjacency([("a", vec!["b"]), ("b", vec!["a", "c"])]);
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.index_of(&"c"), Some(2));
/// ```
///
/// [`into_sorted`]: DiGraph::into_sorted
#[derive(Clone)]
pub struct DiGraph<N> {
    nodes: IndexSet<N>,
    graph: VecGraph,
}

impl<N: Eq + Hash> Default for DiGraph<N> {
    fn default() -> Self {
        Self {
            nodes: IndexSet::new(),
            graph: VecGraph::new(),
        }
    }
}

impl<N: Eq + Hash> DiGraph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node, if not already present, and returns its index.
    pub fn add_node(&mut self, node: N) -> usize {
        let (index, new) = self.nodes.insert_full(node);
        if new {
            self.graph.add_node(index);
        }
        index
    }

    /// Adds an arc, adding its endpoints if necessary (source first).
    ///
    /// Returns false if the arc was already present.
    pub fn add_arc(&mut self, src: N, dst: N) -> bool {
        let src = self.add_node(src);
        let dst = self.add_node(dst);
        self.add_index_arc(src, dst)
    }

    /// Adds an arc between two nodes given by index.
    pub(crate) fn add_index_arc(&mut self, src: usize, dst: usize) -> bool {
        self.graph.add_arc(src, dst)
    }

    /// Builds a graph from a mapping-like sequence of nodes and their
    /// successors.
    ///
    /// Each node is interned before its successors; successors that never
    /// appear as keys are nodes nonetheless.
    pub fn from_adjacency<I, S>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        S: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for (node, succ) in adjacency {
            let src = graph.add_node(node);
            for dst in succ {
                let dst = graph.add_node(dst);
                graph.add_index_arc(src, dst);
            }
        }
        graph
    }

    /// Builds a graph from a list of arcs.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (N, N)>) -> Self {
        let mut graph = Self::new();
        for (src, dst) in arcs {
            graph.add_arc(src, dst);
        }
        graph
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of (distinct) arcs.
    pub fn num_arcs(&self) -> u64 {
        self.graph.num_arcs()
    }

    /// Returns the identifier of the node with the given index.
    ///
    /// # Panics
    ///
    /// If `index` is not smaller than the number of nodes.
    pub fn node(&self, index: usize) -> &N {
        &self.nodes[index]
    }

    /// Returns the index of the given node, if it belongs to the graph.
    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.nodes.get_index_of(node)
    }

    /// Returns an iterator over the node identifiers, in index order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    /// Returns the successors of the node with the given index, in
    /// increasing index order.
    pub fn successors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph.successors(index).into_iter()
    }

    /// Returns the number of successors of the node with the given index.
    pub fn outdegree(&self, index: usize) -> usize {
        self.graph.outdegree(index)
    }

    /// Returns the successors of the given node, or `None` if the node does
    /// not belong to the graph.
    pub fn successors_of(&self, node: &N) -> Option<impl Iterator<Item = &N> + '_> {
        let index = self.index_of(node)?;
        Some(self.successors(index).map(move |succ| &self.nodes[succ]))
    }

    /// Returns the index-level structure of the graph.
    pub fn graph(&self) -> &VecGraph {
        &self.graph
    }

    /// Returns the reverse index of the graph, that is, the predecessors of
    /// each node, by index.
    ///
    /// Arcs are transposed in sorted batches, which might be spilled to
    /// temporary files: this is the only source of errors.
    pub fn reverse_index(&self) -> anyhow::Result<VecGraph> {
        Ok(VecGraph::from_lender(
            transform::transpose(&self.graph, TRANSPOSE_BATCH_SIZE)?.iter(),
        ))
    }

    /// Relabels the nodes of the graph, preserving indices.
    ///
    /// # Panics
    ///
    /// If `f` maps two distinct nodes to the same identifier.
    pub fn map_nodes<M: Eq + Hash>(&self, mut f: impl FnMut(&N) -> M) -> DiGraph<M> {
        let nodes: IndexSet<M> = self.nodes.iter().map(&mut f).collect();
        assert_eq!(
            nodes.len(),
            self.nodes.len(),
            "Relabeling merged distinct nodes"
        );
        DiGraph {
            nodes,
            graph: self.graph.clone(),
        }
    }

    /// Renumbers the nodes by increasing identifier.
    ///
    /// After this call the indices, and thus the roots chosen by the
    /// algorithms, depend only on the set of nodes and the set of arcs,
    /// and not on the order in which they were added.
    pub fn into_sorted(self) -> Self
    where
        N: Ord,
    {
        let num_nodes = self.nodes.len();
        let mut order = Vec::from_iter(0..num_nodes);
        order.sort_unstable_by(|&x, &y| self.nodes[x].cmp(&self.nodes[y]));
        let mut perm = vec![0; num_nodes];
        for (new_index, &old_index) in order.iter().enumerate() {
            perm[old_index] = new_index;
        }

        let mut graph = VecGraph::new();
        for node in 0..num_nodes {
            graph.add_node(node);
        }
        for src in 0..num_nodes {
            for dst in self.graph.successors(src) {
                graph.add_arc(perm[src], perm[dst]);
            }
        }

        let mut nodes = self.nodes;
        nodes.sort_unstable();
        DiGraph { nodes, graph }
    }
}

impl<N: Eq + Hash> FromIterator<(N, N)> for DiGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, N)>>(iter: I) -> Self {
        Self::from_arcs(iter)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn arcs<N: Copy + Eq + Hash>(graph: &DiGraph<N>) -> Vec<(N, N)> {
        (0..graph.num_nodes())
            .flat_map(|src| {
                graph
                    .successors(src)
                    .map(move |dst| (*graph.node(src), *graph.node(dst)))
            })
            .collect()
    }

    #[test]
    fn test_first_appearance_order() {
        let graph = DiGraph::from_adjacency([(3, vec![7, 1]), (1, vec![]), (5, vec![3])]);

        assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec![3, 7, 1, 5]);
        assert_eq!(graph.num_arcs(), 3);
        assert_eq!(graph.successors(0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(graph.successors(3).collect::<Vec<_>>(), vec![0]);
        assert_eq!(graph.outdegree(1), 0);
        assert_eq!(graph.graph().num_nodes(), 4);
    }

    #[test]
    fn test_successors_of() {
        let graph = DiGraph::from_arcs([("a", "b"), ("a", "c"), ("c", "a")]);

        assert_eq!(
            graph.successors_of(&"a").map(|s| s.collect::<Vec<_>>()),
            Some(vec![&"b", &"c"])
        );
        assert_eq!(graph.successors_of(&"b").map(|s| s.count()), Some(0));
        assert!(graph.successors_of(&"z").is_none());
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = DiGraph::new();
        assert_eq!(graph.add_node("x"), 0);
        assert_eq!(graph.add_node("y"), 1);
        assert_eq!(graph.add_node("x"), 0);
        assert_eq!(graph.num_nodes(), 2);
        assert_eq!(graph.graph().num_nodes(), 2);
    }

    #[test]
    fn test_duplicate_arcs_are_stored_once() {
        let mut graph = DiGraph::new();
        assert!(graph.add_arc('a', 'b'));
        assert!(!graph.add_arc('a', 'b'));
        assert_eq!(graph.num_arcs(), 1);
    }

    #[test]
    fn test_into_sorted() {
        let graph = DiGraph::from_arcs([(30, 10), (10, 20), (20, 30), (40, 40)]).into_sorted();

        assert_eq!(
            graph.nodes().copied().collect::<Vec<_>>(),
            vec![10, 20, 30, 40]
        );
        assert_eq!(arcs(&graph), vec![(10, 20), (20, 30), (30, 10), (40, 40)]);
    }

    #[test]
    fn test_map_nodes() {
        let graph = DiGraph::from_arcs([(0, 1), (1, 0), (1, 2)]);
        let relabeled = graph.map_nodes(|x| x * 10);

        assert_eq!(relabeled.index_of(&10), Some(1));
        assert_eq!(arcs(&relabeled), vec![(0, 10), (10, 0), (10, 20)]);
    }

    #[test]
    #[should_panic(expected = "Relabeling merged distinct nodes")]
    fn test_map_nodes_not_injective() {
        let graph = DiGraph::from_arcs([(0, 1), (1, 2)]);
        graph.map_nodes(|x| x / 2);
    }

    #[test]
    fn test_reverse_index() -> anyhow::Result<()> {
        let graph = DiGraph::from_adjacency([('a', vec!['b', 'c']), ('b', vec!['c'])]);
        let reverse = graph.reverse_index()?;

        assert_eq!(reverse.num_nodes(), 3);
        assert_eq!(
            reverse
                .successors(graph.index_of(&'c').unwrap())
                .into_iter()
                .collect::<Vec<_>>(),
            vec![0, 1]
        );
        assert_eq!(reverse.outdegree(0), 0);
        Ok(())
    }
}
