/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::BasicSccs;
use crate::algo::finishing_order;
use crate::algo::visits::{depth_first::*, Sequential};
use crate::graphs::DiGraph;
use anyhow::Result;
use dsi_progress_logger::prelude::*;
use no_break::NoBreak;
use std::collections::{HashMap, HashSet};
use std::convert::Infallible;
use std::hash::Hash;
use std::ops::ControlFlow::{self, Continue};
use webgraph::traits::RandomAccessGraph;

/// Computes the strongly connected components of a graph using Kosaraju's
/// algorithm.
///
/// The nodes are first put in [finishing order](finishing_order) by a
/// depth-first visit of `graph`. Then `transpose` is visited using the
/// nodes in that order as roots: each root that is still unknown starts a new
/// component, whose root it becomes, and all nodes discovered from it
/// belong to that component. Components are thus numbered in order of
/// discovery.
///
/// Both visits are iterative, so the depth of the graph is not limited by
/// the size of the stack.
///
/// # Arguments
/// * `graph`: the graph.
/// * `transpose`: the transpose of `graph`.
/// * `pl`: a progress logger.
///
/// # Panics
///
/// If the two graphs do not have the same number of nodes.
pub fn kosaraju(
    graph: impl RandomAccessGraph,
    transpose: impl RandomAccessGraph,
    pl: &mut impl ProgressLog,
) -> BasicSccs {
    let num_nodes = graph.num_nodes();
    assert_eq!(
        transpose.num_nodes(),
        num_nodes,
        "The transpose has {} nodes, but the graph has {} nodes",
        transpose.num_nodes(),
        num_nodes
    );

    let finishing_order = finishing_order(&graph, pl);

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing strongly connected components...");

    let mut visit = Seq::new(&transpose);
    let mut components = vec![0; num_nodes].into_boxed_slice();
    let mut roots = Vec::new();

    visit
        .visit(
            finishing_order.iter().copied(),
            |event| -> ControlFlow<Infallible, ()> {
                match event {
                    Event::Init { root } => {
                        roots.push(root);
                    }
                    Event::Previsit { curr, .. } => {
                        components[curr] = roots.len() - 1;
                    }
                    _ => (),
                }
                Continue(())
            },
            pl,
        )
        .continue_value_no_break();

    pl.done();

    BasicSccs::new(components, roots.into_boxed_slice())
}

impl<N: Eq + Hash> DiGraph<N> {
    /// Computes the strongly connected components of this graph using
    /// [Kosaraju's algorithm](kosaraju).
    ///
    /// Component roots depend on node indices, and thus on the order in
    /// which nodes were added; use [`into_sorted`](DiGraph::into_sorted)
    /// first for roots that depend only on the graph.
    ///
    /// Fails only if the [reverse index](DiGraph::reverse_index) cannot be
    /// built.
    pub fn sccs(&self, pl: &mut impl ProgressLog) -> Result<BasicSccs> {
        let transpose = self.reverse_index()?;
        Ok(kosaraju(self.graph(), &transpose, pl))
    }
}

/// Computes the strongly connected components of a graph given as a
/// sequence of nodes and their successors.
///
/// Returns a map from the root of each component to the set of nodes of
/// the component, root included. Nodes appearing only as successors are
/// nodes nonetheless.
///
/// Fails only if the reverse index of the graph cannot be built.
///
/// # Examples
///
/// ```
/// use keyed_sccs::algo::sccs::strongly_connected_components;
/// use std::collections::HashSet;
///
/// let partition = strongly_connected_components([
///     ("a", vec!["b"]),
///     ("b", vec!["a", "c"]),
/// ])?;
///
/// assert_eq!(partition.len(), 2);
/// assert_eq!(partition[&"a"], HashSet::from(["a", "b"]));
/// assert_eq!(partition[&"c"], HashSet::from(["c"]));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn strongly_connected_components<N, I, S>(adjacency: I) -> Result<HashMap<N, HashSet<N>>>
where
    N: Clone + Eq + Hash,
    I: IntoIterator<Item = (N, S)>,
    S: IntoIterator<Item = N>,
{
    let graph = DiGraph::from_adjacency(adjacency);
    Ok(graph.sccs(no_logging![])?.partition(&graph))
}
