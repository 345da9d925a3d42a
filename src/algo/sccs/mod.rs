/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Strongly connected components.
//!
//! A strongly connected component is a maximal set of nodes in which every
//! node can reach every other node. [`kosaraju`] computes the components of a
//! graph given by index; [`DiGraph::sccs`](crate::graphs::DiGraph::sccs) and
//! [`strongly_connected_components`] work with arbitrary node identifiers.

mod kosaraju;
pub use kosaraju::*;

use crate::graphs::DiGraph;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// The strongly connected components of a graph.
///
/// Components are numbered from zero. Each component has a root, that is, a
/// representative node that belongs to the component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicSccs {
    components: Box<[usize]>,
    roots: Box<[usize]>,
}

impl BasicSccs {
    /// Creates new strongly connected components.
    ///
    /// # Arguments
    /// * `components`: the component of each node.
    /// * `roots`: the root of each component.
    pub fn new(components: Box<[usize]>, roots: Box<[usize]>) -> Self {
        debug_assert!(components.iter().all(|&c| c < roots.len()));
        debug_assert!(roots
            .iter()
            .enumerate()
            .all(|(c, &root)| components[root] == c));
        Self { components, roots }
    }

    /// Returns the number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.roots.len()
    }

    /// Returns the component index of each node.
    pub fn components(&self) -> &[usize] {
        &self.components
    }

    /// Returns the root of each component.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Returns the root of the given component.
    pub fn root(&self, component: usize) -> usize {
        self.roots[component]
    }

    /// Returns the size array for this set of strongly connected components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_components()].into_boxed_slice();
        for &node_component in self.components.iter() {
            sizes[node_component] += 1;
        }
        sizes
    }

    /// Returns the nodes of each component, in increasing order.
    pub fn members(&self) -> Vec<Vec<usize>> {
        let mut members = vec![Vec::new(); self.num_components()];
        for (node, &node_component) in self.components.iter().enumerate() {
            members[node_component].push(node);
        }
        members
    }

    /// Renumbers by decreasing size the components of this set.
    ///
    /// After a call to this method, component indices are permuted so that
    /// the sizes of the components are decreasing in the component index.
    /// Components of the same size keep their relative order, and roots are
    /// permuted accordingly.
    pub fn sort_by_size(&mut self) {
        let sizes = self.compute_sizes();
        let mut sort_perm = Vec::from_iter(0..sizes.len());
        sort_perm.sort_by(|&x, &y| sizes[y].cmp(&sizes[x]));
        let mut inv_perm = vec![0; sizes.len()];
        for (new_index, &old_index) in sort_perm.iter().enumerate() {
            inv_perm[old_index] = new_index;
        }
        for node_component in self.components.iter_mut() {
            *node_component = inv_perm[*node_component];
        }
        self.roots = sort_perm.iter().map(|&old_index| self.roots[old_index]).collect();
    }

    /// Returns the components as a map from the identifier of each root to
    /// the identifiers of the nodes of its component, root included.
    ///
    /// `graph` must be the graph the components were computed on.
    pub fn partition<N: Clone + Eq + Hash>(&self, graph: &DiGraph<N>) -> HashMap<N, HashSet<N>> {
        let mut partition: HashMap<N, HashSet<N>> = self
            .roots
            .iter()
            .map(|&root| (graph.node(root).clone(), HashSet::new()))
            .collect();
        for (node, &node_component) in self.components.iter().enumerate() {
            let root = graph.node(self.roots[node_component]);
            if let Some(members) = partition.get_mut(root) {
                members.insert(graph.node(node).clone());
            }
        }
        partition
    }
}
