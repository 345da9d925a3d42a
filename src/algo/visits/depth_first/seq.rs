/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{Event, FilterArgs};
use crate::algo::visits::Sequential;
use dsi_progress_logger::ProgressLog;
use std::ops::ControlFlow::{self, Continue};
use sux::bits::BitVec;
use sux::traits::BitFieldSliceMut;
use webgraph::traits::{RandomAccessGraph, RandomAccessLabeling};

/// Sequential depth-first visit.
///
/// This is an iterative implementation that does not need a large stack
/// size: the visit path is kept on an explicit stack of successor iterators,
/// one for each node on the path, so arbitrarily long paths can be visited.
/// Known nodes are recorded using one bit per node.
///
/// The progress logger will be [invoked](ProgressLog::light_update) after
/// each [postvisit event](Event::Postvisit).
///
/// # Examples
///
/// Let's compute the nodes reachable from node 1:
///
/// ```
/// use keyed_sccs::algo::visits::{depth_first::*, Sequential};
/// use dsi_progress_logger::prelude::*;
/// use no_break::NoBreak;
/// use std::convert::Infallible;
/// use std::ops::ControlFlow::{self, Continue};
/// use webgraph::graphs::vec_graph::VecGraph;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 1), (3, 0)]);
/// let mut visit = Seq::new(&graph);
/// let mut reached = vec![];
///
/// visit
///     .visit(
///         [1],
///         |event| -> ControlFlow<Infallible, ()> {
///             if let Event::Previsit { curr, .. } = event {
///                 reached.push(curr);
///             }
///             Continue(())
///         },
///         no_logging![],
///     )
///     .continue_value_no_break();
///
/// assert_eq!(reached, vec![1, 2]);
/// ```
///
/// Or, let us stop as soon as we find a cycle:
///
/// ```
/// use keyed_sccs::algo::visits::{depth_first::*, Sequential};
/// use dsi_progress_logger::prelude::*;
/// use std::ops::ControlFlow::{Break, Continue};
/// use webgraph::graphs::vec_graph::VecGraph;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 0)]);
/// let mut visit = Seq::new(&graph);
///
/// let result = visit.visit_all(
///     |event| match event {
///         Event::Revisit { curr, .. } => Break(curr),
///         _ => Continue(()),
///     },
///     no_logging![],
/// );
///
/// assert_eq!(result, Break(0));
/// ```
pub struct Seq<'a, G: RandomAccessGraph> {
    graph: &'a G,
    /// Entries on this stack are the iterator on the successors of a node
    /// and the node itself.
    stack: Vec<(
        <<G as RandomAccessLabeling>::Labels<'a> as IntoIterator>::IntoIter,
        usize,
    )>,
    known: BitVec,
}

impl<'a, G: RandomAccessGraph> Seq<'a, G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            stack: Vec::with_capacity(16),
            known: BitVec::new(graph.num_nodes()),
        }
    }

    /// Returns whether the node has been discovered by the visit.
    pub fn known(&self, node: usize) -> bool {
        self.known.get(node)
    }

    fn visit_from_root<B>(
        &mut self,
        root: usize,
        callback: &mut impl FnMut(Event) -> ControlFlow<B, ()>,
        filter: &mut impl FnMut(FilterArgs) -> bool,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()> {
        let graph = self.graph;
        let known = &mut self.known;

        if known.get(root)
            || !filter(FilterArgs {
                curr: root,
                root,
                depth: 0,
            })
        {
            // We ignore the node: it might be visited later
            return Continue(());
        }

        callback(Event::Init { root })?;

        known.set(root, true);

        callback(Event::Previsit {
            curr: root,
            root,
            depth: 0,
        })?;

        self.stack.push((graph.successors(root).into_iter(), root));

        'recurse: loop {
            // Depth of the nodes discovered from the top of the stack
            let depth = self.stack.len();
            let Some((iter, curr)) = self.stack.last_mut() else {
                return callback(Event::Done { root });
            };
            let curr = *curr;

            for succ in iter {
                if known.get(succ) {
                    callback(Event::Revisit {
                        curr: succ,
                        root,
                        depth,
                    })?;
                } else if filter(FilterArgs {
                    curr: succ,
                    root,
                    depth,
                }) {
                    known.set(succ, true);

                    callback(Event::Previsit {
                        curr: succ,
                        root,
                        depth,
                    })?;

                    self.stack.push((graph.successors(succ).into_iter(), succ));

                    // At the next iteration, succ will be on top of the stack
                    continue 'recurse;
                } // Else we ignore the node: it might be visited later
            }

            callback(Event::Postvisit {
                curr,
                root,
                depth: depth - 1,
            })?;

            pl.light_update();

            self.stack.pop();
        }
    }
}

impl<'a, G: RandomAccessGraph> Sequential<Event> for Seq<'a, G> {
    fn visit_filtered<R, B, C, F>(
        &mut self,
        roots: R,
        mut callback: C,
        mut filter: F,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()>
    where
        R: IntoIterator<Item = usize>,
        C: FnMut(Event) -> ControlFlow<B, ()>,
        F: FnMut(FilterArgs) -> bool,
    {
        for root in roots {
            self.visit_from_root(root, &mut callback, &mut filter, pl)?;
        }

        Continue(())
    }

    fn visit_all_filtered<B, C, F>(
        &mut self,
        callback: C,
        filter: F,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()>
    where
        C: FnMut(Event) -> ControlFlow<B, ()>,
        F: FnMut(FilterArgs) -> bool,
    {
        let num_nodes = self.graph.num_nodes();
        self.visit_filtered(0..num_nodes, callback, filter, pl)
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.known.reset();
    }
}
