/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{depth_first::*, Sequential};
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::convert::Infallible;
use std::ops::ControlFlow::{self, Continue};
use webgraph::traits::RandomAccessGraph;

/// Returns the nodes of a graph in decreasing order of completion of a
/// depth-first visit of the whole graph, that is, the last node to complete
/// comes first.
///
/// Roots are tried in index order. Every node appears exactly once, and a
/// node follows every node reachable from it that was still unknown when the
/// node was discovered. On acyclic graphs the result is a topological sort.
///
/// # Arguments
/// * `graph`: the graph.
/// * `pl`: a progress logger.
pub fn finishing_order(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Box<[usize]> {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing finishing order...");

    let mut visit = Seq::new(&graph);
    let mut order = vec![0; num_nodes].into_boxed_slice();
    // Nodes are written back to front
    let mut pos = num_nodes;

    visit
        .visit_all(
            |event| -> ControlFlow<Infallible, ()> {
                if let Event::Postvisit { curr, .. } = event {
                    pos -= 1;
                    order[pos] = curr;
                }
                Continue(())
            },
            pl,
        )
        .continue_value_no_break();

    debug_assert_eq!(pos, 0);
    pl.done();
    order
}
