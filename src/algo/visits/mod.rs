/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on graphs.
//!
//! Visits are driven by a callback that receives events of some type `A`
//! and returns a [`ControlFlow`]: returning [`Break`](ControlFlow::Break)
//! stops the visit immediately, and the break value is returned to the
//! caller. Visits that cannot be interrupted should use
//! [`Infallible`](std::convert::Infallible) as break type, and can then
//! extract the result with [`NoBreak`](no_break::NoBreak).
//!
//! A filter receives the [filter arguments](VisitEvent::FilterArgs) of each
//! node about to be discovered and decides whether the node should be
//! visited; a node rejected by the filter is not marked as known, so it can
//! be visited later.
//!
//! An interrupted visit leaves its internal state inconsistent: call
//! [`reset`](Sequential::reset) before reusing it.

pub mod depth_first;

use dsi_progress_logger::ProgressLog;
use std::ops::ControlFlow;

/// An event type, with its associated filter arguments.
pub trait VisitEvent {
    /// The arguments passed to the filter.
    type FilterArgs;
}

/// A sequential visit.
pub trait Sequential<A: VisitEvent> {
    /// Visits the graph from the specified roots, in order, skipping roots
    /// that have already been visited.
    ///
    /// # Arguments
    /// * `roots`: the nodes to start the visit from.
    /// * `callback`: the callback function.
    /// * `filter`: a filter on the nodes to visit.
    /// * `pl`: a progress logger.
    fn visit_filtered<R, B, C, F>(
        &mut self,
        roots: R,
        callback: C,
        filter: F,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()>
    where
        R: IntoIterator<Item = usize>,
        C: FnMut(A) -> ControlFlow<B, ()>,
        F: FnMut(A::FilterArgs) -> bool;

    /// Visits the whole graph, using the nodes in index order as roots.
    ///
    /// See [`visit_filtered`](Sequential::visit_filtered) for more details.
    fn visit_all_filtered<B, C, F>(
        &mut self,
        callback: C,
        filter: F,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()>
    where
        C: FnMut(A) -> ControlFlow<B, ()>,
        F: FnMut(A::FilterArgs) -> bool;

    /// Visits the graph from the specified roots without filtering.
    fn visit<R, B, C>(&mut self, roots: R, callback: C, pl: &mut impl ProgressLog) -> ControlFlow<B, ()>
    where
        R: IntoIterator<Item = usize>,
        C: FnMut(A) -> ControlFlow<B, ()>,
    {
        self.visit_filtered(roots, callback, |_| true, pl)
    }

    /// Visits the whole graph without filtering.
    fn visit_all<B, C>(&mut self, callback: C, pl: &mut impl ProgressLog) -> ControlFlow<B, ()>
    where
        C: FnMut(A) -> ControlFlow<B, ()>,
    {
        self.visit_all_filtered(callback, |_| true, pl)
    }

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
