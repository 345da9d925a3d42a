/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! The callback is invoked at the [start of the visit from a
//! root](Event::Init), [every time a new node is
//! discovered](Event::Previsit), [every time a node is
//! revisited](Event::Revisit), [every time the enumeration of the successors
//! of a node is completed](Event::Postvisit), and [at the end of the visit
//! from a root](Event::Done).

mod seq;
pub use seq::*;

use super::VisitEvent;

/// Types of callback events generated during a depth-first visit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Event {
    /// Initialization of the visit from a root. This event should be used to
    /// set up state at the start of each visit tree.
    Init {
        /// The root of the visit tree.
        root: usize,
    },
    /// The node has been encountered for the first time: we are traversing a
    /// new tree arc, unless `curr` is the root.
    Previsit {
        /// The current node.
        curr: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path from
        /// `root` to `curr`.
        depth: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    Revisit {
        /// The current node.
        curr: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The length of the visit path from `root` to the predecessor of
        /// `curr`, plus one.
        depth: usize,
    },
    /// The enumeration of the successors of the node has been completed, and
    /// so have the visits of all the nodes discovered from it: we are
    /// retreating from a tree arc, unless `curr` is the root.
    Postvisit {
        /// The current node.
        curr: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path from
        /// `root` to `curr`.
        depth: usize,
    },
    /// The visit from the root has been completed.
    Done {
        /// The root of the visit tree.
        root: usize,
    },
}

/// Filter arguments for depth-first visits.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FilterArgs {
    /// The node about to be discovered.
    pub curr: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The depth the node would be discovered at.
    pub depth: usize,
}

impl VisitEvent for Event {
    type FilterArgs = FilterArgs;
}
