/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph representations.
//!
//! Algorithms in this crate work on webgraph's
//! [`RandomAccessGraph`](webgraph::traits::RandomAccessGraph), that is, on
//! graphs whose nodes are the dense indices `0..num_nodes()`. [`DiGraph`]
//! maps arbitrary node identifiers onto such indices, so that strongly
//! connected components can be computed on graphs keyed by integers, strings
//! or any other hashable type.

mod di_graph;
pub use di_graph::*;

mod adj_list;
pub use adj_list::*;
