/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Strongly connected components of directed graphs with arbitrary node
//! identifiers, computed by Kosaraju's algorithm.
//!
//! The quickest way in is
//! [`strongly_connected_components`](algo::sccs::strongly_connected_components),
//! which maps a graph given as nodes and successors to its partition into
//! components. [`DiGraph`](graphs::DiGraph) and
//! [`kosaraju`](algo::sccs::kosaraju) expose the same computation with
//! progress logging and index-level results.

pub mod algo;
pub mod graphs;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::traits::*;
}

/// Use `use keyed_sccs::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use algo::finishing_order;
    pub use algo::sccs;
    pub use algo::sccs::{kosaraju, strongly_connected_components, BasicSccs};
    pub use algo::visits::depth_first;
    pub use graphs::{read_adj_list, write_adj_list, AdjListError, DiGraph};
    pub use traits::*;
}
