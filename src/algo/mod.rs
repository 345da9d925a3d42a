/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algorithms on [random-access graphs](webgraph::traits::RandomAccessGraph).

pub mod visits;

mod finishing_order;
pub use finishing_order::*;

pub mod sccs;

/// Traits used to interact with the implemented algorithms.
pub mod traits {
    pub use super::visits::{Sequential, VisitEvent};
}
