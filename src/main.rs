/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use dsi_progress_logger::prelude::*;
use keyed_sccs::prelude::*;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use webgraph::prelude::BvGraph;
use webgraph::traits::{RandomAccessLabeling, SequentialLabeling};

/// Computes the strongly connected components of a directed graph.
///
/// Prints one line per component: its root, a colon, and its nodes.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// An adjacency list ("node: successor successor ..." lines); standard
    /// input is read if missing.
    input: Option<PathBuf>,
    /// Load the webgraph graph with this basename, and its transpose with
    /// basename followed by "-t", instead; nodes are printed as indices.
    #[arg(long, conflicts_with_all = ["input", "sorted"])]
    bvgraph: Option<String>,
    /// Number nodes by increasing identifier before computing components,
    /// so that roots do not depend on the input order.
    #[arg(long)]
    sorted: bool,
    /// Print components by decreasing size.
    #[arg(long)]
    by_size: bool,
    /// Increase verbosity (-v logs progress).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    stderrlog::new()
        .verbosity(1 + args.verbose as usize)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;
    let mut main_pl = progress_logger![display_memory = true];

    if let Some(basename) = &args.bvgraph {
        let graph = BvGraph::with_basename(basename)
            .load()
            .with_context(|| format!("Could not load graph {basename}"))?;
        let transpose = BvGraph::with_basename(basename.to_string() + "-t")
            .load()
            .with_context(|| format!("Could not load graph {basename}-t"))?;
        main_pl.info(format_args!(
            "Graph has {} nodes and {} arcs",
            graph.num_nodes(),
            graph.num_arcs()
        ));

        let mut sccs = kosaraju(&graph, &transpose, &mut main_pl);
        print_components(&mut sccs, &args, &mut main_pl, |node| node)
    } else {
        let graph: DiGraph<String> = match &args.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Could not open {}", path.display()))?;
                read_adj_list(BufReader::new(file))
                    .with_context(|| format!("Could not read {}", path.display()))
            }
            None => read_adj_list(std::io::stdin().lock())
                .context("Could not read the standard input"),
        }?;
        let graph = if args.sorted {
            graph.into_sorted()
        } else {
            graph
        };
        main_pl.info(format_args!(
            "Graph has {} nodes and {} arcs",
            graph.num_nodes(),
            graph.num_arcs()
        ));

        let mut sccs = graph.sccs(&mut main_pl)?;
        print_components(&mut sccs, &args, &mut main_pl, |node| graph.node(node))
    }
}

/// Prints one line per component, labeling nodes with `label`.
fn print_components<D: Display>(
    sccs: &mut BasicSccs,
    args: &Args,
    pl: &mut ProgressLogger,
    label: impl Fn(usize) -> D,
) -> Result<()> {
    if args.by_size {
        sccs.sort_by_size();
    }
    pl.info(format_args!(
        "Found {} strongly connected components",
        sccs.num_components()
    ));

    let mut out = BufWriter::new(std::io::stdout().lock());
    for (component, members) in sccs.members().into_iter().enumerate() {
        write!(out, "{}:", label(sccs.root(component)))?;
        for node in members {
            write!(out, " {}", label(node))?;
        }
        writeln!(out)?;
    }
    out.flush()?;

    Ok(())
}
