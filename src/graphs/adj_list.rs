/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Textual adjacency lists.
//!
//! Each non-blank line contains a node identifier, a colon and the
//! whitespace-separated identifiers of its successors:
//!
//! ```text
//! # A triangle and a dangling node
//! a: b c
//! b: a
//! c: a
//! d:
//! ```
//!
//! Everything following a `#` is a comment. Successors need not have a
//! line of their own, and a node may have at most one line. Identifiers
//! cannot contain whitespace, colons or `#`.

use super::DiGraph;
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can happen while reading an adjacency list.
///
/// Line numbers start from one.
#[derive(Error, Debug)]
pub enum AdjListError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("Line {line}: missing ':' after the node identifier")]
    MissingSeparator { line: usize },
    #[error("Line {line}: empty node identifier")]
    EmptyNode { line: usize },
    #[error("Line {line}: node {node:?} already has an adjacency line")]
    DuplicateNode { line: usize, node: String },
    #[error("Line {line}: invalid node identifier {token:?}")]
    InvalidNode {
        line: usize,
        token: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

fn parse_node<N>(token: &str, line: usize) -> Result<N, AdjListError>
where
    N: FromStr,
    N::Err: std::error::Error + Send + Sync + 'static,
{
    token.parse().map_err(|err: N::Err| AdjListError::InvalidNode {
        line,
        token: token.to_owned(),
        source: Box::new(err),
    })
}

/// Reads a graph from an adjacency list.
///
/// Nodes are indexed in order of first appearance in the text.
pub fn read_adj_list<N, R>(reader: R) -> Result<DiGraph<N>, AdjListError>
where
    N: FromStr + Eq + Hash,
    N::Err: std::error::Error + Send + Sync + 'static,
    R: BufRead,
{
    let mut graph = DiGraph::new();
    let mut declared = HashSet::new();

    for (line_index, text) in reader.lines().enumerate() {
        let text = text?;
        let line = line_index + 1;
        let content = match text.find('#') {
            Some(pos) => &text[..pos],
            None => text.as_str(),
        }
        .trim();
        if content.is_empty() {
            continue;
        }

        let Some((node, succ)) = content.split_once(':') else {
            return Err(AdjListError::MissingSeparator { line });
        };
        let node = node.trim();
        if node.is_empty() {
            return Err(AdjListError::EmptyNode { line });
        }

        let src = graph.add_node(parse_node(node, line)?);
        if !declared.insert(src) {
            return Err(AdjListError::DuplicateNode {
                line,
                node: node.to_owned(),
            });
        }
        for token in succ.split_whitespace() {
            let dst = graph.add_node(parse_node(token, line)?);
            graph.add_index_arc(src, dst);
        }
    }

    Ok(graph)
}

/// Writes a graph as an adjacency list, one line per node in index order.
///
/// Reading back the output yields the same graph, provided that the
/// identifiers satisfy the restrictions of the format.
pub fn write_adj_list<N: Display + Eq + Hash>(
    graph: &DiGraph<N>,
    mut writer: impl Write,
) -> std::io::Result<()> {
    for (index, node) in graph.nodes().enumerate() {
        write!(writer, "{node}:")?;
        for succ in graph.successors(index) {
            write!(writer, " {}", graph.node(succ))?;
        }
        writeln!(writer)?;
    }
    writer.flush()
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_read() -> Result<()> {
        let text = "# comment\n0: 1 2\n\n1: 0 2 # trailing\n2:\n3: 4\n";
        let graph: DiGraph<u32> = read_adj_list(text.as_bytes())?;

        assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(graph.num_arcs(), 5);
        assert_eq!(graph.successors(1).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(graph.outdegree(2), 0);
        assert_eq!(graph.outdegree(4), 0);
        Ok(())
    }

    #[test]
    fn test_errors() {
        let missing = read_adj_list::<String, _>("a b\n".as_bytes());
        assert!(matches!(
            missing,
            Err(AdjListError::MissingSeparator { line: 1 })
        ));

        let empty = read_adj_list::<String, _>("a: b\n : a\n".as_bytes());
        assert!(matches!(empty, Err(AdjListError::EmptyNode { line: 2 })));

        let duplicate = read_adj_list::<String, _>("a: b\nb:\na: c\n".as_bytes());
        assert!(matches!(
            duplicate,
            Err(AdjListError::DuplicateNode { line: 3, ref node }) if node == "a"
        ));

        let invalid = read_adj_list::<u8, _>("1: 2 300\n".as_bytes());
        assert!(matches!(
            invalid,
            Err(AdjListError::InvalidNode { line: 1, ref token, .. }) if token == "300"
        ));
    }

    #[test]
    fn test_write_read() -> Result<()> {
        let graph = DiGraph::from_adjacency([
            ("x".to_string(), vec!["y".to_string()]),
            ("y".to_string(), vec!["x".to_string(), "z".to_string()]),
        ]);
        let mut buffer = Vec::new();
        write_adj_list(&graph, &mut buffer)?;

        assert_eq!(String::from_utf8(buffer.clone())?, "x: y\ny: x z\nz:\n");

        let read: DiGraph<String> = read_adj_list(buffer.as_slice())?;
        assert_eq!(read.nodes().collect::<Vec<_>>(), graph.nodes().collect::<Vec<_>>());
        for index in 0..graph.num_nodes() {
            assert_eq!(
                read.successors(index).collect::<Vec<_>>(),
                graph.successors(index).collect::<Vec<_>>()
            );
        }
        Ok(())
    }

    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn test_io_error() {
        let err = read_adj_list::<String, _>(std::io::BufReader::new(FailingReader))
            .err()
            .unwrap();

        assert!(matches!(err, AdjListError::Io(_)));
        assert_eq!(err.to_string(), "I/O error");
        assert_eq!(
            std::error::Error::source(&err).map(|e| e.to_string()),
            Some("disk on fire".to_string())
        );
    }
}
