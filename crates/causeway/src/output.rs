//! Output formatting for CLI commands.
//!
//! This module provides utilities for formatting command output in both
//! human-readable text format and JSON format for programmatic use.

use causeway_graph::GraphStore;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

/// Result of a single reachability query, as rendered in JSON mode.
#[derive(Debug, Serialize)]
pub struct QueryOutcome<'a> {
    /// Origin node name as entered by the user.
    pub origin: &'a str,
    /// Destination node name as entered by the user.
    pub destination: &'a str,
    /// Whether a directed path exists from origin to destination.
    pub reachable: bool,
}

/// Summary of a loaded map, as shown by the `info` command.
#[derive(Debug, Serialize)]
pub struct MapSummary {
    /// Path of the map file.
    pub map: String,
    /// Edge count declared in the file header.
    pub declared_edges: usize,
    /// Edge records actually parsed from the file.
    pub parsed_edges: usize,
    /// Distinct nodes in the built graph.
    pub nodes: usize,
    /// Directed edges in the built graph.
    pub edges: usize,
    /// Whether any node has an outgoing edge.
    pub has_edges: bool,
}

/// Write the canonical result line for a query.
///
/// The wording is fixed; only the coloring varies with the outcome.
pub fn write_query_result<W: Write>(
    out: &mut W,
    origin: &str,
    destination: &str,
    reachable: bool,
) -> io::Result<()> {
    if reachable {
        let line = format!("There is a path from {origin} to {destination}.");
        writeln!(out, "{}", line.green())
    } else {
        let line = format!("There is no path from {origin} to {destination}.");
        writeln!(out, "{}", line.red())
    }
}

/// Print a query outcome in the specified format
pub fn print_query_result(
    origin: &str,
    destination: &str,
    reachable: bool,
    mode: OutputMode,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match mode {
        OutputMode::Text => write_query_result(&mut handle, origin, destination, reachable),
        OutputMode::Json => print_json(
            &mut handle,
            &QueryOutcome {
                origin,
                destination,
                reachable,
            },
        ),
    }
}

/// Print a map summary in the specified format
pub fn print_map_summary(summary: &MapSummary, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match mode {
        OutputMode::Text => {
            writeln!(handle, "Map: {}", summary.map.cyan())?;
            writeln!(handle, "  Declared edges: {}", summary.declared_edges)?;
            writeln!(handle, "  Parsed edges:   {}", summary.parsed_edges)?;
            writeln!(handle, "  Nodes:          {}", summary.nodes)?;
            writeln!(handle, "  Edges:          {}", summary.edges)?;
            if !summary.has_edges {
                writeln!(handle, "  {}", "The graph has no edges.".yellow())?;
            }
            Ok(())
        }
        OutputMode::Json => print_json(&mut handle, summary),
    }
}

/// Print every node with its adjacency list in the specified format
pub fn print_adjacency(store: &GraphStore, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match mode {
        OutputMode::Text => {
            writeln!(handle, "Graph with {} nodes:", store.node_count())?;
            for id in store.node_ids() {
                let neighbours: Vec<&str> =
                    store.neighbours(id).map(|n| store.name(n)).collect();
                if neighbours.is_empty() {
                    writeln!(handle, "  {}", store.name(id).cyan())?;
                } else {
                    writeln!(
                        handle,
                        "  {} -> {}",
                        store.name(id).cyan(),
                        neighbours.join(", ")
                    )?;
                }
            }
            Ok(())
        }
        OutputMode::Json => {
            #[derive(Serialize)]
            struct NodeEntry<'a> {
                name: &'a str,
                neighbours: Vec<&'a str>,
            }

            let nodes: Vec<NodeEntry<'_>> = store
                .node_ids()
                .map(|id| NodeEntry {
                    name: store.name(id),
                    neighbours: store.neighbours(id).map(|n| store.name(n)).collect(),
                })
                .collect();

            print_json(&mut handle, &serde_json::json!({ "nodes": nodes }))
        }
    }
}

/// Serialize a value as pretty JSON to the given writer.
fn print_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(out, "{json}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_result_wording_matches_outcome() {
        let mut out = Vec::new();
        write_query_result(&mut out, "a", "b", true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("There is a path from a to b."));

        let mut out = Vec::new();
        write_query_result(&mut out, "b", "a", false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("There is no path from b to a."));
    }

    #[test]
    fn query_outcome_serializes_cleanly() {
        let outcome = QueryOutcome {
            origin: "a",
            destination: "b",
            reachable: true,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["origin"], "a");
        assert_eq!(json["reachable"], true);
    }
}
