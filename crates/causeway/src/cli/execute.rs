//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::Result;
use std::path::Path;

use causeway_graph::{GraphStore, is_reachable};

use super::args::{InfoArgs, QueryArgs, ReplArgs, ShowArgs};
use crate::config::CausewayConfig;
use crate::error::Error;
use crate::map::MapFile;
use crate::output::{self, MapSummary, OutputMode};
use crate::session;

/// Load and parse a map file, then build the graph store from it.
async fn load_store(path: &Path) -> Result<(MapFile, GraphStore)> {
    let map = MapFile::load(path).await?;
    let store = map.build_store()?;
    Ok((map, store))
}

/// Execute the repl command
pub async fn execute_repl(args: &ReplArgs, config: &CausewayConfig) -> Result<()> {
    let (_, mut store) = load_store(&args.map).await?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session::run(&mut store, stdin.lock(), stdout.lock(), config.prompt())?;

    Ok(())
}

/// Execute the query command
pub async fn execute_query(args: &QueryArgs, output_mode: OutputMode) -> Result<()> {
    let (_, mut store) = load_store(&args.map).await?;

    let origin = store
        .find_node(&args.origin)
        .ok_or_else(|| Error::NodeNotFound(args.origin.clone()))?;
    let destination = store
        .find_node(&args.destination)
        .ok_or_else(|| Error::NodeNotFound(args.destination.clone()))?;

    let reachable = is_reachable(&mut store, origin, destination);
    output::print_query_result(&args.origin, &args.destination, reachable, output_mode)?;

    Ok(())
}

/// Execute the info command
pub async fn execute_info(args: &InfoArgs, output_mode: OutputMode) -> Result<()> {
    let (map, store) = load_store(&args.map).await?;

    let summary = MapSummary {
        map: args.map.display().to_string(),
        declared_edges: map.declared_edges,
        parsed_edges: map.edges.len(),
        nodes: store.node_count(),
        edges: store.edge_count(),
        has_edges: store.has_edges(),
    };
    output::print_map_summary(&summary, output_mode)?;

    Ok(())
}

/// Execute the show command
pub async fn execute_show(args: &ShowArgs, output_mode: OutputMode) -> Result<()> {
    let (_, store) = load_store(&args.map).await?;
    output::print_adjacency(&store, output_mode)?;

    Ok(())
}
