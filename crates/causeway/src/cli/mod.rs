//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for causeway using
//! clap's derive API.
//!
//! # Commands
//!
//! - `repl`: Load a map and answer queries interactively
//! - `query`: Answer a single reachability query
//! - `info`: Show summary information about a map
//! - `show`: Print every node with its adjacency list
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--config`: Path to an optional YAML configuration file
//!
//! # Example
//!
//! ```bash
//! causeway repl routes.map
//! causeway query routes.map UME LHR
//! causeway info routes.map --json
//! ```

mod args;
mod execute;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Re-export argument structs
pub use args::{InfoArgs, QueryArgs, ReplArgs, ShowArgs};

use crate::config::CausewayConfig;
use crate::output::OutputMode;

/// Causeway - reachability queries over map files
///
/// Load a directed graph from a plain-text map file and answer "is there a
/// path from A to B" questions, interactively or one-shot.
#[derive(Parser, Debug)]
#[command(name = "causeway")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to an optional YAML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Query a map interactively
    ///
    /// Loads the map, then reads origin/destination pairs from stdin until
    /// `quit` or end of input, answering each with a result line.
    Repl(ReplArgs),

    /// Answer a single reachability query
    ///
    /// Loads the map, resolves both names and prints exactly one result
    /// line. Unknown names are an error.
    Query(QueryArgs),

    /// Show summary information about a map
    ///
    /// Displays declared and parsed edge counts, node count, and whether
    /// the graph has any edges.
    Info(InfoArgs),

    /// Print every node with its adjacency list
    ///
    /// Nodes are listed in insertion order; neighbours in adjacency order,
    /// most recently inserted edge first.
    Show(ShowArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        let config = match &self.config {
            Some(path) => CausewayConfig::load(path).await?,
            None => CausewayConfig::default(),
        };
        config.apply_color();

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match &self.command {
            Commands::Repl(args) => execute::execute_repl(args, &config).await,
            Commands::Query(args) => execute::execute_query(args, output_mode).await,
            Commands::Info(args) => execute::execute_info(args, output_mode).await,
            Commands::Show(args) => execute::execute_show(args, output_mode).await,
        }
    }
}
