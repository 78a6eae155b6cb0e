//! Argument structs for CLI commands.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `repl` command
#[derive(Args, Debug, Clone)]
pub struct ReplArgs {
    /// Path to the map file
    pub map: PathBuf,
}

/// Arguments for the `query` command
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Path to the map file
    pub map: PathBuf,

    /// Name of the origin node
    pub origin: String,

    /// Name of the destination node
    pub destination: String,
}

/// Arguments for the `info` command
#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Path to the map file
    pub map: PathBuf,
}

/// Arguments for the `show` command
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Path to the map file
    pub map: PathBuf,
}
