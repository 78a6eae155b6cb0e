//! Error types for causeway CLI operations.

use std::io;
use thiserror::Error;

/// The error type for causeway CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Graph store error (invalid or exhausted capacity).
    #[error("graph error: {0}")]
    Graph(#[from] causeway_graph::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The map file never declares a positive edge count.
    #[error("map file does not declare a positive edge count")]
    MissingEdgeCount,

    /// A map line failed parsing or validation.
    #[error("map line {line}: {message}")]
    Map {
        /// 1-based line number in the map file.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// A queried node name is not present in the graph.
    #[error("node does not exist: {0}")]
    NodeNotFound(String),
}

/// A specialized Result type for causeway operations.
pub type Result<T> = std::result::Result<T, Error>;
