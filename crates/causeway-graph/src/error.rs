//! Error types for causeway-graph operations.

use thiserror::Error;

/// The error type for causeway-graph operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A store cannot be created without room for at least one node.
    #[error("invalid capacity: a graph store must have room for at least one node")]
    InvalidCapacity,

    /// Node insertion would exceed the bound fixed at construction.
    #[error("graph store is full: capacity of {limit} nodes exhausted")]
    CapacityExhausted {
        /// The maximum node count the store was created with.
        limit: usize,
    },
}

/// A specialized Result type for causeway-graph operations.
pub type Result<T> = std::result::Result<T, Error>;
