//! Error types for strata-graph.

use thiserror::Error;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur while building or querying a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The construction parameters describe an empty or ill-formed graph.
    #[error("invalid graph config: {0}")]
    InvalidConfig(String),

    /// A node id that does not exist in the graph.
    #[error("unknown node id: {0:?}")]
    UnknownNode(String),

    /// A weight distribution could not be created from its parameters.
    #[error("invalid weight distribution: {0}")]
    Distribution(String),
}
