//! Error types for the girvan-newman library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the girvan-newman library.
#[derive(Error, Debug)]
pub enum GnError {
    /// An operation referenced a node that was never added to the graph.
    #[error("Node {0} not found")]
    UnknownNode(NodeId),

    /// Betweenness or removal requested on a graph with no edges.
    #[error("Graph has no edges")]
    EmptyGraph,

    /// A run parameter is out of its valid range.
    #[error("Invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// A line of an edge list could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for girvan-newman operations.
pub type GnResult<T> = Result<T, GnError>;
