use thiserror::Error;

use crate::graph::NodeIndex;

/// Convenient result alias for the road network library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised while building a graph from map data that is not a dense,
    /// self-consistent node table.
    #[error("invalid map: {reason}")]
    InvalidMap { reason: String },

    /// Raised when a node index does not refer to a node in the graph.
    #[error("node index {index} is out of range for a graph with {node_count} nodes")]
    InvalidIndex { index: NodeIndex, node_count: usize },

    /// Raised when a search session runs before both endpoints are chosen.
    #[error("search {which} has not been set")]
    MissingEndpoint { which: &'static str },

    /// Raised when no route could be found between two intersections.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: NodeIndex, goal: NodeIndex },

    /// Raised when a computed route plan lacks any intersections.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for map decoding errors.
    #[error("failed to parse map: {0}")]
    MapParse(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_map(reason: impl Into<String>) -> Self {
        Error::InvalidMap {
            reason: reason.into(),
        }
    }
}
