//! Errors raised by graph operations

use thiserror::Error;

/// Errors that can occur during graph operations
///
/// Node ids are generic, so offending ids are carried in their `Debug` form.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Invalid node identifier: {0} cannot be a node")]
    InvalidIdentifier(String),

    #[error("Node {0} not found")]
    NodeNotFound(String),

    #[error("The edge {0} is not in the graph")]
    EdgeNotFound(String),

    #[error("Edge tuple {0} must be a 2-tuple, 3-tuple or 4-tuple")]
    MalformedEdgeTuple(String),

    #[error("Converting multigraph input raised: {0}")]
    UnsupportedConversion(String),

    #[error("Graph changed during iteration")]
    GraphChanged,

    #[error("Invalid graph configuration: {0}")]
    Config(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

impl GraphError {
    pub(crate) fn invalid_id<N: std::fmt::Debug>(id: &N) -> Self {
        GraphError::InvalidIdentifier(format!("{:?}", id))
    }

    pub(crate) fn node_not_found<N: std::fmt::Debug>(id: &N) -> Self {
        GraphError::NodeNotFound(format!("{:?}", id))
    }

    pub(crate) fn edge_not_found<N: std::fmt::Debug>(u: &N, v: &N) -> Self {
        GraphError::EdgeNotFound(format!("{:?}-{:?}", u, v))
    }

    pub(crate) fn keyed_edge_not_found<N: std::fmt::Debug, K: std::fmt::Display>(
        u: &N,
        v: &N,
        key: K,
    ) -> Self {
        GraphError::EdgeNotFound(format!("{:?}-{:?} with key {}", u, v, key))
    }

    /// Whether this error is a lookup miss that bulk removal may swallow
    pub fn is_not_found(&self) -> bool {
        matches!(self, GraphError::EdgeNotFound(_) | GraphError::NodeNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GraphError::invalid_id(&Option::<u8>::None).to_string(),
            "Invalid node identifier: None cannot be a node"
        );
        assert_eq!(
            GraphError::edge_not_found(&1, &2).to_string(),
            "The edge 1-2 is not in the graph"
        );
        assert_eq!(
            GraphError::keyed_edge_not_found(&"a", &"b", 3).to_string(),
            "The edge \"a\"-\"b\" with key 3 is not in the graph"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(GraphError::edge_not_found(&1, &2).is_not_found());
        assert!(GraphError::node_not_found(&1).is_not_found());
        assert!(!GraphError::GraphChanged.is_not_found());
        assert!(!GraphError::MalformedEdgeTuple("(1,)".into()).is_not_found());
    }
}
