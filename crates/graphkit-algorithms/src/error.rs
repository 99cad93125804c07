//! Errors raised by graph algorithms

use graphkit::GraphError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgorithmError {
    #[error("Topological ordering is not defined for undirected graphs")]
    NotDirected,

    #[error("{0} is not implemented for directed graphs")]
    NotUndirected(&'static str),

    #[error("Graph contains a cycle; {remaining} nodes could not be ordered")]
    CycleDetected { remaining: usize },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type AlgoResult<T> = Result<T, AlgorithmError>;
