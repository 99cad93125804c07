//! Algorithms over graphkit containers
//!
//! Everything here reads graphs through [`graphkit::GraphAccess`] or the
//! public container API and never mutates its input.

pub mod common;
pub mod error;
pub mod generators;
pub mod motif;
pub mod relabel;
pub mod selfloops;
pub mod topology;

pub use common::GraphView;
pub use error::{AlgoResult, AlgorithmError};
pub use generators::{complete_graph, empty_graph, path_graph};
pub use motif::enumerate_subgraphs;
pub use relabel::{relabel_nodes, Relabel};
pub use selfloops::{nodes_with_selfloops, number_of_selfloops, selfloop_edges};
pub use topology::{topological_generations, topological_sort, TopologicalCursor};
