//! Graphkit
//!
//! In-memory graph containers for attributed simple graphs and multigraphs,
//! directed or undirected.
//!
//! # Architecture
//!
//! - Nodes are any hashable caller type implementing [`NodeKey`]; node and
//!   neighbor maps keep insertion order.
//! - Every connected pair owns one record in an arena: an attribute map for
//!   [`Graph`], a key map of parallel edges for [`MultiGraph`]. Both
//!   endpoints of an undirected edge hold the same record handle, so an
//!   attribute written through `(v, u)` is visible through `(u, v)`.
//! - Parallel edges are addressed by [`EdgeKey`]. Unkeyed insertion probes
//!   upward from the pair's current key count for a free key.
//! - Conversions (`copy`, `to_directed`, `to_undirected`, `subgraph`,
//!   simple/multi and dict-of-dicts) always deep-copy.
//! - Every structural mutation bumps a revision counter that detached
//!   cursors use to notice concurrent modification.
//!
//! Algorithms built on the read-only [`GraphAccess`] view live in the
//! `graphkit-algorithms` crate.
//!
//! ## Example Usage
//!
//! ```rust
//! use graphkit::{props, Graph, MultiGraph};
//!
//! let mut g = Graph::new();
//! g.add_edge("alice", "bob", props! { "since" => 2020i64 }).unwrap();
//!
//! // Undirected edges share one attribute map
//! g.get_edge_data_mut(&"bob", &"alice")
//!     .unwrap()
//!     .insert("strength".to_string(), 0.9.into());
//! assert_eq!(g.get_edge_data(&"alice", &"bob").unwrap().len(), 2);
//!
//! let mut m = MultiGraph::new();
//! let k0 = m.add_edge(0, 1, None, props! {}).unwrap();
//! let k1 = m.add_edge(0, 1, None, props! {}).unwrap();
//! assert_eq!((k0.as_u64(), k1.as_u64()), (0, 1));
//! assert_eq!(m.degree(&0), Some(2.0));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    shared, EdgeDescriptor, EdgeId, EdgeKey, Graph, GraphAccess, GraphConfig, GraphError,
    GraphResult, MultiGraph, NodeKey, PropertyMap, PropertyValue, SharedGraph,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.3.0");
    }
}
