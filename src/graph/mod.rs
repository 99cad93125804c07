//! Core graph container implementation
//!
//! This module implements the attributed graph data model with:
//! - Simple graphs, at most one edge per pair ([`Graph`])
//! - Multigraphs with integer-keyed parallel edges ([`MultiGraph`])
//! - Directed and undirected variants of both, chosen by [`GraphConfig`]
//! - Undirected edges whose attribute storage is shared by both endpoints
//! - Deep-copying conversions between all of the above

pub mod access;
pub mod adjacency;
pub mod arena;
pub mod config;
pub(crate) mod container;
pub mod convert;
pub mod descriptor;
pub mod error;
pub mod multi;
pub mod property;
pub mod simple;
pub mod types;

// Re-export main types
pub use access::{shared, GraphAccess, SharedGraph};
pub use adjacency::{FxIndexMap, Neighbors};
pub use config::GraphConfig;
pub use convert::{DictOfDicts, MultiDictOfDicts};
pub use descriptor::EdgeDescriptor;
pub use error::{GraphError, GraphResult};
pub use multi::{KeyMap, MultiGraph};
pub use property::{merge_properties, PropertyMap, PropertyValue};
pub use simple::Graph;
pub use types::{EdgeId, EdgeKey, NodeKey};
