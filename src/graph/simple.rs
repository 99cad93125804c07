//! Simple graph: at most one edge per (ordered) pair of nodes
//!
//! Directed and undirected graphs share this type; the difference is the
//! [`GraphConfig::directed`] flag, which decides whether the adjacency index
//! mirrors each edge onto the second endpoint or into a predecessor map.
//!
//! Adding an edge that already exists merges the new attributes into the
//! existing record. For undirected graphs the record is shared by both
//! endpoints, so `get_edge_data(u, v)` and `get_edge_data(v, u)` return the
//! very same map.

use super::adjacency::FxIndexMap;
use super::config::GraphConfig;
use super::container::GraphCore;
use super::descriptor::EdgeDescriptor;
use super::error::{GraphError, GraphResult};
use super::property::{merge_properties, weight_of, PropertyMap};
use super::types::{EdgeId, NodeKey};

/// In-memory simple graph
#[derive(Debug, Clone)]
pub struct Graph<N: NodeKey> {
    pub(crate) core: GraphCore<N, PropertyMap>,
}

impl<N: NodeKey> Graph<N> {
    /// Create an empty undirected graph
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create an empty directed graph
    pub fn new_directed() -> Self {
        Self::with_config(GraphConfig::directed())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            core: GraphCore::new(config),
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.core.config
    }

    pub fn is_directed(&self) -> bool {
        self.core.config.directed
    }

    pub fn is_multigraph(&self) -> bool {
        false
    }

    /// Structural revision, bumped by every node/edge insertion or removal
    pub fn revision(&self) -> u64 {
        self.core.revision
    }

    pub fn graph_attrs(&self) -> &PropertyMap {
        &self.core.graph_attrs
    }

    pub fn graph_attrs_mut(&mut self) -> &mut PropertyMap {
        &mut self.core.graph_attrs
    }

    // ============================================================
    // Nodes
    // ============================================================

    /// Insert a node, or merge `attrs` into an existing node's attributes
    pub fn add_node(&mut self, id: N, attrs: PropertyMap) -> GraphResult<()> {
        self.core.add_node(id, attrs)
    }

    /// Insert several nodes; stops at the first invalid id
    pub fn add_nodes_from<I>(&mut self, nodes: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = (N, PropertyMap)>,
    {
        self.core.add_nodes_from(nodes)
    }

    /// Remove a node and all its incident edges, returning its attributes
    pub fn remove_node(&mut self, id: &N) -> GraphResult<PropertyMap> {
        self.core.remove_node(id).map(|(attrs, _)| attrs)
    }

    pub fn has_node(&self, id: &N) -> bool {
        self.core.nodes.contains_key(id)
    }

    pub fn node_attrs(&self, id: &N) -> Option<&PropertyMap> {
        self.core.nodes.get(id)
    }

    pub fn node_attrs_mut(&mut self, id: &N) -> Option<&mut PropertyMap> {
        self.core.nodes.get_mut(id)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.core.nodes.keys()
    }

    pub fn nodes_with_data(&self) -> impl Iterator<Item = (&N, &PropertyMap)> + '_ {
        self.core.nodes.iter()
    }

    pub fn number_of_nodes(&self) -> usize {
        self.core.nodes.len()
    }

    /// Neighbors of `id` (successors for directed graphs)
    pub fn neighbors(&self, id: &N) -> GraphResult<impl Iterator<Item = &N> + '_> {
        Ok(self.core.neighbors(id)?.keys())
    }

    pub fn successors(&self, id: &N) -> GraphResult<impl Iterator<Item = &N> + '_> {
        self.neighbors(id)
    }

    /// Predecessors of `id` (the neighbors, for undirected graphs)
    pub fn predecessors(&self, id: &N) -> GraphResult<impl Iterator<Item = &N> + '_> {
        Ok(self.core.predecessors(id)?.keys())
    }

    // ============================================================
    // Edges
    // ============================================================

    /// Insert the edge `u - v` or merge `attrs` into the existing one
    ///
    /// Missing endpoints are created with empty attributes unless the graph
    /// was configured with `auto_create_nodes: false`.
    pub fn add_edge(&mut self, u: N, v: N, attrs: PropertyMap) -> GraphResult<()> {
        self.core.ensure_endpoints(&u, &v)?;
        match self.core.record_mut(&u, &v) {
            Some(existing) => merge_properties(existing, attrs),
            None => {
                self.core.link_new(&u, &v, attrs);
            }
        }
        Ok(())
    }

    /// Insert `(u, v)` and `(u, v, attrs)` descriptors
    ///
    /// Not transactional: edges before a malformed descriptor stay added.
    pub fn add_edges_from<I, E>(&mut self, edges: I) -> GraphResult<usize>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeDescriptor<N>>,
    {
        self.add_edges_from_with(edges, &PropertyMap::new())
    }

    /// Like [`add_edges_from`](Self::add_edges_from); `common` is applied to
    /// every edge before the descriptor's own attributes
    pub fn add_edges_from_with<I, E>(
        &mut self,
        edges: I,
        common: &PropertyMap,
    ) -> GraphResult<usize>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeDescriptor<N>>,
    {
        let mut added = 0;
        for descriptor in edges {
            let (u, v, attrs) = descriptor.into().into_simple()?;
            let mut merged = common.clone();
            merge_properties(&mut merged, attrs);
            self.add_edge(u, v, merged)?;
            added += 1;
        }
        Ok(added)
    }

    /// Remove the edge `u - v`, returning its attributes
    pub fn remove_edge(&mut self, u: &N, v: &N) -> GraphResult<PropertyMap> {
        self.core
            .unlink(u, v)
            .ok_or_else(|| GraphError::edge_not_found(u, v))
    }

    /// Remove every listed edge that exists; missing edges are skipped
    pub fn remove_edges_from<'a, I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = &'a (N, N)>,
        N: 'a,
    {
        edges
            .into_iter()
            .filter(|(u, v)| self.remove_edge(u, v).is_ok())
            .count()
    }

    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        self.core.handle(u, v).is_some()
    }

    /// Attributes of `u - v`, or `None` if there is no such edge
    pub fn get_edge_data(&self, u: &N, v: &N) -> Option<&PropertyMap> {
        self.core.record(u, v)
    }

    /// Attributes of `u - v`, or `default` if there is no such edge
    pub fn get_edge_data_or<'a>(
        &'a self,
        u: &N,
        v: &N,
        default: &'a PropertyMap,
    ) -> &'a PropertyMap {
        self.core.record(u, v).unwrap_or(default)
    }

    pub fn get_edge_data_mut(&mut self, u: &N, v: &N) -> Option<&mut PropertyMap> {
        self.core.record_mut(u, v)
    }

    /// Arena handle of the record behind `u - v`
    ///
    /// Both directions of an undirected edge report the same handle.
    pub fn edge_id(&self, u: &N, v: &N) -> Option<EdgeId> {
        self.core.handle(u, v)
    }

    /// Every edge once, in node insertion order
    pub fn edges(&self) -> Vec<(&N, &N)> {
        self.core.pairs().into_iter().map(|(u, v, _)| (u, v)).collect()
    }

    pub fn edges_with_data(&self) -> Vec<(&N, &N, &PropertyMap)> {
        self.core.pairs()
    }

    pub fn number_of_edges(&self) -> usize {
        self.core.records.len()
    }

    /// Number of edges, or the total of `weight` over all edges
    pub fn size(&self, weight: Option<&str>) -> f64 {
        match weight {
            None => self.number_of_edges() as f64,
            Some(key) => self.core.pairs().iter().map(|(_, _, attrs)| weight_of(attrs, key)).sum(),
        }
    }

    // ============================================================
    // Degree
    // ============================================================

    /// Degree of `id`, weighted by the configured weight key if there is one
    ///
    /// Unweighted, a self-loop counts once. Weighted, the self-loop's weight
    /// is added a second time. Directed graphs report in + out.
    pub fn degree(&self, id: &N) -> Option<f64> {
        self.degree_with(id, self.core.config.weight_key.as_deref())
    }

    /// Degree of `id` using an explicit weight key (or none)
    pub fn degree_with(&self, id: &N, weight: Option<&str>) -> Option<f64> {
        match weight {
            None => self.core.degree_by(id, false, |_| 1.0),
            Some(key) => self.core.degree_by(id, true, |attrs| weight_of(attrs, key)),
        }
    }

    /// Degree of every node, in node insertion order
    pub fn degrees(&self) -> FxIndexMap<N, f64> {
        self.core
            .nodes
            .keys()
            .filter_map(|n| self.degree(n).map(|d| (n.clone(), d)))
            .collect()
    }

    pub fn out_degree(&self, id: &N) -> Option<usize> {
        self.core.adj.successors(id).map(|nbrs| nbrs.len())
    }

    pub fn in_degree(&self, id: &N) -> Option<usize> {
        self.core.adj.predecessors(id).map(|nbrs| nbrs.len())
    }

    /// Remove all nodes, edges and graph attributes; the config is kept
    pub fn clear(&mut self) {
        self.core.clear();
    }
}

impl<N: NodeKey> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}
