//! Multigraph: any number of parallel edges per pair, told apart by [`EdgeKey`]
//!
//! Each connected pair owns one key map (`EdgeKey -> PropertyMap`) held in
//! the record arena. Undirected multigraphs store the key map's handle on
//! both endpoints, so keys added from either side land in the same map.
//!
//! Keys are never stored in a counter. When the caller does not pick one,
//! [`MultiGraph::new_edge_key`] probes upward from the number of keys the
//! pair currently has:
//!
//! ```text
//! keys {}        -> 0
//! keys {0, 1}    -> 2
//! keys {1}       -> 1 taken, 2      (hole at 0 is not reused)
//! keys {0, 5}    -> 2
//! ```

use super::adjacency::FxIndexMap;
use super::config::GraphConfig;
use super::container::GraphCore;
use super::descriptor::EdgeDescriptor;
use super::error::{GraphError, GraphResult};
use super::property::{merge_properties, weight_of, PropertyMap};
use super::types::{EdgeId, EdgeKey, NodeKey};
use tracing::debug;

/// Parallel edges of one pair, in key insertion order
pub type KeyMap = FxIndexMap<EdgeKey, PropertyMap>;

/// In-memory multigraph
#[derive(Debug, Clone)]
pub struct MultiGraph<N: NodeKey> {
    pub(crate) core: GraphCore<N, KeyMap>,
}

impl<N: NodeKey> MultiGraph<N> {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn new_directed() -> Self {
        Self::with_config(GraphConfig::directed())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        MultiGraph {
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
        true
    }

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

    pub fn add_node(&mut self, id: N, attrs: PropertyMap) -> GraphResult<()> {
        self.core.add_node(id, attrs)
    }

    pub fn add_nodes_from<I>(&mut self, nodes: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = (N, PropertyMap)>,
    {
        self.core.add_nodes_from(nodes)
    }

    /// Remove a node with all of its parallel edges
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

    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.core.nodes.keys()
    }

    pub fn nodes_with_data(&self) -> impl Iterator<Item = (&N, &PropertyMap)> + '_ {
        self.core.nodes.iter()
    }

    pub fn number_of_nodes(&self) -> usize {
        self.core.nodes.len()
    }

    pub fn neighbors(&self, id: &N) -> GraphResult<impl Iterator<Item = &N> + '_> {
        Ok(self.core.neighbors(id)?.keys())
    }

    pub fn successors(&self, id: &N) -> GraphResult<impl Iterator<Item = &N> + '_> {
        self.neighbors(id)
    }

    pub fn predecessors(&self, id: &N) -> GraphResult<impl Iterator<Item = &N> + '_> {
        Ok(self.core.predecessors(id)?.keys())
    }

    // ============================================================
    // Edge keys
    // ============================================================

    /// Key the next unkeyed `add_edge(u, v, ..)` would use
    pub fn new_edge_key(&self, u: &N, v: &N) -> EdgeKey {
        let keys = match self.core.record(u, v) {
            Some(keys) => keys,
            None => return EdgeKey::new(0),
        };
        let mut candidate = EdgeKey::new(keys.len() as u64);
        while keys.contains_key(&candidate) {
            candidate = candidate.next();
        }
        candidate
    }

    // ============================================================
    // Edges
    // ============================================================

    /// Add a parallel edge, or merge `attrs` into the edge with `key`
    ///
    /// Returns the key the edge is stored under.
    pub fn add_edge(
        &mut self,
        u: N,
        v: N,
        key: Option<EdgeKey>,
        attrs: PropertyMap,
    ) -> GraphResult<EdgeKey> {
        self.core.ensure_endpoints(&u, &v)?;
        let key = match key {
            Some(key) => key,
            None => self.new_edge_key(&u, &v),
        };

        match self.core.record_mut(&u, &v) {
            Some(keys) => match keys.get_mut(&key) {
                Some(existing) => merge_properties(existing, attrs),
                None => {
                    keys.insert(key, attrs);
                    debug!("Added parallel edge {:?} -> {:?} key {}", u, v, key);
                    self.core.bump();
                }
            },
            None => {
                let mut keys = KeyMap::default();
                keys.insert(key, attrs);
                self.core.link_new(&u, &v, keys);
            }
        }
        Ok(key)
    }

    /// Insert `(u, v)`, `(u, v, attrs-or-key)` and `(u, v, key, attrs)`
    /// descriptors, returning the keys used in input order
    ///
    /// Not transactional: edges before a malformed descriptor stay added.
    pub fn add_edges_from<I, E>(&mut self, edges: I) -> GraphResult<Vec<EdgeKey>>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeDescriptor<N>>,
    {
        self.add_edges_from_with(edges, &PropertyMap::new())
    }

    pub fn add_edges_from_with<I, E>(
        &mut self,
        edges: I,
        common: &PropertyMap,
    ) -> GraphResult<Vec<EdgeKey>>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeDescriptor<N>>,
    {
        let mut keys = Vec::new();
        for descriptor in edges {
            let (u, v, key, attrs) = descriptor.into().into_keyed()?;
            let mut merged = common.clone();
            merge_properties(&mut merged, attrs);
            keys.push(self.add_edge(u, v, key, merged)?);
        }
        Ok(keys)
    }

    /// Remove one parallel edge, returning its attributes
    ///
    /// Without a key the most recently inserted key of the pair goes.
    /// Removing the last key disconnects the pair.
    pub fn remove_edge(&mut self, u: &N, v: &N, key: Option<EdgeKey>) -> GraphResult<PropertyMap> {
        let keys = self
            .core
            .record_mut(u, v)
            .ok_or_else(|| GraphError::edge_not_found(u, v))?;

        let attrs = match key {
            None => keys.pop().map(|(_, attrs)| attrs),
            Some(key) => keys.shift_remove(&key),
        }
        .ok_or_else(|| match key {
            Some(key) => GraphError::keyed_edge_not_found(u, v, key),
            None => GraphError::edge_not_found(u, v),
        })?;

        if keys.is_empty() {
            self.core.unlink(u, v);
        } else {
            self.core.bump();
        }
        Ok(attrs)
    }

    /// Remove every listed edge that exists; missing ones are skipped
    pub fn remove_edges_from<'a, I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = &'a (N, N, Option<EdgeKey>)>,
        N: 'a,
    {
        edges
            .into_iter()
            .filter(|(u, v, key)| self.remove_edge(u, v, *key).is_ok())
            .count()
    }

    /// Whether `u - v` exists, optionally under a particular key
    pub fn has_edge(&self, u: &N, v: &N, key: Option<EdgeKey>) -> bool {
        match (self.core.record(u, v), key) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(keys), Some(key)) => keys.contains_key(&key),
        }
    }

    pub fn get_edge_data(&self, u: &N, v: &N, key: EdgeKey) -> Option<&PropertyMap> {
        self.core.record(u, v)?.get(&key)
    }

    pub fn get_edge_data_mut(&mut self, u: &N, v: &N, key: EdgeKey) -> Option<&mut PropertyMap> {
        self.core.record_mut(u, v)?.get_mut(&key)
    }

    /// All parallel edges between `u` and `v`
    pub fn get_edge_keys(&self, u: &N, v: &N) -> Option<&KeyMap> {
        self.core.record(u, v)
    }

    /// Arena handle of the key map behind `u - v`
    pub fn edge_id(&self, u: &N, v: &N) -> Option<EdgeId> {
        self.core.handle(u, v)
    }

    pub fn number_of_edges_between(&self, u: &N, v: &N) -> usize {
        self.core.record(u, v).map_or(0, |keys| keys.len())
    }

    /// Every `(u, v, key)` exactly once
    pub fn edges(&self) -> Vec<(&N, &N, EdgeKey)> {
        self.core
            .pairs()
            .into_iter()
            .flat_map(|(u, v, keys)| keys.keys().map(move |&k| (u, v, k)))
            .collect()
    }

    pub fn edges_with_data(&self) -> Vec<(&N, &N, EdgeKey, &PropertyMap)> {
        self.core
            .pairs()
            .into_iter()
            .flat_map(|(u, v, keys)| keys.iter().map(move |(&k, attrs)| (u, v, k, attrs)))
            .collect()
    }

    pub fn number_of_edges(&self) -> usize {
        self.core.pairs().iter().map(|(_, _, keys)| keys.len()).sum()
    }

    pub fn size(&self, weight: Option<&str>) -> f64 {
        match weight {
            None => self.number_of_edges() as f64,
            Some(key) => self
                .edges_with_data()
                .iter()
                .map(|(_, _, _, attrs)| weight_of(attrs, key))
                .sum(),
        }
    }

    // ============================================================
    // Degree
    // ============================================================

    /// Degree counting every parallel edge; a self-loop counts twice
    pub fn degree(&self, id: &N) -> Option<f64> {
        self.degree_with(id, self.core.config.weight_key.as_deref())
    }

    pub fn degree_with(&self, id: &N, weight: Option<&str>) -> Option<f64> {
        match weight {
            None => self.core.degree_by(id, true, |keys| keys.len() as f64),
            Some(key) => self.core.degree_by(id, true, |keys| {
                keys.values().map(|attrs| weight_of(attrs, key)).sum()
            }),
        }
    }

    pub fn degrees(&self) -> FxIndexMap<N, f64> {
        self.core
            .nodes
            .keys()
            .filter_map(|n| self.degree(n).map(|d| (n.clone(), d)))
            .collect()
    }

    pub fn out_degree(&self, id: &N) -> Option<usize> {
        let nbrs = self.core.adj.successors(id)?;
        Some(self.count_keys(nbrs.values()))
    }

    pub fn in_degree(&self, id: &N) -> Option<usize> {
        let nbrs = self.core.adj.predecessors(id)?;
        Some(self.count_keys(nbrs.values()))
    }

    fn count_keys<'a>(&self, handles: impl Iterator<Item = &'a EdgeId>) -> usize {
        handles
            .filter_map(|&handle| self.core.records.get(handle))
            .map(|keys| keys.len())
            .sum()
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }
}

impl<N: NodeKey> Default for MultiGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}
