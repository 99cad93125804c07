//! State and node bookkeeping shared by [`Graph`](super::Graph) and
//! [`MultiGraph`](super::MultiGraph)
//!
//! `R` is the record stored per connected pair: a `PropertyMap` for simple
//! graphs, a key map for multigraphs. Records live in a slot arena and the
//! adjacency index stores their handles, so both ends of an undirected edge
//! reach the same record.

use super::adjacency::{AdjacencyIndex, FxIndexMap, Neighbors};
use super::arena::SlotArena;
use super::config::GraphConfig;
use super::error::{GraphError, GraphResult};
use super::property::{merge_properties, PropertyMap, PropertyValue};
use super::types::{EdgeId, NodeKey};
use tracing::debug;

#[derive(Debug, Clone)]
pub(crate) struct GraphCore<N: NodeKey, R> {
    pub(crate) config: GraphConfig,
    pub(crate) graph_attrs: PropertyMap,
    pub(crate) nodes: FxIndexMap<N, PropertyMap>,
    pub(crate) adj: AdjacencyIndex<N>,
    pub(crate) records: SlotArena<R>,
    /// Bumped on every structural change
    pub(crate) revision: u64,
}

impl<N: NodeKey, R> GraphCore<N, R> {
    pub(crate) fn new(config: GraphConfig) -> Self {
        let mut graph_attrs = PropertyMap::new();
        if let Some(name) = &config.name {
            graph_attrs.insert("name".to_string(), PropertyValue::String(name.clone()));
        }
        GraphCore {
            adj: AdjacencyIndex::new(config.directed),
            config,
            graph_attrs,
            nodes: FxIndexMap::default(),
            records: SlotArena::new(),
            revision: 0,
        }
    }

    pub(crate) fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    // ============================================================
    // Nodes
    // ============================================================

    pub(crate) fn add_node(&mut self, id: N, attrs: PropertyMap) -> GraphResult<()> {
        if let Some(existing) = self.nodes.get_mut(&id) {
            merge_properties(existing, attrs);
            return Ok(());
        }
        if id.is_null() {
            return Err(GraphError::invalid_id(&id));
        }
        debug!("Adding node {:?}", id);
        self.adj.insert_node(id.clone());
        self.nodes.insert(id, attrs);
        self.bump();
        Ok(())
    }

    pub(crate) fn add_nodes_from<I>(&mut self, nodes: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = (N, PropertyMap)>,
    {
        for (id, attrs) in nodes {
            self.add_node(id, attrs)?;
        }
        Ok(())
    }

    /// Validate that `id` may be used as an edge endpoint without mutating
    fn check_endpoint(&self, id: &N) -> GraphResult<()> {
        if self.nodes.contains_key(id) {
            return Ok(());
        }
        if id.is_null() {
            return Err(GraphError::invalid_id(id));
        }
        if !self.config.auto_create_nodes {
            return Err(GraphError::node_not_found(id));
        }
        Ok(())
    }

    /// Make sure both endpoints exist, creating them if allowed
    ///
    /// Both ids are validated before either is created.
    pub(crate) fn ensure_endpoints(&mut self, u: &N, v: &N) -> GraphResult<()> {
        self.check_endpoint(u)?;
        self.check_endpoint(v)?;
        for id in [u, v] {
            if !self.nodes.contains_key(id) {
                self.add_node(id.clone(), PropertyMap::new())?;
            }
        }
        Ok(())
    }

    /// Remove a node and every record attached to it
    pub(crate) fn remove_node(&mut self, id: &N) -> GraphResult<(PropertyMap, Vec<R>)> {
        let attrs = self
            .nodes
            .shift_remove(id)
            .ok_or_else(|| GraphError::node_not_found(id))?;
        let handles = self.adj.remove_node(id).unwrap_or_default();
        let released = handles
            .into_iter()
            .filter_map(|handle| self.records.remove(handle))
            .collect::<Vec<_>>();
        debug!("Removed node {:?} and {} incident records", id, released.len());
        self.bump();
        Ok((attrs, released))
    }

    pub(crate) fn neighbors(&self, id: &N) -> GraphResult<&Neighbors<N>> {
        self.adj
            .successors(id)
            .ok_or_else(|| GraphError::node_not_found(id))
    }

    pub(crate) fn predecessors(&self, id: &N) -> GraphResult<&Neighbors<N>> {
        self.adj
            .predecessors(id)
            .ok_or_else(|| GraphError::node_not_found(id))
    }

    // ============================================================
    // Records
    // ============================================================

    pub(crate) fn handle(&self, u: &N, v: &N) -> Option<EdgeId> {
        self.adj.get(u, v)
    }

    pub(crate) fn record(&self, u: &N, v: &N) -> Option<&R> {
        self.records.get(self.adj.get(u, v)?)
    }

    pub(crate) fn record_mut(&mut self, u: &N, v: &N) -> Option<&mut R> {
        let handle = self.adj.get(u, v)?;
        self.records.get_mut(handle)
    }

    /// Store a record for a pair that has none yet and mirror its handle
    pub(crate) fn link_new(&mut self, u: &N, v: &N, record: R) -> EdgeId {
        let handle = self.records.insert(record);
        self.adj.link(u, v, handle);
        debug!("Linked {:?} -> {:?} as {}", u, v, handle);
        self.bump();
        handle
    }

    /// Drop the pair from both adjacency sides and release its record
    pub(crate) fn unlink(&mut self, u: &N, v: &N) -> Option<R> {
        let handle = self.adj.unlink(u, v)?;
        debug!("Unlinked {:?} -> {:?} ({})", u, v, handle);
        self.bump();
        self.records.remove(handle)
    }

    /// Every connected pair once, with its record
    pub(crate) fn pairs(&self) -> Vec<(&N, &N, &R)> {
        self.adj
            .pairs()
            .into_iter()
            .filter_map(|(u, v, handle)| self.records.get(handle).map(|r| (u, v, r)))
            .collect()
    }

    /// Degree of `id` where each connection contributes `measure(record)`
    ///
    /// Undirected: sum over neighbors, plus the self-loop record a second
    /// time when `double_self_loop` is set. Directed: outgoing plus incoming,
    /// so a self-loop is naturally seen from both sides.
    pub(crate) fn degree_by<F>(&self, id: &N, double_self_loop: bool, measure: F) -> Option<f64>
    where
        F: Fn(&R) -> f64,
    {
        let out = self.adj.successors(id)?;
        let sum = |nbrs: &Neighbors<N>| -> f64 {
            nbrs.values()
                .filter_map(|&handle| self.records.get(handle))
                .map(&measure)
                .sum()
        };

        if self.adj.is_directed() {
            let incoming = self.adj.predecessors(id)?;
            return Some(sum(out) + sum(incoming));
        }

        let mut degree = sum(out);
        if double_self_loop {
            if let Some(record) = out.get(id).and_then(|&handle| self.records.get(handle)) {
                degree += measure(record);
            }
        }
        Some(degree)
    }

    /// Fresh core with the same graph attributes and the nodes `keep` accepts,
    /// but no edges
    pub(crate) fn empty_like<S, F>(&self, config: GraphConfig, keep: F) -> GraphCore<N, S>
    where
        F: Fn(&N) -> bool,
    {
        let mut core = GraphCore::new(config);
        core.graph_attrs = self.graph_attrs.clone();
        for (id, attrs) in self.nodes.iter().filter(|(id, _)| keep(*id)) {
            core.adj.insert_node(id.clone());
            core.nodes.insert(id.clone(), attrs.clone());
        }
        core
    }

    pub(crate) fn clear(&mut self) {
        self.graph_attrs.clear();
        self.nodes.clear();
        self.adj.clear();
        self.records.clear();
        self.bump();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core(config: GraphConfig) -> GraphCore<u32, PropertyMap> {
        GraphCore::new(config)
    }

    #[test]
    fn test_name_written_to_graph_attrs() {
        let c = core(GraphConfig::default().with_name("roads"));
        assert_eq!(c.graph_attrs["name"].as_string(), Some("roads"));
    }

    #[test]
    fn test_null_id_rejected_before_mutation() {
        let mut c: GraphCore<Option<u32>, PropertyMap> = GraphCore::new(GraphConfig::default());
        let err = c.ensure_endpoints(&Some(1), &None).unwrap_err();
        assert!(matches!(err, GraphError::InvalidIdentifier(_)));
        // Some(1) must not have been created
        assert!(c.nodes.is_empty());
        assert_eq!(c.revision, 0);
    }

    #[test]
    fn test_strict_endpoints() {
        let mut c = core(GraphConfig::default().with_auto_create_nodes(false));
        c.add_node(1, PropertyMap::new()).unwrap();
        let err = c.ensure_endpoints(&1, &2).unwrap_err();
        assert_eq!(err, GraphError::NodeNotFound("2".into()));
        assert_eq!(c.nodes.len(), 1);
    }

    #[test]
    fn test_revision_tracks_structure_only() {
        let mut c = core(GraphConfig::default());
        c.add_node(1, PropertyMap::new()).unwrap();
        let r = c.revision;
        // merging attributes into an existing node is not structural
        c.add_node(1, crate::props! { "color" => "red" }).unwrap();
        assert_eq!(c.revision, r);
        assert_eq!(c.nodes[&1]["color"].as_string(), Some("red"));

        c.ensure_endpoints(&1, &2).unwrap();
        c.link_new(&1, &2, PropertyMap::new());
        assert!(c.revision > r);
    }

    #[test]
    fn test_remove_node_releases_records() {
        let mut c = core(GraphConfig::default());
        c.ensure_endpoints(&1, &2).unwrap();
        c.link_new(&1, &2, crate::props! { "w" => 1i64 });
        c.link_new(&1, &1, crate::props! { "w" => 2i64 });

        let (_, released) = c.remove_node(&1).unwrap();
        assert_eq!(released.len(), 2);
        assert!(c.records.is_empty());
        assert!(c.neighbors(&2).unwrap().is_empty());
        assert!(matches!(c.remove_node(&1), Err(GraphError::NodeNotFound(_))));
    }
}
