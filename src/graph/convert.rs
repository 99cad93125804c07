//! Structural conversions
//!
//! Every conversion builds a new, independently owned graph. Attribute maps
//! are cloned, never shared between the source and the result, so mutating
//! one graph is invisible to the other.

use super::adjacency::FxIndexMap;
use super::config::GraphConfig;
use super::container::GraphCore;
use super::error::{GraphError, GraphResult};
use super::multi::{KeyMap, MultiGraph};
use super::property::{merge_properties, PropertyMap, PropertyValue};
use super::simple::Graph;
use super::types::{EdgeKey, NodeKey};
use rustc_hash::FxHashSet;
use tracing::{info, warn};

/// `u -> v -> attrs`
pub type DictOfDicts<N> = FxIndexMap<N, FxIndexMap<N, PropertyMap>>;

/// `u -> v -> key -> attrs`
pub type MultiDictOfDicts<N> = FxIndexMap<N, FxIndexMap<N, KeyMap>>;

impl<N: NodeKey> Graph<N> {
    /// Independent copy with the same directedness, nodes, edges and
    /// attributes
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Directed copy; each undirected edge becomes two opposite edges with
    /// their own attribute maps
    pub fn to_directed(&self) -> Graph<N> {
        if self.is_directed() {
            return self.copy();
        }
        let config = GraphConfig {
            directed: true,
            ..self.core.config.clone()
        };
        let mut core = self.core.empty_like(config, |_| true);
        for (u, v, attrs) in self.core.pairs() {
            core.link_new(u, v, attrs.clone());
            if u != v {
                core.link_new(v, u, attrs.clone());
            }
        }
        info!(
            "Converted undirected graph to directed ({} edges)",
            core.records.len()
        );
        Graph { core }
    }

    /// Undirected copy; a reciprocal pair collapses into one edge whose
    /// attributes are merged, the later-visited direction winning clashes
    pub fn to_undirected(&self) -> Graph<N> {
        if !self.is_directed() {
            return self.copy();
        }
        let config = GraphConfig {
            directed: false,
            ..self.core.config.clone()
        };
        let mut core = self.core.empty_like(config, |_| true);
        for (u, v, attrs) in self.core.pairs() {
            match core.record_mut(u, v) {
                Some(existing) => merge_properties(existing, attrs.clone()),
                None => {
                    core.link_new(u, v, attrs.clone());
                }
            }
        }
        Graph { core }
    }

    /// Copy induced on `nodes`; ids not in the graph are ignored
    pub fn subgraph<'a, I>(&self, nodes: I) -> Graph<N>
    where
        I: IntoIterator<Item = &'a N>,
        N: 'a,
    {
        let keep: FxHashSet<&N> = nodes.into_iter().collect();
        let mut core = self
            .core
            .empty_like(self.core.config.clone(), |n| keep.contains(n));
        for (u, v, attrs) in self.core.pairs() {
            if keep.contains(u) && keep.contains(v) {
                core.link_new(u, v, attrs.clone());
            }
        }
        Graph { core }
    }

    /// Collapse parallel edges, merging their attributes in key order
    pub fn from_multigraph(multi: &MultiGraph<N>) -> Graph<N> {
        let mut core = multi.core.empty_like(multi.core.config.clone(), |_| true);
        for (u, v, keys) in multi.core.pairs() {
            let mut merged = PropertyMap::new();
            for attrs in keys.values() {
                merge_properties(&mut merged, attrs.clone());
            }
            core.link_new(u, v, merged);
        }
        Graph { core }
    }

    /// Build a graph from `u -> v -> attrs`
    ///
    /// Outer keys become nodes even when they have no neighbors. Inner keys
    /// are created as needed unless `config` disables auto-creation.
    pub fn from_dict_of_dicts(data: DictOfDicts<N>, config: GraphConfig) -> GraphResult<Self> {
        let mut graph = Graph::with_config(config);
        let mut edges = Vec::new();
        for (u, nbrs) in data {
            graph.add_node(u.clone(), PropertyMap::new())?;
            edges.extend(nbrs.into_iter().map(|(v, attrs)| (u.clone(), v, attrs)));
        }
        for (u, v, attrs) in edges {
            graph.add_edge(u, v, attrs)?;
        }
        Ok(graph)
    }

    /// Adjacency as `u -> v -> attrs`, mirrored entries included
    pub fn to_dict_of_dicts(&self) -> DictOfDicts<N> {
        self.core
            .adj
            .iter()
            .map(|(u, nbrs)| {
                let inner = nbrs
                    .iter()
                    .filter_map(|(v, &handle)| {
                        self.core.records.get(handle).map(|attrs| (v.clone(), attrs.clone()))
                    })
                    .collect();
                (u.clone(), inner)
            })
            .collect()
    }
}

impl<N: NodeKey> MultiGraph<N> {
    /// Independent copy; edge keys are preserved
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Directed copy; every `(u, v, key)` becomes `u -> v` and `v -> u` under
    /// the same key
    pub fn to_directed(&self) -> MultiGraph<N> {
        if self.is_directed() {
            return self.copy();
        }
        let config = GraphConfig {
            directed: true,
            ..self.core.config.clone()
        };
        let mut core = self.core.empty_like(config, |_| true);
        for (u, v, keys) in self.core.pairs() {
            core.link_new(u, v, keys.clone());
            if u != v {
                core.link_new(v, u, keys.clone());
            }
        }
        MultiGraph { core }
    }

    /// Undirected copy; opposite edges sharing a key collapse into one
    pub fn to_undirected(&self) -> MultiGraph<N> {
        if !self.is_directed() {
            return self.copy();
        }
        let config = GraphConfig {
            directed: false,
            ..self.core.config.clone()
        };
        let mut core: GraphCore<N, KeyMap> = self.core.empty_like(config, |_| true);
        for (u, v, keys) in self.core.pairs() {
            match core.record_mut(u, v) {
                Some(existing) => {
                    for (key, attrs) in keys {
                        let slot: &mut PropertyMap = existing.entry(*key).or_default();
                        merge_properties(slot, attrs.clone());
                    }
                }
                None => {
                    core.link_new(u, v, keys.clone());
                }
            }
        }
        MultiGraph { core }
    }

    pub fn subgraph<'a, I>(&self, nodes: I) -> MultiGraph<N>
    where
        I: IntoIterator<Item = &'a N>,
        N: 'a,
    {
        let keep: FxHashSet<&N> = nodes.into_iter().collect();
        let mut core = self
            .core
            .empty_like(self.core.config.clone(), |n| keep.contains(n));
        for (u, v, keys) in self.core.pairs() {
            if keep.contains(u) && keep.contains(v) {
                core.link_new(u, v, keys.clone());
            }
        }
        MultiGraph { core }
    }

    /// Multigraph with each simple edge stored under key 0
    pub fn from_graph(graph: &Graph<N>) -> MultiGraph<N> {
        let mut core = graph.core.empty_like(graph.core.config.clone(), |_| true);
        for (u, v, attrs) in graph.core.pairs() {
            let mut keys = KeyMap::default();
            keys.insert(EdgeKey::new(0), attrs.clone());
            core.link_new(u, v, keys);
        }
        MultiGraph { core }
    }

    /// Build a multigraph from a dict of dicts
    ///
    /// Unless `multigraph_input` is `Some(false)`, the data is first read as
    /// `u -> v -> key -> attrs`: every inner attribute name must parse as an
    /// edge key and every value must be a map. If that reading fails,
    /// `Some(true)` reports [`GraphError::UnsupportedConversion`] while
    /// `None` falls back to `u -> v -> attrs` with one edge per pair.
    pub fn from_dict_of_dicts(
        data: DictOfDicts<N>,
        multigraph_input: Option<bool>,
        config: GraphConfig,
    ) -> GraphResult<Self> {
        if multigraph_input != Some(false) {
            match keyed_edges(&data) {
                Ok(edges) => {
                    let mut graph = MultiGraph::with_config(config);
                    graph.add_nodes_from(data.into_keys().map(|u| (u, PropertyMap::new())))?;
                    for (u, v, key, attrs) in edges {
                        graph.add_edge(u, v, Some(key), attrs)?;
                    }
                    return Ok(graph);
                }
                Err(reason) if multigraph_input == Some(true) => {
                    return Err(GraphError::UnsupportedConversion(reason));
                }
                Err(reason) => {
                    warn!(
                        "Input is not keyed multigraph data ({}), reading it as u -> v -> attrs",
                        reason
                    );
                }
            }
        }

        let mut graph = MultiGraph::with_config(config);
        let mut edges = Vec::new();
        for (u, nbrs) in data {
            graph.add_node(u.clone(), PropertyMap::new())?;
            edges.extend(nbrs.into_iter().map(|(v, attrs)| (u.clone(), v, attrs)));
        }
        for (u, v, attrs) in edges {
            // undirected input lists each pair from both sides
            if !graph.is_directed() && graph.has_edge(&u, &v, None) {
                continue;
            }
            graph.add_edge(u, v, None, attrs)?;
        }
        Ok(graph)
    }

    /// Adjacency as `u -> v -> key -> attrs`, mirrored entries included
    pub fn to_dict_of_dicts(&self) -> MultiDictOfDicts<N> {
        self.core
            .adj
            .iter()
            .map(|(u, nbrs)| {
                let inner = nbrs
                    .iter()
                    .filter_map(|(v, &handle)| {
                        self.core.records.get(handle).map(|keys| (v.clone(), keys.clone()))
                    })
                    .collect();
                (u.clone(), inner)
            })
            .collect()
    }
}

/// Strict `u -> v -> key -> attrs` reading of plain dict-of-dicts data
fn keyed_edges<N: NodeKey>(
    data: &DictOfDicts<N>,
) -> Result<Vec<(N, N, EdgeKey, PropertyMap)>, String> {
    let mut edges = Vec::new();
    for (u, nbrs) in data {
        for (v, keyed) in nbrs {
            for (raw_key, value) in keyed {
                let key = raw_key
                    .parse::<EdgeKey>()
                    .map_err(|e| format!("edge key {:?} of {:?}-{:?}: {}", raw_key, u, v, e))?;
                let attrs = match value {
                    PropertyValue::Map(attrs) => attrs.clone(),
                    other => {
                        return Err(format!(
                            "edge {:?}-{:?} key {} holds a {}, not an attribute map",
                            u,
                            v,
                            key,
                            other.type_name()
                        ))
                    }
                };
                edges.push((u.clone(), v.clone(), key, attrs));
            }
        }
    }
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props;

    fn dod(
        entries: Vec<(&'static str, Vec<(&'static str, PropertyMap)>)>,
    ) -> DictOfDicts<&'static str> {
        entries
            .into_iter()
            .map(|(u, nbrs)| (u, nbrs.into_iter().collect()))
            .collect()
    }

    #[test]
    fn test_copy_is_independent() {
        let mut g = Graph::new();
        g.add_edge(1, 2, props! { "w" => 1i64 }).unwrap();
        let mut h = g.copy();

        h.get_edge_data_mut(&1, &2)
            .unwrap()
            .insert("w".into(), 5i64.into());
        h.add_edge(2, 3, props! {}).unwrap();

        assert_eq!(g.get_edge_data(&1, &2).unwrap()["w"].as_integer(), Some(1));
        assert!(!g.has_node(&3));
        // the copy still aliases its own mirrored entries
        assert_eq!(h.edge_id(&1, &2), h.edge_id(&2, &1));
    }

    #[test]
    fn test_to_directed_splits_storage() {
        let mut g = Graph::new();
        g.add_edge("a", "b", props! { "w" => 2i64 }).unwrap();
        g.add_edge("a", "a", props! {}).unwrap();

        let mut d = g.to_directed();
        assert!(d.is_directed());
        assert_eq!(d.number_of_edges(), 3);
        assert_ne!(d.edge_id(&"a", &"b"), d.edge_id(&"b", &"a"));

        d.get_edge_data_mut(&"a", &"b")
            .unwrap()
            .insert("w".into(), 9i64.into());
        assert_eq!(d.get_edge_data(&"b", &"a").unwrap()["w"].as_integer(), Some(2));
        assert_eq!(g.get_edge_data(&"a", &"b").unwrap()["w"].as_integer(), Some(2));
    }

    #[test]
    fn test_to_undirected_merges_reciprocal() {
        let mut d = Graph::new_directed();
        d.add_edge(1, 2, props! { "a" => 1i64, "shared" => "first" }).unwrap();
        d.add_edge(2, 1, props! { "b" => 2i64, "shared" => "second" }).unwrap();

        let u = d.to_undirected();
        assert!(!u.is_directed());
        assert_eq!(u.number_of_edges(), 1);
        let data = u.get_edge_data(&1, &2).unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data["shared"].as_string(), Some("second"));
    }

    #[test]
    fn test_subgraph() {
        let mut g: Graph<i32> = Graph::new();
        g.add_edges_from(vec![(1, 2), (2, 3), (3, 4)]).unwrap();

        let s = g.subgraph(&[2, 3, 9]);
        assert_eq!(s.nodes().copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(s.edges(), vec![(&2, &3)]);
    }

    #[test]
    fn test_multigraph_to_directed_keeps_keys() {
        let mut m = MultiGraph::new();
        m.add_edge(1, 2, Some(EdgeKey::new(3)), props! {}).unwrap();
        m.add_edge(1, 2, None, props! {}).unwrap();

        let d = m.to_directed();
        assert_eq!(d.number_of_edges(), 4);
        assert!(d.has_edge(&2, &1, Some(EdgeKey::new(3))));
        assert!(d.has_edge(&1, &2, Some(EdgeKey::new(1))));

        let back = d.to_undirected();
        assert_eq!(back.number_of_edges(), 2);
    }

    #[test]
    fn test_multigraph_to_undirected_merges_shared_keys() {
        let mut d = MultiGraph::new_directed();
        d.add_edge(1, 2, Some(EdgeKey::new(0)), props! { "a" => 1i64 }).unwrap();
        d.add_edge(2, 1, Some(EdgeKey::new(0)), props! { "b" => 2i64 }).unwrap();
        d.add_edge(2, 1, Some(EdgeKey::new(5)), props! {}).unwrap();

        let mut u = d.to_undirected();
        assert!(!u.is_directed());
        assert_eq!(u.number_of_edges(), 2);
        let merged = u.get_edge_data(&2, &1, EdgeKey::new(0)).unwrap();
        assert_eq!(merged["a"].as_integer(), Some(1));
        assert_eq!(merged["b"].as_integer(), Some(2));
        assert!(u.has_edge(&1, &2, Some(EdgeKey::new(5))));

        u.get_edge_data_mut(&1, &2, EdgeKey::new(5))
            .unwrap()
            .insert("w".into(), 3i64.into());
        assert_eq!(
            u.get_edge_data(&2, &1, EdgeKey::new(5)).unwrap()["w"].as_integer(),
            Some(3)
        );
        assert!(d.get_edge_data(&2, &1, EdgeKey::new(5)).unwrap().is_empty());
    }

    #[test]
    fn test_simple_multi_round_trip() {
        let mut m = MultiGraph::new();
        m.add_edge(1, 2, None, props! { "a" => 1i64 }).unwrap();
        m.add_edge(1, 2, None, props! { "a" => 2i64, "b" => 3i64 }).unwrap();

        let g = Graph::from_multigraph(&m);
        let data = g.get_edge_data(&1, &2).unwrap();
        assert_eq!(data["a"].as_integer(), Some(2));
        assert_eq!(data["b"].as_integer(), Some(3));

        let back = MultiGraph::from_graph(&g);
        assert_eq!(back.edges(), vec![(&1, &2, EdgeKey::new(0))]);
    }

    #[test]
    fn test_graph_from_dict_of_dicts() {
        let data = dod(vec![
            ("a", vec![("b", props! { "w" => 1i64 })]),
            ("b", vec![("a", props! { "w" => 1i64 })]),
            ("lonely", vec![]),
        ]);
        let g = Graph::from_dict_of_dicts(data, GraphConfig::default()).unwrap();
        assert_eq!(g.number_of_nodes(), 3);
        assert_eq!(g.number_of_edges(), 1);

        let back = g.to_dict_of_dicts();
        assert_eq!(back[&"b"][&"a"]["w"].as_integer(), Some(1));
        assert!(back[&"lonely"].is_empty());
    }

    #[test]
    fn test_multigraph_from_keyed_data() {
        let data = dod(vec![(
            "a",
            vec![(
                "b",
                props! {
                    "0" => PropertyValue::Map(props! { "w" => 1i64 }),
                    "4" => PropertyValue::Map(props! {}),
                },
            )],
        )]);
        let m = MultiGraph::from_dict_of_dicts(data, None, GraphConfig::default()).unwrap();
        assert_eq!(m.number_of_edges(), 2);
        assert!(m.has_edge(&"b", &"a", Some(EdgeKey::new(4))));
    }

    #[test]
    fn test_multigraph_from_plain_data_falls_back() {
        let data = dod(vec![("a", vec![("b", props! { "color" => "red" })])]);

        let m = MultiGraph::from_dict_of_dicts(data.clone(), None, GraphConfig::default()).unwrap();
        assert_eq!(m.number_of_edges(), 1);
        assert_eq!(
            m.get_edge_data(&"a", &"b", EdgeKey::new(0)).unwrap()["color"].as_string(),
            Some("red")
        );

        let strict =
            MultiGraph::from_dict_of_dicts(data.clone(), Some(true), GraphConfig::default());
        assert!(matches!(strict, Err(GraphError::UnsupportedConversion(_))));

        let plain =
            MultiGraph::from_dict_of_dicts(data, Some(false), GraphConfig::default()).unwrap();
        assert_eq!(plain.number_of_edges(), 1);
    }

    #[test]
    fn test_multigraph_to_dict_of_dicts() {
        let mut m = MultiGraph::new();
        m.add_edge("x", "y", None, props! { "w" => 1i64 }).unwrap();
        m.add_edge("x", "y", None, props! {}).unwrap();

        let out = m.to_dict_of_dicts();
        assert_eq!(out[&"y"][&"x"].len(), 2);
        assert_eq!(out[&"x"][&"y"][&EdgeKey::new(0)]["w"].as_integer(), Some(1));
    }
}
