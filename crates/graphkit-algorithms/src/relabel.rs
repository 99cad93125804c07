//! Node relabelling
//!
//! Produces a new graph; ids missing from the mapping keep their label.
//! When several ids map to the same label their attributes and edges merge.

use super::error::AlgoResult;
use graphkit::{Graph, MultiGraph, NodeKey};
use std::collections::HashMap;

/// Graphs that can be rebuilt under new node ids
pub trait Relabel: Sized {
    type Node: NodeKey;

    fn relabel(&self, mapping: &HashMap<Self::Node, Self::Node>) -> AlgoResult<Self>;
}

fn map_id<N: NodeKey>(mapping: &HashMap<N, N>, id: &N) -> N {
    mapping.get(id).unwrap_or(id).clone()
}

impl<N: NodeKey> Relabel for Graph<N> {
    type Node = N;

    fn relabel(&self, mapping: &HashMap<N, N>) -> AlgoResult<Self> {
        let mut out = Graph::with_config(self.config().clone());
        *out.graph_attrs_mut() = self.graph_attrs().clone();
        for (id, attrs) in self.nodes_with_data() {
            out.add_node(map_id(mapping, id), attrs.clone())?;
        }
        for (u, v, attrs) in self.edges_with_data() {
            out.add_edge(map_id(mapping, u), map_id(mapping, v), attrs.clone())?;
        }
        Ok(out)
    }
}

impl<N: NodeKey> Relabel for MultiGraph<N> {
    type Node = N;

    /// Edge keys are preserved
    fn relabel(&self, mapping: &HashMap<N, N>) -> AlgoResult<Self> {
        let mut out = MultiGraph::with_config(self.config().clone());
        *out.graph_attrs_mut() = self.graph_attrs().clone();
        for (id, attrs) in self.nodes_with_data() {
            out.add_node(map_id(mapping, id), attrs.clone())?;
        }
        for (u, v, key, attrs) in self.edges_with_data() {
            out.add_edge(map_id(mapping, u), map_id(mapping, v), Some(key), attrs.clone())?;
        }
        Ok(out)
    }
}

pub fn relabel_nodes<G: Relabel>(graph: &G, mapping: &HashMap<G::Node, G::Node>) -> AlgoResult<G> {
    graph.relabel(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlgorithmError;
    use graphkit::{props, EdgeKey, GraphError};

    #[test]
    fn test_relabel_simple() {
        let mut g = Graph::new();
        g.add_node(1, props! { "name" => "one" }).unwrap();
        g.add_edge(1, 2, props! { "w" => 3i64 }).unwrap();
        g.add_edge(2, 3, props! {}).unwrap();

        let mapping = HashMap::from([(1, 10), (2, 20)]);
        let r = relabel_nodes(&g, &mapping).unwrap();

        assert_eq!(r.nodes().copied().collect::<Vec<_>>(), vec![10, 20, 3]);
        assert_eq!(r.node_attrs(&10).unwrap()["name"].as_string(), Some("one"));
        assert_eq!(r.get_edge_data(&20, &10).unwrap()["w"].as_integer(), Some(3));
        assert!(r.has_edge(&3, &20));
        // source untouched
        assert!(g.has_edge(&1, &2));
    }

    #[test]
    fn test_relabel_multigraph_keeps_keys() {
        let mut m = MultiGraph::new_directed();
        m.add_edge("a", "b", Some(EdgeKey::new(7)), props! { "w" => 1i64 }).unwrap();
        m.add_edge("a", "b", None, props! {}).unwrap();

        let r = relabel_nodes(&m, &HashMap::from([("a", "x")])).unwrap();
        assert!(r.has_edge(&"x", &"b", Some(EdgeKey::new(7))));
        assert!(r.has_edge(&"x", &"b", Some(EdgeKey::new(1))));
        assert!(!r.has_node(&"a"));
    }

    #[test]
    fn test_relabel_to_null_rejected() {
        let mut g: Graph<Option<u8>> = Graph::new();
        g.add_node(Some(1), props! {}).unwrap();

        let err = relabel_nodes(&g, &HashMap::from([(Some(1), None)])).unwrap_err();
        assert!(matches!(
            err,
            AlgorithmError::Graph(GraphError::InvalidIdentifier(_))
        ));
    }
}
