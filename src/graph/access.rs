//! Read-only view over both graph types, and the shared-ownership wrapper
//!
//! Algorithms are written against [`GraphAccess`] so one implementation
//! serves simple graphs and multigraphs alike.

use super::multi::MultiGraph;
use super::simple::Graph;
use super::types::NodeKey;
use parking_lot::RwLock;
use std::sync::Arc;

/// Structural queries shared by [`Graph`] and [`MultiGraph`]
pub trait GraphAccess {
    type Node: NodeKey;

    fn is_directed(&self) -> bool;

    fn is_multigraph(&self) -> bool;

    /// Structural revision; moves whenever a node or edge is added or removed
    fn revision(&self) -> u64;

    fn has_node(&self, id: &Self::Node) -> bool;

    fn number_of_nodes(&self) -> usize;

    /// Nodes in insertion order
    fn node_ids(&self) -> Vec<&Self::Node>;

    /// Outgoing neighbors; empty for unknown nodes
    fn successor_ids(&self, id: &Self::Node) -> Vec<&Self::Node>;

    /// Incoming neighbors; the same as successors for undirected graphs
    fn predecessor_ids(&self, id: &Self::Node) -> Vec<&Self::Node>;

    /// Number of edges from `u` to `v` (0 or 1 for simple graphs)
    fn multiplicity(&self, u: &Self::Node, v: &Self::Node) -> usize;

    fn has_edge_between(&self, u: &Self::Node, v: &Self::Node) -> bool {
        self.multiplicity(u, v) > 0
    }
}

impl<N: NodeKey> GraphAccess for Graph<N> {
    type Node = N;

    fn is_directed(&self) -> bool {
        Graph::is_directed(self)
    }

    fn is_multigraph(&self) -> bool {
        false
    }

    fn revision(&self) -> u64 {
        Graph::revision(self)
    }

    fn has_node(&self, id: &N) -> bool {
        Graph::has_node(self, id)
    }

    fn number_of_nodes(&self) -> usize {
        Graph::number_of_nodes(self)
    }

    fn node_ids(&self) -> Vec<&N> {
        self.nodes().collect()
    }

    fn successor_ids(&self, id: &N) -> Vec<&N> {
        self.core.adj.successors(id).map_or_else(Vec::new, |nbrs| nbrs.keys().collect())
    }

    fn predecessor_ids(&self, id: &N) -> Vec<&N> {
        self.core.adj.predecessors(id).map_or_else(Vec::new, |nbrs| nbrs.keys().collect())
    }

    fn multiplicity(&self, u: &N, v: &N) -> usize {
        usize::from(self.has_edge(u, v))
    }
}

impl<N: NodeKey> GraphAccess for MultiGraph<N> {
    type Node = N;

    fn is_directed(&self) -> bool {
        MultiGraph::is_directed(self)
    }

    fn is_multigraph(&self) -> bool {
        true
    }

    fn revision(&self) -> u64 {
        MultiGraph::revision(self)
    }

    fn has_node(&self, id: &N) -> bool {
        MultiGraph::has_node(self, id)
    }

    fn number_of_nodes(&self) -> usize {
        MultiGraph::number_of_nodes(self)
    }

    fn node_ids(&self) -> Vec<&N> {
        self.nodes().collect()
    }

    fn successor_ids(&self, id: &N) -> Vec<&N> {
        self.core.adj.successors(id).map_or_else(Vec::new, |nbrs| nbrs.keys().collect())
    }

    fn predecessor_ids(&self, id: &N) -> Vec<&N> {
        self.core.adj.predecessors(id).map_or_else(Vec::new, |nbrs| nbrs.keys().collect())
    }

    fn multiplicity(&self, u: &N, v: &N) -> usize {
        self.number_of_edges_between(u, v)
    }
}

/// A graph behind a read-write lock, for callers that share one graph
/// between threads
pub type SharedGraph<G> = Arc<RwLock<G>>;

pub fn shared<G>(graph: G) -> SharedGraph<G> {
    Arc::new(RwLock::new(graph))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props;
    use std::thread;

    fn count_loops<G: GraphAccess>(g: &G) -> usize {
        g.node_ids().into_iter().map(|n| g.multiplicity(n, n)).sum()
    }

    #[test]
    fn test_generic_access() {
        let mut g = Graph::new_directed();
        g.add_edge(1, 2, props! {}).unwrap();
        g.add_edge(2, 2, props! {}).unwrap();

        assert_eq!(g.successor_ids(&1), vec![&2]);
        assert_eq!(g.predecessor_ids(&2), vec![&1, &2]);
        assert!(g.successor_ids(&7).is_empty());
        assert!(g.has_edge_between(&1, &2));
        assert!(!g.has_edge_between(&2, &1));
        assert_eq!(count_loops(&g), 1);

        let mut m = MultiGraph::new();
        m.add_edge(1, 1, None, props! {}).unwrap();
        m.add_edge(1, 1, None, props! {}).unwrap();
        assert_eq!(count_loops(&m), 2);
        assert!(GraphAccess::is_multigraph(&m));
    }

    #[test]
    fn test_shared_graph_across_threads() {
        let g = shared(Graph::<u32>::new());

        let handles: Vec<_> = (0..4u32)
            .map(|i| {
                let g = Arc::clone(&g);
                thread::spawn(move || {
                    g.write().add_edge(i, i + 100, props! {}).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let graph = g.read();
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.number_of_nodes(), 8);
    }
}
