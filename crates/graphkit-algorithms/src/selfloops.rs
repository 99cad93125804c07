//! Self-loop queries

use graphkit::GraphAccess;

/// One `(n, n)` entry per self-loop edge, parallel loops repeated
pub fn selfloop_edges<G: GraphAccess>(graph: &G) -> Vec<(&G::Node, &G::Node)> {
    graph
        .node_ids()
        .into_iter()
        .flat_map(|n| std::iter::repeat((n, n)).take(graph.multiplicity(n, n)))
        .collect()
}

/// Nodes carrying at least one self-loop, in node order
pub fn nodes_with_selfloops<G: GraphAccess>(graph: &G) -> Vec<&G::Node> {
    graph
        .node_ids()
        .into_iter()
        .filter(|n| graph.has_edge_between(n, n))
        .collect()
}

pub fn number_of_selfloops<G: GraphAccess>(graph: &G) -> usize {
    graph
        .node_ids()
        .into_iter()
        .map(|n| graph.multiplicity(n, n))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphkit::{props, Graph, MultiGraph};

    #[test]
    fn test_simple_graph_loops() {
        let mut g = Graph::new();
        g.add_edges_from(vec![(1, 1), (1, 2), (3, 3)]).unwrap();

        assert_eq!(selfloop_edges(&g), vec![(&1, &1), (&3, &3)]);
        assert_eq!(nodes_with_selfloops(&g), vec![&1, &3]);
        assert_eq!(number_of_selfloops(&g), 2);
    }

    #[test]
    fn test_parallel_loops() {
        let mut m = MultiGraph::new_directed();
        m.add_edge("a", "a", None, props! {}).unwrap();
        m.add_edge("a", "a", None, props! {}).unwrap();
        m.add_edge("a", "b", None, props! {}).unwrap();

        assert_eq!(selfloop_edges(&m).len(), 2);
        assert_eq!(nodes_with_selfloops(&m), vec![&"a"]);
        assert_eq!(number_of_selfloops(&m), 2);
    }
}
