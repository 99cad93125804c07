//! Classic graph generators

use super::error::AlgoResult;
use graphkit::{Graph, GraphConfig, NodeKey, PropertyMap};

/// Graph with the given nodes and no edges
pub fn empty_graph<N, I>(nodes: I, config: GraphConfig) -> AlgoResult<Graph<N>>
where
    N: NodeKey,
    I: IntoIterator<Item = N>,
{
    let mut g = Graph::with_config(config);
    g.add_nodes_from(nodes.into_iter().map(|n| (n, PropertyMap::new())))?;
    Ok(g)
}

/// Nodes joined in sequence: `n0 - n1 - ... - nk`
pub fn path_graph<N, I>(nodes: I, config: GraphConfig) -> AlgoResult<Graph<N>>
where
    N: NodeKey,
    I: IntoIterator<Item = N>,
{
    let nodes: Vec<N> = nodes.into_iter().collect();
    let mut g = empty_graph(nodes.iter().cloned(), config)?;
    for pair in nodes.windows(2) {
        g.add_edge(pair[0].clone(), pair[1].clone(), PropertyMap::new())?;
    }
    Ok(g)
}

/// Every pair of distinct nodes joined; both directions when directed
pub fn complete_graph<N, I>(nodes: I, config: GraphConfig) -> AlgoResult<Graph<N>>
where
    N: NodeKey,
    I: IntoIterator<Item = N>,
{
    let nodes: Vec<N> = nodes.into_iter().collect();
    let mut g = empty_graph(nodes.iter().cloned(), config)?;
    let directed = g.is_directed();
    for (i, u) in nodes.iter().enumerate() {
        for (j, v) in nodes.iter().enumerate() {
            if i == j || u == v || (!directed && j < i) {
                continue;
            }
            g.add_edge(u.clone(), v.clone(), PropertyMap::new())?;
        }
    }
    Ok(g)
}
