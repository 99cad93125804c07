//! Connected induced subgraph enumeration (ESU)
//!
//! Each connected set of `k` nodes is reported exactly once. A set is grown
//! only from its smallest node, and candidates enter the extension set only
//! when they are exclusive neighbors of the node just added, which rules out
//! reaching the same set along two different paths.

use super::common::GraphView;
use super::error::{AlgoResult, AlgorithmError};
use graphkit::{Graph, NodeKey};
use rand::Rng;

/// All connected induced subgraphs with `k` nodes, each as a sorted node list
///
/// `rng` picks the order in which extension candidates are tried. The set of
/// subgraphs returned does not depend on it, only their order.
pub fn enumerate_subgraphs<N, R>(graph: &Graph<N>, k: usize, rng: &mut R) -> AlgoResult<Vec<Vec<N>>>
where
    N: NodeKey + Ord,
    R: Rng,
{
    if graph.is_directed() {
        return Err(AlgorithmError::NotUndirected("enumerate_subgraphs"));
    }
    let mut found = Vec::new();
    if k == 0 {
        return Ok(found);
    }

    let view = GraphView::from_graph(graph);
    for root in 0..view.node_count {
        let extension: Vec<usize> = view
            .successors(root)
            .iter()
            .copied()
            .filter(|&u| view.node(u) > view.node(root))
            .collect();
        let mut subgraph = vec![root];
        extend(&view, &mut subgraph, extension, root, k, rng, &mut found);
    }
    Ok(found)
}

fn extend<N, R>(
    view: &GraphView<'_, N>,
    subgraph: &mut Vec<usize>,
    mut extension: Vec<usize>,
    root: usize,
    k: usize,
    rng: &mut R,
    found: &mut Vec<Vec<N>>,
) where
    N: NodeKey + Ord,
    R: Rng,
{
    if subgraph.len() == k {
        let mut nodes: Vec<N> = subgraph.iter().map(|&idx| view.node(idx).clone()).collect();
        nodes.sort();
        found.push(nodes);
        return;
    }

    while !extension.is_empty() {
        let w = extension.swap_remove(rng.gen_range(0..extension.len()));

        let mut next = extension.clone();
        for &u in view.successors(w) {
            let exclusive = !subgraph.contains(&u)
                && !subgraph.iter().any(|&s| view.successors(s).contains(&u));
            if exclusive && view.node(u) > view.node(root) && !next.contains(&u) {
                next.push(u);
            }
        }

        subgraph.push(w);
        extend(view, subgraph, next, root, k, rng, found);
        subgraph.pop();
    }
}
