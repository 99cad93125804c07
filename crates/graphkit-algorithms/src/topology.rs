//! Topological ordering of directed graphs
//!
//! Kahn's algorithm, layered: each generation holds the nodes whose
//! predecessors all appeared in earlier generations.

use super::common::GraphView;
use super::error::{AlgoResult, AlgorithmError};
use graphkit::{GraphAccess, GraphError, NodeKey};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Detached, resumable topological traversal
///
/// The cursor does not borrow the graph between steps. It records the
/// graph's revision when created and every step checks it, so a node or
/// edge added or removed in between surfaces as
/// [`GraphError::GraphChanged`] instead of a silently wrong order.
#[derive(Debug, Clone)]
pub struct TopologicalCursor<N> {
    revision: u64,
    /// Unresolved in-degree of nodes not yet ready
    indegree: FxHashMap<N, usize>,
    ready: Vec<N>,
    remaining: usize,
}

impl<N: NodeKey> TopologicalCursor<N> {
    pub fn new<G>(graph: &G) -> AlgoResult<Self>
    where
        G: GraphAccess<Node = N>,
    {
        if !graph.is_directed() {
            return Err(AlgorithmError::NotDirected);
        }
        let view = GraphView::from_graph(graph);

        let mut indegree = FxHashMap::default();
        let mut ready = Vec::new();
        for idx in 0..view.node_count {
            match view.in_degree(idx) {
                0 => ready.push(view.node(idx).clone()),
                d => {
                    indegree.insert(view.node(idx).clone(), d);
                }
            }
        }

        Ok(TopologicalCursor {
            revision: view.revision,
            indegree,
            ready,
            remaining: view.node_count,
        })
    }

    /// Next generation, or `None` once every node has been emitted
    pub fn next_generation<G>(&mut self, graph: &G) -> AlgoResult<Option<Vec<N>>>
    where
        G: GraphAccess<Node = N>,
    {
        if graph.revision() != self.revision {
            return Err(GraphError::GraphChanged.into());
        }
        if self.ready.is_empty() {
            if self.remaining > 0 {
                return Err(AlgorithmError::CycleDetected {
                    remaining: self.remaining,
                });
            }
            return Ok(None);
        }

        let generation = std::mem::take(&mut self.ready);
        for node in &generation {
            for succ in graph.successor_ids(node) {
                if let Some(d) = self.indegree.get_mut(succ) {
                    *d -= 1;
                    if *d == 0 {
                        self.indegree.remove(succ);
                        self.ready.push(succ.clone());
                    }
                }
            }
        }
        self.remaining -= generation.len();
        debug!(
            "Topological generation of {} nodes, {} remaining",
            generation.len(),
            self.remaining
        );
        Ok(Some(generation))
    }

    /// Nodes not yet emitted
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

/// All generations of a directed acyclic graph
pub fn topological_generations<G>(graph: &G) -> AlgoResult<Vec<Vec<G::Node>>>
where
    G: GraphAccess,
{
    let mut cursor = TopologicalCursor::new(graph)?;
    let mut generations = Vec::new();
    while let Some(generation) = cursor.next_generation(graph)? {
        generations.push(generation);
    }
    Ok(generations)
}

/// Nodes in an order where every edge points forward
pub fn topological_sort<G>(graph: &G) -> AlgoResult<Vec<G::Node>>
where
    G: GraphAccess,
{
    Ok(topological_generations(graph)?.into_iter().flatten().collect())
}
