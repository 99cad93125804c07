//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of the graph topology for algorithm execution.

use graphkit::GraphAccess;
use rustc_hash::FxHashMap;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Node indices follow the graph's node insertion order. Parallel edges
/// collapse to one entry; self-loops appear in both directions of their node.
pub struct GraphView<'g, N> {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to the node id
    pub index_to_node: Vec<&'g N>,
    /// Mapping from node id to dense index
    pub node_to_index: FxHashMap<&'g N, usize>,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,

    /// Incoming edges CSR structure (Compressed Sparse Column effectively)
    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<usize>,

    /// Revision of the graph the view was taken from
    pub revision: u64,
}

impl<'g, N: graphkit::NodeKey> GraphView<'g, N> {
    /// Snapshot the topology of `graph`
    pub fn from_graph<G>(graph: &'g G) -> Self
    where
        G: GraphAccess<Node = N>,
    {
        let index_to_node = graph.node_ids();
        let node_count = index_to_node.len();
        let node_to_index: FxHashMap<&N, usize> = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &node)| (node, idx))
            .collect();

        let csr = |neighbors: &dyn Fn(&'g N) -> Vec<&'g N>| {
            let mut offsets = Vec::with_capacity(node_count + 1);
            let mut targets = Vec::new();
            offsets.push(0);
            for &node in &index_to_node {
                targets.extend(
                    neighbors(node)
                        .into_iter()
                        .filter_map(|n| node_to_index.get(n).copied()),
                );
                offsets.push(targets.len());
            }
            (offsets, targets)
        };
        let (out_offsets, out_targets) = csr(&|node| graph.successor_ids(node));
        let (in_offsets, in_sources) = csr(&|node| graph.predecessor_ids(node));

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
            revision: graph.revision(),
        }
    }

    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.node_to_index.get(node).copied()
    }

    pub fn node(&self, idx: usize) -> &'g N {
        self.index_to_node[idx]
    }
}
