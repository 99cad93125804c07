//! Adjacency index shared by the simple and multi-edge containers
//!
//! For each node the index maps every neighbor to the [`EdgeId`] of the
//! record describing the connection. The record is an attribute map for
//! simple graphs and a key map for multigraphs; the index does not care.
//!
//! Undirected graphs keep one map and store the same handle under `u -> v`
//! and `v -> u`. A self-loop is a single `u -> u` entry. Directed graphs keep
//! a successor map and a predecessor map holding the same handle.

use super::types::{EdgeId, NodeKey};
use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashSet};

/// Insertion-ordered map using the Fx hasher
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Neighbor -> record handle, in insertion order
pub type Neighbors<N> = FxIndexMap<N, EdgeId>;

#[derive(Debug, Clone)]
pub struct AdjacencyIndex<N: NodeKey> {
    /// Outgoing entries (all entries for undirected graphs)
    succ: FxIndexMap<N, Neighbors<N>>,

    /// Incoming entries, directed graphs only
    pred: Option<FxIndexMap<N, Neighbors<N>>>,
}

impl<N: NodeKey> AdjacencyIndex<N> {
    pub fn new(directed: bool) -> Self {
        AdjacencyIndex {
            succ: FxIndexMap::default(),
            pred: directed.then(FxIndexMap::default),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.pred.is_some()
    }

    /// Allocate an empty entry; returns `false` if the node already had one
    pub fn insert_node(&mut self, node: N) -> bool {
        if self.succ.contains_key(&node) {
            return false;
        }
        if let Some(pred) = self.pred.as_mut() {
            pred.insert(node.clone(), Neighbors::default());
        }
        self.succ.insert(node, Neighbors::default());
        true
    }

    pub fn contains(&self, node: &N) -> bool {
        self.succ.contains_key(node)
    }

    /// Record handle for the `u -> v` connection
    pub fn get(&self, u: &N, v: &N) -> Option<EdgeId> {
        self.succ.get(u)?.get(v).copied()
    }

    /// Store `id` for the connection and its mirror
    ///
    /// Both endpoints must already have entries.
    pub fn link(&mut self, u: &N, v: &N, id: EdgeId) {
        if let Some(nbrs) = self.succ.get_mut(u) {
            nbrs.insert(v.clone(), id);
        }
        match self.pred.as_mut() {
            Some(pred) => {
                if let Some(nbrs) = pred.get_mut(v) {
                    nbrs.insert(u.clone(), id);
                }
            }
            None => {
                if u != v {
                    if let Some(nbrs) = self.succ.get_mut(v) {
                        nbrs.insert(u.clone(), id);
                    }
                }
            }
        }
    }

    /// Drop the connection and its mirror, returning the handle it held
    pub fn unlink(&mut self, u: &N, v: &N) -> Option<EdgeId> {
        let id = self.succ.get_mut(u)?.shift_remove(v)?;
        match self.pred.as_mut() {
            Some(pred) => {
                if let Some(nbrs) = pred.get_mut(v) {
                    nbrs.shift_remove(u);
                }
            }
            None => {
                if u != v {
                    if let Some(nbrs) = self.succ.get_mut(v) {
                        nbrs.shift_remove(u);
                    }
                }
            }
        }
        Some(id)
    }

    /// Remove a node and every connection touching it
    ///
    /// Returns the distinct handles that were referenced by the removed
    /// connections so the caller can release their records, or `None` if
    /// the node had no entry.
    pub fn remove_node(&mut self, node: &N) -> Option<Vec<EdgeId>> {
        let out = self.succ.shift_remove(node)?;
        let mut released: Vec<EdgeId> = Vec::with_capacity(out.len());

        match self.pred.as_mut() {
            Some(pred) => {
                let incoming = pred.shift_remove(node).unwrap_or_default();
                for (v, id) in &out {
                    if v != node {
                        if let Some(nbrs) = pred.get_mut(v) {
                            nbrs.shift_remove(node);
                        }
                    }
                    released.push(*id);
                }
                for (u, id) in &incoming {
                    // the self-loop was already collected from `out`
                    if u == node {
                        continue;
                    }
                    if let Some(nbrs) = self.succ.get_mut(u) {
                        nbrs.shift_remove(node);
                    }
                    released.push(*id);
                }
            }
            None => {
                for (v, id) in &out {
                    if v != node {
                        if let Some(nbrs) = self.succ.get_mut(v) {
                            nbrs.shift_remove(node);
                        }
                    }
                    released.push(*id);
                }
            }
        }

        Some(released)
    }

    /// Outgoing neighbors (all neighbors for undirected graphs)
    pub fn successors(&self, node: &N) -> Option<&Neighbors<N>> {
        self.succ.get(node)
    }

    /// Incoming neighbors (all neighbors for undirected graphs)
    pub fn predecessors(&self, node: &N) -> Option<&Neighbors<N>> {
        match &self.pred {
            Some(pred) => pred.get(node),
            None => self.succ.get(node),
        }
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.succ.keys()
    }

    /// `(node, outgoing neighbors)` in node insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&N, &Neighbors<N>)> + '_ {
        self.succ.iter()
    }

    /// Every connection exactly once
    ///
    /// Undirected graphs skip the mirrored entry by remembering which source
    /// nodes have been fully visited.
    pub fn pairs(&self) -> Vec<(&N, &N, EdgeId)> {
        let mut pairs = Vec::new();
        if self.is_directed() {
            for (u, nbrs) in &self.succ {
                for (v, id) in nbrs {
                    pairs.push((u, v, *id));
                }
            }
            return pairs;
        }

        let mut seen: FxHashSet<&N> = FxHashSet::default();
        for (u, nbrs) in &self.succ {
            for (v, id) in nbrs {
                if !seen.contains(v) {
                    pairs.push((u, v, *id));
                }
            }
            seen.insert(u);
        }
        pairs
    }

    pub fn node_count(&self) -> usize {
        self.succ.len()
    }

    pub fn clear(&mut self) {
        self.succ.clear();
        if let Some(pred) = self.pred.as_mut() {
            pred.clear();
        }
    }
}
