//! Core type definitions for the graph containers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Caller-supplied node identifier
///
/// Any value usable as a map key can identify a node. The only value that is
/// rejected is the null sentinel: `is_null` returns `true` for it and every
/// mutation entrypoint fails with `GraphError::InvalidIdentifier` before
/// touching the graph.
pub trait NodeKey: Clone + Eq + Hash + fmt::Debug {
    /// Whether this value is the null sentinel
    fn is_null(&self) -> bool {
        false
    }
}

macro_rules! impl_node_key {
    ($($t:ty),* $(,)?) => {
        $(impl NodeKey for $t {})*
    };
}

impl_node_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, String);

impl NodeKey for &str {}

impl<T: NodeKey> NodeKey for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<A: NodeKey, B: NodeKey> NodeKey for (A, B) {}

/// Handle of one attribute record in a graph's edge arena
///
/// Both adjacency entries of an undirected edge hold the same `EdgeId`,
/// which is how attribute storage is shared between the two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        EdgeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        EdgeId(id)
    }
}

/// Key distinguishing parallel edges between the same pair of nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeKey(pub u64);

impl EdgeKey {
    pub fn new(key: u64) -> Self {
        EdgeKey(key)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        EdgeKey(self.0 + 1)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EdgeKey {
    fn from(key: u64) -> Self {
        EdgeKey(key)
    }
}

impl std::str::FromStr for EdgeKey {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(EdgeKey)
    }
}
