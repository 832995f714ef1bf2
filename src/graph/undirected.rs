//! Core graph structure: an undirected adjacency map of integer nodes.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

use crate::types::{GnError, GnResult, NodeId};

/// An undirected, unweighted graph without self-loops or parallel edges.
///
/// The node set is exactly the key set of the adjacency map. Adjacency is
/// kept symmetric: `b` is a neighbor of `a` iff `a` is a neighbor of `b`.
/// Ordered maps make every iteration ascending by node id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndirectedGraph {
    /// Node -> set of neighbor nodes.
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    /// Number of undirected edges.
    edge_count: usize,
}

impl UndirectedGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from (source, target) pairs.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// True if `u` is a node of the graph.
    pub fn contains(&self, u: NodeId) -> bool {
        self.adjacency.contains_key(&u)
    }

    /// True if the undirected edge `{u, v}` is present.
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.adjacency
            .get(&u)
            .map(|ns| ns.contains(&v))
            .unwrap_or(false)
    }

    /// Insert an isolated node. Idempotent.
    pub fn add_node(&mut self, u: NodeId) {
        self.adjacency.entry(u).or_default();
    }

    /// Insert the undirected edge `{u, v}`, creating either node if absent.
    ///
    /// Idempotent. Self-loops are not representable and are dropped, though
    /// the node itself is still created.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        if u == v {
            log::warn!("Skipping self-loop on node {}", u);
            self.add_node(u);
            return;
        }
        let inserted = self.adjacency.entry(u).or_default().insert(v);
        self.adjacency.entry(v).or_default().insert(u);
        if inserted {
            self.edge_count += 1;
        }
    }

    /// Delete the undirected edge `{u, v}`. No-op if absent.
    ///
    /// Nodes left without neighbors stay in the graph.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) {
        let removed = self
            .adjacency
            .get_mut(&u)
            .map(|ns| ns.remove(&v))
            .unwrap_or(false);
        if let Some(ns) = self.adjacency.get_mut(&v) {
            ns.remove(&u);
        }
        if removed {
            self.edge_count -= 1;
        }
    }

    /// Delete node `u` and every edge incident to it.
    pub fn remove_node(&mut self, u: NodeId) -> GnResult<()> {
        let neighbors = self.adjacency.remove(&u).ok_or(GnError::UnknownNode(u))?;
        for v in &neighbors {
            if let Some(ns) = self.adjacency.get_mut(v) {
                ns.remove(&u);
            }
        }
        self.edge_count -= neighbors.len();
        Ok(())
    }

    /// Keep only the nodes in `keep`, dropping all others with their edges.
    pub fn retain_nodes(&mut self, keep: &BTreeSet<NodeId>) {
        self.adjacency.retain(|u, _| keep.contains(u));
        let mut edge_count = 0;
        for ns in self.adjacency.values_mut() {
            ns.retain(|v| keep.contains(v));
            edge_count += ns.len();
        }
        self.edge_count = edge_count / 2;
    }

    /// The current neighbor set of `u`.
    pub fn neighbors(&self, u: NodeId) -> GnResult<&BTreeSet<NodeId>> {
        self.adjacency.get(&u).ok_or(GnError::UnknownNode(u))
    }

    /// Number of neighbors of `u`.
    pub fn degree(&self, u: NodeId) -> GnResult<usize> {
        self.neighbors(u).map(BTreeSet::len)
    }

    /// All nodes, ascending.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Every undirected edge once, as `(min, max)`, ascending.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency.iter().flat_map(|(&u, ns)| {
            ns.range((Bound::Excluded(u), Bound::Unbounded))
                .map(move |&v| (u, v))
        })
    }
}
