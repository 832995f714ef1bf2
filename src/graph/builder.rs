//! Fluent API for building UndirectedGraph instances.

use crate::types::NodeId;

use super::UndirectedGraph;

/// Fluent builder for constructing an UndirectedGraph.
///
/// Pairs are collected as given and inserted on `build`, so insertion order
/// and duplicates never affect the resulting graph.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<NodeId>,
    edges: Vec<(NodeId, NodeId)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an isolated node.
    pub fn node(&mut self, id: NodeId) -> &mut Self {
        self.nodes.push(id);
        self
    }

    /// Add an undirected edge.
    pub fn edge(&mut self, source: NodeId, target: NodeId) -> &mut Self {
        self.edges.push((source, target));
        self
    }

    /// Add a batch of undirected edges.
    pub fn edges<I>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        self.edges.extend(pairs);
        self
    }

    /// Add a simple path through `ids` in order.
    pub fn path(&mut self, ids: &[NodeId]) -> &mut Self {
        for pair in ids.windows(2) {
            self.edges.push((pair[0], pair[1]));
        }
        self
    }

    /// Add a clique over `ids`.
    pub fn clique(&mut self, ids: &[NodeId]) -> &mut Self {
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                self.edges.push((a, b));
            }
        }
        self
    }

    /// Build the final UndirectedGraph.
    pub fn build(&self) -> UndirectedGraph {
        let mut graph = UndirectedGraph::from_edges(self.edges.iter().copied());
        for &id in &self.nodes {
            graph.add_node(id);
        }
        graph
    }
}
