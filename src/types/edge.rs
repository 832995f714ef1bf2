//! Directed edge keys used by the betweenness score table.

use serde::Serialize;

use super::NodeId;

/// One direction of an undirected edge.
///
/// Every undirected edge `{a, b}` is scored as two directed halves, `a -> b`
/// and `b -> a`, so that back-propagated dependency can be attributed to the
/// direction it flowed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DirectedEdge {
    /// Node the shortest path arrives from.
    pub source: NodeId,
    /// Node the shortest path continues to.
    pub target: NodeId,
}

impl DirectedEdge {
    /// Create a new directed edge.
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    /// The same edge traversed the other way.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }

    /// The undirected edge this half belongs to, as `(min, max)`.
    pub fn undirected(&self) -> (NodeId, NodeId) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

impl std::fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}
