//! Single-source shortest paths by BFS.

use std::collections::{HashMap, VecDeque};

use crate::types::{GnError, GnResult, NodeId};

use super::UndirectedGraph;

/// Shortest-path structure rooted at one source node.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    /// The BFS root.
    pub source: NodeId,
    /// Reachable nodes in dequeue order (non-decreasing distance).
    pub order: Vec<NodeId>,
    /// Hop distance from the source. Unreachable nodes are absent.
    pub dist: HashMap<NodeId, u32>,
    /// Number of distinct shortest paths from the source.
    pub sigma: HashMap<NodeId, u64>,
    /// Immediate predecessors on some shortest path from the source.
    pub pred: HashMap<NodeId, Vec<NodeId>>,
}

impl ShortestPaths {
    /// Distance to `node`, or `None` if it is unreachable.
    pub fn distance(&self, node: NodeId) -> Option<u32> {
        self.dist.get(&node).copied()
    }

    /// Number of shortest paths to `node`; 0 if unreachable.
    pub fn path_count(&self, node: NodeId) -> u64 {
        self.sigma.get(&node).copied().unwrap_or(0)
    }

    /// Shortest-path predecessors of `node`.
    pub fn predecessors(&self, node: NodeId) -> &[NodeId] {
        self.pred.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// BFS from `source`, recording distances, path counts and predecessors.
///
/// Path counts saturate at `u64::MAX` rather than wrap.
pub fn shortest_paths(graph: &UndirectedGraph, source: NodeId) -> GnResult<ShortestPaths> {
    if !graph.contains(source) {
        return Err(GnError::UnknownNode(source));
    }

    let mut order: Vec<NodeId> = Vec::new();
    let mut dist: HashMap<NodeId, u32> = HashMap::new();
    let mut sigma: HashMap<NodeId, u64> = HashMap::new();
    let mut pred: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    dist.insert(source, 0);
    sigma.insert(source, 1);
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        let dist_v = dist[&v];
        let sigma_v = sigma[&v];

        for &w in graph.neighbors(v)? {
            let dist_w = *dist.entry(w).or_insert_with(|| {
                queue.push_back(w);
                dist_v + 1
            });
            if dist_w == dist_v + 1 {
                let count = sigma.entry(w).or_insert(0);
                *count = count.saturating_add(sigma_v);
                pred.entry(w).or_default().push(v);
            }
        }
    }

    Ok(ShortestPaths {
        source,
        order,
        dist,
        sigma,
        pred,
    })
}
