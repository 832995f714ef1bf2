//! Edge betweenness centrality via Brandes' accumulation.
//!
//! For each source node a BFS yields shortest-path counts and predecessor
//! lists; walking the BFS order backwards then pushes each node's dependency
//! onto the directed edges that lead to it:
//!
//! ```text
//! c(v, w)  = sigma[v] / sigma[w] * (1 + delta[w])
//! delta[v] += c(v, w)
//! ```
//!
//! Summed over every source, each directed half of an undirected edge ends up
//! holding that edge's betweenness (the number of node pairs whose shortest
//! paths cross it, split fractionally across ties). No halving is applied.

use std::collections::{BTreeMap, HashMap};

use crate::graph::{shortest_paths, UndirectedGraph};
use crate::types::{DirectedEdge, GnResult, NodeId};

/// Accumulated betweenness for every directed half of every edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeScores {
    scores: BTreeMap<DirectedEdge, f64>,
}

impl EdgeScores {
    /// An empty score table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table with both halves of every edge of `graph` set to zero.
    pub fn zeroed(graph: &UndirectedGraph) -> Self {
        let mut scores = BTreeMap::new();
        for (u, v) in graph.edges() {
            let forward = DirectedEdge::new(u, v);
            scores.insert(forward, 0.0);
            scores.insert(forward.reversed(), 0.0);
        }
        Self { scores }
    }

    /// Score of the directed edge `source -> target`, if tracked.
    pub fn get(&self, source: NodeId, target: NodeId) -> Option<f64> {
        self.scores.get(&DirectedEdge::new(source, target)).copied()
    }

    /// Add `amount` to the directed edge's score.
    pub fn add(&mut self, edge: DirectedEdge, amount: f64) {
        *self.scores.entry(edge).or_insert(0.0) += amount;
    }

    /// Number of directed edges tracked.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True if no edges are tracked.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Highest score in the table.
    pub fn max(&self) -> Option<f64> {
        self.scores.values().copied().reduce(f64::max)
    }

    /// All directed edges with their scores, ascending by edge.
    pub fn iter(&self) -> impl Iterator<Item = (DirectedEdge, f64)> + '_ {
        self.scores.iter().map(|(e, s)| (*e, *s))
    }

    /// Per undirected edge `(min, max)`, the larger of its two halves.
    ///
    /// After a full run both halves are equal up to rounding, so this is the
    /// edge's betweenness.
    pub fn undirected(&self) -> BTreeMap<(NodeId, NodeId), f64> {
        let mut out: BTreeMap<(NodeId, NodeId), f64> = BTreeMap::new();
        for (edge, score) in self.iter() {
            let entry = out.entry(edge.undirected()).or_insert(score);
            *entry = entry.max(score);
        }
        out
    }

    /// The `k` highest-scoring undirected edges, ties broken by edge.
    pub fn top(&self, k: usize) -> Vec<((NodeId, NodeId), f64)> {
        let mut ranked: Vec<((NodeId, NodeId), f64)> = self.undirected().into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(k);
        ranked
    }
}

/// Add the dependency contributions of paths rooted at `source` to `scores`.
///
/// Edges not reachable from `source` receive nothing.
pub fn accumulate_from(
    graph: &UndirectedGraph,
    source: NodeId,
    scores: &mut EdgeScores,
) -> GnResult<()> {
    let paths = shortest_paths(graph, source)?;
    let mut delta: HashMap<NodeId, f64> = HashMap::with_capacity(paths.order.len());

    for &w in paths.order.iter().rev() {
        let sigma_w = paths.path_count(w) as f64;
        let delta_w = delta.get(&w).copied().unwrap_or(0.0);
        for &v in paths.predecessors(w) {
            let sigma_v = paths.path_count(v) as f64;
            let contribution = (sigma_v / sigma_w) * (1.0 + delta_w);
            scores.add(DirectedEdge::new(v, w), contribution);
            *delta.entry(v).or_insert(0.0) += contribution;
        }
    }

    Ok(())
}

/// Edge betweenness of the whole graph, computed into a fresh table.
///
/// Empty for a graph without edges.
pub fn edge_betweenness(graph: &UndirectedGraph) -> GnResult<EdgeScores> {
    let mut scores = EdgeScores::zeroed(graph);
    if scores.is_empty() {
        return Ok(scores);
    }
    for source in graph.nodes() {
        accumulate_from(graph, source, &mut scores)?;
    }
    Ok(scores)
}
