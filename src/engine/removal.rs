//! Removal of the highest-betweenness edges.

use std::collections::BTreeSet;

use crate::graph::UndirectedGraph;
use crate::types::{GnError, GnResult, NodeId};

use super::betweenness::EdgeScores;

/// What one removal step took out of the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovalResult {
    /// The maximum score found in the table.
    pub max_score: f64,
    /// Undirected edges removed, as `(min, max)`, ascending.
    pub removed: Vec<(NodeId, NodeId)>,
}

/// True if `score` ties `max` within a relative `tolerance`.
pub fn ties_max(score: f64, max: f64, tolerance: f64) -> bool {
    max - score <= tolerance * max.abs().max(1.0)
}

/// Remove every edge whose score ties the table's maximum.
///
/// Both directed halves of an edge map to the same undirected edge, which
/// is removed once. Fails with `EmptyGraph` when the table is empty.
pub fn remove_max_betweenness_edges(
    graph: &mut UndirectedGraph,
    scores: &EdgeScores,
    tolerance: f64,
) -> GnResult<RemovalResult> {
    let max_score = scores.max().ok_or(GnError::EmptyGraph)?;

    let doomed: BTreeSet<(NodeId, NodeId)> = scores
        .iter()
        .filter(|(_, score)| ties_max(*score, max_score, tolerance))
        .map(|(edge, _)| edge.undirected())
        .collect();

    for &(u, v) in &doomed {
        graph.remove_edge(u, v);
    }

    Ok(RemovalResult {
        max_score,
        removed: doomed.into_iter().collect(),
    })
}
