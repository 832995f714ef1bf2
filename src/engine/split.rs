//! The Girvan-Newman split pipeline.
//!
//! `PRUNE` runs once and keeps only the largest connected component. Each
//! round then scores every edge from scratch, removes the maximum-scoring
//! edges, and recounts components. Rounds stop as soon as the component
//! count reaches the target, when no edges remain, or at the round cap.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::graph::{connected_components, largest_component, sorted_components, UndirectedGraph};
use crate::types::{
    GnError, GnResult, NodeId, DEFAULT_TARGET_COMPONENTS, DEFAULT_TIE_TOLERANCE,
};

use super::betweenness::edge_betweenness;
use super::modularity::modularity;
use super::removal::remove_max_betweenness_edges;

/// Parameters for a split run.
#[derive(Debug, Clone, Serialize)]
pub struct SplitParams {
    /// Stop once the graph has at least this many components.
    pub target_components: usize,
    /// Optional cap on the number of rounds.
    pub max_rounds: Option<usize>,
    /// Discard everything outside the largest component before the first round.
    pub prune_to_largest: bool,
    /// Relative tolerance for scores tying the maximum.
    pub tie_tolerance: f64,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            target_components: DEFAULT_TARGET_COMPONENTS,
            max_rounds: None,
            prune_to_largest: true,
            tie_tolerance: DEFAULT_TIE_TOLERANCE,
        }
    }
}

impl SplitParams {
    /// Check every parameter is in range.
    pub fn validate(&self) -> GnResult<()> {
        if self.target_components == 0 {
            return Err(GnError::InvalidParameter {
                name: "target_components",
                message: "must be at least 1".to_string(),
            });
        }
        if !self.tie_tolerance.is_finite() || self.tie_tolerance < 0.0 {
            return Err(GnError::InvalidParameter {
                name: "tie_tolerance",
                message: format!("must be a non-negative number, got {}", self.tie_tolerance),
            });
        }
        Ok(())
    }
}

/// Why a split run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The component count reached the target.
    Split,
    /// No edges were left to remove.
    NoEdges,
    /// The round cap was reached.
    RoundLimit,
}

impl StopReason {
    /// Return a human-readable name for this stop reason.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Split => "split",
            Self::NoEdges => "no_edges",
            Self::RoundLimit => "round_limit",
        }
    }
}

/// One completed round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSummary {
    /// 1-based round number.
    pub round: usize,
    /// Maximum edge betweenness this round.
    pub max_score: f64,
    /// Undirected edges removed this round.
    pub removed: Vec<(NodeId, NodeId)>,
    /// Component count after the removal.
    pub component_count: usize,
}

/// Outcome of a split run.
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    /// Final components as ascending id lists, largest first.
    pub components: Vec<Vec<NodeId>>,
    /// Every round that ran, in order.
    pub rounds: Vec<RoundSummary>,
    /// Why the run stopped.
    pub stop_reason: StopReason,
    /// Nodes discarded by pruning.
    pub pruned_nodes: usize,
    /// Modularity of the final partition against the pruned input graph.
    pub modularity: f64,
    /// Wall-clock duration of the run.
    pub elapsed_ms: u64,
}

impl SplitReport {
    /// Number of final components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Total undirected edges removed across all rounds.
    pub fn removed_edge_count(&self) -> usize {
        self.rounds.iter().map(|r| r.removed.len()).sum()
    }
}

/// Drives prune and the round loop over a graph it owns.
pub struct SplitEngine {
    params: SplitParams,
}

impl SplitEngine {
    /// Create a new split engine.
    pub fn new(params: SplitParams) -> GnResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Run the full pipeline, consuming the graph.
    pub fn run(&self, mut graph: UndirectedGraph) -> GnResult<SplitReport> {
        let started = chrono::Utc::now();

        let pruned_nodes = if self.params.prune_to_largest {
            prune_to_largest_component(&mut graph)
        } else {
            0
        };
        let baseline = graph.clone();

        let mut components = connected_components(&graph);
        let mut rounds: Vec<RoundSummary> = Vec::new();

        let stop_reason = loop {
            if components.len() >= self.params.target_components {
                break StopReason::Split;
            }
            if self.params.max_rounds.is_some_and(|cap| rounds.len() >= cap) {
                break StopReason::RoundLimit;
            }

            let scores = edge_betweenness(&graph)?;
            let removal =
                match remove_max_betweenness_edges(&mut graph, &scores, self.params.tie_tolerance) {
                    Ok(removal) => removal,
                    Err(GnError::EmptyGraph) => break StopReason::NoEdges,
                    Err(e) => return Err(e),
                };

            components = connected_components(&graph);
            let summary = RoundSummary {
                round: rounds.len() + 1,
                max_score: removal.max_score,
                removed: removal.removed,
                component_count: components.len(),
            };
            log::debug!(
                "Round {}: max betweenness {:.3}, removed {:?}, {} component(s)",
                summary.round,
                summary.max_score,
                summary.removed,
                summary.component_count
            );
            rounds.push(summary);
        };

        let components = sorted_components(components);
        let modularity = modularity(&baseline, &components);
        let elapsed_ms = (chrono::Utc::now() - started).num_milliseconds().max(0) as u64;

        log::info!(
            "Stopped ({}) after {} round(s) with {} component(s), Q = {:.4}",
            stop_reason.name(),
            rounds.len(),
            components.len(),
            modularity
        );

        Ok(SplitReport {
            components,
            rounds,
            stop_reason,
            pruned_nodes,
            modularity,
            elapsed_ms,
        })
    }
}

/// Keep only the largest connected component; returns how many nodes went.
pub fn prune_to_largest_component(graph: &mut UndirectedGraph) -> usize {
    let keep: BTreeSet<NodeId> = largest_component(graph);
    let before = graph.node_count();
    graph.retain_nodes(&keep);
    let pruned = before - graph.node_count();
    if pruned > 0 {
        log::info!(
            "Pruned {} node(s) outside the largest component ({} kept)",
            pruned,
            keep.len()
        );
    }
    pruned
}
