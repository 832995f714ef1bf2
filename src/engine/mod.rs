//! Betweenness scoring, edge removal and the split pipeline.

pub mod betweenness;
pub mod modularity;
pub mod removal;
pub mod split;

pub use betweenness::{accumulate_from, edge_betweenness, EdgeScores};
pub use modularity::modularity;
pub use removal::{remove_max_betweenness_edges, ties_max, RemovalResult};
pub use split::{
    prune_to_largest_component, RoundSummary, SplitEngine, SplitParams, SplitReport, StopReason,
};
