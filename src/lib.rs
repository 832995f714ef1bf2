//! Community detection by repeated edge-betweenness removal.
//!
//! Loads an undirected graph, keeps its largest connected component, then
//! repeatedly removes the edges with the highest betweenness centrality until
//! the graph splits into separate components.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    accumulate_from, edge_betweenness, modularity, prune_to_largest_component,
    remove_max_betweenness_edges, EdgeScores, RemovalResult, RoundSummary, SplitEngine,
    SplitParams, SplitReport, StopReason,
};
pub use format::{ComponentWriter, EdgeListReader};
pub use graph::{
    component_count, connected_components, largest_component, shortest_paths, GraphBuilder,
    ShortestPaths, UndirectedGraph,
};
pub use types::{DirectedEdge, GnError, GnResult, NodeId};
