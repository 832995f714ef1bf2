//! In-memory graph operations.

pub mod builder;
pub mod components;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use components::{
    component_count, connected_components, largest_component, sorted_components,
};
pub use traversal::{shortest_paths, ShortestPaths};
pub use undirected::UndirectedGraph;
