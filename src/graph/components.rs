//! Connected components by iterative depth-first search.

use std::collections::{BTreeSet, HashSet};

use crate::types::NodeId;

use super::UndirectedGraph;

/// Partition the graph's nodes into connected components.
///
/// Components are returned in discovery order: roots are taken in ascending
/// node order, so the component holding the smallest node comes first. Every
/// node appears in exactly one component.
pub fn connected_components(graph: &UndirectedGraph) -> Vec<BTreeSet<NodeId>> {
    let mut components: Vec<BTreeSet<NodeId>> = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::with_capacity(graph.node_count());
    let mut stack: Vec<NodeId> = Vec::new();

    for root in graph.nodes() {
        if !visited.insert(root) {
            continue;
        }
        let mut component = BTreeSet::new();
        stack.push(root);

        while let Some(node) = stack.pop() {
            component.insert(node);
            // Nodes come from the graph itself, so the lookup cannot fail.
            if let Ok(neighbors) = graph.neighbors(node) {
                for &next in neighbors {
                    if visited.insert(next) {
                        stack.push(next);
                    }
                }
            }
        }

        components.push(component);
    }

    components
}

/// Number of connected components.
pub fn component_count(graph: &UndirectedGraph) -> usize {
    connected_components(graph).len()
}

/// The component with the most nodes; ties go to the first discovered.
///
/// Empty for an empty graph.
pub fn largest_component(graph: &UndirectedGraph) -> BTreeSet<NodeId> {
    let mut largest: Option<BTreeSet<NodeId>> = None;
    for component in connected_components(graph) {
        let bigger = largest
            .as_ref()
            .map(|best| component.len() > best.len())
            .unwrap_or(true);
        if bigger {
            largest = Some(component);
        }
    }
    largest.unwrap_or_default()
}

/// Components as sorted id lists, largest first, ties by smallest id.
pub fn sorted_components(components: Vec<BTreeSet<NodeId>>) -> Vec<Vec<NodeId>> {
    let mut out: Vec<Vec<NodeId>> = components
        .into_iter()
        .map(|c| c.into_iter().collect())
        .collect();
    out.sort_by(|a, b| b.len().cmp(&a.len()).then(a.first().cmp(&b.first())));
    out
}
