//! Newman modularity of a node partition.

use std::collections::HashMap;

use crate::graph::UndirectedGraph;
use crate::types::NodeId;

/// Modularity Q of `partition` measured on `graph`.
///
/// ```text
/// Q = Σ_c [ L_c / m - (d_c / 2m)^2 ]
/// ```
///
/// where `m` is the edge count, `L_c` the edges inside community `c` and
/// `d_c` the summed degree of its nodes. Nodes missing from the partition
/// count as singleton communities. A graph without edges scores 0.0.
pub fn modularity(graph: &UndirectedGraph, partition: &[Vec<NodeId>]) -> f64 {
    let m = graph.edge_count() as f64;
    if m == 0.0 {
        return 0.0;
    }

    let mut community: HashMap<NodeId, usize> = HashMap::new();
    for (idx, members) in partition.iter().enumerate() {
        for &node in members {
            community.insert(node, idx);
        }
    }
    let mut next_singleton = partition.len();
    for node in graph.nodes() {
        community.entry(node).or_insert_with(|| {
            next_singleton += 1;
            next_singleton - 1
        });
    }

    let mut internal = vec![0.0f64; next_singleton];
    let mut degree_sum = vec![0.0f64; next_singleton];

    for (u, v) in graph.edges() {
        let cu = community[&u];
        let cv = community[&v];
        degree_sum[cu] += 1.0;
        degree_sum[cv] += 1.0;
        if cu == cv {
            internal[cu] += 1.0;
        }
    }

    internal
        .iter()
        .zip(&degree_sum)
        .map(|(l, d)| l / m - (d / (2.0 * m)).powi(2))
        .sum()
}
