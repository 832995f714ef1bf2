//! Phase 1 tests: Graph store, builder, traversal and components.

use std::collections::BTreeSet;

use girvan_newman::graph::{
    component_count, connected_components, largest_component, shortest_paths, GraphBuilder,
    UndirectedGraph,
};
use girvan_newman::types::{GnError, NodeId};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ==================== Helper ====================

fn set(ids: &[NodeId]) -> BTreeSet<NodeId> {
    ids.iter().copied().collect()
}

/// Sparse random graph with `n` nodes and roughly `n * k` edge attempts.
fn random_graph(seed: u64, n: i64, k: usize) -> UndirectedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = UndirectedGraph::new();
    for id in 0..n {
        graph.add_node(id);
    }
    for _ in 0..(n as usize * k) {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        graph.add_edge(u, v);
    }
    graph
}

// ==================== Graph Store Tests ====================

#[test]
fn test_add_edge_is_symmetric_and_idempotent() {
    let mut g = UndirectedGraph::new();
    g.add_edge(1, 2);
    g.add_edge(2, 1);
    g.add_edge(1, 2);

    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 1);
    assert!(g.has_edge(1, 2));
    assert!(g.has_edge(2, 1));
    assert_eq!(g.neighbors(1).unwrap(), &set(&[2]));
    assert_eq!(g.neighbors(2).unwrap(), &set(&[1]));
    assert_eq!(g.edges().collect::<Vec<_>>(), vec![(1, 2)]);
}

#[test]
fn test_self_loop_creates_node_only() {
    let mut g = UndirectedGraph::new();
    g.add_edge(3, 3);
    assert!(g.contains(3));
    assert_eq!(g.edge_count(), 0);
    assert!(g.neighbors(3).unwrap().is_empty());
}

#[test]
fn test_remove_edge_keeps_isolated_nodes() {
    let mut g = UndirectedGraph::from_edges([(1, 2)]);
    g.remove_edge(1, 2);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.nodes().collect::<Vec<_>>(), vec![1, 2]);
    assert!(g.neighbors(1).unwrap().is_empty());
}

#[test]
fn test_remove_edge_twice_matches_once() {
    let mut once = UndirectedGraph::from_edges([(1, 2), (2, 3), (3, 1)]);
    let mut twice = once.clone();

    once.remove_edge(2, 3);
    twice.remove_edge(2, 3);
    twice.remove_edge(3, 2);

    assert_eq!(once, twice);
    assert_eq!(twice.edge_count(), 2);
}

#[test]
fn test_remove_absent_edge_is_noop() {
    let mut g = UndirectedGraph::from_edges([(1, 2)]);
    let before = g.clone();
    g.remove_edge(1, 99);
    g.remove_edge(42, 43);
    assert_eq!(g, before);
}

#[test]
fn test_remove_node_drops_incident_edges() {
    let mut g = UndirectedGraph::from_edges([(1, 2), (2, 3), (3, 1)]);
    g.remove_node(2).unwrap();

    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 1);
    assert!(!g.neighbors(1).unwrap().contains(&2));
    assert!(!g.neighbors(3).unwrap().contains(&2));
}

#[test]
fn test_remove_unknown_node() {
    let mut g = UndirectedGraph::from_edges([(1, 2)]);
    match g.remove_node(7).unwrap_err() {
        GnError::UnknownNode(7) => {}
        e => panic!("Expected UnknownNode error, got {:?}", e),
    }
}

#[test]
fn test_neighbors_of_unknown_node() {
    let g = UndirectedGraph::from_edges([(1, 2)]);
    assert!(matches!(g.neighbors(5), Err(GnError::UnknownNode(5))));
    assert!(matches!(g.degree(5), Err(GnError::UnknownNode(5))));
}

#[test]
fn test_nodes_ascending_regardless_of_insertion() {
    let g = UndirectedGraph::from_edges([(9, 4), (-3, 7), (4, 1)]);
    assert_eq!(g.nodes().collect::<Vec<_>>(), vec![-3, 1, 4, 7, 9]);
    assert_eq!(
        g.edges().collect::<Vec<_>>(),
        vec![(-3, 7), (1, 4), (4, 9)]
    );
}

#[test]
fn test_retain_nodes_recounts_edges() {
    let mut g = UndirectedGraph::from_edges([(1, 2), (2, 3), (3, 4), (10, 11)]);
    g.retain_nodes(&set(&[1, 2, 3]));

    assert_eq!(g.nodes().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(g.edge_count(), 2);
    assert!(!g.neighbors(3).unwrap().contains(&4));
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_clique_and_path() {
    let g = GraphBuilder::new()
        .clique(&[1, 2, 3, 4])
        .path(&[4, 5, 6])
        .node(100)
        .build();

    assert_eq!(g.node_count(), 7);
    assert_eq!(g.edge_count(), 6 + 2);
    assert_eq!(g.degree(4).unwrap(), 4);
    assert_eq!(g.degree(100).unwrap(), 0);
}

#[test]
fn test_builder_insertion_order_irrelevant() {
    let a = GraphBuilder::new().edges([(1, 2), (2, 3), (3, 4)]).build();
    let b = GraphBuilder::new()
        .edge(4, 3)
        .edge(3, 2)
        .edge(2, 1)
        .edge(1, 2)
        .build();
    assert_eq!(a, b);
}

// ==================== Traversal Tests ====================

#[test]
fn test_shortest_paths_counts_on_square() {
    // 1 - 2
    // |   |
    // 3 - 4
    let g = UndirectedGraph::from_edges([(1, 2), (1, 3), (2, 4), (3, 4)]);
    let paths = shortest_paths(&g, 1).unwrap();

    assert_eq!(paths.order[0], 1);
    assert_eq!(paths.distance(4), Some(2));
    assert_eq!(paths.path_count(4), 2);
    assert_eq!(paths.predecessors(4), &[2, 3]);
    assert_eq!(paths.path_count(1), 1);
    assert!(paths.predecessors(1).is_empty());
}

#[test]
fn test_shortest_paths_order_non_decreasing() {
    let g = random_graph(11, 60, 2);
    let paths = shortest_paths(&g, 0).unwrap();
    let dists: Vec<u32> = paths.order.iter().map(|&n| paths.dist[&n]).collect();
    assert!(dists.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_shortest_paths_unreachable() {
    let g = UndirectedGraph::from_edges([(1, 2), (3, 4)]);
    let paths = shortest_paths(&g, 1).unwrap();
    assert_eq!(paths.distance(3), None);
    assert_eq!(paths.path_count(3), 0);
    assert_eq!(paths.order, vec![1, 2]);
}

#[test]
fn test_shortest_paths_unknown_source() {
    let g = UndirectedGraph::from_edges([(1, 2)]);
    assert!(matches!(
        shortest_paths(&g, 3),
        Err(GnError::UnknownNode(3))
    ));
}

// ==================== Component Tests ====================

#[test]
fn test_components_discovery_order() {
    let g = GraphBuilder::new()
        .edges([(10, 11), (1, 2), (2, 3)])
        .node(5)
        .build();
    let components = connected_components(&g);
    assert_eq!(
        components,
        vec![set(&[1, 2, 3]), set(&[5]), set(&[10, 11])]
    );
    assert_eq!(component_count(&g), 3);
}

#[test]
fn test_components_partition_random_graphs() {
    for seed in 0..20 {
        let g = random_graph(seed, 80, 1);
        let components = connected_components(&g);

        let total: usize = components.iter().map(BTreeSet::len).sum();
        assert_eq!(total, g.node_count(), "seed {}", seed);

        let union: BTreeSet<NodeId> = components.iter().flatten().copied().collect();
        let all: BTreeSet<NodeId> = g.nodes().collect();
        assert_eq!(union, all, "seed {}", seed);
    }
}

#[test]
fn test_components_are_maximal() {
    let g = random_graph(3, 50, 1);
    for component in connected_components(&g) {
        for &n in &component {
            for m in g.neighbors(n).unwrap() {
                assert!(component.contains(m));
            }
        }
    }
}

#[test]
fn test_deep_path_does_not_overflow_stack() {
    let ids: Vec<NodeId> = (0..200_000).collect();
    let g = GraphBuilder::new().path(&ids).build();
    assert_eq!(component_count(&g), 1);
}

#[test]
fn test_largest_component() {
    let g = UndirectedGraph::from_edges([(1, 2), (3, 4), (4, 5), (5, 6)]);
    assert_eq!(largest_component(&g), set(&[3, 4, 5, 6]));
}

#[test]
fn test_largest_component_tie_goes_to_first() {
    let g = UndirectedGraph::from_edges([(7, 8), (1, 2)]);
    assert_eq!(largest_component(&g), set(&[1, 2]));
}

#[test]
fn test_largest_component_empty_graph() {
    let g = UndirectedGraph::new();
    assert!(largest_component(&g).is_empty());
    assert!(connected_components(&g).is_empty());
}

#[test]
fn test_pruning_to_largest_leaves_one_component() {
    for seed in 0..10 {
        let mut g = random_graph(seed, 60, 1);
        let keep = largest_component(&g);
        g.retain_nodes(&keep);
        assert_eq!(component_count(&g), 1, "seed {}", seed);
        assert_eq!(g.node_count(), keep.len());
    }
}
