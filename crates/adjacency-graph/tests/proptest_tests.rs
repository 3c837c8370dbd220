//! Property-based tests for adjacency graph invariants using `proptest`.

use proptest::prelude::*;

use adjacency_graph::{AdjacencyGraph, DihedralAttr, GraphBuilder};
use dovetail_types::{DihedralKind, FaceId};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Node count plus a soup of candidate arcs (0-based endpoints, kind index).
/// The builder silently rejects self-loops and duplicates, so the soup can
/// be arbitrary.
fn arb_topology() -> impl Strategy<Value = (u32, Vec<(u32, u32, u8)>)> {
    (2u32..10).prop_flat_map(|n| {
        let arcs = proptest::collection::vec((0..n, 0..n, 0u8..4), 0..30);
        (Just(n), arcs)
    })
}

fn build(n: u32, arcs: &[(u32, u32, u8)]) -> AdjacencyGraph {
    let mut builder = GraphBuilder::new();
    for _ in 0..n {
        builder.add_node(vec![]);
    }
    for (a, b, k) in arcs {
        let kind = DihedralKind::ALL[*k as usize];
        let angle = match kind {
            DihedralKind::Convex => -1.0,
            DihedralKind::Concave => 1.0,
            _ => std::f64::consts::PI,
        };
        builder.add_arc(
            FaceId(a + 1),
            FaceId(b + 1),
            DihedralAttr::new(kind, angle),
        );
    }
    builder.finish()
}

// ---------------------------------------------------------------------------
// 1. Adjacency is symmetric and free of self-loops
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn adjacency_symmetric_no_self_loops((n, arcs) in arb_topology()) {
        let graph = build(n, &arcs);
        for id in graph.node_ids() {
            let neighbors = graph.neighbors(id);
            prop_assert!(!neighbors.contains(&id), "self-loop at {:?}", id);
            for other in neighbors {
                prop_assert!(graph.neighbors(other).contains(&id),
                    "asymmetric adjacency {:?} -> {:?}", id, other);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Handshake count: arc count equals half the degree sum
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn arc_count_matches_degree_sum((n, arcs) in arb_topology()) {
        let graph = build(n, &arcs);
        let degree_sum: usize = graph
            .node_ids()
            .into_iter()
            .map(|id| graph.neighbors(id).len())
            .sum();
        prop_assert_eq!(graph.arc_count() * 2, degree_sum);
    }
}

// ---------------------------------------------------------------------------
// 3. Removal isolates: no surviving neighbor set mentions a removed node
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn removal_isolates_removed_nodes((n, arcs) in arb_topology()) {
        let mut graph = build(n, &arcs);
        let doomed: std::collections::BTreeSet<FaceId> = graph
            .node_ids()
            .into_iter()
            .filter(|id| id.0 % 2 == 0)
            .collect();
        let removed = graph.remove(&doomed);
        prop_assert_eq!(removed, doomed.len());

        for id in &doomed {
            prop_assert!(!graph.has_face(*id));
        }
        for id in graph.node_ids() {
            for neighbor in graph.neighbors(id) {
                prop_assert!(!doomed.contains(&neighbor),
                    "{:?} still adjacent to removed {:?}", id, neighbor);
            }
        }
        let degree_sum: usize = graph
            .node_ids()
            .into_iter()
            .map(|id| graph.neighbors(id).len())
            .sum();
        prop_assert_eq!(graph.arc_count() * 2, degree_sum);
    }
}

// ---------------------------------------------------------------------------
// 4. Removal leaves an earlier deep copy untouched
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn removal_does_not_leak_into_copies((n, arcs) in arb_topology()) {
        let mut graph = build(n, &arcs);
        let copy = graph.clone();
        let before_nodes = graph.node_count();
        let before_arcs = graph.arc_count();

        let everything: std::collections::BTreeSet<FaceId> =
            graph.node_ids().into_iter().collect();
        graph.remove(&everything);

        prop_assert_eq!(graph.node_count(), 0);
        prop_assert_eq!(copy.node_count(), before_nodes);
        prop_assert_eq!(copy.arc_count(), before_arcs);
    }
}

// ---------------------------------------------------------------------------
// 5. Uniform-kind scans are disjoint and only name connected nodes
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn uniform_kind_scans_disjoint((n, arcs) in arb_topology()) {
        let graph = build(n, &arcs);
        let convex = graph.find_convex_only();
        let concave = graph.find_concave_only();

        for id in &convex {
            prop_assert!(graph.has_neighbors(*id));
            prop_assert!(!concave.contains(id),
                "{:?} reported both all-convex and all-concave", id);
        }
        for id in &concave {
            prop_assert!(graph.has_neighbors(*id));
        }
    }
}
