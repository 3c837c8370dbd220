//! Graph construction scenarios over synthetic shapes.
//!
//! Each scenario builds a shape, derives its adjacency graph, and checks
//! topology, classifications, and attribute placement.

use std::collections::BTreeSet;

use adjacency_graph::{build_graph, BuildError, BuildOptions, NodeAttr, NodeAttrKind};
use dovetail_types::{DihedralKind, EdgeId, FaceId, SurfaceTag};
use test_harness::assertions::{assert_arc_kind, assert_neighbor_set};
use test_harness::fixtures::{block, non_manifold_fin, open_step, slotted_plate};

// ── Scenario 1: Closed box ──────────────────────────────────────────────

#[test]
fn test_box_adjacency_all_convex() {
    let graph = build_graph(&block(2.0, 3.0, 1.0), &BuildOptions::default()).unwrap();
    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.arc_count(), 12);

    // Bottom touches the four side faces but never the top.
    assert_neighbor_set(
        &graph,
        FaceId(1),
        &[FaceId(3), FaceId(4), FaceId(5), FaceId(6)],
        "box bottom",
    )
    .unwrap();

    for key in graph.arc_keys() {
        assert_arc_kind(&graph, key.lo, key.hi, DihedralKind::Convex, "box").unwrap();
        assert_eq!(graph.shared_edges(key.lo, key.hi).len(), 1);
    }
    assert_eq!(graph.find_convex_only().len(), 6);
    assert!(graph.find_concave_only().is_empty());
}

// ── Scenario 2: Open step ───────────────────────────────────────────────

#[test]
fn test_step_mixes_concave_and_convex() {
    let graph = build_graph(&open_step(1.0, 1.0, 1.0), &BuildOptions::default()).unwrap();
    assert_arc_kind(&graph, FaceId(1), FaceId(2), DihedralKind::Concave, "step").unwrap();
    assert_arc_kind(&graph, FaceId(2), FaceId(3), DihedralKind::Convex, "step").unwrap();

    // The floor touches only the concave arc, the plateau only the convex
    // one, the riser both.
    assert_eq!(graph.find_concave_only(), vec![FaceId(1)]);
    assert_eq!(graph.find_convex_only(), vec![FaceId(3)]);
}

// ── Scenario 3: Slotted plate ───────────────────────────────────────────

#[test]
fn test_slotted_plate_concave_arcs_are_wall_floor_pairs() {
    let plate = slotted_plate(10.0, 4.0, 2.0, 1.0, &[(3.0, 7.0)]);
    let graph = build_graph(&plate, &BuildOptions::default()).unwrap();
    assert_eq!(graph.node_count(), 10);
    assert_eq!(graph.arc_count(), 24);

    let concave: BTreeSet<(u32, u32)> = graph
        .arc_keys()
        .into_iter()
        .filter(|key| graph.arc_kind(key.lo, key.hi) == Some(DihedralKind::Concave))
        .map(|key| (key.lo.0, key.hi.0))
        .collect();
    assert_eq!(concave, [(6, 7), (7, 8)].into_iter().collect());

    // Floor neighborhood: the two walls plus the front and back faces.
    assert_neighbor_set(
        &graph,
        FaceId(7),
        &[FaceId(2), FaceId(3), FaceId(6), FaceId(8)],
        "slot floor",
    )
    .unwrap();

    // Every slot face is a plane; profile attributes reflect the notched
    // outline of the front face.
    for id in [6, 7, 8] {
        match graph.node_attribute(FaceId(id), NodeAttrKind::Surface) {
            Some(NodeAttr::Surface { tag }) => assert_eq!(*tag, SurfaceTag::Plane),
            other => panic!("missing surface attribute: {other:?}"),
        }
    }
    match graph.node_attribute(FaceId(2), NodeAttrKind::Boundary) {
        Some(NodeAttr::Boundary { profile }) => {
            assert_eq!((profile.vertices, profile.edges, profile.wires), (8, 8, 1));
        }
        other => panic!("missing boundary attribute: {other:?}"),
    }
}

// ── Scenario 4: Non-manifold input ──────────────────────────────────────

#[test]
fn test_non_manifold_shape_is_rejected() {
    let err = build_graph(&non_manifold_fin(), &BuildOptions::default()).unwrap_err();
    assert_eq!(
        err,
        BuildError::NonManifoldEdge {
            edge: EdgeId(1),
            face_count: 3,
        }
    );
}

// ── Scenario 5: Face selection ──────────────────────────────────────────

#[test]
fn test_selection_marks_survive_build() {
    let selected: BTreeSet<FaceId> = [FaceId(1), FaceId(3)].into_iter().collect();
    let options = BuildOptions::with_selected(selected.clone());
    let graph = build_graph(&open_step(1.0, 1.0, 1.0), &options).unwrap();
    assert_eq!(graph.selected(), &selected);

    // Selection never changes connectivity.
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.arc_count(), 2);
}
