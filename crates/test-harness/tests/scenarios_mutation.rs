//! Graph mutation scenarios: node removal and attribute placement after a
//! build.

use std::collections::BTreeSet;

use adjacency_graph::{
    build_graph, ArcAttr, BuildOptions, DihedralAttr, GraphBuilder, NodeAttr,
};
use dovetail_types::{DihedralKind, FaceId};
use test_harness::assertions::assert_neighbor_set;
use test_harness::fixtures::slotted_plate;

fn ids(raw: &[u32]) -> BTreeSet<FaceId> {
    raw.iter().copied().map(FaceId).collect()
}

// ── Scenario 1: Remove a hub node ───────────────────────────────────────

#[test]
fn test_removing_hub_drops_its_arcs() {
    // Node 2 is a hub with three neighbors; 3-5 is an unrelated arc that
    // must survive.
    let mut b = GraphBuilder::new();
    for _ in 0..5 {
        b.add_node(vec![NodeAttr::Tag {
            label: "n".into(),
        }]);
    }
    let smooth = DihedralAttr::new(DihedralKind::Smooth, 0.0);
    b.add_arc(FaceId(2), FaceId(1), smooth);
    b.add_arc(FaceId(2), FaceId(3), smooth);
    b.add_arc(FaceId(2), FaceId(4), smooth);
    b.add_arc(FaceId(3), FaceId(5), smooth);
    b.select(FaceId(2));
    let mut graph = b.finish();

    let degrees_before: Vec<usize> = [1, 3, 4]
        .map(FaceId)
        .iter()
        .map(|id| graph.neighbors(*id).len())
        .collect();
    assert_eq!(degrees_before, vec![1, 2, 1]);
    assert_eq!(graph.arc_count(), 4);

    let removed = graph.remove(&ids(&[2]));
    assert_eq!(removed, 1);
    assert!(!graph.has_face(FaceId(2)));
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.arc_count(), 1);
    assert!(graph.selected().is_empty());

    // Every former neighbor lost exactly the hub.
    assert!(!graph.has_neighbors(FaceId(1)));
    assert_neighbor_set(&graph, FaceId(3), &[FaceId(5)], "after removal").unwrap();
    assert!(!graph.has_neighbors(FaceId(4)));
    assert!(graph.neighbors(FaceId(2)).is_empty());

    // Removing the same id again is a no-op.
    assert_eq!(graph.remove(&ids(&[2])), 0);
}

// ── Scenario 2: Remove the slot floor from a built graph ────────────────

#[test]
fn test_removing_slot_floor_leaves_convex_graph() {
    let plate = slotted_plate(10.0, 4.0, 2.0, 1.0, &[(3.0, 7.0)]);
    let mut graph = build_graph(&plate, &BuildOptions::default()).unwrap();
    assert_eq!(graph.arc_count(), 24);

    // Before: the walls and the floor touch concave arcs, nothing else
    // does.
    assert_eq!(
        graph.find_convex_only(),
        [1, 2, 3, 4, 5, 9, 10].map(FaceId).to_vec()
    );

    let removed = graph.remove(&ids(&[7]));
    assert_eq!(removed, 1);
    assert_eq!(graph.node_count(), 9);
    assert_eq!(graph.arc_count(), 20);

    // The walls kept their convex surroundings only.
    assert_neighbor_set(
        &graph,
        FaceId(6),
        &[FaceId(2), FaceId(3), FaceId(9)],
        "left wall",
    )
    .unwrap();
    assert_eq!(graph.find_convex_only().len(), 9);
    assert!(graph.find_concave_only().is_empty());
}

// ── Scenario 3: Attribute collisions ────────────────────────────────────

#[test]
fn test_attribute_kinds_stay_unique_per_entity() {
    let plate = slotted_plate(10.0, 4.0, 2.0, 1.0, &[(3.0, 7.0)]);
    let mut graph = build_graph(&plate, &BuildOptions::default()).unwrap();

    // build_graph already attached Surface and Boundary, so another of
    // either kind bounces off; a Tag is the first of its kind.
    assert!(!graph.set_node_attribute(
        FaceId(7),
        NodeAttr::Surface {
            tag: dovetail_types::SurfaceTag::FreeForm,
        }
    ));
    assert!(graph.set_node_attribute(
        FaceId(7),
        NodeAttr::Tag {
            label: "slot floor".into(),
        }
    ));

    assert!(!graph.set_arc_attribute(
        FaceId(6),
        FaceId(7),
        DihedralAttr::new(DihedralKind::Convex, -1.0).into(),
    ));
    assert_eq!(
        graph.arc_kind(FaceId(6), FaceId(7)),
        Some(DihedralKind::Concave),
        "original classification survives the collision"
    );
    assert!(graph.set_arc_attribute(
        FaceId(6),
        FaceId(7),
        ArcAttr::Tag {
            label: "slot edge".into(),
        },
    ));
}
