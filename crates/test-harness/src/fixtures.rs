//! Scenario fixtures: shapes with slots to recognize, and the pattern
//! graphs that describe them.
//!
//! Shape constructors follow the conventions of `shape_adapter::primitives`
//! (literal vertex tables, counterclockwise loops about the outward
//! normal), so entity ids are stable and documented per fixture.

use adjacency_graph::{AdjacencyGraph, DihedralAttr, GraphBuilder, NodeAttr};
use dovetail_types::{DihedralKind, SurfaceTag, VertexId};
use shape_adapter::geometry::{OrientedSurface, Plane, Point3d, Surface, Vec3};
use shape_adapter::SyntheticShape;

pub use shape_adapter::primitives::{
    block, non_manifold_fin, open_step, rounded_step, seam_cylinder, split_panel,
};

fn plane_face(origin: Point3d, outward: Vec3) -> OrientedSurface {
    OrientedSurface::forward(Surface::Plane(Plane::new(origin, outward)))
}

/// One axis-aligned quad of the extruded profile: the rectangle swept in Y
/// by the profile edge `i -> i+1`. The loop traverses that edge backwards,
/// opposing the front face's forward use of it.
fn swept_quad(
    shape: &mut SyntheticShape,
    front: &[VertexId],
    back: &[VertexId],
    i: usize,
    outward: Vec3,
) {
    let next = (i + 1) % front.len();
    let origin = shape
        .vertex_point(front[i])
        .expect("profile vertices exist");
    shape
        .add_face(
            plane_face(origin, outward),
            &[&[front[i], back[i], back[next], front[next]]],
        )
        .expect("profile edges exist");
}

// ── Shapes ──────────────────────────────────────────────────────────────────

/// Plate spanning (0,0,0) to (w,d,h) with one open slot per span, cut into
/// the top to depth `slot_depth` and running through the full depth `d`.
/// Spans must be ascending, disjoint, and strictly inside `(0, w)`.
///
/// For `n` spans: `8+8n` vertices, `12+12n` edges, `4n+6` faces. Face
/// order: bottom (1), front (2), back (3), left (4), right (5), then per
/// span left wall / floor / right wall, then the top strips left to right.
/// The only concave edges are wall/floor pairs; everything else is convex.
pub fn slotted_plate(
    w: f64,
    d: f64,
    h: f64,
    slot_depth: f64,
    spans: &[(f64, f64)],
) -> SyntheticShape {
    let mut shape = SyntheticShape::new();
    let n = spans.len();
    let z_floor = h - slot_depth;

    // Cross-section polygon at y=0, counterclockwise viewed from -Y:
    // along the bottom, up the right side, then back across the top
    // dipping into each slot, highest span first.
    let mut profile: Vec<(f64, f64)> = vec![(0.0, 0.0), (w, 0.0), (w, h)];
    for (x0, x1) in spans.iter().rev() {
        profile.push((*x1, h));
        profile.push((*x1, z_floor));
        profile.push((*x0, z_floor));
        profile.push((*x0, h));
    }
    profile.push((0.0, h));
    let p = profile.len();

    let front: Vec<VertexId> = profile
        .iter()
        .map(|(x, z)| shape.add_vertex(Point3d::new(*x, 0.0, *z)))
        .collect();
    let back: Vec<VertexId> = profile
        .iter()
        .map(|(x, z)| shape.add_vertex(Point3d::new(*x, d, *z)))
        .collect();

    for i in 0..p {
        shape
            .add_line(front[i], front[(i + 1) % p])
            .expect("plate vertices exist");
    }
    for i in 0..p {
        shape
            .add_line(back[i], back[(i + 1) % p])
            .expect("plate vertices exist");
    }
    for i in 0..p {
        shape
            .add_line(front[i], back[i])
            .expect("plate vertices exist");
    }

    swept_quad(&mut shape, &front, &back, 0, -Vec3::Z);
    shape
        .add_face(plane_face(Point3d::ORIGIN, -Vec3::Y), &[&front])
        .expect("plate edges exist");
    let back_loop: Vec<VertexId> = back.iter().rev().copied().collect();
    shape
        .add_face(plane_face(Point3d::new(0.0, d, 0.0), Vec3::Y), &[&back_loop])
        .expect("plate edges exist");
    swept_quad(&mut shape, &front, &back, p - 1, -Vec3::X);
    swept_quad(&mut shape, &front, &back, 1, Vec3::X);

    // Spans are stored in the profile highest-x first; `start` recovers
    // span j's first profile index so faces come out left to right.
    let start = |j: usize| 3 + 4 * (n - 1 - j);
    for j in 0..n {
        let s = start(j);
        swept_quad(&mut shape, &front, &back, s + 2, Vec3::X);
        swept_quad(&mut shape, &front, &back, s + 1, Vec3::Z);
        swept_quad(&mut shape, &front, &back, s, -Vec3::X);
    }
    for j in 0..n {
        swept_quad(&mut shape, &front, &back, start(j) + 3, Vec3::Z);
    }
    swept_quad(&mut shape, &front, &back, 2, Vec3::Z);

    shape
}

/// Strip with two identical pockets: a `slotted_plate` over 10x4x2 with
/// unit-depth slots at x in [2,4] and [6,8]. The two slot face triples are
/// (6,7,8) and (9,10,11); their adjacency neighborhoods are
/// indistinguishable by attributes.
pub fn twin_pocket_strip() -> SyntheticShape {
    slotted_plate(10.0, 4.0, 2.0, 1.0, &[(2.0, 4.0), (6.0, 8.0)])
}

// ── Pattern graphs ──────────────────────────────────────────────────────────

fn plane_node() -> Vec<NodeAttr> {
    vec![NodeAttr::Surface {
        tag: SurfaceTag::Plane,
    }]
}

fn concave() -> DihedralAttr {
    DihedralAttr::new(DihedralKind::Concave, 1.0)
}

/// Two plane faces meeting at a concave edge. Matches each wall/floor pair
/// of a slot.
pub fn concave_pair_pattern() -> AdjacencyGraph {
    let mut b = GraphBuilder::new();
    let a = b.add_node(plane_node());
    let c = b.add_node(plane_node());
    b.add_arc(a, c, concave());
    b.finish()
}

/// Wall, floor, wall: a three-node path with two concave arcs and no
/// wall-to-wall arc. Matches each slot exactly once.
pub fn slot_pattern() -> AdjacencyGraph {
    let mut b = GraphBuilder::new();
    let wall_a = b.add_node(plane_node());
    let floor = b.add_node(plane_node());
    let wall_b = b.add_node(plane_node());
    b.add_arc(wall_a, floor, concave());
    b.add_arc(floor, wall_b, concave());
    b.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dovetail_types::{EdgeId, FaceId};
    use shape_adapter::ShapeAdapter;

    #[test]
    fn test_single_slot_counts() {
        let plate = slotted_plate(10.0, 4.0, 2.0, 1.0, &[(3.0, 7.0)]);
        assert_eq!(plate.vertex_count(), 16);
        assert_eq!(plate.edge_count(), 24);
        assert_eq!(plate.face_count(), 10);
    }

    #[test]
    fn test_twin_pocket_counts() {
        let plate = twin_pocket_strip();
        assert_eq!(plate.vertex_count(), 24);
        assert_eq!(plate.edge_count(), 36);
        assert_eq!(plate.face_count(), 14);
    }

    #[test]
    fn test_plate_is_manifold_with_opposing_coedges() {
        let plate = slotted_plate(10.0, 4.0, 2.0, 1.0, &[(3.0, 7.0)]);
        for e in 1..=plate.edge_count() as u32 {
            let edge = EdgeId(e);
            let faces = plate.edge_faces(edge);
            assert_eq!(faces.len(), 2, "edge {e} bounds two faces");
            let fwd_a = plate.coedge_forward(faces[0], edge).unwrap();
            let fwd_b = plate.coedge_forward(faces[1], edge).unwrap();
            assert_ne!(fwd_a, fwd_b, "edge {e} co-edges oppose");
        }
    }

    #[test]
    fn test_wall_floor_pairs_share_one_edge() {
        let plate = slotted_plate(10.0, 4.0, 2.0, 1.0, &[(3.0, 7.0)]);
        let (wall_l, floor, wall_r) = (FaceId(6), FaceId(7), FaceId(8));
        assert_eq!(plate.shared_edges(wall_l, floor).len(), 1);
        assert_eq!(plate.shared_edges(floor, wall_r).len(), 1);
        assert!(plate.shared_edges(wall_l, wall_r).is_empty());
    }

    #[test]
    fn test_patterns_are_well_formed() {
        let pair = concave_pair_pattern();
        assert_eq!(pair.node_count(), 2);
        assert_eq!(pair.arc_count(), 1);

        let slot = slot_pattern();
        assert_eq!(slot.node_count(), 3);
        assert_eq!(slot.arc_count(), 2);
        assert_eq!(
            slot.arc_kind(FaceId(1), FaceId(2)),
            Some(DihedralKind::Concave)
        );
        assert!(slot.arc_kind(FaceId(1), FaceId(3)).is_none());
    }
}
