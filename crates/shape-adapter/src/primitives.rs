//! Named fixture shapes with known topology and classifications.
//!
//! Every constructor builds its tables from literal vertex positions, so
//! entity ids and expected dihedral kinds are stable across runs. Loops are
//! listed counterclockwise about the outward normal; shared edges then get
//! opposite co-edge directions automatically.

use std::f64::consts::{FRAC_PI_2, PI};

use dovetail_types::VertexId;

use crate::geometry::{
    Circle3d, Curve, CurveSegment, Cylinder, OrientedSurface, Plane, Point3d, Surface, Vec3,
};
use crate::synthetic::{CoEdge, SyntheticShape};

fn plane_face(origin: Point3d, outward: Vec3) -> OrientedSurface {
    OrientedSurface::forward(Surface::Plane(Plane::new(origin, outward)))
}

/// Closed box spanning (0,0,0) to (w,d,h): 8 vertices, 12 edges, 6 faces.
/// Every edge is convex. Face order: bottom, top, front, back, left, right.
pub fn block(w: f64, d: f64, h: f64) -> SyntheticShape {
    let mut shape = SyntheticShape::new();
    let positions = [
        [0.0, 0.0, 0.0],
        [w, 0.0, 0.0],
        [w, d, 0.0],
        [0.0, d, 0.0],
        [0.0, 0.0, h],
        [w, 0.0, h],
        [w, d, h],
        [0.0, d, h],
    ];
    let v: Vec<VertexId> = positions
        .iter()
        .map(|p| shape.add_vertex(Point3d::new(p[0], p[1], p[2])))
        .collect();

    let edge_pairs = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];
    for (a, b) in edge_pairs {
        shape.add_line(v[a], v[b]).expect("block vertices exist");
    }

    let face_defs: [([usize; 4], Vec3); 6] = [
        ([0, 3, 2, 1], -Vec3::Z),
        ([4, 5, 6, 7], Vec3::Z),
        ([0, 1, 5, 4], -Vec3::Y),
        ([3, 7, 6, 2], Vec3::Y),
        ([0, 4, 7, 3], -Vec3::X),
        ([1, 2, 6, 5], Vec3::X),
    ];
    for (loop_ids, outward) in face_defs {
        let origin = shape
            .vertex_point(v[loop_ids[0]])
            .expect("block vertices exist");
        let vertex_loop: Vec<VertexId> = loop_ids.iter().map(|i| v[*i]).collect();
        shape
            .add_face(plane_face(origin, outward), &[&vertex_loop])
            .expect("block edges exist");
    }
    shape
}

/// Open three-face strip shaped like a stair step: floor at z=0 for
/// x in [0, run], a riser at x=run, and a plateau at z=rise. The
/// floor/riser edge is concave, the riser/plateau edge convex.
/// Face order: floor, riser, plateau.
pub fn open_step(run: f64, rise: f64, width: f64) -> SyntheticShape {
    let mut shape = SyntheticShape::new();
    let positions = [
        [0.0, 0.0, 0.0],
        [run, 0.0, 0.0],
        [run, width, 0.0],
        [0.0, width, 0.0],
        [run, 0.0, rise],
        [run, width, rise],
        [2.0 * run, 0.0, rise],
        [2.0 * run, width, rise],
    ];
    let v: Vec<VertexId> = positions
        .iter()
        .map(|p| shape.add_vertex(Point3d::new(p[0], p[1], p[2])))
        .collect();

    let edge_pairs = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (1, 4),
        (2, 5),
        (4, 5),
        (4, 6),
        (5, 7),
        (6, 7),
    ];
    for (a, b) in edge_pairs {
        shape.add_line(v[a], v[b]).expect("step vertices exist");
    }

    let face_defs: [([usize; 4], Vec3); 3] = [
        ([0, 1, 2, 3], Vec3::Z),
        ([1, 4, 5, 2], -Vec3::X),
        ([4, 6, 7, 5], Vec3::Z),
    ];
    for (loop_ids, outward) in face_defs {
        let origin = shape
            .vertex_point(v[loop_ids[0]])
            .expect("step vertices exist");
        let vertex_loop: Vec<VertexId> = loop_ids.iter().map(|i| v[*i]).collect();
        shape
            .add_face(plane_face(origin, outward), &[&vertex_loop])
            .expect("step edges exist");
    }
    shape
}

/// Plateau blended into a riser by a tangential quarter-cylinder, the
/// profile of a rounded table edge. Both blend edges are smooth
/// transitions; sampled into the interiors they read slightly convex.
/// Face order: plateau, blend, riser. `rise` must exceed `radius`.
pub fn rounded_step(run: f64, rise: f64, width: f64, radius: f64) -> SyntheticShape {
    let mut shape = SyntheticShape::new();
    let positions = [
        [0.0, 0.0, rise],
        [run, 0.0, rise],
        [run, width, rise],
        [0.0, width, rise],
        [run + radius, 0.0, rise - radius],
        [run + radius, width, rise - radius],
        [run + radius, 0.0, 0.0],
        [run + radius, width, 0.0],
    ];
    let v: Vec<VertexId> = positions
        .iter()
        .map(|p| shape.add_vertex(Point3d::new(p[0], p[1], p[2])))
        .collect();

    // Plateau rectangle.
    for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
        shape.add_line(v[a], v[b]).expect("plateau vertices exist");
    }
    // Quarter arcs at both ends of the blend, running from the plateau rim
    // down to the riser rim.
    for (start, end, y) in [(1, 4, 0.0), (2, 5, width)] {
        let circle = Circle3d::with_frame(
            Point3d::new(run, y, rise - radius),
            Vec3::Y,
            Vec3::Z,
            radius,
        );
        let segment = CurveSegment::new(Curve::Circle(circle), 0.0, FRAC_PI_2);
        shape
            .add_curved_edge(v[start], v[end], segment)
            .expect("blend vertices exist");
    }
    // Blend bottom rim and riser rectangle.
    for (a, b) in [(4, 5), (4, 6), (5, 7), (6, 7)] {
        shape.add_line(v[a], v[b]).expect("riser vertices exist");
    }

    let plateau_loop = [v[0], v[1], v[2], v[3]];
    shape
        .add_face(plane_face(Point3d::new(0.0, 0.0, rise), Vec3::Z), &[&plateau_loop])
        .expect("plateau edges exist");

    let blend_surface = OrientedSurface::forward(Surface::Cylinder(Cylinder::with_frame(
        Point3d::new(run, 0.0, rise - radius),
        Vec3::Y,
        Vec3::Z,
        radius,
    )));
    let blend_loop = [v[1], v[4], v[5], v[2]];
    shape
        .add_face(blend_surface, &[&blend_loop])
        .expect("blend edges exist");

    let riser_loop = [v[4], v[6], v[7], v[5]];
    shape
        .add_face(
            plane_face(Point3d::new(run + radius, 0.0, rise - radius), Vec3::X),
            &[&riser_loop],
        )
        .expect("riser edges exist");
    shape
}

/// Two coplanar rectangles split by a shared edge: a genuinely flat
/// transition with no curvature on either side. Face order: left, right.
pub fn split_panel(width: f64, depth: f64) -> SyntheticShape {
    let mut shape = SyntheticShape::new();
    let half = width * 0.5;
    let positions = [
        [0.0, 0.0, 0.0],
        [half, 0.0, 0.0],
        [width, 0.0, 0.0],
        [width, depth, 0.0],
        [half, depth, 0.0],
        [0.0, depth, 0.0],
    ];
    let v: Vec<VertexId> = positions
        .iter()
        .map(|p| shape.add_vertex(Point3d::new(p[0], p[1], p[2])))
        .collect();
    for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (1, 4)] {
        shape.add_line(v[a], v[b]).expect("panel vertices exist");
    }
    let up = plane_face(Point3d::ORIGIN, Vec3::Z);
    let left_loop = [v[0], v[1], v[4], v[5]];
    let right_loop = [v[1], v[2], v[3], v[4]];
    shape.add_face(up, &[&left_loop]).expect("panel edges exist");
    shape.add_face(up, &[&right_loop]).expect("panel edges exist");
    shape
}

/// Full lateral face of a cylinder, open at both ends, with an axial seam
/// edge bounded by the same face on both sides. One face, three edges.
pub fn seam_cylinder(radius: f64, height: f64) -> SyntheticShape {
    let mut shape = SyntheticShape::new();
    let bottom = shape.add_vertex(Point3d::new(radius, 0.0, 0.0));
    let top = shape.add_vertex(Point3d::new(radius, 0.0, height));

    let seam = shape.add_line(bottom, top).expect("seam vertices exist");
    let bottom_rim = shape
        .add_curved_edge(
            bottom,
            bottom,
            CurveSegment::new(
                Curve::Circle(Circle3d::with_frame(Point3d::ORIGIN, Vec3::Z, Vec3::X, radius)),
                0.0,
                2.0 * PI,
            ),
        )
        .expect("rim vertex exists");
    let top_rim = shape
        .add_curved_edge(
            top,
            top,
            CurveSegment::new(
                Curve::Circle(Circle3d::with_frame(
                    Point3d::new(0.0, 0.0, height),
                    Vec3::Z,
                    Vec3::X,
                    radius,
                )),
                0.0,
                2.0 * PI,
            ),
        )
        .expect("rim vertex exists");

    let lateral = OrientedSurface::forward(Surface::Cylinder(Cylinder::with_frame(
        Point3d::ORIGIN,
        Vec3::Z,
        Vec3::X,
        radius,
    )));
    // The wire walks the parameter rectangle: bottom rim, seam up, top rim
    // backwards, seam down. The seam appears twice with opposite direction.
    shape
        .add_face_with_wires(
            lateral,
            vec![vec![
                CoEdge {
                    edge: bottom_rim,
                    forward: true,
                },
                CoEdge {
                    edge: seam,
                    forward: true,
                },
                CoEdge {
                    edge: top_rim,
                    forward: false,
                },
                CoEdge {
                    edge: seam,
                    forward: false,
                },
            ]],
        )
        .expect("lateral edges exist");
    shape
}

/// Three rectangles sharing one edge: deliberately non-manifold input for
/// rejection tests.
pub fn non_manifold_fin() -> SyntheticShape {
    let mut shape = SyntheticShape::new();
    let positions = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, -1.0, 0.0],
        [0.0, -1.0, 0.0],
        [1.0, 0.0, 1.0],
        [0.0, 0.0, 1.0],
    ];
    let v: Vec<VertexId> = positions
        .iter()
        .map(|p| shape.add_vertex(Point3d::new(p[0], p[1], p[2])))
        .collect();
    for (a, b) in [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (1, 4),
        (4, 5),
        (5, 0),
        (1, 6),
        (6, 7),
        (7, 0),
    ] {
        shape.add_line(v[a], v[b]).expect("fin vertices exist");
    }
    let floor_loop = [v[0], v[1], v[2], v[3]];
    let apron_loop = [v[1], v[0], v[5], v[4]];
    let fin_loop = [v[0], v[1], v[6], v[7]];
    shape
        .add_face(plane_face(Point3d::ORIGIN, Vec3::Z), &[&floor_loop])
        .expect("fin edges exist");
    shape
        .add_face(plane_face(Point3d::ORIGIN, Vec3::Z), &[&apron_loop])
        .expect("fin edges exist");
    shape
        .add_face(plane_face(Point3d::ORIGIN, -Vec3::Y), &[&fin_loop])
        .expect("fin edges exist");
    shape
}
