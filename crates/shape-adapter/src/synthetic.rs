//! SyntheticShape, a deterministic in-memory B-Rep.
//!
//! Plain vertex/edge/face tables with 1-based ids, assembled by hand in
//! fixtures. Predictable entity counts and classifications make it the
//! test double for everything downstream of the adapter trait.

use dovetail_types::{BoundaryProfile, EdgeId, FaceId, SurfaceTag, VertexId};

use crate::adapter::ShapeAdapter;
use crate::geometry::{Curve, CurveSegment, Line3d, OrientedSurface, Point3d};

/// Errors from assembling a synthetic shape.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ShapeError {
    #[error("unknown vertex: {id:?}")]
    UnknownVertex { id: VertexId },

    #[error("unknown edge: {id:?}")]
    UnknownEdge { id: EdgeId },

    #[error("no edge connects {a:?} and {b:?}")]
    MissingEdge { a: VertexId, b: VertexId },

    #[error("face loop needs at least 3 vertices, got {got}")]
    DegenerateLoop { got: usize },
}

#[derive(Debug, Clone)]
struct VertexRecord {
    point: Point3d,
}

#[derive(Debug, Clone)]
struct EdgeRecord {
    curve: CurveSegment,
    start: VertexId,
    end: VertexId,
}

/// One directed use of an edge in a face wire. `forward` means the wire
/// traverses the curve with increasing parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoEdge {
    pub edge: EdgeId,
    pub forward: bool,
}

#[derive(Debug, Clone)]
struct FaceRecord {
    surface: OrientedSurface,
    wires: Vec<Vec<CoEdge>>,
}

/// In-memory B-Rep tables. Entity ids are 1-based positions in the tables
/// and never change once assigned.
#[derive(Debug, Clone, Default)]
pub struct SyntheticShape {
    vertices: Vec<VertexRecord>,
    edges: Vec<EdgeRecord>,
    faces: Vec<FaceRecord>,
}

impl SyntheticShape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, point: Point3d) -> VertexId {
        self.vertices.push(VertexRecord { point });
        VertexId(self.vertices.len() as u32)
    }

    /// Straight edge between two vertices, parameterized by distance.
    pub fn add_line(&mut self, a: VertexId, b: VertexId) -> Result<EdgeId, ShapeError> {
        let pa = self.vertex(a).ok_or(ShapeError::UnknownVertex { id: a })?.point;
        let pb = self.vertex(b).ok_or(ShapeError::UnknownVertex { id: b })?.point;
        let curve = CurveSegment::new(
            Curve::Line(Line3d::from_points(pa, pb)),
            0.0,
            pa.distance_to(&pb),
        );
        self.edges.push(EdgeRecord {
            curve,
            start: a,
            end: b,
        });
        Ok(EdgeId(self.edges.len() as u32))
    }

    /// Edge with explicit curve geometry. The segment must run from `a`
    /// (at t_start) to `b` (at t_end); a closed edge passes `a == b`.
    pub fn add_curved_edge(
        &mut self,
        a: VertexId,
        b: VertexId,
        curve: CurveSegment,
    ) -> Result<EdgeId, ShapeError> {
        if self.vertex(a).is_none() {
            return Err(ShapeError::UnknownVertex { id: a });
        }
        if self.vertex(b).is_none() {
            return Err(ShapeError::UnknownVertex { id: b });
        }
        self.edges.push(EdgeRecord {
            curve,
            start: a,
            end: b,
        });
        Ok(EdgeId(self.edges.len() as u32))
    }

    /// Face from counterclockwise vertex loops (viewed against the outward
    /// normal). Co-edge directions are derived by matching consecutive
    /// vertex pairs against existing edges. The first loop is the outer
    /// wire.
    pub fn add_face(
        &mut self,
        surface: OrientedSurface,
        loops: &[&[VertexId]],
    ) -> Result<FaceId, ShapeError> {
        let mut wires = Vec::with_capacity(loops.len());
        for vertex_loop in loops {
            if vertex_loop.len() < 3 {
                return Err(ShapeError::DegenerateLoop {
                    got: vertex_loop.len(),
                });
            }
            let mut wire = Vec::with_capacity(vertex_loop.len());
            for i in 0..vertex_loop.len() {
                let a = vertex_loop[i];
                let b = vertex_loop[(i + 1) % vertex_loop.len()];
                wire.push(self.coedge_between(a, b)?);
            }
            wires.push(wire);
        }
        self.faces.push(FaceRecord { surface, wires });
        Ok(FaceId(self.faces.len() as u32))
    }

    /// Face from explicit wires. Needed when a wire uses one edge twice
    /// (seam faces), which a vertex loop cannot express.
    pub fn add_face_with_wires(
        &mut self,
        surface: OrientedSurface,
        wires: Vec<Vec<CoEdge>>,
    ) -> Result<FaceId, ShapeError> {
        for wire in &wires {
            for coedge in wire {
                if self.edge(coedge.edge).is_none() {
                    return Err(ShapeError::UnknownEdge { id: coedge.edge });
                }
            }
        }
        self.faces.push(FaceRecord { surface, wires });
        Ok(FaceId(self.faces.len() as u32))
    }

    pub fn vertex_point(&self, id: VertexId) -> Option<Point3d> {
        self.vertex(id).map(|v| v.point)
    }

    fn coedge_between(&self, a: VertexId, b: VertexId) -> Result<CoEdge, ShapeError> {
        for (i, rec) in self.edges.iter().enumerate() {
            let id = EdgeId(i as u32 + 1);
            if rec.start == a && rec.end == b {
                return Ok(CoEdge { edge: id, forward: true });
            }
            if rec.start == b && rec.end == a {
                return Ok(CoEdge {
                    edge: id,
                    forward: false,
                });
            }
        }
        Err(ShapeError::MissingEdge { a, b })
    }

    fn vertex(&self, id: VertexId) -> Option<&VertexRecord> {
        if id.0 == 0 {
            return None;
        }
        self.vertices.get(id.0 as usize - 1)
    }

    fn edge(&self, id: EdgeId) -> Option<&EdgeRecord> {
        if id.0 == 0 {
            return None;
        }
        self.edges.get(id.0 as usize - 1)
    }

    fn face(&self, id: FaceId) -> Option<&FaceRecord> {
        if id.0 == 0 {
            return None;
        }
        self.faces.get(id.0 as usize - 1)
    }
}

impl ShapeAdapter for SyntheticShape {
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn face_edges(&self, face: FaceId) -> Vec<EdgeId> {
        let Some(rec) = self.face(face) else {
            return Vec::new();
        };
        let mut edges: Vec<EdgeId> = rec
            .wires
            .iter()
            .flat_map(|w| w.iter().map(|c| c.edge))
            .collect();
        edges.sort();
        edges.dedup();
        edges
    }

    fn edge_faces(&self, edge: EdgeId) -> Vec<FaceId> {
        let mut faces = Vec::new();
        for (i, rec) in self.faces.iter().enumerate() {
            let id = FaceId(i as u32 + 1);
            let uses = rec
                .wires
                .iter()
                .flat_map(|w| w.iter())
                .filter(|c| c.edge == edge)
                .count();
            for _ in 0..uses {
                faces.push(id);
            }
        }
        faces
    }

    fn boundary_profile(&self, face: FaceId) -> Option<BoundaryProfile> {
        let rec = self.face(face)?;
        let edges = self.face_edges(face);
        let mut vertex_ids: Vec<VertexId> = edges
            .iter()
            .filter_map(|e| self.edge(*e))
            .flat_map(|e| [e.start, e.end])
            .collect();
        vertex_ids.sort();
        vertex_ids.dedup();
        Some(BoundaryProfile::new(
            vertex_ids.len() as u32,
            edges.len() as u32,
            rec.wires.len() as u32,
        ))
    }

    fn surface_tag(&self, face: FaceId) -> Option<SurfaceTag> {
        self.face(face).map(|f| f.surface.tag())
    }

    fn face_surface(&self, face: FaceId) -> Option<OrientedSurface> {
        self.face(face).map(|f| f.surface)
    }

    fn edge_curve(&self, edge: EdgeId) -> Option<CurveSegment> {
        self.edge(edge).map(|e| e.curve.clone())
    }

    fn coedge_forward(&self, face: FaceId, edge: EdgeId) -> Option<bool> {
        self.face(face)?
            .wires
            .iter()
            .flat_map(|w| w.iter())
            .find(|c| c.edge == edge)
            .map(|c| c.forward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Plane, Surface, Vec3};

    /// Two unit squares side by side in the XY plane, sharing one edge.
    fn two_square_sheet() -> (SyntheticShape, FaceId, FaceId, EdgeId) {
        let mut shape = SyntheticShape::new();
        let v = [
            shape.add_vertex(Point3d::new(0.0, 0.0, 0.0)),
            shape.add_vertex(Point3d::new(1.0, 0.0, 0.0)),
            shape.add_vertex(Point3d::new(2.0, 0.0, 0.0)),
            shape.add_vertex(Point3d::new(2.0, 1.0, 0.0)),
            shape.add_vertex(Point3d::new(1.0, 1.0, 0.0)),
            shape.add_vertex(Point3d::new(0.0, 1.0, 0.0)),
        ];
        let shared = shape.add_line(v[1], v[4]).unwrap();
        for (a, b) in [
            (v[0], v[1]),
            (v[1], v[2]),
            (v[2], v[3]),
            (v[3], v[4]),
            (v[4], v[5]),
            (v[5], v[0]),
        ] {
            shape.add_line(a, b).unwrap();
        }
        let up = OrientedSurface::forward(Surface::Plane(Plane::new(Point3d::ORIGIN, Vec3::Z)));
        let left = shape.add_face(up, &[&[v[0], v[1], v[4], v[5]]]).unwrap();
        let right = shape.add_face(up, &[&[v[1], v[2], v[3], v[4]]]).unwrap();
        (shape, left, right, shared)
    }

    #[test]
    fn test_sheet_counts() {
        let (shape, _, _, _) = two_square_sheet();
        assert_eq!(shape.vertex_count(), 6);
        assert_eq!(shape.edge_count(), 7);
        assert_eq!(shape.face_count(), 2);
    }

    #[test]
    fn test_shared_edge_has_two_incident_faces() {
        let (shape, left, right, shared) = two_square_sheet();
        assert_eq!(shape.edge_faces(shared), vec![left, right]);
        assert_eq!(shape.shared_edges(left, right), vec![shared]);
    }

    #[test]
    fn test_coedge_directions_oppose_across_shared_edge() {
        let (shape, left, right, shared) = two_square_sheet();
        let fwd_left = shape.coedge_forward(left, shared).unwrap();
        let fwd_right = shape.coedge_forward(right, shared).unwrap();
        assert_ne!(fwd_left, fwd_right);
    }

    #[test]
    fn test_boundary_profile_of_square() {
        let (shape, left, _, _) = two_square_sheet();
        let profile = shape.boundary_profile(left).unwrap();
        assert_eq!(profile.vertices, 4);
        assert_eq!(profile.edges, 4);
        assert_eq!(profile.wires, 1);
    }

    #[test]
    fn test_face_without_edge_is_rejected() {
        let mut shape = SyntheticShape::new();
        let a = shape.add_vertex(Point3d::ORIGIN);
        let b = shape.add_vertex(Point3d::new(1.0, 0.0, 0.0));
        let c = shape.add_vertex(Point3d::new(0.0, 1.0, 0.0));
        shape.add_line(a, b).unwrap();
        // b-c and c-a never created.
        let up = OrientedSurface::forward(Surface::Plane(Plane::new(Point3d::ORIGIN, Vec3::Z)));
        let err = shape.add_face(up, &[&[a, b, c]]).unwrap_err();
        assert!(matches!(err, ShapeError::MissingEdge { .. }));
    }

    #[test]
    fn test_queries_on_absent_ids_return_empty() {
        let (shape, _, _, _) = two_square_sheet();
        assert!(shape.face_edges(FaceId(99)).is_empty());
        assert!(shape.edge_faces(EdgeId(99)).is_empty());
        assert!(shape.boundary_profile(FaceId(0)).is_none());
        assert!(shape.coedge_forward(FaceId(1), EdgeId(99)).is_none());
    }
}
