use dovetail_types::{BoundaryProfile, EdgeId, FaceId, SurfaceTag};

use crate::geometry::{CurveSegment, OrientedSurface};

/// Read-only introspection of one B-Rep snapshot. Implemented by
/// SyntheticShape (deterministic in-memory tables) and by adapters over a
/// host kernel's topology explorer.
///
/// Ids are 1-based indices into the snapshot's entity tables. Queries on
/// ids outside the tables return empty/None; nothing here panics.
pub trait ShapeAdapter {
    /// Number of faces in the snapshot. Ids run 1..=face_count().
    fn face_count(&self) -> usize;

    /// Number of edges in the snapshot.
    fn edge_count(&self) -> usize;

    /// Number of vertices in the snapshot.
    fn vertex_count(&self) -> usize;

    /// Distinct edges bounding a face, ascending.
    fn face_edges(&self, face: FaceId) -> Vec<EdgeId>;

    /// Faces incident to an edge, in face-id order, with multiplicity:
    /// a seam edge reports its one face twice. Manifold input yields one
    /// or two entries; more means the shape is non-manifold.
    fn edge_faces(&self, edge: EdgeId) -> Vec<FaceId>;

    /// Bounding-entity counts of a face.
    fn boundary_profile(&self, face: FaceId) -> Option<BoundaryProfile>;

    /// Geometry-type tag of a face's surface.
    fn surface_tag(&self, face: FaceId) -> Option<SurfaceTag>;

    /// The face's surface with its orientation flag applied. `None` when
    /// the host cannot express the geometry analytically.
    fn face_surface(&self, face: FaceId) -> Option<OrientedSurface>;

    /// Trimmed curve geometry of an edge.
    fn edge_curve(&self, edge: EdgeId) -> Option<CurveSegment>;

    /// Direction of the edge inside the face's wire: `true` when the wire
    /// traverses the curve with increasing parameter. For a seam edge this
    /// is the first of its two (opposite) uses.
    fn coedge_forward(&self, face: FaceId, edge: EdgeId) -> Option<bool>;

    /// Edges shared by two faces, ascending. Empty when the faces are not
    /// adjacent. For `f == g` this returns the face's seam edges.
    fn shared_edges(&self, f: FaceId, g: FaceId) -> Vec<EdgeId> {
        let mut shared: Vec<EdgeId> = self
            .face_edges(f)
            .into_iter()
            .filter(|e| {
                let faces = self.edge_faces(*e);
                if f == g {
                    faces.iter().filter(|x| **x == f).count() == 2
                } else {
                    faces.contains(&f) && faces.contains(&g)
                }
            })
            .collect();
        shared.sort();
        shared
    }
}
