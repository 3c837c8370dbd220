//! Graph construction from a shape adapter.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use tracing::{debug, info, instrument};

use dovetail_types::{EdgeId, FaceId};
use shape_adapter::ShapeAdapter;

use crate::attributes::NodeAttr;
use crate::dihedral::{classify_dihedral, ClassifyOptions};
use crate::graph::{AdjacencyGraph, ArcKey};

/// Options for [`build_graph`].
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Faces to mark as selected in the resulting graph. Marking only;
    /// the graph always covers every face of the shape.
    pub selected: Option<BTreeSet<FaceId>>,
    /// Classifier knobs applied to every arc.
    pub classify: ClassifyOptions,
}

impl BuildOptions {
    /// Classify tangential blends by refined sign instead of `Smooth`.
    pub fn strict_smooth() -> Self {
        Self {
            selected: None,
            classify: ClassifyOptions::strict(),
        }
    }

    pub fn with_selected(selected: BTreeSet<FaceId>) -> Self {
        Self {
            selected: Some(selected),
            classify: ClassifyOptions::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("edge {edge:?} bounds {face_count} faces, at most two are allowed")]
    NonManifoldEdge { edge: EdgeId, face_count: usize },
    #[error("edge {edge:?} names face {face:?} which the shape does not report")]
    UnknownFace { edge: EdgeId, face: FaceId },
}

/// Build the adjacency graph of a shape.
///
/// One node per face. Every edge bounding exactly two distinct faces
/// contributes to the arc between them; the arc's dihedral attribute is
/// classified once, from the lowest-id shared edge. Boundary edges (one
/// face) and seam edges (the same face twice) contribute no arc. An edge
/// with more than two incident faces is non-manifold input and aborts the
/// build. A shape with zero faces builds an empty graph.
#[instrument(skip(shape, options), fields(faces = shape.face_count(), edges = shape.edge_count()))]
pub fn build_graph(
    shape: &dyn ShapeAdapter,
    options: &BuildOptions,
) -> Result<AdjacencyGraph, BuildError> {
    let mut graph = AdjacencyGraph::new();

    for i in 1..=shape.face_count() as u32 {
        let id = FaceId(i);
        graph.insert_node(id);
        if let Some(tag) = shape.surface_tag(id) {
            graph.set_node_attribute(id, NodeAttr::Surface { tag });
        }
        if let Some(profile) = shape.boundary_profile(id) {
            graph.set_node_attribute(id, NodeAttr::Boundary { profile });
        }
    }

    // Group two-sided edges by their unordered face pair.
    let mut pair_edges: BTreeMap<ArcKey, BTreeSet<EdgeId>> = BTreeMap::new();
    for i in 1..=shape.edge_count() as u32 {
        let edge = EdgeId(i);
        let faces = shape.edge_faces(edge);
        match faces.len() {
            0 | 1 => continue,
            2 => {
                for face in &faces {
                    if !graph.has_face(*face) {
                        return Err(BuildError::UnknownFace { edge, face: *face });
                    }
                }
                // A seam reports one face twice and contributes no arc.
                if let Some(key) = ArcKey::new(faces[0], faces[1]) {
                    pair_edges.entry(key).or_default().insert(edge);
                }
            }
            n => return Err(BuildError::NonManifoldEdge {
                edge,
                face_count: n,
            }),
        }
    }

    for (key, edges) in pair_edges {
        let lowest = edges
            .iter()
            .next()
            .copied()
            .unwrap_or(EdgeId(0));
        let attr = classify_dihedral(shape, key.lo, key.hi, Some(lowest), &options.classify);
        graph.insert_arc(key.lo, key.hi, edges);
        graph.set_arc_attribute(key.lo, key.hi, attr.into());
        debug!(a = key.lo.0, b = key.hi.0, kind = ?attr.kind, "classified arc");
    }

    if let Some(selected) = &options.selected {
        for id in selected {
            graph.mark_selected(*id);
        }
    }

    info!(
        nodes = graph.node_count(),
        arcs = graph.arc_count(),
        selected = graph.selected().len(),
        "adjacency graph built"
    );
    Ok(graph)
}
