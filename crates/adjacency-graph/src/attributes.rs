use serde::{Deserialize, Serialize};

use dovetail_types::{BoundaryProfile, DihedralKind, SurfaceTag};

/// Attribute attached to a face node.
///
/// A node carries at most one attribute of each kind; insertion with a
/// duplicate kind is rejected by the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeAttr {
    /// Geometry type of the face's underlying surface.
    Surface { tag: SurfaceTag },
    /// Counts of the face's bounding topology.
    Boundary { profile: BoundaryProfile },
    /// Free-form label, used by recognizers to mark nodes.
    Tag { label: String },
}

/// Attribute kind discriminant for node attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeAttrKind {
    Surface,
    Boundary,
    Tag,
}

impl NodeAttr {
    pub fn kind(&self) -> NodeAttrKind {
        match self {
            NodeAttr::Surface { .. } => NodeAttrKind::Surface,
            NodeAttr::Boundary { .. } => NodeAttrKind::Boundary,
            NodeAttr::Tag { .. } => NodeAttrKind::Tag,
        }
    }
}

/// Result of classifying the dihedral angle across a shared edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DihedralAttr {
    pub kind: DihedralKind,
    /// Signed angle between the face interiors in radians. Negative for
    /// convex transitions, positive for concave, near ±π when flat.
    pub angle_rad: f64,
}

impl DihedralAttr {
    pub fn new(kind: DihedralKind, angle_rad: f64) -> Self {
        Self { kind, angle_rad }
    }

    pub fn undefined() -> Self {
        Self {
            kind: DihedralKind::Undefined,
            angle_rad: 0.0,
        }
    }
}

/// Attribute attached to an arc. Same one-per-kind rule as [`NodeAttr`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArcAttr {
    /// Dihedral classification of the shared edge.
    Dihedral { dihedral: DihedralAttr },
    /// Free-form label.
    Tag { label: String },
}

/// Attribute kind discriminant for arc attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArcAttrKind {
    Dihedral,
    Tag,
}

impl ArcAttr {
    pub fn kind(&self) -> ArcAttrKind {
        match self {
            ArcAttr::Dihedral { .. } => ArcAttrKind::Dihedral,
            ArcAttr::Tag { .. } => ArcAttrKind::Tag,
        }
    }

    /// The dihedral payload, if this is a dihedral attribute.
    pub fn dihedral(&self) -> Option<DihedralAttr> {
        match self {
            ArcAttr::Dihedral { dihedral } => Some(*dihedral),
            ArcAttr::Tag { .. } => None,
        }
    }
}

impl From<DihedralAttr> for ArcAttr {
    fn from(dihedral: DihedralAttr) -> Self {
        ArcAttr::Dihedral { dihedral }
    }
}
