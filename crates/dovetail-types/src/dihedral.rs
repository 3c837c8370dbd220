use serde::{Deserialize, Serialize};

/// Vexity of the dihedral transition across a shared edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DihedralKind {
    /// Material angle below pi: an outside edge.
    Convex,
    /// Material angle above pi: an inside edge.
    Concave,
    /// Tangential transition, faces continue without a crease.
    Smooth,
    /// Classification could not be established (degenerate geometry,
    /// no common edge, or inconclusive refinement).
    Undefined,
}

impl DihedralKind {
    /// All kinds in a fixed order, for per-kind counting.
    pub const ALL: [DihedralKind; 4] = [
        DihedralKind::Convex,
        DihedralKind::Concave,
        DihedralKind::Smooth,
        DihedralKind::Undefined,
    ];
}
