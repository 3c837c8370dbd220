use serde::{Deserialize, Serialize};

/// Bounding-entity counts of a face: how many vertices, edges and wires
/// (boundary loops) delimit it. Cheap topological signature for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundaryProfile {
    pub vertices: u32,
    pub edges: u32,
    pub wires: u32,
}

impl BoundaryProfile {
    pub fn new(vertices: u32, edges: u32, wires: u32) -> Self {
        Self {
            vertices,
            edges,
            wires,
        }
    }
}
