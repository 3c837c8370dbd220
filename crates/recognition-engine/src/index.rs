//! Compact search-time snapshot of an adjacency graph.

use std::collections::BTreeMap;

use adjacency_graph::AdjacencyGraph;
use dovetail_types::{BoundaryProfile, DihedralKind, FaceId, SurfaceTag};

use adjacency_graph::{NodeAttr, NodeAttrKind};

/// Dense view of a graph with node indices `0..len`, in ascending order of
/// the external face ids. Both the pattern and the target compile through
/// this before a search.
#[derive(Debug, Clone)]
pub struct GraphIndex {
    ids: Vec<FaceId>,
    adjacency: Vec<Vec<bool>>,
    neighbors: Vec<Vec<usize>>,
    degree: Vec<usize>,
    /// Incident arc counts per kind, indexed by [`kind_slot`].
    kind_counts: Vec<[usize; 4]>,
    surface: Vec<Option<SurfaceTag>>,
    boundary: Vec<Option<BoundaryProfile>>,
    arc_kinds: Vec<Vec<Option<DihedralKind>>>,
}

/// Position of a kind in the per-node count array.
pub fn kind_slot(kind: DihedralKind) -> usize {
    DihedralKind::ALL
        .iter()
        .position(|k| *k == kind)
        .unwrap_or(0)
}

impl GraphIndex {
    pub fn from_graph(graph: &AdjacencyGraph) -> Self {
        let ids = graph.node_ids();
        let n = ids.len();
        let index_of: BTreeMap<FaceId, usize> =
            ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();

        let mut adjacency = vec![vec![false; n]; n];
        let mut neighbors = vec![Vec::new(); n];
        let mut kind_counts = vec![[0usize; 4]; n];
        let mut arc_kinds = vec![vec![None; n]; n];

        for (i, id) in ids.iter().enumerate() {
            for other in graph.neighbors(*id) {
                let Some(&j) = index_of.get(&other) else {
                    continue;
                };
                adjacency[i][j] = true;
                neighbors[i].push(j);
                let kind = graph.arc_kind(*id, other);
                arc_kinds[i][j] = kind;
                if let Some(kind) = kind {
                    kind_counts[i][kind_slot(kind)] += 1;
                }
            }
        }

        let degree = neighbors.iter().map(|list| list.len()).collect();
        let surface = ids
            .iter()
            .map(|id| match graph.node_attribute(*id, NodeAttrKind::Surface) {
                Some(NodeAttr::Surface { tag }) => Some(*tag),
                _ => None,
            })
            .collect();
        let boundary = ids
            .iter()
            .map(
                |id| match graph.node_attribute(*id, NodeAttrKind::Boundary) {
                    Some(NodeAttr::Boundary { profile }) => Some(*profile),
                    _ => None,
                },
            )
            .collect();

        Self {
            ids,
            adjacency,
            neighbors,
            degree,
            kind_counts,
            surface,
            boundary,
            arc_kinds,
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn external_id(&self, i: usize) -> FaceId {
        self.ids[i]
    }

    pub fn adjacent(&self, i: usize, j: usize) -> bool {
        self.adjacency[i][j]
    }

    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.neighbors[i]
    }

    pub fn degree(&self, i: usize) -> usize {
        self.degree[i]
    }

    pub fn kind_counts(&self, i: usize) -> &[usize; 4] {
        &self.kind_counts[i]
    }

    pub fn surface(&self, i: usize) -> Option<&SurfaceTag> {
        self.surface[i].as_ref()
    }

    pub fn boundary(&self, i: usize) -> Option<&BoundaryProfile> {
        self.boundary[i].as_ref()
    }

    pub fn arc_kind(&self, i: usize, j: usize) -> Option<DihedralKind> {
        self.arc_kinds[i][j]
    }
}
