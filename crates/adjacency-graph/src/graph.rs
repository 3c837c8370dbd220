//! The attributed adjacency graph: storage, queries, mutation.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use dovetail_types::{DihedralKind, EdgeId, FaceId};

use crate::attributes::{ArcAttr, ArcAttrKind, NodeAttr, NodeAttrKind};

/// Normalized unordered node pair. `lo < hi` always holds, so a key can
/// never describe a self-loop.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ArcKey {
    pub lo: FaceId,
    pub hi: FaceId,
}

impl ArcKey {
    /// Normalize a face pair. Returns `None` for `a == b`.
    pub fn new(a: FaceId, b: FaceId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { lo: a, hi: b }),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(Self { lo: b, hi: a }),
        }
    }

    /// The key's other endpoint, if `id` is one of them.
    pub fn other(&self, id: FaceId) -> Option<FaceId> {
        if id == self.lo {
            Some(self.hi)
        } else if id == self.hi {
            Some(self.lo)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct NodeRecord {
    attrs: Vec<NodeAttr>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ArcRecord {
    edges: BTreeSet<EdgeId>,
    attrs: Vec<ArcAttr>,
}

/// Simple undirected graph of face nodes with typed attributes on nodes
/// and arcs.
///
/// Node ids come from the outside (face ids of the source shape or a
/// builder's counter) and are never reissued after removal. Iteration
/// everywhere is in ascending id order. `Clone` produces a fully
/// independent deep copy; all storage is owned.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    nodes: BTreeMap<FaceId, NodeRecord>,
    adjacency: BTreeMap<FaceId, BTreeSet<FaceId>>,
    arcs: BTreeMap<ArcKey, ArcRecord>,
    selected: BTreeSet<FaceId>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Topology mutation ────────────────────────────────────────────────

    /// Insert a node. Returns false if the id is already present.
    pub(crate) fn insert_node(&mut self, id: FaceId) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.nodes.insert(id, NodeRecord::default());
        self.adjacency.insert(id, BTreeSet::new());
        true
    }

    /// Insert an arc between two existing nodes. Rejects self-loops,
    /// unknown endpoints, and duplicate arcs.
    pub(crate) fn insert_arc(&mut self, a: FaceId, b: FaceId, edges: BTreeSet<EdgeId>) -> bool {
        let Some(key) = ArcKey::new(a, b) else {
            return false;
        };
        if !self.nodes.contains_key(&a) || !self.nodes.contains_key(&b) {
            return false;
        }
        if self.arcs.contains_key(&key) {
            return false;
        }
        self.arcs.insert(
            key,
            ArcRecord {
                edges,
                attrs: Vec::new(),
            },
        );
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        true
    }

    /// Mark a node as selected. Returns false for unknown ids.
    pub fn mark_selected(&mut self, id: FaceId) -> bool {
        if !self.nodes.contains_key(&id) {
            return false;
        }
        self.selected.insert(id);
        true
    }

    /// Remove the given nodes with their incident arcs and selection
    /// marks. Unknown ids are ignored. Removed ids are never reused.
    /// Returns the number of nodes actually removed.
    pub fn remove(&mut self, ids: &BTreeSet<FaceId>) -> usize {
        let mut removed = 0;
        for id in ids {
            if self.nodes.remove(id).is_none() {
                continue;
            }
            removed += 1;
            self.selected.remove(id);
            if let Some(neighbors) = self.adjacency.remove(id) {
                for n in neighbors {
                    if let Some(set) = self.adjacency.get_mut(&n) {
                        set.remove(id);
                    }
                    if let Some(key) = ArcKey::new(*id, n) {
                        self.arcs.remove(&key);
                    }
                }
            }
        }
        removed
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub fn has_face(&self, id: FaceId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn has_neighbors(&self, id: FaceId) -> bool {
        self.adjacency.get(&id).is_some_and(|set| !set.is_empty())
    }

    /// Neighbor set of a node, empty for isolated or unknown ids.
    pub fn neighbors(&self, id: FaceId) -> BTreeSet<FaceId> {
        self.adjacency.get(&id).cloned().unwrap_or_default()
    }

    /// Neighbors reachable through at least one of the given shared edges.
    pub fn neighbors_thru(&self, id: FaceId, edges: &[EdgeId]) -> BTreeSet<FaceId> {
        let Some(adjacent) = self.adjacency.get(&id) else {
            return BTreeSet::new();
        };
        adjacent
            .iter()
            .copied()
            .filter(|n| {
                ArcKey::new(id, *n)
                    .and_then(|key| self.arcs.get(&key))
                    .is_some_and(|arc| edges.iter().any(|e| arc.edges.contains(e)))
            })
            .collect()
    }

    /// Shared-edge set recorded on the arc between two nodes.
    pub fn shared_edges(&self, a: FaceId, b: FaceId) -> BTreeSet<EdgeId> {
        ArcKey::new(a, b)
            .and_then(|key| self.arcs.get(&key))
            .map(|arc| arc.edges.clone())
            .unwrap_or_default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Node ids in ascending order.
    pub fn node_ids(&self) -> Vec<FaceId> {
        self.nodes.keys().copied().collect()
    }

    /// Arc keys in ascending order.
    pub fn arc_keys(&self) -> Vec<ArcKey> {
        self.arcs.keys().copied().collect()
    }

    pub fn selected(&self) -> &BTreeSet<FaceId> {
        &self.selected
    }

    // ── Attributes ───────────────────────────────────────────────────────

    /// The node's attribute of the given kind, if any.
    pub fn node_attribute(&self, id: FaceId, kind: NodeAttrKind) -> Option<&NodeAttr> {
        self.nodes
            .get(&id)?
            .attrs
            .iter()
            .find(|a| a.kind() == kind)
    }

    /// Attach an attribute to a node. Returns false, without mutating,
    /// when the node is unknown or already carries that attribute kind.
    pub fn set_node_attribute(&mut self, id: FaceId, attr: NodeAttr) -> bool {
        let Some(record) = self.nodes.get_mut(&id) else {
            return false;
        };
        if record.attrs.iter().any(|a| a.kind() == attr.kind()) {
            return false;
        }
        record.attrs.push(attr);
        true
    }

    /// The arc's attribute of the given kind, if any.
    pub fn arc_attribute(&self, a: FaceId, b: FaceId, kind: ArcAttrKind) -> Option<&ArcAttr> {
        let key = ArcKey::new(a, b)?;
        self.arcs
            .get(&key)?
            .attrs
            .iter()
            .find(|attr| attr.kind() == kind)
    }

    /// Attach an attribute to an arc, same collision rule as nodes.
    pub fn set_arc_attribute(&mut self, a: FaceId, b: FaceId, attr: ArcAttr) -> bool {
        let Some(key) = ArcKey::new(a, b) else {
            return false;
        };
        let Some(record) = self.arcs.get_mut(&key) else {
            return false;
        };
        if record.attrs.iter().any(|existing| existing.kind() == attr.kind()) {
            return false;
        }
        record.attrs.push(attr);
        true
    }

    /// Dihedral kind recorded on the arc between two nodes.
    pub fn arc_kind(&self, a: FaceId, b: FaceId) -> Option<DihedralKind> {
        self.arc_attribute(a, b, ArcAttrKind::Dihedral)
            .and_then(|attr| attr.dihedral())
            .map(|d| d.kind)
    }

    // ── Kind scans ───────────────────────────────────────────────────────

    /// Nodes whose incident arcs are all convex. Isolated nodes do not
    /// qualify.
    pub fn find_convex_only(&self) -> Vec<FaceId> {
        self.find_uniform_kind(DihedralKind::Convex)
    }

    /// Nodes whose incident arcs are all concave. Isolated nodes do not
    /// qualify.
    pub fn find_concave_only(&self) -> Vec<FaceId> {
        self.find_uniform_kind(DihedralKind::Concave)
    }

    fn find_uniform_kind(&self, kind: DihedralKind) -> Vec<FaceId> {
        self.adjacency
            .iter()
            .filter(|(_, neighbors)| !neighbors.is_empty())
            .filter(|(id, neighbors)| {
                neighbors
                    .iter()
                    .all(|n| self.arc_kind(**id, *n) == Some(kind))
            })
            .map(|(id, _)| *id)
            .collect()
    }

    // ── Internal views for dumps and indexing ────────────────────────────

    pub(crate) fn node_attrs(&self, id: FaceId) -> &[NodeAttr] {
        self.nodes.get(&id).map(|r| r.attrs.as_slice()).unwrap_or(&[])
    }

    pub(crate) fn arc_record(&self, key: &ArcKey) -> Option<(&BTreeSet<EdgeId>, &[ArcAttr])> {
        self.arcs
            .get(key)
            .map(|r| (&r.edges, r.attrs.as_slice()))
    }
}
