//! Programmatic graph assembly.
//!
//! Pattern graphs are plain adjacency graphs; nothing distinguishes them
//! from built ones except how they were made. `GraphBuilder` hands out
//! dense ids from 1 and wires arcs with explicit dihedral attributes, which
//! is all a pattern template needs.

use std::collections::BTreeSet;

use dovetail_types::FaceId;

use crate::attributes::{DihedralAttr, NodeAttr};
use crate::graph::AdjacencyGraph;

#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: AdjacencyGraph,
    next_id: u32,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node carrying the given attributes; ids count up from 1.
    /// Attributes beyond the first of a kind are dropped.
    pub fn add_node(&mut self, attrs: Vec<NodeAttr>) -> FaceId {
        self.next_id += 1;
        let id = FaceId(self.next_id);
        self.graph.insert_node(id);
        for attr in attrs {
            self.graph.set_node_attribute(id, attr);
        }
        id
    }

    /// Connect two nodes with a classified arc. Returns false for
    /// self-loops, unknown nodes, or an already-present arc.
    pub fn add_arc(&mut self, a: FaceId, b: FaceId, dihedral: DihedralAttr) -> bool {
        if !self.graph.insert_arc(a, b, BTreeSet::new()) {
            return false;
        }
        self.graph.set_arc_attribute(a, b, dihedral.into())
    }

    /// Mark a node as selected in the finished graph.
    pub fn select(&mut self, id: FaceId) -> bool {
        self.graph.mark_selected(id)
    }

    pub fn finish(self) -> AdjacencyGraph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dovetail_types::{DihedralKind, SurfaceTag};

    fn concave() -> DihedralAttr {
        DihedralAttr::new(DihedralKind::Concave, 1.2)
    }

    #[test]
    fn test_builder_ids_are_dense_from_one() {
        let mut b = GraphBuilder::new();
        let a = b.add_node(vec![]);
        let c = b.add_node(vec![NodeAttr::Surface {
            tag: SurfaceTag::Plane,
        }]);
        assert_eq!((a, c), (FaceId(1), FaceId(2)));

        assert!(b.add_arc(a, c, concave()));
        assert!(!b.add_arc(c, a, concave()), "duplicate arc");
        assert!(!b.add_arc(a, a, concave()), "self-loop");
        assert!(!b.add_arc(a, FaceId(9), concave()), "unknown node");

        let graph = b.finish();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.arc_count(), 1);
        assert_eq!(graph.arc_kind(a, c), Some(DihedralKind::Concave));
    }
}
