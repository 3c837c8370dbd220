//! Structured text and JSON views of a graph.
//!
//! Both dumps are diagnostics, not persistence: the JSON schema belongs to
//! this crate and may change with the format version.

use serde::Serialize;

use dovetail_types::{EdgeId, FaceId};

use crate::attributes::{ArcAttr, NodeAttr};
use crate::graph::AdjacencyGraph;

/// Bumped whenever the JSON dump schema changes shape.
pub const DUMP_FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct GraphDump<'a> {
    format: &'static str,
    version: u32,
    nodes: Vec<NodeDump<'a>>,
    arcs: Vec<ArcDump<'a>>,
    selected: Vec<FaceId>,
}

#[derive(Serialize)]
struct NodeDump<'a> {
    id: FaceId,
    degree: usize,
    attrs: &'a [NodeAttr],
}

#[derive(Serialize)]
struct ArcDump<'a> {
    a: FaceId,
    b: FaceId,
    edges: Vec<EdgeId>,
    attrs: &'a [ArcAttr],
}

impl AdjacencyGraph {
    /// Human-readable report of nodes, arcs, and attributes.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Adjacency Graph ===\n\n");
        out.push_str(&format!(
            "{} nodes, {} arcs, {} selected\n\n",
            self.node_count(),
            self.arc_count(),
            self.selected().len(),
        ));

        for id in self.node_ids() {
            let selected = if self.selected().contains(&id) { " *" } else { "" };
            out.push_str(&format!(
                "node {}{} (degree {})\n",
                id.0,
                selected,
                self.neighbors(id).len()
            ));
            for attr in self.node_attrs(id) {
                match attr {
                    NodeAttr::Surface { tag } => {
                        out.push_str(&format!("  surface: {tag:?}\n"));
                    }
                    NodeAttr::Boundary { profile } => {
                        out.push_str(&format!(
                            "  boundary: {} vertices, {} edges, {} wires\n",
                            profile.vertices, profile.edges, profile.wires
                        ));
                    }
                    NodeAttr::Tag { label } => {
                        out.push_str(&format!("  tag: {label}\n"));
                    }
                }
            }
        }

        if self.arc_count() > 0 {
            out.push('\n');
        }
        for key in self.arc_keys() {
            let Some((edges, attrs)) = self.arc_record(&key) else {
                continue;
            };
            let edge_ids: Vec<u32> = edges.iter().map(|e| e.0).collect();
            out.push_str(&format!("arc {}-{} edges {:?}", key.lo.0, key.hi.0, edge_ids));
            for attr in attrs {
                match attr {
                    ArcAttr::Dihedral { dihedral } => {
                        out.push_str(&format!(
                            " {:?} ({:+.4} rad)",
                            dihedral.kind, dihedral.angle_rad
                        ));
                    }
                    ArcAttr::Tag { label } => {
                        out.push_str(&format!(" tag:{label}"));
                    }
                }
            }
            out.push('\n');
        }
        out
    }

    /// Pretty-printed JSON dump with a format version envelope.
    pub fn dump_json(&self) -> String {
        let dump = GraphDump {
            format: "adjacency-graph",
            version: DUMP_FORMAT_VERSION,
            nodes: self
                .node_ids()
                .into_iter()
                .map(|id| NodeDump {
                    id,
                    degree: self.neighbors(id).len(),
                    attrs: self.node_attrs(id),
                })
                .collect(),
            arcs: self
                .arc_keys()
                .into_iter()
                .filter_map(|key| {
                    self.arc_record(&key).map(|(edges, attrs)| ArcDump {
                        a: key.lo,
                        b: key.hi,
                        edges: edges.iter().copied().collect(),
                        attrs,
                    })
                })
                .collect(),
            selected: self.selected().iter().copied().collect(),
        };
        // Serialization of an in-memory tree of plain values cannot fail.
        serde_json::to_string_pretty(&dump).expect("graph dump serializes")
    }
}
