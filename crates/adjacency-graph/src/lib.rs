//! Attributed adjacency graphs over B-Rep face incidence.
//!
//! A node per face, an arc per pair of faces sharing at least one
//! two-sided edge, and closed attribute enums on both. The graph is
//! simple and undirected: no self-loops, at most one arc per face pair,
//! at most one attribute of each kind per node or arc. Construction
//! from a [`shape_adapter::ShapeAdapter`] classifies every arc's
//! dihedral angle along the way.

pub mod attributes;
pub mod build;
pub mod builder;
pub mod dihedral;
pub mod dump;
pub mod graph;

pub use attributes::{ArcAttr, ArcAttrKind, DihedralAttr, NodeAttr, NodeAttrKind};
pub use build::{build_graph, BuildError, BuildOptions};
pub use builder::GraphBuilder;
pub use dihedral::{classify_dihedral, ClassifyOptions};
pub use dump::DUMP_FORMAT_VERSION;
pub use graph::{AdjacencyGraph, ArcKey};
