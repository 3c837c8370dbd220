//! Assertion helpers with diagnostic output.
//!
//! Every failure carries expected vs actual plus the caller's context
//! string, so a scenario test names the step that went wrong.

use std::collections::BTreeSet;

use uuid::Uuid;

use adjacency_graph::{AdjacencyGraph, BuildError};
use dovetail_types::{DihedralKind, FaceId};
use recognition_engine::{Bijection, EngineError, RecognizedFeature};

/// Unified error type for the harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("graph build failed: {0}")]
    Build(#[from] BuildError),

    #[error("engine failure: {0}")]
    Engine(#[from] EngineError),
}

fn fail(detail: String) -> Result<(), HarnessError> {
    Err(HarnessError::AssertionFailed { detail })
}

/// Assert the dihedral kind recorded on the arc between two nodes.
pub fn assert_arc_kind(
    graph: &AdjacencyGraph,
    a: FaceId,
    b: FaceId,
    expected: DihedralKind,
    ctx: &str,
) -> Result<(), HarnessError> {
    match graph.arc_kind(a, b) {
        Some(kind) if kind == expected => Ok(()),
        other => fail(format!(
            "[{}] arc {}-{}: expected {:?}, got {:?}",
            ctx, a.0, b.0, expected, other,
        )),
    }
}

/// Assert a node's exact neighbor set.
pub fn assert_neighbor_set(
    graph: &AdjacencyGraph,
    id: FaceId,
    expected: &[FaceId],
    ctx: &str,
) -> Result<(), HarnessError> {
    let actual = graph.neighbors(id);
    let wanted: BTreeSet<FaceId> = expected.iter().copied().collect();
    if actual == wanted {
        Ok(())
    } else {
        fail(format!(
            "[{}] neighbors of {}: expected {:?}, got {:?}",
            ctx,
            id.0,
            wanted.iter().map(|f| f.0).collect::<Vec<_>>(),
            actual.iter().map(|f| f.0).collect::<Vec<_>>(),
        ))
    }
}

/// Assert a reported occurrence really is an induced, kind-preserving
/// embedding of the pattern in the target.
pub fn assert_bijection_sound(
    pattern: &AdjacencyGraph,
    target: &AdjacencyGraph,
    bijection: &Bijection,
    ctx: &str,
) -> Result<(), HarnessError> {
    let covered: BTreeSet<FaceId> = bijection.pairs.iter().map(|(p, _)| *p).collect();
    let pattern_nodes: BTreeSet<FaceId> = pattern.node_ids().into_iter().collect();
    if covered != pattern_nodes {
        return fail(format!(
            "[{}] mapping covers {} pattern nodes, pattern has {}",
            ctx,
            covered.len(),
            pattern_nodes.len(),
        ));
    }
    let image = bijection.image();
    if image.len() != bijection.pairs.len() {
        return fail(format!(
            "[{}] mapping is not injective: {:?}",
            ctx, bijection.pairs,
        ));
    }
    for id in &image {
        if !target.has_face(*id) {
            return fail(format!("[{}] image node {} not in target", ctx, id.0));
        }
    }

    for a in pattern.node_ids() {
        for b in pattern.node_ids() {
            if b <= a {
                continue;
            }
            // Both lookups succeed, coverage was checked above.
            let (Some(ia), Some(ib)) = (bijection.target_of(a), bijection.target_of(b)) else {
                return fail(format!("[{}] pattern pair {}-{} unmapped", ctx, a.0, b.0));
            };
            let pattern_adjacent = pattern.neighbors(a).contains(&b);
            let target_adjacent = target.neighbors(ia).contains(&ib);
            if pattern_adjacent != target_adjacent {
                return fail(format!(
                    "[{}] adjacency of {}-{} ({}) not mirrored by {}-{} ({})",
                    ctx, a.0, b.0, pattern_adjacent, ia.0, ib.0, target_adjacent,
                ));
            }
            if pattern_adjacent {
                if let Some(kind) = pattern.arc_kind(a, b) {
                    let found = target.arc_kind(ia, ib);
                    if found != Some(kind) {
                        return fail(format!(
                            "[{}] arc {}-{} maps to {}-{}: expected {:?}, got {:?}",
                            ctx, a.0, b.0, ia.0, ib.0, kind, found,
                        ));
                    }
                }
            }
        }
    }
    Ok(())
}

/// Assert every recognized feature carries its own id.
pub fn assert_distinct_feature_ids(
    features: &[RecognizedFeature],
    ctx: &str,
) -> Result<(), HarnessError> {
    let ids: BTreeSet<Uuid> = features.iter().map(|f| f.id).collect();
    if ids.len() == features.len() {
        Ok(())
    } else {
        fail(format!(
            "[{}] {} features share ids, only {} distinct",
            ctx,
            features.len(),
            ids.len(),
        ))
    }
}
