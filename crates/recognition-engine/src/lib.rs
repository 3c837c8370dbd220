//! Subgraph isomorphism over attributed adjacency graphs.
//!
//! The engine takes a target graph snapshot once, then finds every
//! occurrence of successive pattern graphs in it: candidate seeding by a
//! filter cascade, arc-consistency refinement, backtracking assignment,
//! and an exact induced-subgraph check at the bottom. Zero occurrences is
//! a successful outcome; only a missing target or an exhausted step
//! budget are errors.

pub mod index;
pub mod matrix;
pub mod search;
pub mod types;

use std::collections::BTreeSet;

use tracing::{info, instrument};
use uuid::Uuid;

use adjacency_graph::AdjacencyGraph;
use dovetail_types::FaceId;

use crate::index::GraphIndex;
pub use crate::types::{Bijection, EngineError, MatchConfig, MatchDiagnostics, RecognizedFeature};

/// The pattern matching engine.
///
/// Holds the target snapshot and the results of the most recent
/// [`IsomorphismEngine::perform`] call. Repeating a search replaces the
/// results instead of accumulating them.
pub struct IsomorphismEngine {
    config: MatchConfig,
    target: Option<GraphIndex>,
    matches: Vec<Bijection>,
    diagnostics: MatchDiagnostics,
}

impl IsomorphismEngine {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            target: None,
            matches: Vec::new(),
            diagnostics: MatchDiagnostics::default(),
        }
    }

    /// Snapshot the target graph. Clears any previous results.
    pub fn init_graph(&mut self, target: &AdjacencyGraph) {
        self.target = Some(GraphIndex::from_graph(target));
        self.matches.clear();
        self.diagnostics = MatchDiagnostics::default();
    }

    /// Search the target for every occurrence of `pattern`.
    ///
    /// `Ok(())` whenever the search ran to completion, even with zero
    /// occurrences. Fails with [`EngineError::TargetNotSet`] before
    /// [`IsomorphismEngine::init_graph`], or with
    /// [`EngineError::ScaleLimitExceeded`] when a configured step budget
    /// runs out, in which case the result state is cleared.
    #[instrument(skip(self, pattern), fields(pattern_nodes = pattern.node_count()))]
    pub fn perform(&mut self, pattern: &AdjacencyGraph) -> Result<(), EngineError> {
        let target = self.target.as_ref().ok_or(EngineError::TargetNotSet)?;
        self.matches.clear();
        self.diagnostics = MatchDiagnostics::default();

        let pattern_index = GraphIndex::from_graph(pattern);
        match search::run_search(&pattern_index, target, &self.config) {
            Ok(outcome) => {
                self.matches = outcome.matches;
                self.diagnostics = outcome.diagnostics;
                info!(
                    occurrences = self.matches.len(),
                    steps = self.diagnostics.steps,
                    "pattern search complete"
                );
                Ok(())
            }
            Err(err) => {
                if let EngineError::ScaleLimitExceeded { steps } = err {
                    self.diagnostics.steps = steps;
                }
                Err(err)
            }
        }
    }

    /// Occurrences found by the last successful `perform`.
    pub fn isomorphisms(&self) -> &[Bijection] {
        &self.matches
    }

    /// The occurrences as feature instances with fresh identities.
    pub fn features(&self) -> Vec<RecognizedFeature> {
        self.matches
            .iter()
            .map(|bijection| RecognizedFeature {
                id: Uuid::new_v4(),
                faces: bijection.image(),
            })
            .collect()
    }

    /// Union of all matched target faces.
    pub fn all_features(&self) -> BTreeSet<FaceId> {
        self.matches
            .iter()
            .flat_map(|bijection| bijection.image())
            .collect()
    }

    pub fn diagnostics(&self) -> MatchDiagnostics {
        self.diagnostics
    }
}

impl Default for IsomorphismEngine {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}
