use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use dovetail_types::FaceId;

/// Search configuration.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Compare numeric surface parameters (radii, angles) in addition to
    /// the surface class when filtering candidates.
    pub match_surface_params: bool,
    /// Absolute tolerance for surface parameter comparison.
    pub param_tolerance: f64,
    /// Abort the search after this many recursive steps. `None` runs
    /// unbounded.
    pub max_steps: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            match_surface_params: false,
            param_tolerance: 1e-6,
            max_steps: None,
        }
    }
}

impl MatchConfig {
    /// Require surface parameters to agree, not just surface classes.
    pub fn exact_geometry() -> Self {
        Self {
            match_surface_params: true,
            ..Self::default()
        }
    }

    /// Cap the number of recursive steps.
    pub fn bounded(steps: u64) -> Self {
        Self {
            max_steps: Some(steps),
            ..Self::default()
        }
    }
}

/// One occurrence of the pattern in the target: a pattern-to-target node
/// mapping, sorted by pattern id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bijection {
    pub pairs: Vec<(FaceId, FaceId)>,
}

impl Bijection {
    /// Target nodes covered by this occurrence.
    pub fn image(&self) -> BTreeSet<FaceId> {
        self.pairs.iter().map(|(_, target)| *target).collect()
    }

    /// Target node a pattern node maps to.
    pub fn target_of(&self, pattern: FaceId) -> Option<FaceId> {
        self.pairs
            .iter()
            .find(|(p, _)| *p == pattern)
            .map(|(_, target)| *target)
    }
}

/// A recognized feature instance: the target faces of one occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizedFeature {
    pub id: Uuid,
    pub faces: BTreeSet<FaceId>,
}

/// Counters from the last search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDiagnostics {
    /// Recursive calls taken.
    pub steps: u64,
    /// Candidate cells cleared by refinement.
    pub refinement_clears: u64,
    /// Complete assignments skipped for re-covering an already recorded
    /// image node set.
    pub duplicates_skipped: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("no target graph has been initialized")]
    TargetNotSet,
    #[error("search aborted after {steps} steps, scale limit exceeded")]
    ScaleLimitExceeded { steps: u64 },
}
