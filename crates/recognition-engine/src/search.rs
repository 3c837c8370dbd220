//! Backtracking search over the candidate matrix.
//!
//! Row-major recursion: pattern rows are assigned in ascending order,
//! columns tried in ascending order, so the set of occurrences and the
//! order they are recorded in are deterministic. Every recursive call
//! first checks the step budget, then runs one refinement pass over the
//! unfixed rows. At the bottom the assignment must pass the induced
//! equality check and the per-arc kind confirmation; surviving
//! assignments are deduplicated by their image node set, which collapses
//! automorphic re-embeddings of a symmetric pattern onto one occurrence.

use std::collections::BTreeSet;

use tracing::debug;

use crate::index::GraphIndex;
use crate::matrix::CandidateMatrix;
use crate::types::{Bijection, EngineError, MatchConfig, MatchDiagnostics};

#[derive(Debug)]
pub struct SearchOutcome {
    pub matches: Vec<Bijection>,
    pub diagnostics: MatchDiagnostics,
}

/// Find every occurrence of `pattern` in `target`.
pub fn run_search(
    pattern: &GraphIndex,
    target: &GraphIndex,
    config: &MatchConfig,
) -> Result<SearchOutcome, EngineError> {
    if pattern.is_empty() {
        // An empty pattern matches nothing rather than everything.
        return Ok(SearchOutcome {
            matches: Vec::new(),
            diagnostics: MatchDiagnostics::default(),
        });
    }

    let mut search = Search {
        pattern,
        target,
        matrix: CandidateMatrix::seed(pattern, target, config),
        journal: Vec::new(),
        max_steps: config.max_steps,
        diagnostics: MatchDiagnostics::default(),
        seen_images: BTreeSet::new(),
        found: Vec::new(),
    };
    search.recurse(0)?;

    let matches = search
        .found
        .into_iter()
        .map(|assignment| Bijection {
            pairs: assignment
                .into_iter()
                .enumerate()
                .map(|(row, col)| (pattern.external_id(row), target.external_id(col)))
                .collect(),
        })
        .collect();
    Ok(SearchOutcome {
        matches,
        diagnostics: search.diagnostics,
    })
}

struct Search<'a> {
    pattern: &'a GraphIndex,
    target: &'a GraphIndex,
    matrix: CandidateMatrix,
    journal: Vec<(usize, usize)>,
    max_steps: Option<u64>,
    diagnostics: MatchDiagnostics,
    seen_images: BTreeSet<Vec<usize>>,
    /// Accepted assignments, target column per pattern row.
    found: Vec<Vec<usize>>,
}

impl Search<'_> {
    fn recurse(&mut self, row: usize) -> Result<(), EngineError> {
        self.diagnostics.steps += 1;
        if let Some(limit) = self.max_steps {
            if self.diagnostics.steps > limit {
                return Err(EngineError::ScaleLimitExceeded {
                    steps: self.diagnostics.steps,
                });
            }
        }

        let mark = self.journal.len();
        let consistent = self
            .matrix
            .refine(row, self.pattern, self.target, &mut self.journal);
        self.diagnostics.refinement_clears += (self.journal.len() - mark) as u64;
        if !consistent {
            self.matrix.unwind(&mut self.journal, mark);
            return Ok(());
        }

        if row == self.pattern.len() {
            self.record_if_new();
            self.matrix.unwind(&mut self.journal, mark);
            return Ok(());
        }

        for col in 0..self.matrix.cols() {
            if !self.matrix.get(row, col) {
                continue;
            }
            let frame = self.matrix.commit(row, col);
            let result = self.recurse(row + 1);
            self.matrix.restore(frame);
            result?;
        }

        self.matrix.unwind(&mut self.journal, mark);
        Ok(())
    }

    /// Verify the complete assignment and record it unless its image node
    /// set has been recorded before.
    fn record_if_new(&mut self) {
        if !self.matrix.verify_induced(self.pattern, self.target) {
            return;
        }
        if !self.matrix.confirm_arc_kinds(self.pattern, self.target) {
            return;
        }
        let assignment: Vec<usize> = (0..self.pattern.len())
            .filter_map(|row| self.matrix.assigned_col(row))
            .collect();
        if assignment.len() != self.pattern.len() {
            return;
        }

        let mut image = assignment.clone();
        image.sort_unstable();
        if !self.seen_images.insert(image) {
            self.diagnostics.duplicates_skipped += 1;
            return;
        }
        debug!(occurrence = self.found.len() + 1, "pattern occurrence recorded");
        self.found.push(assignment);
    }
}
