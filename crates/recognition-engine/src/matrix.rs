//! Candidate matrix for the subgraph search.
//!
//! A |P| x |G| boolean matrix: cell (r, c) means target node c is still a
//! viable image for pattern node r. The matrix is seeded by a filter
//! cascade, narrowed by arc-consistency refinement, and mutated in place
//! during the recursion with exact-undo frames.

use dovetail_types::DihedralKind;

use crate::index::{kind_slot, GraphIndex};
use crate::types::MatchConfig;

#[derive(Debug, Clone)]
pub struct CandidateMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

/// Saved state for one commit, restored verbatim on backtrack.
#[derive(Debug)]
pub struct CommitFrame {
    row: usize,
    col: usize,
    saved_row: Vec<bool>,
    saved_col: Vec<bool>,
}

impl CandidateMatrix {
    /// Seed candidates by the filter cascade, cheapest first: degree,
    /// per-kind arc counts, boundary profile, surface geometry. A pattern
    /// node without a boundary or surface attribute is unconstrained on
    /// that filter.
    pub fn seed(pattern: &GraphIndex, target: &GraphIndex, config: &MatchConfig) -> Self {
        let rows = pattern.len();
        let cols = target.len();
        let mut cells = vec![false; rows * cols];
        for r in 0..rows {
            for c in 0..cols {
                cells[r * cols + c] = candidate_passes(pattern, target, r, c, config);
            }
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, r: usize, c: usize) -> bool {
        self.cells[r * self.cols + c]
    }

    fn set(&mut self, r: usize, c: usize, value: bool) {
        self.cells[r * self.cols + c] = value;
    }

    /// The single remaining candidate of a committed row.
    pub fn assigned_col(&self, r: usize) -> Option<usize> {
        (0..self.cols).find(|c| self.get(r, *c))
    }

    /// Fix (row, col): clear the rest of the row and the rest of the
    /// column. Returns the frame that [`Self::restore`] undoes exactly.
    pub fn commit(&mut self, row: usize, col: usize) -> CommitFrame {
        let saved_row: Vec<bool> = (0..self.cols).map(|c| self.get(row, c)).collect();
        let saved_col: Vec<bool> = (0..self.rows).map(|r| self.get(r, col)).collect();
        for c in 0..self.cols {
            self.set(row, c, c == col);
        }
        for r in 0..self.rows {
            if r != row {
                self.set(r, col, false);
            }
        }
        CommitFrame {
            row,
            col,
            saved_row,
            saved_col,
        }
    }

    pub fn restore(&mut self, frame: CommitFrame) {
        for (c, value) in frame.saved_row.iter().enumerate() {
            self.set(frame.row, c, *value);
        }
        for (r, value) in frame.saved_col.iter().enumerate() {
            if r != frame.row {
                self.set(r, frame.col, *value);
            }
        }
    }

    /// Arc-consistency pass over the rows not yet fixed.
    ///
    /// A candidate (r, c) survives only if every pattern neighbor of r
    /// still has at least one candidate among the target neighbors of c.
    /// Runs to a fixpoint; every cleared cell is pushed onto `journal` so
    /// [`Self::unwind`] can roll the pass back. Returns false as soon as
    /// some row runs out of candidates.
    pub fn refine(
        &mut self,
        first_unfixed_row: usize,
        pattern: &GraphIndex,
        target: &GraphIndex,
        journal: &mut Vec<(usize, usize)>,
    ) -> bool {
        loop {
            let mut changed = false;
            for r in first_unfixed_row..self.rows {
                let mut row_has_candidate = false;
                for c in 0..self.cols {
                    if !self.get(r, c) {
                        continue;
                    }
                    let supported = pattern.neighbors(r).iter().all(|&pr| {
                        target
                            .neighbors(c)
                            .iter()
                            .any(|&tc| self.get(pr, tc))
                    });
                    if supported {
                        row_has_candidate = true;
                    } else {
                        self.set(r, c, false);
                        journal.push((r, c));
                        changed = true;
                    }
                }
                if !row_has_candidate {
                    return false;
                }
            }
            if !changed {
                return true;
            }
        }
    }

    /// Undo refinement clears back to a journal mark.
    pub fn unwind(&mut self, journal: &mut Vec<(usize, usize)>, mark: usize) {
        while journal.len() > mark {
            if let Some((r, c)) = journal.pop() {
                self.set(r, c, true);
            }
        }
    }

    /// Induced-subgraph equality check for a fully committed matrix:
    /// `M * (M * G)^T == P`, computed literally over the dense matrices.
    /// Extra target arcs between image nodes fail the check; the equality
    /// is exact in both directions.
    pub fn verify_induced(&self, pattern: &GraphIndex, target: &GraphIndex) -> bool {
        // MG[r][k] = exists t: M[r][t] && G[t][k]
        let mut mg = vec![vec![false; self.cols]; self.rows];
        for r in 0..self.rows {
            for t in 0..self.cols {
                if !self.get(r, t) {
                    continue;
                }
                for (k, slot) in mg[r].iter_mut().enumerate() {
                    if target.adjacent(t, k) {
                        *slot = true;
                    }
                }
            }
        }
        // (M * (MG)^T)[i][j] = exists k: M[i][k] && MG[j][k]
        for i in 0..self.rows {
            for j in 0..self.rows {
                let mut product = false;
                for k in 0..self.cols {
                    if self.get(i, k) && mg[j][k] {
                        product = true;
                        break;
                    }
                }
                if product != pattern.adjacent(i, j) {
                    return false;
                }
            }
        }
        true
    }

    /// Per-arc kind confirmation of a fully committed assignment: every
    /// classified pattern arc must map onto a target arc of the same kind.
    pub fn confirm_arc_kinds(&self, pattern: &GraphIndex, target: &GraphIndex) -> bool {
        for i in 0..self.rows {
            let Some(ci) = self.assigned_col(i) else {
                return false;
            };
            for &j in pattern.neighbors(i) {
                let Some(pattern_kind) = pattern.arc_kind(i, j) else {
                    continue;
                };
                let Some(cj) = self.assigned_col(j) else {
                    return false;
                };
                if target.arc_kind(ci, cj) != Some(pattern_kind) {
                    return false;
                }
            }
        }
        true
    }
}

/// One cell of the seed cascade.
fn candidate_passes(
    pattern: &GraphIndex,
    target: &GraphIndex,
    r: usize,
    c: usize,
    config: &MatchConfig,
) -> bool {
    if pattern.degree(r) > target.degree(c) {
        return false;
    }
    let pattern_kinds = pattern.kind_counts(r);
    let target_kinds = target.kind_counts(c);
    for kind in DihedralKind::ALL {
        let slot = kind_slot(kind);
        if pattern_kinds[slot] > target_kinds[slot] {
            return false;
        }
    }
    if let Some(profile) = pattern.boundary(r) {
        if target.boundary(c) != Some(profile) {
            return false;
        }
    }
    if let Some(pattern_tag) = pattern.surface(r) {
        let Some(target_tag) = target.surface(c) else {
            return false;
        };
        if pattern_tag.class() != target_tag.class() {
            return false;
        }
        if config.match_surface_params
            && !pattern_tag.params_match(target_tag, config.param_tolerance)
        {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use adjacency_graph::{DihedralAttr, GraphBuilder, NodeAttr};
    use dovetail_types::{BoundaryProfile, SurfaceTag};

    fn concave() -> DihedralAttr {
        DihedralAttr::new(DihedralKind::Concave, 1.0)
    }

    fn convex() -> DihedralAttr {
        DihedralAttr::new(DihedralKind::Convex, -1.0)
    }

    fn plane() -> NodeAttr {
        NodeAttr::Surface {
            tag: SurfaceTag::Plane,
        }
    }

    /// Pattern: two plane nodes joined by a concave arc.
    fn pair_pattern() -> GraphIndex {
        let mut b = GraphBuilder::new();
        let a = b.add_node(vec![plane()]);
        let c = b.add_node(vec![plane()]);
        b.add_arc(a, c, concave());
        GraphIndex::from_graph(&b.finish())
    }

    /// Target: path 1-2-3-4, Concave/Convex/Concave, 4 is a cylinder.
    fn path_target() -> GraphIndex {
        let mut b = GraphBuilder::new();
        let n1 = b.add_node(vec![plane()]);
        let n2 = b.add_node(vec![plane()]);
        let n3 = b.add_node(vec![plane()]);
        let n4 = b.add_node(vec![NodeAttr::Surface {
            tag: SurfaceTag::Cylinder { radius: 1.0 },
        }]);
        b.add_arc(n1, n2, concave());
        b.add_arc(n2, n3, convex());
        b.add_arc(n3, n4, concave());
        GraphIndex::from_graph(&b.finish())
    }

    #[test]
    fn test_seed_applies_filter_cascade() {
        let pattern = pair_pattern();
        let target = path_target();
        let m = CandidateMatrix::seed(&pattern, &target, &MatchConfig::default());
        // Rows identical: planes with one concave arc. Node 4 is ruled out
        // by surface class despite its matching arc counts.
        for r in 0..2 {
            assert!(m.get(r, 0) && m.get(r, 1) && m.get(r, 2));
            assert!(!m.get(r, 3));
        }
    }

    #[test]
    fn test_seed_boundary_profile_must_match_exactly() {
        let mut b = GraphBuilder::new();
        b.add_node(vec![NodeAttr::Boundary {
            profile: BoundaryProfile::new(4, 4, 1),
        }]);
        let pattern = GraphIndex::from_graph(&b.finish());

        let mut t = GraphBuilder::new();
        t.add_node(vec![NodeAttr::Boundary {
            profile: BoundaryProfile::new(4, 4, 1),
        }]);
        t.add_node(vec![NodeAttr::Boundary {
            profile: BoundaryProfile::new(8, 8, 2),
        }]);
        t.add_node(vec![]);
        let target = GraphIndex::from_graph(&t.finish());

        let m = CandidateMatrix::seed(&pattern, &target, &MatchConfig::default());
        assert!(m.get(0, 0));
        assert!(!m.get(0, 1), "different profile");
        assert!(!m.get(0, 2), "target without profile cannot satisfy one");
    }

    #[test]
    fn test_seed_surface_params_only_when_enabled() {
        let mut b = GraphBuilder::new();
        b.add_node(vec![NodeAttr::Surface {
            tag: SurfaceTag::Cylinder { radius: 1.0 },
        }]);
        let pattern = GraphIndex::from_graph(&b.finish());

        let mut t = GraphBuilder::new();
        t.add_node(vec![NodeAttr::Surface {
            tag: SurfaceTag::Cylinder { radius: 2.0 },
        }]);
        let target = GraphIndex::from_graph(&t.finish());

        let loose = CandidateMatrix::seed(&pattern, &target, &MatchConfig::default());
        assert!(loose.get(0, 0), "class match suffices by default");

        let strict = CandidateMatrix::seed(&pattern, &target, &MatchConfig::exact_geometry());
        assert!(!strict.get(0, 0), "radii differ beyond tolerance");
    }

    #[test]
    fn test_commit_and_restore_are_exact_inverses() {
        let pattern = pair_pattern();
        let target = path_target();
        let mut m = CandidateMatrix::seed(&pattern, &target, &MatchConfig::default());
        let before = m.clone();

        let frame = m.commit(0, 1);
        assert!(m.get(0, 1));
        assert!(!m.get(0, 0) && !m.get(0, 2));
        assert!(!m.get(1, 1), "column cleared in other rows");
        assert_eq!(m.assigned_col(0), Some(1));

        m.restore(frame);
        for r in 0..m.rows() {
            for c in 0..m.cols() {
                assert_eq!(m.get(r, c), before.get(r, c), "cell ({r}, {c})");
            }
        }
    }

    #[test]
    fn test_refine_clears_unsupported_candidates() {
        let pattern = pair_pattern();
        let target = path_target();
        let mut m = CandidateMatrix::seed(&pattern, &target, &MatchConfig::default());
        let mut journal = Vec::new();

        // Fix pattern node 0 onto target node 1; its partner must then sit
        // on a neighbor of 1, which rules target node 3 out for row 1.
        let _frame = m.commit(0, 0);
        assert!(m.refine(1, &pattern, &target, &mut journal));
        assert!(m.get(1, 1));
        assert!(!m.get(1, 2), "not adjacent to the committed image");
        assert_eq!(journal.len(), 1);

        m.unwind(&mut journal, 0);
        assert!(m.get(1, 2), "unwind restores the cleared cell");
    }

    #[test]
    fn test_refine_fails_when_a_row_empties() {
        let mut b = GraphBuilder::new();
        let a = b.add_node(vec![]);
        let c = b.add_node(vec![]);
        b.add_arc(a, c, concave());
        let pattern = GraphIndex::from_graph(&b.finish());

        // Two disconnected target nodes with a concave arc each would need
        // a third node; an isolated pair cannot support the pattern arc.
        let mut t = GraphBuilder::new();
        let x = t.add_node(vec![]);
        let y = t.add_node(vec![]);
        let z = t.add_node(vec![]);
        t.add_arc(x, y, concave());
        let _ = z;
        let target = GraphIndex::from_graph(&t.finish());

        let mut m = CandidateMatrix::seed(&pattern, &target, &MatchConfig::default());
        let mut journal = Vec::new();
        let frame = m.commit(0, 2);
        assert!(
            !m.refine(1, &pattern, &target, &mut journal),
            "z has no neighbors to host the partner"
        );
        m.unwind(&mut journal, 0);
        m.restore(frame);
    }

    #[test]
    fn test_verify_induced_rejects_extra_arcs() {
        // Pattern: 1-2, 2-3 (a path, no 1-3 arc).
        let mut b = GraphBuilder::new();
        let p1 = b.add_node(vec![]);
        let p2 = b.add_node(vec![]);
        let p3 = b.add_node(vec![]);
        b.add_arc(p1, p2, concave());
        b.add_arc(p2, p3, concave());
        let pattern = GraphIndex::from_graph(&b.finish());

        // Target: a triangle, which has the extra closing arc.
        let mut t = GraphBuilder::new();
        let t1 = t.add_node(vec![]);
        let t2 = t.add_node(vec![]);
        let t3 = t.add_node(vec![]);
        t.add_arc(t1, t2, concave());
        t.add_arc(t2, t3, concave());
        t.add_arc(t1, t3, concave());
        let target = GraphIndex::from_graph(&t.finish());

        let mut m = CandidateMatrix::seed(&pattern, &target, &MatchConfig::default());
        m.commit(0, 0);
        m.commit(1, 1);
        m.commit(2, 2);
        assert!(
            !m.verify_induced(&pattern, &target),
            "induced subgraph has an arc the pattern lacks"
        );
    }

    #[test]
    fn test_verify_induced_accepts_exact_match() {
        let pattern = pair_pattern();
        let target = path_target();
        let mut m = CandidateMatrix::seed(&pattern, &target, &MatchConfig::default());
        m.commit(0, 0);
        m.commit(1, 1);
        assert!(m.verify_induced(&pattern, &target));
        assert!(m.confirm_arc_kinds(&pattern, &target));
    }

    #[test]
    fn test_confirm_arc_kinds_rejects_kind_mismatch() {
        let pattern = pair_pattern();
        let target = path_target();
        let mut m = CandidateMatrix::seed(&pattern, &target, &MatchConfig::default());
        // Nodes 2 and 3 are adjacent, but through a convex arc.
        m.commit(0, 1);
        m.commit(1, 2);
        assert!(m.verify_induced(&pattern, &target));
        assert!(!m.confirm_arc_kinds(&pattern, &target));
    }
}
