//! Two-phase placement search for a single word.
//!
//! Phase 1 (`find_overlap`) ranks every valid placement that crosses
//! existing letters by overlap count. Phase 2 (`place_anywhere`) is the
//! fallback: a uniformly random choice among all valid placements.

use std::cmp::Reverse;

use tracing::trace;

use crate::core::{Direction, GridRng, Placement};
use crate::grid::Grid;
use crate::validator::{overlap_count, Validator};

use super::report::SearchStats;
use super::strategy::{BruteForceScan, CandidateScan};

/// A valid placement together with its overlap count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// The placement.
    pub placement: Placement,
    /// Letters shared with the grid it was scored against.
    pub overlap: usize,
}

impl Candidate {
    /// Ranking key: higher overlap first, then lowest row, lowest column,
    /// `Horizontal` before `Vertical`. Smaller keys win.
    fn rank(&self) -> (Reverse<usize>, (usize, usize, Direction)) {
        (Reverse(self.overlap), self.placement.position_key())
    }
}

/// Per-word placement search.
///
/// Owns the candidate scan and accumulates statistics across words.
pub struct Planner<'d> {
    validator: Validator<'d>,
    scan: Box<dyn CandidateScan>,
    stats: SearchStats,
}

impl<'d> Planner<'d> {
    /// Create a planner using the full grid scan.
    pub fn new(validator: Validator<'d>) -> Self {
        Self {
            validator,
            scan: Box::new(BruteForceScan),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom candidate scan.
    pub fn with_scan<S: CandidateScan + 'static>(mut self, scan: S) -> Self {
        self.scan = Box::new(scan);
        self
    }

    /// Replace the candidate scan in place.
    pub fn set_scan(&mut self, scan: Box<dyn CandidateScan>) {
        self.scan = scan;
    }

    /// The validator used for every candidate.
    #[must_use]
    pub fn validator(&self) -> &Validator<'d> {
        &self.validator
    }

    /// Statistics accumulated since the last reset.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Mutable access to statistics.
    pub fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    /// Validate one placement against `grid`, counting it.
    pub fn check(&mut self, grid: &Grid, placement: &Placement) -> bool {
        let mut work = grid.clone();
        self.try_candidate(&mut work, placement)
    }

    fn try_candidate(&mut self, work: &mut Grid, placement: &Placement) -> bool {
        self.stats.candidates_tried += 1;
        let valid = self.validator.check(work, placement);
        if !valid {
            self.stats.candidates_rejected += 1;
        }
        valid
    }

    /// Best valid placement of `word` that shares at least one letter with
    /// `grid`, or `None`.
    ///
    /// The winner has the strictly highest overlap count; ties go to the
    /// lowest row, then lowest column, then `Horizontal`.
    pub fn find_overlap(&mut self, grid: &Grid, word: &str) -> Option<Candidate> {
        let mut work = grid.clone();
        let mut probe = Placement::new(word, 0, 0, Direction::Horizontal);
        let mut best: Option<Candidate> = None;
        let mut valid = 0usize;

        for (row, col, direction) in self.scan.overlap_anchors(grid, word) {
            probe.row = row;
            probe.col = col;
            probe.direction = direction;

            if !self.try_candidate(&mut work, &probe) {
                continue;
            }
            valid += 1;

            let overlap = overlap_count(grid, &probe);
            if overlap == 0 {
                continue;
            }

            let candidate = Candidate {
                placement: probe.clone(),
                overlap,
            };
            if best.as_ref().map_or(true, |b| candidate.rank() < b.rank()) {
                best = Some(candidate);
            }
        }

        trace!(word, valid, found = best.is_some(), "overlap search");
        best
    }

    /// Every valid placement of `word` with the word starting at each cell,
    /// in row-major order.
    pub fn valid_positions(&mut self, grid: &Grid, word: &str) -> Vec<Placement> {
        let mut work = grid.clone();
        let mut positions = Vec::new();

        for (row, col, direction) in self.scan.free_anchors(grid, word) {
            let probe = Placement::new(word, row, col, direction);
            if self.try_candidate(&mut work, &probe) {
                positions.push(probe);
            }
        }

        positions
    }

    /// A uniformly random valid placement of `word`, or `None`.
    pub fn place_anywhere(&mut self, grid: &Grid, word: &str, rng: &mut GridRng) -> Option<Placement> {
        let mut positions = self.valid_positions(grid, word);
        trace!(word, valid = positions.len(), "unconstrained search");
        if positions.is_empty() {
            return None;
        }
        let pick = rng.gen_range_usize(0..positions.len());
        Some(positions.swap_remove(pick))
    }
}
