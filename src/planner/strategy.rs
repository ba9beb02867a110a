//! Candidate enumeration strategies.
//!
//! The planner asks a `CandidateScan` which anchors to try; the validator
//! decides which of them are legal. Swapping the scan changes how many
//! placements are simulated, never which placement wins.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::Direction;
use crate::grid::Grid;

/// Start cell and direction of a candidate placement.
pub type Anchor = (usize, usize, Direction);

/// Strategy for enumerating candidate anchors.
pub trait CandidateScan: Send + Sync {
    /// Anchors to try in the overlap phase.
    ///
    /// Must include every anchor whose placement would share at least one
    /// letter with the grid. Anchors with no overlap may be included; the
    /// planner discards them.
    fn overlap_anchors(&self, grid: &Grid, word: &str) -> Vec<Anchor>;

    /// Anchors to try in the unconstrained phase, in row-major order with
    /// `Horizontal` before `Vertical` at each cell.
    fn free_anchors(&self, grid: &Grid, _word: &str) -> Vec<Anchor> {
        let size = grid.size();
        let mut anchors = Vec::with_capacity(size * size * Direction::ALL.len());
        for row in 0..size {
            for col in 0..size {
                for direction in Direction::ALL {
                    anchors.push((row, col, direction));
                }
            }
        }
        anchors
    }
}

/// Anchor that puts letter `index` of the word on `(row, col)`, if it
/// starts inside the grid.
fn rotate_onto(row: usize, col: usize, index: usize, direction: Direction) -> Option<Anchor> {
    let (dr, dc) = direction.step();
    let start_row = row.checked_sub(index * dr)?;
    let start_col = col.checked_sub(index * dc)?;
    Some((start_row, start_col, direction))
}

/// Sort and deduplicate, keeping a deterministic order.
fn dedup(anchors: FxHashSet<Anchor>) -> Vec<Anchor> {
    let mut anchors: Vec<_> = anchors.into_iter().collect();
    anchors.sort_unstable();
    anchors
}

/// Full grid scan: every cell, every direction, every letter of the word
/// rotated onto that cell.
#[derive(Clone, Debug, Default)]
pub struct BruteForceScan;

impl CandidateScan for BruteForceScan {
    fn overlap_anchors(&self, grid: &Grid, word: &str) -> Vec<Anchor> {
        let size = grid.size();
        let len = word.chars().count();
        let mut anchors = FxHashSet::default();
        for row in 0..size {
            for col in 0..size {
                for direction in Direction::ALL {
                    for index in 0..len {
                        if let Some(anchor) = rotate_onto(row, col, index, direction) {
                            anchors.insert(anchor);
                        }
                    }
                }
            }
        }
        dedup(anchors)
    }
}

/// Overlap scan driven by the letters already on the grid.
///
/// Only anchors that put a matching letter of the word on an existing
/// letter are produced, which is exactly the set that can overlap.
#[derive(Clone, Debug, Default)]
pub struct LetterIndexScan;

impl CandidateScan for LetterIndexScan {
    fn overlap_anchors(&self, grid: &Grid, word: &str) -> Vec<Anchor> {
        let mut positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (index, letter) in word.chars().enumerate() {
            positions.entry(letter).or_default().push(index);
        }

        let size = grid.size();
        let mut anchors = FxHashSet::default();
        for row in 0..size {
            for col in 0..size {
                let Some(indices) = grid.get(row, col).and_then(|l| positions.get(&l)) else {
                    continue;
                };
                for &index in indices {
                    for direction in Direction::ALL {
                        if let Some(anchor) = rotate_onto(row, col, index, direction) {
                            anchors.insert(anchor);
                        }
                    }
                }
            }
        }
        dedup(anchors)
    }
}
