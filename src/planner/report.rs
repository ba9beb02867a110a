//! Generation results and search statistics.

use serde::{Deserialize, Serialize};

use crate::core::Placement;
use crate::grid::Grid;

/// Which step of the planner committed a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementPhase {
    /// The first word, at the grid center.
    Centered,
    /// Best-scoring placement crossing existing letters.
    Overlap,
    /// Random valid placement anywhere on the grid.
    Anywhere,
}

/// A committed word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    /// Where the word was written.
    pub placement: Placement,
    /// How the position was found.
    pub phase: PlacementPhase,
    /// Letters shared with words committed before it.
    pub overlap: usize,
}

/// Why a word was not placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipReason {
    /// The first word did not fit at the center position.
    FirstWordRejected,
    /// Neither search phase found a valid position.
    NoValidPlacement,
    /// Longer than the grid edge; never searched.
    TooLong,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::FirstWordRejected => write!(f, "first word rejected at center"),
            SkipReason::NoValidPlacement => write!(f, "no valid placement"),
            SkipReason::TooLong => write!(f, "longer than grid"),
        }
    }
}

/// A word that was dropped from the puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedWord {
    /// The normalized word.
    pub word: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Statistics collected during a generation run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Candidate placements handed to the validator.
    pub candidates_tried: u64,

    /// Candidates the validator rejected.
    pub candidates_rejected: u64,

    /// Words committed by the overlap phase.
    pub overlap_placements: u32,

    /// Words committed by the unconstrained phase.
    pub fallback_placements: u32,

    /// Total time spent generating (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of tried candidates the validator accepted.
    #[must_use]
    pub fn acceptance_rate(&self) -> f64 {
        if self.candidates_tried == 0 {
            0.0
        } else {
            (self.candidates_tried - self.candidates_rejected) as f64 / self.candidates_tried as f64
        }
    }
}

/// Outcome of a generation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// The finished grid.
    pub grid: Grid,

    /// Committed words, in commit order.
    pub placed: Vec<PlacedWord>,

    /// Dropped words, in processing order.
    pub skipped: Vec<SkippedWord>,

    /// Search statistics.
    pub stats: SearchStats,

    /// Seed of the RNG the run drew from.
    pub seed: u64,
}

impl GenerationReport {
    /// Committed words, in commit order.
    #[must_use]
    pub fn placed_words(&self) -> Vec<&str> {
        self.placed.iter().map(|p| p.placement.word.as_str()).collect()
    }

    /// Dropped words, in processing order.
    #[must_use]
    pub fn skipped_words(&self) -> Vec<&str> {
        self.skipped.iter().map(|s| s.word.as_str()).collect()
    }

    /// Check whether every input word was placed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

impl std::fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid)?;
        writeln!(f)?;
        writeln!(f, "Words placed: {}", self.placed_words().join(", "))?;
        for skipped in &self.skipped {
            writeln!(f, "Skipped {}: {}", skipped.word, skipped.reason)?;
        }
        Ok(())
    }
}
