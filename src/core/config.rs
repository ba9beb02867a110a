//! Generator configuration.
//!
//! Callers configure a run via `GeneratorConfig`:
//! - grid size (the grid is always square)
//! - RNG seed
//! - how the validator simulates a placement
//! - whether over-long words are fatal

use serde::{Deserialize, Serialize};

use super::error::GenerateError;

/// Default grid edge length.
pub const DEFAULT_GRID_SIZE: usize = 15;

/// Largest accepted grid edge length.
pub const MAX_GRID_SIZE: usize = 1024;

/// How the validator simulates a tentative placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationMode {
    /// Write the word into a scratch copy of the grid and inspect that.
    ///
    /// The grid is a persistent vector, so the copy shares structure with
    /// the original and only the touched chunks are duplicated.
    #[default]
    Snapshot,

    /// Write the word into a working grid, inspect it, then restore exactly
    /// the cells that were filled.
    Rollback,
}

/// Configuration for a generation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Grid edge length (default: 15).
    pub grid_size: usize,

    /// Random seed for shuffling, first-word direction and fallback choice.
    /// Same seed and inputs produce the same grid.
    pub seed: u64,

    /// Placement simulation strategy (default: snapshot).
    pub validation: ValidationMode,

    /// Fail the run when any word is longer than the grid.
    /// When false such words are skipped and reported.
    pub strict_lengths: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            seed: 42,
            validation: ValidationMode::Snapshot,
            strict_lengths: false,
        }
    }
}

impl GeneratorConfig {
    /// Set the grid size.
    #[must_use]
    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the validation mode.
    #[must_use]
    pub fn with_validation(mut self, mode: ValidationMode) -> Self {
        self.validation = mode;
        self
    }

    /// Treat over-long words as a configuration error.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict_lengths = true;
        self
    }

    /// Check settings that do not depend on the word list.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.grid_size == 0 {
            return Err(GenerateError::ZeroGridSize);
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(GenerateError::GridTooLarge {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        Ok(())
    }
}
