//! Errors surfaced to callers of the generator.
//!
//! Rejected placements and unplaceable words are *not* errors: they are
//! boolean outcomes of validation and entries in the skip report. Only
//! configuration problems that make a run meaningless end up here.

use thiserror::Error;

/// Configuration-level failure, returned before any word is placed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("word list is empty")]
    EmptyWordList,

    #[error("grid size must be at least 1")]
    ZeroGridSize,

    #[error("grid size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: usize, max: usize },

    #[error("word at index {index} is empty after normalization")]
    EmptyWord { index: usize },

    #[error("word {word:?} has {len} letters but the grid is only {grid_size} cells wide")]
    WordTooLong {
        word: String,
        len: usize,
        grid_size: usize,
    },

    #[error("no word fits in a {grid_size}x{grid_size} grid")]
    NoWordFits { grid_size: usize },
}
