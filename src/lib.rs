//! # crossgrid
//!
//! Procedural crossword grid generation with dictionary-checked crossings.
//!
//! ## Design Principles
//!
//! 1. **Every run is a word**: after each commit, every maximal letter run
//!    along a row or column is a single letter or a dictionary word.
//!
//! 2. **Best effort**: words that cannot be placed are reported, never
//!    fatal. Only configuration problems produce an error.
//!
//! 3. **Injected randomness**: shuffling, the first word's direction and
//!    the fallback choice all draw from one seeded `GridRng`. Same seed,
//!    same grid.
//!
//! ## Architecture
//!
//! - **Two-phase search**: a word first goes to the valid position with the
//!   most shared letters; only if none exists is a random valid position
//!   chosen.
//!
//! - **Persistent grid**: cells live in an `im` vector, so the validator's
//!   scratch copy is an O(1) clone.
//!
//! ## Modules
//!
//! - `core`: Directions, placements, RNG, configuration, errors
//! - `grid`: The letter grid and run scanning
//! - `dictionary`: Word set for run validation
//! - `validator`: Placement validity checks
//! - `planner`: Overlap search, fallback placement, generation loop
//! - `presets`: Ready-made word lists

pub mod core;
pub mod grid;
pub mod dictionary;
pub mod validator;
pub mod planner;
pub mod presets;

// Re-export commonly used types
pub use crate::core::{
    Direction, Placement,
    GridRng, GridRngState,
    GeneratorConfig, ValidationMode, DEFAULT_GRID_SIZE, MAX_GRID_SIZE,
    GenerateError,
};

pub use crate::grid::{Grid, GridShapeError, Run, EMPTY, scan_word_through};

pub use crate::dictionary::Dictionary;

pub use crate::validator::{can_place, invalid_runs, overlap_count, Validator};

pub use crate::planner::{
    generate, Generator, Planner, Candidate,
    CandidateScan, BruteForceScan, LetterIndexScan,
    GenerationReport, PlacedWord, PlacementPhase, SkipReason, SkippedWord, SearchStats,
};
