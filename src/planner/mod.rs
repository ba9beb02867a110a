//! Placement planning: per-word search and the generation loop.
//!
//! ## Key Types
//!
//! - `Generator`: runs a whole generation (shuffle, seed word, place rest)
//! - `Planner`: overlap search and unconstrained fallback for one word
//! - `CandidateScan`: which anchors the planner simulates
//! - `GenerationReport`: grid, placed and skipped words, statistics

pub mod strategy;
pub mod search;
pub mod report;
pub mod generator;

pub use strategy::{Anchor, BruteForceScan, CandidateScan, LetterIndexScan};
pub use search::{Candidate, Planner};
pub use report::{GenerationReport, PlacedWord, PlacementPhase, SearchStats, SkipReason, SkippedWord};
pub use generator::{center_start, generate, Generator};
