//! Word validator: decides whether a placement keeps every run valid.

pub mod check;

pub use check::{can_place, fits, invalid_runs, overlap_count, Validator};
pub use crate::core::ValidationMode;
