//! The letter grid and run scanning.
//!
//! ## Key Types
//!
//! - `Grid`: square cell buffer, `None` for empty cells
//! - `Run`: a maximal letter sequence along a row or column
//! - `scan_word_through`: the run containing a given cell

pub mod board;
pub mod scan;

pub use board::{Grid, GridShapeError, EMPTY};
pub use scan::{run_start, runs, scan_word_through, Run};
