//! Validity dictionary.
//!
//! Read-only for the duration of a generation run.

pub mod words;

pub use words::{normalize, Dictionary};
