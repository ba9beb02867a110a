//! Ready-made word lists.
//!
//! Used by the `crossword` binary and as realistic test input.

pub mod kiswahili;
