//! Run scanning: reading the letter sequences a grid currently spells.
//!
//! A *run* is a maximal contiguous sequence of filled cells along one
//! direction. The validator calls `scan_word_through` on a grid that
//! already contains a tentative word, to discover the words that word
//! would create.

use serde::{Deserialize, Serialize};

use super::board::Grid;
use crate::core::Direction;

/// A maximal run of two or more letters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// Row of the first letter.
    pub row: usize,
    /// Column of the first letter.
    pub col: usize,
    /// Direction of the run.
    pub direction: Direction,
    /// The letters, in order.
    pub text: String,
}

/// Find the first cell of the run through `(row, col)` along `direction`.
///
/// Walks backward while the preceding cell is filled. If `(row, col)` is
/// itself empty the walk still stops at the nearest gap.
#[must_use]
pub fn run_start(grid: &Grid, row: usize, col: usize, direction: Direction) -> (usize, usize) {
    let (dr, dc) = direction.step();
    let (mut r, mut c) = (row, col);
    while r >= dr && c >= dc && grid.is_filled(r - dr, c - dc) {
        r -= dr;
        c -= dc;
    }
    (r, c)
}

/// Collect the run along `direction` that contains `(row, col)`.
///
/// Returns an empty string if the cell is empty.
#[must_use]
pub fn scan_word_through(grid: &Grid, row: usize, col: usize, direction: Direction) -> String {
    let (dr, dc) = direction.step();
    let (mut r, mut c) = run_start(grid, row, col, direction);
    let mut letters = String::new();
    while let Some(letter) = grid.try_get(r, c) {
        letters.push(letter);
        r += dr;
        c += dc;
    }
    letters
}

/// Every run of length two or more, rows first then columns.
#[must_use]
pub fn runs(grid: &Grid) -> Vec<Run> {
    let size = grid.size();
    let mut found = Vec::new();

    for direction in Direction::ALL {
        for line in 0..size {
            let mut pos = 0;
            while pos < size {
                let (row, col) = match direction {
                    Direction::Horizontal => (line, pos),
                    Direction::Vertical => (pos, line),
                };
                if !grid.is_filled(row, col) {
                    pos += 1;
                    continue;
                }
                let text = scan_word_through(grid, row, col, direction);
                let len = text.chars().count();
                if len > 1 {
                    found.push(Run {
                        row,
                        col,
                        direction,
                        text,
                    });
                }
                pos += len;
            }
        }
    }

    found
}
