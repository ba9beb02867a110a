//! Placement representation: a word anchored at a cell with a direction.
//!
//! A `Placement` is ephemeral: the planner produces many per word and
//! discards all but one. Only the committed one is written into the grid.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A word positioned at `(row, col)` running in `direction`.
///
/// ## Example
///
/// ```
/// use crossgrid::core::{Direction, Placement};
///
/// let p = Placement::new("CAT", 2, 1, Direction::Horizontal);
/// let cells: Vec<_> = p.cells().collect();
/// assert_eq!(cells, vec![(2, 1, 'C'), (2, 2, 'A'), (2, 3, 'T')]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The (uppercase) word being placed.
    pub word: String,

    /// Row of the first letter.
    pub row: usize,

    /// Column of the first letter.
    pub col: usize,

    /// Direction the word runs in.
    pub direction: Direction,
}

impl Placement {
    /// Create a new placement.
    #[must_use]
    pub fn new(word: impl Into<String>, row: usize, col: usize, direction: Direction) -> Self {
        Self {
            word: word.into(),
            row,
            col,
            direction,
        }
    }

    /// Number of letters (not bytes) in the word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// Check if the word is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Iterate `(row, col, letter)` for every letter of the word.
    ///
    /// Coordinates are not bounds-checked; callers compare against the grid.
    /// A coordinate that would overflow saturates at `usize::MAX`, which no
    /// grid contains.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        let (dr, dc) = self.direction.step();
        self.word.chars().enumerate().map(move |(i, letter)| {
            (self.row.saturating_add(i * dr), self.col.saturating_add(i * dc), letter)
        })
    }

    /// Sort key for overlap tie-breaking: row, then column, then direction.
    #[must_use]
    pub fn position_key(&self) -> (usize, usize, Direction) {
        (self.row, self.col, self.direction)
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@({},{}){}", self.word, self.row, self.col, self.direction.tag())
    }
}
