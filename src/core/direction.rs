//! Placement directions.

use serde::{Deserialize, Serialize};

/// Direction a word runs in.
///
/// Ordering is significant: `Horizontal < Vertical`, which is the tie-break
/// order used when ranking overlap candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

impl Direction {
    /// Both directions, in tie-break order.
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    /// Unit `(row, column)` step.
    #[must_use]
    pub const fn step(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }

    /// The crossing direction.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// Single-letter tag (`H` / `V`).
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Direction::Horizontal => 'H',
            Direction::Vertical => 'V',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "horizontal"),
            Direction::Vertical => write!(f, "vertical"),
        }
    }
}
