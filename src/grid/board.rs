//! Square letter grid with an empty-cell sentinel.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Placement, MAX_GRID_SIZE};

/// Rendered form of an empty cell.
pub const EMPTY: char = '.';

/// A square grid of letter cells.
///
/// Cells are `None` when empty. Storage is a persistent vector, so
/// `clone()` is O(1) and a scratch copy only duplicates the chunks that
/// are later written to.
///
/// The grid performs no validation of its own: any letter can be written
/// anywhere in bounds. Keeping runs valid is the validator's job.
///
/// Deserialization rejects a cell vector whose length is not `size * size`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    cells: Vector<Option<char>>,
}

/// Serialized grid whose shape has not been checked yet.
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vector<Option<char>>,
}

/// A serialized grid whose cell count does not match its edge length.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("grid of size {size} cannot hold {cells} cells")]
pub struct GridShapeError {
    pub size: usize,
    pub cells: usize,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridShapeError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let expected = (raw.size <= MAX_GRID_SIZE).then(|| raw.size * raw.size);
        if expected != Some(raw.cells.len()) {
            return Err(GridShapeError {
                size: raw.size,
                cells: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Create an empty `size` x `size` grid.
    ///
    /// # Panics
    /// Panics if `size` exceeds `MAX_GRID_SIZE`. `GeneratorConfig::validate`
    /// rejects such sizes before a run builds its grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(
            size <= MAX_GRID_SIZE,
            "grid size {size} exceeds maximum {MAX_GRID_SIZE}"
        );
        Self {
            size,
            cells: std::iter::repeat(None).take(size * size).collect(),
        }
    }

    /// Edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether `(row, col)` lies inside the grid.
    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            self.in_bounds(row, col),
            "cell ({row}, {col}) outside {size}x{size} grid",
            size = self.size
        );
        row * self.size + col
    }

    /// Read a cell. `None` means empty.
    ///
    /// # Panics
    /// Panics if `(row, col)` is out of bounds; check `in_bounds` first.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells[self.index(row, col)]
    }

    /// Read a cell, treating out-of-bounds coordinates as empty.
    #[must_use]
    pub fn try_get(&self, row: usize, col: usize) -> Option<char> {
        if self.in_bounds(row, col) {
            self.get(row, col)
        } else {
            None
        }
    }

    /// Check whether a cell holds a letter. Out-of-bounds is never filled.
    #[must_use]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.try_get(row, col).is_some()
    }

    /// Write a letter into a cell.
    ///
    /// # Panics
    /// Panics if `(row, col)` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, letter: char) {
        let idx = self.index(row, col);
        self.cells.set(idx, Some(letter));
    }

    /// Empty a cell. Only used to undo a tentative write.
    pub(crate) fn unset(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells.set(idx, None);
    }

    /// Write every letter of a placement.
    ///
    /// # Panics
    /// Panics if any letter falls outside the grid.
    pub fn write_word(&mut self, placement: &Placement) {
        for (row, col, letter) in placement.cells() {
            self.set(row, col, letter);
        }
    }

    /// Check whether no cell holds a letter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of cells holding a letter.
    #[must_use]
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Rendered rows, with `EMPTY` for blank cells and no separators.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| self.get(row, col).unwrap_or(EMPTY))
                    .collect()
            })
            .collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.get(row, col).unwrap_or(EMPTY))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
