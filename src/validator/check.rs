//! Placement validation.
//!
//! A placement is accepted when:
//! 1. every letter lands inside the grid on an empty cell or on the same letter;
//! 2. with the word written in, every perpendicular run through its letters
//!    is a single letter or a dictionary word;
//! 3. the run along the word's own direction is a dictionary word (it is the
//!    word itself unless the placement abuts existing letters end-on);
//! 4. the word itself is a dictionary word.
//!
//! Validation never changes the caller's grid. `Snapshot` mode checks a
//! scratch copy; `Rollback` mode writes into a working grid and restores it.

use smallvec::SmallVec;

use crate::core::{Placement, ValidationMode};
use crate::dictionary::Dictionary;
use crate::grid::{runs, scan_word_through, Grid, Run};

/// Check bounds and letter conflicts only.
///
/// True when every letter lands in bounds on an empty cell or on an
/// identical letter.
#[must_use]
pub fn fits(grid: &Grid, placement: &Placement) -> bool {
    placement.cells().all(|(row, col, letter)| {
        grid.in_bounds(row, col) && grid.get(row, col).map_or(true, |existing| existing == letter)
    })
}

/// Number of letters that coincide with an identical letter already in `grid`.
///
/// Out-of-bounds letters count as non-overlapping.
#[must_use]
pub fn overlap_count(grid: &Grid, placement: &Placement) -> usize {
    placement
        .cells()
        .filter(|&(row, col, letter)| grid.try_get(row, col) == Some(letter))
        .count()
}

/// Runs of two or more letters that are not dictionary words.
///
/// Empty for any grid built only from accepted placements.
#[must_use]
pub fn invalid_runs(grid: &Grid, dictionary: &Dictionary) -> Vec<Run> {
    runs(grid)
        .into_iter()
        .filter(|run| !dictionary.contains(&run.text))
        .collect()
}

/// Full validity check in snapshot mode.
///
/// Convenience for callers that do not hold a `Validator`.
#[must_use]
pub fn can_place(grid: &Grid, placement: &Placement, dictionary: &Dictionary) -> bool {
    Validator::new(dictionary).can_place(grid, placement)
}

/// Dictionary-backed placement validator.
#[derive(Clone, Copy, Debug)]
pub struct Validator<'d> {
    dictionary: &'d Dictionary,
    mode: ValidationMode,
}

impl<'d> Validator<'d> {
    /// Create a snapshot-mode validator.
    #[must_use]
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            mode: ValidationMode::Snapshot,
        }
    }

    /// Set the validation mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// The configured mode.
    #[must_use]
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// The dictionary runs are checked against.
    #[must_use]
    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Validate against a scratch copy of `grid`.
    #[must_use]
    pub fn can_place(&self, grid: &Grid, placement: &Placement) -> bool {
        if !self.dictionary.contains(&placement.word) || !fits(grid, placement) {
            return false;
        }

        let mut scratch = grid.clone();
        scratch.write_word(placement);
        self.runs_valid(&scratch, placement)
    }

    /// Validate by writing into `grid` and restoring it afterwards.
    ///
    /// On return `grid` is identical to what it was on entry.
    #[must_use]
    pub fn can_place_with_rollback(&self, grid: &mut Grid, placement: &Placement) -> bool {
        if !self.dictionary.contains(&placement.word) || !fits(grid, placement) {
            return false;
        }

        let mut written: SmallVec<[(usize, usize); 16]> = SmallVec::new();
        for (row, col, letter) in placement.cells() {
            if grid.get(row, col).is_none() {
                grid.set(row, col, letter);
                written.push((row, col));
            }
        }

        let valid = self.runs_valid(grid, placement);

        for (row, col) in written {
            grid.unset(row, col);
        }
        valid
    }

    /// Validate using the configured mode.
    ///
    /// `work` may be written to in rollback mode but is always restored.
    #[must_use]
    pub fn check(&self, work: &mut Grid, placement: &Placement) -> bool {
        match self.mode {
            ValidationMode::Snapshot => self.can_place(work, placement),
            ValidationMode::Rollback => self.can_place_with_rollback(work, placement),
        }
    }

    /// Inspect the runs a written word takes part in.
    fn runs_valid(&self, grid: &Grid, placement: &Placement) -> bool {
        let across = placement.direction.perpendicular();
        let crossings_ok = placement.cells().all(|(row, col, _)| {
            let formed = scan_word_through(grid, row, col, across);
            formed.chars().count() <= 1 || self.dictionary.contains(&formed)
        });
        if !crossings_ok {
            return false;
        }

        let along = scan_word_through(grid, placement.row, placement.col, placement.direction);
        self.dictionary.contains(&along)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    fn dict() -> Dictionary {
        ["CAT", "CAR", "ARC", "AT"].into_iter().collect()
    }

    fn grid_with_cat() -> Grid {
        let mut grid = Grid::new(5);
        grid.write_word(&Placement::new("CAT", 2, 1, Direction::Horizontal));
        grid
    }

    #[test]
    fn test_fits_bounds() {
        let grid = Grid::new(5);
        assert!(fits(&grid, &Placement::new("CAT", 0, 2, Direction::Horizontal)));
        assert!(!fits(&grid, &Placement::new("CAT", 0, 3, Direction::Horizontal)));
        assert!(!fits(&grid, &Placement::new("CAT", 3, 0, Direction::Vertical)));
    }

    #[test]
    fn test_fits_conflict() {
        let grid = grid_with_cat();
        // C over the existing C is fine, C over A is not
        assert!(fits(&grid, &Placement::new("CAR", 2, 1, Direction::Vertical)));
        assert!(!fits(&grid, &Placement::new("CAR", 2, 2, Direction::Vertical)));
    }

    #[test]
    fn test_overlap_count() {
        let grid = grid_with_cat();
        assert_eq!(overlap_count(&grid, &Placement::new("CAR", 2, 1, Direction::Vertical)), 1);
        assert_eq!(overlap_count(&grid, &Placement::new("CAT", 2, 1, Direction::Horizontal)), 3);
        assert_eq!(overlap_count(&grid, &Placement::new("ARC", 0, 0, Direction::Vertical)), 0);
    }

    #[test]
    fn test_far_coordinates_are_out_of_bounds() {
        let grid = grid_with_cat();
        let right = Placement::new("CAT", 0, usize::MAX, Direction::Horizontal);
        let down = Placement::new("CAT", usize::MAX - 1, 1, Direction::Vertical);

        for p in [&right, &down] {
            assert_eq!(overlap_count(&grid, p), 0);
            assert!(!fits(&grid, p));
            assert!(!can_place(&grid, p, &dict()));
        }
    }

    #[test]
    fn test_valid_crossing_accepted() {
        let grid = grid_with_cat();
        let dict = dict();
        // CAR down through the C of CAT
        assert!(can_place(&grid, &Placement::new("CAR", 2, 1, Direction::Vertical), &dict));
        // ARC down through the A of CAT
        assert!(can_place(&grid, &Placement::new("ARC", 2, 2, Direction::Vertical), &dict));
    }

    #[test]
    fn test_invalid_perpendicular_rejected() {
        let grid = grid_with_cat();
        let dict = dict();
        // CAR across row 3 stacks under CAT and forms CC, AA, TR down the columns
        assert!(!can_place(&grid, &Placement::new("CAR", 3, 1, Direction::Horizontal), &dict));
        // R would land on the C of CAT
        assert!(!can_place(&grid, &Placement::new("CAR", 0, 1, Direction::Vertical), &dict));
    }

    #[test]
    fn test_word_must_be_in_dictionary() {
        let grid = Grid::new(5);
        let dict = dict();
        assert!(!can_place(&grid, &Placement::new("TAC", 0, 0, Direction::Horizontal), &dict));
    }

    #[test]
    fn test_end_on_extension_rejected() {
        let grid = grid_with_cat();
        let dict = dict();
        // "AT" placed directly left of C would read "ATCAT"
        let mut g = Grid::new(6);
        g.write_word(&Placement::new("CAT", 0, 2, Direction::Horizontal));
        assert!(!can_place(&g, &Placement::new("AT", 0, 0, Direction::Horizontal), &dict));
        // "AT" inside CAT reads CAT along the row, which is valid
        assert!(can_place(&grid, &Placement::new("AT", 2, 2, Direction::Horizontal), &dict));
    }

    #[test]
    fn test_invalid_runs() {
        let dict = dict();
        let mut grid = grid_with_cat();
        assert!(invalid_runs(&grid, &dict).is_empty());

        grid.set(3, 1, 'X');
        let bad = invalid_runs(&grid, &dict);
        assert_eq!(bad.len(), 1);
        assert_eq!(bad[0].text, "CX");
    }

    #[test]
    fn test_can_place_leaves_grid_untouched() {
        let grid = grid_with_cat();
        let before = grid.clone();
        let dict = dict();
        let validator = Validator::new(&dict);
        let _ = validator.can_place(&grid, &Placement::new("CAR", 2, 1, Direction::Vertical));
        let _ = validator.can_place(&grid, &Placement::new("CAR", 3, 1, Direction::Horizontal));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_rollback_restores_grid() {
        let dict = dict();
        let validator = Validator::new(&dict).with_mode(ValidationMode::Rollback);
        let mut work = grid_with_cat();
        let before = work.clone();

        assert!(validator.check(&mut work, &Placement::new("CAR", 2, 1, Direction::Vertical)));
        assert_eq!(work, before);
        assert!(!validator.check(&mut work, &Placement::new("CAR", 3, 1, Direction::Horizontal)));
        assert_eq!(work, before);
    }

    #[test]
    fn test_modes_agree() {
        let dict = dict();
        let snapshot = Validator::new(&dict);
        let rollback = Validator::new(&dict).with_mode(ValidationMode::Rollback);
        let grid = grid_with_cat();

        for word in ["CAT", "CAR", "ARC", "AT"] {
            for row in 0..5 {
                for col in 0..5 {
                    for direction in Direction::ALL {
                        let p = Placement::new(word, row, col, direction);
                        let mut work = grid.clone();
                        assert_eq!(
                            snapshot.check(&mut work, &p),
                            rollback.check(&mut work, &p),
                            "modes disagree on {}",
                            p
                        );
                    }
                }
            }
        }
    }
}
