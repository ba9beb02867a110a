//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use crossgrid::presets::kiswahili;
use crossgrid::{
    invalid_runs, overlap_count, Dictionary, GenerationReport, Grid, PlacementPhase,
};

/// The Kiswahili preset dictionary.
pub fn kiswahili_dict() -> Dictionary {
    kiswahili::dictionary()
}

/// Rebuild the grid one commit at a time and check, after every commit,
/// that all runs are valid and the recorded overlap matches the grid the
/// word was placed on.
///
/// Returns the rebuilt grid.
pub fn replay(report: &GenerationReport, grid_size: usize, dict: &Dictionary) -> Grid {
    let mut grid = Grid::new(grid_size);

    for (step, placed) in report.placed.iter().enumerate() {
        let overlap = overlap_count(&grid, &placed.placement);
        assert_eq!(
            overlap, placed.overlap,
            "step {}: recorded overlap for {} does not match",
            step, placed.placement
        );
        match placed.phase {
            PlacementPhase::Overlap => assert!(overlap >= 1, "overlap placement with no overlap"),
            PlacementPhase::Centered => assert_eq!(step, 0, "only the first word is centered"),
            PlacementPhase::Anywhere => {}
        }

        grid.write_word(&placed.placement);

        let bad = invalid_runs(&grid, dict);
        assert!(bad.is_empty(), "step {}: invalid runs {:?}", step, bad);
    }

    grid
}
