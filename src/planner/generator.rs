//! Generation loop: shuffle, seed the grid, then place each word.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::core::{Direction, GenerateError, GeneratorConfig, GridRng, GridRngState, Placement};
use crate::dictionary::{normalize, Dictionary};
use crate::grid::Grid;
use crate::validator::{invalid_runs, overlap_count, Validator};

use super::report::{GenerationReport, PlacedWord, PlacementPhase, SkipReason, SkippedWord};
use super::search::Planner;
use super::strategy::CandidateScan;

/// Start cell for the first word.
///
/// Horizontal words are centered on the middle row. Vertical words start
/// on the middle row of the middle column, so words longer than the lower
/// half of the grid do not fit there.
#[must_use]
pub fn center_start(grid_size: usize, word_len: usize, direction: Direction) -> (usize, usize) {
    let mid = grid_size / 2;
    match direction {
        Direction::Horizontal => (mid, grid_size.saturating_sub(word_len) / 2),
        Direction::Vertical => (mid, mid),
    }
}

/// Crossword generator.
///
/// Owns the RNG and the planner for the duration of a run. Runs are
/// independent: each `generate` call starts from an empty grid but
/// continues the RNG sequence.
///
/// ## Example
///
/// ```
/// use crossgrid::{Dictionary, Generator, GeneratorConfig};
///
/// let dict: Dictionary = ["CAT", "CAR", "ARC"].into_iter().collect();
/// let mut generator = Generator::new(&dict, GeneratorConfig::default().with_seed(7));
///
/// let report = generator.generate(&["cat", "car"]).unwrap();
/// assert!(!report.placed.is_empty());
/// ```
pub struct Generator<'d> {
    config: GeneratorConfig,
    rng: GridRng,
    planner: Planner<'d>,
}

impl<'d> Generator<'d> {
    /// Create a generator seeded from `config.seed`.
    pub fn new(dictionary: &'d Dictionary, config: GeneratorConfig) -> Self {
        let rng = GridRng::new(config.seed);
        let validator = Validator::new(dictionary).with_mode(config.validation);
        Self {
            config,
            rng,
            planner: Planner::new(validator),
        }
    }

    /// Use a caller-supplied RNG instead of one seeded from the config.
    #[must_use]
    pub fn with_rng(mut self, rng: GridRng) -> Self {
        self.rng = rng;
        self
    }

    /// Set a custom candidate scan.
    #[must_use]
    pub fn with_scan<S: CandidateScan + 'static>(mut self, scan: S) -> Self {
        self.planner.set_scan(Box::new(scan));
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Current RNG position.
    #[must_use]
    pub fn rng_state(&self) -> GridRngState {
        self.rng.state()
    }

    /// Normalize the word list and reject configurations that cannot
    /// produce a meaningful run.
    fn prepare<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<String>, GenerateError> {
        self.config.validate()?;
        if words.is_empty() {
            return Err(GenerateError::EmptyWordList);
        }

        let grid_size = self.config.grid_size;
        let mut normalized = Vec::with_capacity(words.len());
        for (index, word) in words.iter().enumerate() {
            let word = normalize(word.as_ref());
            if word.is_empty() {
                return Err(GenerateError::EmptyWord { index });
            }
            let len = word.chars().count();
            if self.config.strict_lengths && len > grid_size {
                return Err(GenerateError::WordTooLong {
                    word,
                    len,
                    grid_size,
                });
            }
            normalized.push(word);
        }

        if normalized.iter().all(|w| w.chars().count() > grid_size) {
            return Err(GenerateError::NoWordFits { grid_size });
        }
        Ok(normalized)
    }

    /// Generate a grid from `words`.
    ///
    /// Words are shuffled, the first is centered, and each remaining word
    /// goes to its best overlapping position or, failing that, a random
    /// valid position. Words that cannot be placed are reported, not
    /// retried.
    pub fn generate<S: AsRef<str>>(&mut self, words: &[S]) -> Result<GenerationReport, GenerateError> {
        let mut words = self.prepare(words)?;
        let start = Instant::now();
        let seed = self.rng.seed();
        let grid_size = self.config.grid_size;

        self.planner.stats_mut().reset();
        self.rng.shuffle(&mut words);

        let mut run = Progress {
            grid: Grid::new(grid_size),
            placed: Vec::new(),
            skipped: Vec::new(),
        };

        let mut words = words.into_iter();
        if let Some(first) = words.next() {
            self.place_first(&mut run, first);
        }
        for word in words {
            self.place_next(&mut run, word);
        }

        let mut stats = self.planner.stats().clone();
        stats.time_us = start.elapsed().as_micros() as u64;

        info!(
            placed = run.placed.len(),
            skipped = run.skipped.len(),
            candidates = stats.candidates_tried,
            "generation finished"
        );

        Ok(GenerationReport {
            grid: run.grid,
            placed: run.placed,
            skipped: run.skipped,
            stats,
            seed,
        })
    }

    fn place_first(&mut self, run: &mut Progress, word: String) {
        let len = word.chars().count();
        if len > self.config.grid_size {
            run.skip(word, SkipReason::TooLong);
            return;
        }

        let direction = self
            .rng
            .choose(&Direction::ALL)
            .copied()
            .unwrap_or(Direction::Horizontal);
        let (row, col) = center_start(self.config.grid_size, len, direction);
        let placement = Placement::new(word, row, col, direction);

        if self.planner.check(&run.grid, &placement) {
            self.commit(run, placement, PlacementPhase::Centered, 0);
        } else {
            run.skip(placement.word, SkipReason::FirstWordRejected);
        }
    }

    fn place_next(&mut self, run: &mut Progress, word: String) {
        if word.chars().count() > self.config.grid_size {
            run.skip(word, SkipReason::TooLong);
            return;
        }

        if let Some(candidate) = self.planner.find_overlap(&run.grid, &word) {
            self.planner.stats_mut().overlap_placements += 1;
            self.commit(run, candidate.placement, PlacementPhase::Overlap, candidate.overlap);
            return;
        }

        match self.planner.place_anywhere(&run.grid, &word, &mut self.rng) {
            Some(placement) => {
                self.planner.stats_mut().fallback_placements += 1;
                let overlap = overlap_count(&run.grid, &placement);
                self.commit(run, placement, PlacementPhase::Anywhere, overlap);
            }
            None => run.skip(word, SkipReason::NoValidPlacement),
        }
    }

    fn commit(&self, run: &mut Progress, placement: Placement, phase: PlacementPhase, overlap: usize) {
        run.grid.write_word(&placement);
        debug_assert!(
            invalid_runs(&run.grid, self.planner.validator().dictionary()).is_empty(),
            "committing {placement} left an invalid run"
        );
        debug!(
            word = %placement.word,
            row = placement.row,
            col = placement.col,
            direction = %placement.direction,
            ?phase,
            overlap,
            "placed word"
        );
        run.placed.push(PlacedWord {
            placement,
            phase,
            overlap,
        });
    }
}

/// Mutable state of one generation run.
struct Progress {
    grid: Grid,
    placed: Vec<PlacedWord>,
    skipped: Vec<SkippedWord>,
}

impl Progress {
    fn skip(&mut self, word: String, reason: SkipReason) {
        warn!(word = %word, %reason, "skipped word");
        self.skipped.push(SkippedWord { word, reason });
    }
}

/// Generate with a fresh generator. Convenience for one-off runs.
pub fn generate<S: AsRef<str>>(
    words: &[S],
    dictionary: &Dictionary,
    config: GeneratorConfig,
) -> Result<GenerationReport, GenerateError> {
    Generator::new(dictionary, config).generate(words)
}
