//! Core types: directions, placements, RNG, configuration, errors.
//!
//! Everything here is a leaf: no dependency on the grid or the search.

pub mod direction;
pub mod placement;
pub mod rng;
pub mod config;
pub mod error;

pub use direction::Direction;
pub use placement::Placement;
pub use rng::{GridRng, GridRngState};
pub use config::{GeneratorConfig, ValidationMode, DEFAULT_GRID_SIZE, MAX_GRID_SIZE};
pub use error::GenerateError;
