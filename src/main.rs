//! Render the Kiswahili preset as a crossword.
//!
//! Settings come from the environment:
//! - `CROSSGRID_SEED`: RNG seed (default: 42), or the first argument
//! - `CROSSGRID_SIZE`: grid edge length (default: 15)
//! - `RUST_LOG`: log filter (default: `crossgrid=info`)

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crossgrid::presets::kiswahili;
use crossgrid::{Generator, GeneratorConfig, DEFAULT_GRID_SIZE};

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{key} must be a number, got {value:?}")),
        Err(_) => Ok(default),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("crossgrid=info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("seed must be a number, got {arg:?}"))?,
        None => env_or("CROSSGRID_SEED", 42u64)?,
    };
    let grid_size = env_or("CROSSGRID_SIZE", DEFAULT_GRID_SIZE)?;

    let dictionary = kiswahili::dictionary();
    let config = GeneratorConfig::default()
        .with_seed(seed)
        .with_grid_size(grid_size);

    let report = Generator::new(&dictionary, config)
        .generate(&kiswahili::WORDS)
        .context("crossword generation failed")?;

    println!("Kiswahili crossword (seed {seed})\n");
    print!("{report}");
    Ok(())
}
