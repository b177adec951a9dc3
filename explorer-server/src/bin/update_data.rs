//! Rebuild the lines and places documents from the raw exports.
//!
//! Reads from `EXPLORER_DATA_DIR` (default `data`) and seeds ratings with
//! `EXPLORER_SEED`.

use std::error::Error;

use tracing_subscriber::EnvFilter;

use explorer_server::transform::{self, TransformConfig};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = TransformConfig::from_env()?;
    tracing::info!(
        stations = %config.raw_stations.display(),
        seed = config.seed,
        "transforming raw data"
    );

    let summary = transform::run(&config)?;
    println!(
        "Wrote {} lines to {} and {} places to {} ({} skipped)",
        summary.lines,
        config.lines_out.display(),
        summary.places,
        config.places_out.display(),
        summary.skipped
    );
    Ok(())
}
