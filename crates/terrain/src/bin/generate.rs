//! Generates a terrain and logs what was built.
//!
//! Run with:
//! ```
//! cargo run -p terrain --bin generate -- [config.json] [--jitter]
//! ```
//!
//! Without a config path the built-in elevation ramp and default sizes are
//! used. `--jitter` shrinks the grid to a random size first.

use std::time::Instant;

use anyhow::Context;
use terrain::color::BandTable;
use terrain::config::{DEFAULT_JITTER_FLOOR, TerrainConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config_path = None;
    let mut jitter = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--jitter" => jitter = true,
            _ => config_path = Some(arg),
        }
    }

    let mut config = match config_path {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config {path}"))?;
            tracing::info!("Loaded config from {path}");
            serde_json::from_str::<TerrainConfig>(&raw)
                .with_context(|| format!("Failed to parse config {path}"))?
        }
        None => TerrainConfig::new(BandTable::elevation_ramp()),
    };

    if jitter {
        config = config.with_jittered_size(DEFAULT_JITTER_FLOOR, &mut rand::thread_rng());
    }

    let start = Instant::now();
    let result = terrain::generate(&config)?;
    let summary = result.summary();

    tracing::info!("Generation completed in {} ms", start.elapsed().as_millis());
    tracing::info!("  Grid: {}x{}", summary.width, summary.height);
    tracing::info!("  Vertices: {}", summary.vertex_count);
    tracing::info!("  Triangles: {}", summary.triangle_count);
    tracing::info!("  Pixels: {}", summary.pixel_count);
    tracing::info!(
        "  Heights: {:.3}..{:.3} (x{})",
        summary.min_height,
        summary.max_height,
        config.height_multiplier
    );

    Ok(())
}
