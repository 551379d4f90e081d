//! Configuration types for terrain generation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::BandTable;
use crate::error::{Result, TerrainError};
use crate::terrain::lattice_len;

/// Smallest grid size [`TerrainConfig::with_jittered_size`] picks by default.
pub const DEFAULT_JITTER_FLOOR: u32 = 100;

/// Everything one generation run needs, supplied by the host.
///
/// Only the band table is mandatory; it has no default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Number of cells along x (and texture width in pixels).
    #[serde(default = "default_size")]
    pub width: u32,

    /// Number of cells along y (and texture height in pixels).
    #[serde(default = "default_size")]
    pub height: u32,

    /// Noise frequency divisor. Larger values stretch features.
    #[serde(default = "default_scale")]
    pub scale: f32,

    /// Vertical world-space scale applied to normalized heights.
    #[serde(default = "default_height_multiplier")]
    pub height_multiplier: f32,

    /// Seed for the Perlin sampler.
    #[serde(default)]
    pub seed: u32,

    /// Ordered color bands for the texture.
    pub bands: BandTable,
}

fn default_size() -> u32 {
    256
}

fn default_scale() -> f32 {
    20.0
}

fn default_height_multiplier() -> f32 {
    10.0
}

impl TerrainConfig {
    /// Creates a config with default sizes, scale and multiplier.
    pub fn new(bands: BandTable) -> Self {
        Self {
            width: default_size(),
            height: default_size(),
            scale: default_scale(),
            height_multiplier: default_height_multiplier(),
            seed: 0,
            bands,
        }
    }

    /// Sets the grid size in cells.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the noise scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the vertical scale.
    pub fn with_height_multiplier(mut self, multiplier: f32) -> Self {
        self.height_multiplier = multiplier;
        self
    }

    /// Sets the noise seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces each grid dimension with a random size in `[min, current)`.
    ///
    /// Generation never does this on its own; hosts that want varied terrain
    /// sizes call it before [`crate::generate`]. A dimension already at or
    /// below `min` is left unchanged.
    pub fn with_jittered_size(mut self, min: u32, rng: &mut impl Rng) -> Self {
        self.width = jitter_dimension("width", self.width, min, rng);
        self.height = jitter_dimension("height", self.height, min, rng);
        self
    }

    /// Rejects configs that cannot produce a terrain.
    pub fn validate(&self) -> Result<()> {
        lattice_len(self.width as usize, self.height as usize)?;
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(TerrainError::DegenerateInput(format!(
                "scale must be a positive finite number, got {}",
                self.scale
            )));
        }
        if !self.height_multiplier.is_finite() {
            return Err(TerrainError::Configuration(format!(
                "height multiplier must be finite, got {}",
                self.height_multiplier
            )));
        }
        if self.bands.is_empty() {
            return Err(TerrainError::Configuration(
                "color band table is empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn jitter_dimension(name: &str, value: u32, min: u32, rng: &mut impl Rng) -> u32 {
    let min = min.max(1);
    if value <= min {
        warn!("Cannot jitter {name} {value} with floor {min}; keeping it");
        return value;
    }
    rng.gen_range(min..value)
}
