//! One-shot terrain generation.

use tracing::{debug, info};

use crate::builders::{MeshBuilder, PixelBuffer, TerrainMesh, TextureBuilder};
use crate::color::ColorClassifier;
use crate::config::TerrainConfig;
use crate::error::Result;
use crate::terrain::{HeightField, NoiseSampler, PerlinSampler};

/// Everything a generation run produces. Immutable snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub height_field: HeightField,
    pub texture: PixelBuffer,
    pub mesh: TerrainMesh,
}

/// Size and height statistics for a generated terrain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSummary {
    pub width: usize,
    pub height: usize,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub pixel_count: usize,
    pub min_height: f32,
    pub max_height: f32,
}

impl GenerationResult {
    pub fn summary(&self) -> GenerationSummary {
        let (min_height, max_height) = self.height_field.range();
        GenerationSummary {
            width: self.height_field.width(),
            height: self.height_field.height(),
            vertex_count: self.mesh.vertex_count(),
            triangle_count: self.mesh.triangle_count(),
            pixel_count: self.texture.pixels().len(),
            min_height,
            max_height,
        }
    }
}

/// Generates terrain with Perlin noise seeded from `config.seed`.
pub fn generate(config: &TerrainConfig) -> Result<GenerationResult> {
    generate_with(config, &PerlinSampler::new(config.seed))
}

/// Generates terrain from an arbitrary noise source.
///
/// Deterministic for a deterministic `noise`: repeated calls with the same
/// inputs produce identical buffers. Fails without partial output.
pub fn generate_with(config: &TerrainConfig, noise: &dyn NoiseSampler) -> Result<GenerationResult> {
    config.validate()?;
    let (width, height) = (config.width as usize, config.height as usize);

    debug!(width, height, scale = config.scale, "Generating terrain");

    let classifier = ColorClassifier::new(config.bands.clone())?;
    let height_field = HeightField::build(width, height, noise, config.scale)?;
    let texture = TextureBuilder::new(classifier).build(&height_field, width, height)?;
    let mesh = MeshBuilder::new(config.height_multiplier).build(&height_field)?;

    let result = GenerationResult {
        height_field,
        texture,
        mesh,
    };

    let summary = result.summary();
    info!(
        "Generated {}x{} terrain: {} vertices, {} triangles, heights {:.3}..{:.3}",
        summary.width,
        summary.height,
        summary.vertex_count,
        summary.triangle_count,
        summary.min_height,
        summary.max_height
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::BandTable;
    use crate::error::TerrainError;
    use crate::terrain::ConstantSampler;

    #[test]
    fn test_generate_sizes() {
        let config = TerrainConfig::new(BandTable::elevation_ramp()).with_size(16, 8);
        let result = generate(&config).unwrap();
        let summary = result.summary();
        assert_eq!(summary.vertex_count, 17 * 9);
        assert_eq!(summary.triangle_count, 16 * 8 * 2);
        assert_eq!(summary.pixel_count, 16 * 8);
        assert!(summary.min_height >= 0.0 && summary.max_height <= 1.0);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = TerrainConfig::new(BandTable::elevation_ramp()).with_size(0, 8);
        assert!(matches!(
            generate(&config),
            Err(TerrainError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_custom_sampler() {
        let config = TerrainConfig::new(BandTable::elevation_ramp())
            .with_size(3, 3)
            .with_height_multiplier(2.0);
        let result = generate_with(&config, &ConstantSampler::new(0.25)).unwrap();
        assert!(result.mesh.positions().iter().all(|p| p[1] == 0.5));
    }
}
