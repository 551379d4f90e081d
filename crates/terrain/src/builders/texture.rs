//! Elevation texture rasterization.

use tracing::debug;

use crate::color::{ColorClassifier, Rgba};
use crate::error::{Result, TerrainError};
use crate::terrain::HeightField;

/// Row-major image, one pixel per cell. Pixel `(x, y)` is at `y * width + x`.
///
/// Meant to be sampled with nearest-neighbor filtering so each cell keeps a
/// crisp band color.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Rgba> {
        if x >= self.width || y >= self.height {
            return Err(TerrainError::IndexOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pixels[y * self.width + x])
    }

    /// Packed 8-bit RGBA bytes for LDR texture uploads.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_rgba8()).collect()
    }

    pub fn into_pixels(self) -> Vec<Rgba> {
        self.pixels
    }
}

/// Rasterizes heightfields through a [`ColorClassifier`].
#[derive(Debug, Clone)]
pub struct TextureBuilder {
    classifier: ColorClassifier,
}

impl TextureBuilder {
    pub fn new(classifier: ColorClassifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &ColorClassifier {
        &self.classifier
    }

    /// Classifies the height at each cell's top-left lattice point.
    ///
    /// Only cells `x < width`, `y < height` are rasterized; the last lattice
    /// row and column exist for the mesh alone.
    pub fn build(&self, field: &HeightField, width: usize, height: usize) -> Result<PixelBuffer> {
        if width == 0 || height == 0 {
            return Err(TerrainError::DegenerateInput(format!(
                "texture dimensions must be positive, got {width}x{height}"
            )));
        }
        if width > field.width() || height > field.height() {
            return Err(TerrainError::IndexOutOfRange {
                x: width,
                y: height,
                width: field.width(),
                height: field.height(),
            });
        }

        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(self.classifier.classify(field.at(x, y)?));
            }
        }

        debug!(width, height, "Rasterized terrain texture");

        Ok(PixelBuffer {
            width,
            height,
            pixels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BandTable, ColorBand};

    const LOW: Rgba = Rgba::rgb(0.0, 0.0, 1.0);
    const HIGH: Rgba = Rgba::rgb(1.0, 1.0, 1.0);

    fn two_band_builder() -> TextureBuilder {
        let table = BandTable::new(vec![ColorBand::new(0.5, LOW), ColorBand::new(1.0, HIGH)]);
        TextureBuilder::new(ColorClassifier::new(table).unwrap())
    }

    #[test]
    fn test_pixel_count_excludes_last_lattice_row() {
        let field = HeightField::from_samples(2, 1, vec![0.0; 6]).unwrap();
        let texture = two_band_builder().build(&field, 2, 1).unwrap();
        assert_eq!(texture.pixels().len(), 2);
    }

    #[test]
    fn test_row_major_pixels() {
        // 2x2 grid, lattice is 3x3. Only (1, 0) is high.
        #[rustfmt::skip]
        let samples = vec![
            0.1, 0.9, 0.1,
            0.1, 0.1, 0.1,
            0.1, 0.1, 0.1,
        ];
        let field = HeightField::from_samples(2, 2, samples).unwrap();
        let texture = two_band_builder().build(&field, 2, 2).unwrap();
        assert_eq!(texture.pixels(), &[LOW, HIGH, LOW, LOW]);
        assert_eq!(texture.get(1, 0).unwrap(), HIGH);
        assert_eq!(texture.get(0, 1).unwrap(), LOW);
    }

    #[test]
    fn test_edge_samples_not_rasterized() {
        #[rustfmt::skip]
        let samples = vec![
            0.1, 0.9,
            0.9, 0.9,
        ];
        let field = HeightField::from_samples(1, 1, samples).unwrap();
        let texture = two_band_builder().build(&field, 1, 1).unwrap();
        assert_eq!(texture.pixels(), &[LOW]);
    }

    #[test]
    fn test_oversized_request_fails() {
        let field = HeightField::from_samples(1, 1, vec![0.0; 4]).unwrap();
        assert!(matches!(
            two_band_builder().build(&field, 3, 1),
            Err(TerrainError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            two_band_builder().build(&field, 0, 1),
            Err(TerrainError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_one_past_field_size_fails() {
        let field = HeightField::from_samples(1, 1, vec![0.0; 4]).unwrap();
        let builder = two_band_builder();
        for (width, height) in [(2, 1), (1, 2), (2, 2)] {
            assert_eq!(
                builder.build(&field, width, height),
                Err(TerrainError::IndexOutOfRange {
                    x: width,
                    y: height,
                    width: 1,
                    height: 1,
                })
            );
        }
    }

    #[test]
    fn test_smaller_region_allowed() {
        let field = HeightField::from_samples(2, 2, vec![0.9; 9]).unwrap();
        let texture = two_band_builder().build(&field, 1, 2).unwrap();
        assert_eq!(texture.pixels(), &[HIGH, HIGH]);
    }

    #[test]
    fn test_to_rgba8_layout() {
        let field = HeightField::from_samples(2, 1, vec![0.1, 0.9, 0.9, 0.1, 0.1, 0.1]).unwrap();
        let texture = two_band_builder().build(&field, 2, 1).unwrap();
        assert_eq!(texture.to_rgba8(), vec![0, 0, 255, 255, 255, 255, 255, 255]);
    }

    #[test]
    fn test_get_out_of_range() {
        let field = HeightField::from_samples(1, 1, vec![0.0; 4]).unwrap();
        let texture = two_band_builder().build(&field, 1, 1).unwrap();
        assert!(texture.get(1, 0).is_err());
    }
}
