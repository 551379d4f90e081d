//! Lattice of height samples.

use tracing::debug;

use super::sampler::NoiseSampler;
use crate::error::{Result, TerrainError};

/// Height samples on a `(width + 1) x (height + 1)` lattice.
///
/// Every one of the `width * height` cells has four distinct corner samples.
/// Samples are stored row-major (`y * (width + 1) + x`) and never change after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    width: usize,
    height: usize,
    samples: Vec<f32>,
}

impl HeightField {
    /// Samples `noise` at every lattice point, edges included.
    ///
    /// Each sample is `noise.sample(x / scale, y / scale)`, so a larger
    /// `scale` stretches terrain features.
    pub fn build(
        width: usize,
        height: usize,
        noise: &dyn NoiseSampler,
        scale: f32,
    ) -> Result<Self> {
        let lattice_len = lattice_len(width, height)?;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(TerrainError::DegenerateInput(format!(
                "scale must be a positive finite number, got {scale}"
            )));
        }

        let scale = f64::from(scale);
        let mut samples = Vec::with_capacity(lattice_len);
        for y in 0..=height {
            for x in 0..=width {
                let sample = noise.sample(x as f64 / scale, y as f64 / scale);
                samples.push(sample as f32);
            }
        }

        debug!(width, height, samples = samples.len(), "Sampled height field");

        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Wraps precomputed row-major samples.
    pub fn from_samples(width: usize, height: usize, samples: Vec<f32>) -> Result<Self> {
        let expected = lattice_len(width, height)?;
        if samples.len() != expected {
            return Err(TerrainError::DegenerateInput(format!(
                "expected {expected} samples for a {width}x{height} grid, got {}",
                samples.len()
            )));
        }

        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Height at lattice point `(x, y)`, `0 <= x <= width`, `0 <= y <= height`.
    pub fn at(&self, x: usize, y: usize) -> Result<f32> {
        if x > self.width || y > self.height {
            return Err(TerrainError::IndexOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.samples[y * (self.width + 1) + x])
    }

    /// Number of cells along x.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells along y.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of lattice samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Lowest and highest sample.
    pub fn range(&self) -> (f32, f32) {
        self.samples
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &h| {
                (lo.min(h), hi.max(h))
            })
    }
}

/// Number of lattice points of a `width x height` grid.
///
/// Fails for empty grids and for lattices whose points cannot all be
/// addressed by `u32` mesh indices.
pub(crate) fn lattice_len(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(TerrainError::DegenerateInput(format!(
            "grid dimensions must be positive, got {width}x{height}"
        )));
    }
    width
        .checked_add(1)
        .zip(height.checked_add(1))
        .and_then(|(w, h)| w.checked_mul(h))
        .filter(|&len| u32::try_from(len).is_ok())
        .ok_or_else(|| {
            TerrainError::DegenerateInput(format!(
                "{width}x{height} grid exceeds the u32 vertex index range"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::sampler::{ConstantSampler, PerlinSampler};

    #[test]
    fn test_samples_inclusive_lattice() {
        let field = HeightField::build(4, 3, &PerlinSampler::new(1), 2.0).unwrap();
        assert_eq!(field.len(), 5 * 4);
        assert!(field.at(4, 3).is_ok());
    }

    #[test]
    fn test_sample_coordinates_divided_by_scale() {
        let sampler = |x: f64, y: f64| (x + 10.0 * y) / 100.0;
        let field = HeightField::build(4, 4, &sampler, 4.0).unwrap();
        // (4 / 4) + 10 * (2 / 4) = 6
        assert!((field.at(4, 2).unwrap() - 0.06).abs() < 1e-6);
        assert_eq!(field.at(0, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_row_major_layout() {
        let sampler = |x: f64, y: f64| (x + 10.0 * y) / 100.0;
        let field = HeightField::build(2, 2, &sampler, 1.0).unwrap();
        // Row y = 1 starts at index width + 1.
        assert!((field.samples()[3] - 0.10).abs() < 1e-6);
        assert!((field.samples()[5] - 0.12).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_lookup() {
        let field = HeightField::build(2, 2, &ConstantSampler::new(0.5), 1.0).unwrap();
        assert_eq!(
            field.at(3, 0),
            Err(TerrainError::IndexOutOfRange {
                x: 3,
                y: 0,
                width: 2,
                height: 2
            })
        );
        assert!(field.at(0, 3).is_err());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let sampler = ConstantSampler::new(0.5);
        assert!(matches!(
            HeightField::build(0, 4, &sampler, 1.0),
            Err(TerrainError::DegenerateInput(_))
        ));
        assert!(matches!(
            HeightField::build(4, 0, &sampler, 1.0),
            Err(TerrainError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_bad_scale_rejected() {
        let sampler = ConstantSampler::new(0.5);
        for scale in [0.0, -3.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                HeightField::build(2, 2, &sampler, scale),
                Err(TerrainError::DegenerateInput(_))
            ));
        }
    }

    #[test]
    fn test_oversized_lattice_rejected() {
        let sampler = ConstantSampler::new(0.5);
        let sizes = [
            (usize::MAX, usize::MAX),
            (65_536, 65_536),
            (u32::MAX as usize, 1),
        ];
        for (width, height) in sizes {
            assert!(matches!(
                HeightField::build(width, height, &sampler, 1.0),
                Err(TerrainError::DegenerateInput(_))
            ));
            assert!(matches!(
                HeightField::from_samples(width, height, Vec::new()),
                Err(TerrainError::DegenerateInput(_))
            ));
        }
    }

    #[test]
    fn test_lattice_len_at_index_limit() {
        // 65_535 x 65_535 cells has exactly 2^32 lattice points.
        assert!(lattice_len(65_535, 65_535).is_err());
        assert_eq!(lattice_len(65_535, 65_534).unwrap(), 65_536 * 65_535);
        assert_eq!(lattice_len(2, 3).unwrap(), 12);
    }

    #[test]
    fn test_from_samples_length_checked() {
        assert!(HeightField::from_samples(1, 1, vec![0.0; 4]).is_ok());
        assert!(HeightField::from_samples(1, 1, vec![0.0; 3]).is_err());
    }

    #[test]
    fn test_range() {
        let field = HeightField::from_samples(1, 1, vec![0.2, 0.9, 0.1, 0.5]).unwrap();
        assert_eq!(field.range(), (0.1, 0.9));
    }
}
