//! Color values and elevation band tables.

use serde::{Deserialize, Serialize};

/// Linear RGBA color. Channels are not clamped, so values above 1.0 (HDR
/// emission) survive until a host quantizes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Clamps each channel to `[0, 1]` and quantizes to 8 bits.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// One entry of a band table: heights up to `threshold` get `color`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorBand {
    pub threshold: f32,
    pub color: Rgba,
}

impl ColorBand {
    pub const fn new(threshold: f32, color: Rgba) -> Self {
        Self { threshold, color }
    }
}

/// Ordered color bands plus the unit convention their thresholds use.
///
/// Order is significant: classification picks the first band whose
/// threshold is at or above the height, so bands are normally listed in
/// ascending threshold order.
///
/// `threshold_scale` multiplies every threshold before comparison. Heights
/// are normalized to `[0, 1]`, so the default of `1.0` means thresholds are
/// written in the same unit. Tables authored in percent use `100.0` only if
/// heights are also expressed in percent; otherwise every height lands in
/// the first band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandTable {
    pub bands: Vec<ColorBand>,
    #[serde(default = "default_threshold_scale")]
    pub threshold_scale: f32,
}

fn default_threshold_scale() -> f32 {
    1.0
}

impl BandTable {
    pub fn new(bands: Vec<ColorBand>) -> Self {
        Self {
            bands,
            threshold_scale: default_threshold_scale(),
        }
    }

    /// Sets the threshold unit multiplier.
    pub fn with_threshold_scale(mut self, scale: f32) -> Self {
        self.threshold_scale = scale;
        self
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Whether thresholds are non-decreasing in table order.
    pub fn is_ascending(&self) -> bool {
        self.bands
            .windows(2)
            .all(|pair| pair[0].threshold <= pair[1].threshold)
    }

    /// Water, beach, grassland, forest, rock and snow over normalized heights.
    pub fn elevation_ramp() -> Self {
        Self::new(vec![
            ColorBand::new(0.30, Rgba::rgb(0.05, 0.15, 0.45)), // Deep water
            ColorBand::new(0.40, Rgba::rgb(0.12, 0.35, 0.65)), // Shallow water
            ColorBand::new(0.45, Rgba::rgb(0.85, 0.80, 0.55)), // Sand
            ColorBand::new(0.55, Rgba::rgb(0.30, 0.60, 0.20)), // Grass
            ColorBand::new(0.65, Rgba::rgb(0.15, 0.40, 0.12)), // Forest
            ColorBand::new(0.80, Rgba::rgb(0.45, 0.40, 0.35)), // Rock
            ColorBand::new(1.00, Rgba::rgb(0.95, 0.95, 1.00)), // Snow
        ])
    }
}
