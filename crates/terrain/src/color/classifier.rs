//! Height to color classification.

use super::band::{BandTable, Rgba};
use crate::error::{Result, TerrainError};

/// Maps heights to colors using first-match-wins over a band table.
#[derive(Debug, Clone)]
pub struct ColorClassifier {
    table: BandTable,
    fallback: Rgba,
}

impl ColorClassifier {
    /// Fails on an empty table or a threshold scale that is not a positive
    /// finite number. A negative scale would invert the threshold order.
    pub fn new(table: BandTable) -> Result<Self> {
        let Some(last) = table.bands.last() else {
            return Err(TerrainError::Configuration(
                "color band table is empty".to_string(),
            ));
        };
        let fallback = last.color;
        if !table.threshold_scale.is_finite() || table.threshold_scale <= 0.0 {
            return Err(TerrainError::Configuration(format!(
                "threshold scale must be a positive finite number, got {}",
                table.threshold_scale
            )));
        }
        Ok(Self { table, fallback })
    }

    /// Color of the first band, in table order, whose scaled threshold is at
    /// or above `height`.
    ///
    /// Heights above every threshold (and NaN) fall back to the last band's
    /// color, so every pixel gets a defined value.
    pub fn classify(&self, height: f32) -> Rgba {
        let scale = self.table.threshold_scale;
        self.table
            .bands
            .iter()
            .find(|band| band.threshold * scale >= height)
            .map_or(self.fallback, |band| band.color)
    }

    pub fn table(&self) -> &BandTable {
        &self.table
    }
}
