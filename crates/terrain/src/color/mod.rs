//! Elevation color ramps.
//!
//! - [`BandTable`]: ordered `(threshold, color)` pairs supplied by the host
//! - [`ColorClassifier`]: first-match-wins lookup of a height in a table

mod band;
mod classifier;

pub use band::{BandTable, ColorBand, Rgba};
pub use classifier::ColorClassifier;
