//! Procedural terrain generation.
//!
//! This crate turns coherent noise into the three buffers a renderer needs to
//! draw a terrain: a heightfield, an elevation-colored texture, and a
//! shared-vertex grid mesh. Displaying them is left to the host.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use terrain::prelude::*;
//!
//! let config = TerrainConfig::new(BandTable::elevation_ramp())
//!     .with_size(128, 128)
//!     .with_scale(20.0)
//!     .with_height_multiplier(12.0)
//!     .with_seed(42);
//!
//! let result = generate(&config)?;
//! let (positions, uvs, indices) = result.mesh.into_buffers();
//! let pixels = result.texture.to_rgba8();
//! ```

pub mod builders;
pub mod color;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod terrain;

pub use error::{Result, TerrainError};
pub use pipeline::{GenerationResult, GenerationSummary, generate, generate_with};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{CellCorners, MeshBuilder, PixelBuffer, TerrainMesh, TextureBuilder};
    pub use crate::color::{BandTable, ColorBand, ColorClassifier, Rgba};
    pub use crate::config::{DEFAULT_JITTER_FLOOR, TerrainConfig};
    pub use crate::terrain::{ConstantSampler, HeightField, NoiseSampler, PerlinSampler};
    pub use crate::{GenerationResult, GenerationSummary, TerrainError, generate, generate_with};
}
