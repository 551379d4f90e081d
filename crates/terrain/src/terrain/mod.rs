//! Heightfield generation.
//!
//! This module samples coherent noise onto the height lattice that both the
//! texture and the mesh are built from.

mod height_field;
mod sampler;

pub use height_field::HeightField;
pub(crate) use height_field::lattice_len;
pub use sampler::{ConstantSampler, NoiseSampler, PerlinSampler};
