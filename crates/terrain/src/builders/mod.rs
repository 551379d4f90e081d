//! Output buffer construction.
//!
//! - [`MeshBuilder`]: shared-vertex grid mesh from a heightfield
//! - [`TextureBuilder`]: per-cell elevation colors from a heightfield

mod mesh;
mod texture;

pub use mesh::{CellCorners, MeshBuilder, TerrainMesh};
pub use texture::{PixelBuffer, TextureBuilder};
