//! Shared-vertex grid mesh construction.

use tracing::debug;

use crate::error::{Result, TerrainError};
use crate::terrain::HeightField;

/// Vertex indices of one cell's four corners.
///
/// Neighboring cells reference the same indices along their common edge,
/// which keeps the surface watertight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCorners {
    pub top_left: u32,
    pub top_right: u32,
    pub bottom_left: u32,
    pub bottom_right: u32,
}

impl CellCorners {
    /// Corners of cell `(x, y)` in a grid `width` cells wide. Unchecked.
    fn of(width: usize, x: usize, y: usize) -> Self {
        let row = width + 1;
        let top_left = (y * row + x) as u32;
        let bottom_left = ((y + 1) * row + x) as u32;
        Self {
            top_left,
            top_right: top_left + 1,
            bottom_left,
            bottom_right: bottom_left + 1,
        }
    }

    /// The cell's two triangles as a flat index list.
    pub fn triangles(&self) -> [u32; 6] {
        [
            self.top_left,
            self.bottom_left,
            self.top_right,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }
}

/// Vertex, UV and index buffers for a heightfield surface.
///
/// Vertex `(x, y)` lives at `y * (width + 1) + x`. Normals are left to the
/// consumer, see [`TerrainMesh::vertex_normals`].
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMesh {
    width: usize,
    height: usize,
    positions: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
}

impl TerrainMesh {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Flat index of lattice point `(x, y)`.
    pub fn vertex_index(&self, x: usize, y: usize) -> Result<usize> {
        if x > self.width || y > self.height {
            return Err(self.out_of_range(x, y));
        }
        Ok(y * (self.width + 1) + x)
    }

    /// Corner indices of cell `(x, y)`, `x < width`, `y < height`.
    pub fn cell_corners(&self, x: usize, y: usize) -> Result<CellCorners> {
        if x >= self.width || y >= self.height {
            return Err(self.out_of_range(x, y));
        }
        Ok(CellCorners::of(self.width, x, y))
    }

    /// Smooth per-vertex normals: area-weighted face normals summed over every
    /// triangle that shares the vertex, then normalized.
    pub fn vertex_normals(&self) -> Vec<[f32; 3]> {
        let mut normals = vec![[0.0_f32; 3]; self.positions.len()];

        for tri in self.indices.chunks_exact(3) {
            let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let n = face_normal(self.positions[i0], self.positions[i1], self.positions[i2]);
            for i in [i0, i1, i2] {
                normals[i][0] += n[0];
                normals[i][1] += n[1];
                normals[i][2] += n[2];
            }
        }

        for n in normals.iter_mut() {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            *n = if len > 1e-8 {
                [n[0] / len, n[1] / len, n[2] / len]
            } else {
                [0.0, 1.0, 0.0]
            };
        }
        normals
    }

    /// Hands the buffers to the host as `(positions, uvs, indices)`.
    pub fn into_buffers(self) -> (Vec<[f32; 3]>, Vec<[f32; 2]>, Vec<u32>) {
        (self.positions, self.uvs, self.indices)
    }

    fn out_of_range(&self, x: usize, y: usize) -> TerrainError {
        TerrainError::IndexOutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Unnormalized face normal of triangle `a, b, c`.
fn face_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> [f32; 3] {
    let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

/// Builds [`TerrainMesh`]es from heightfields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshBuilder {
    height_multiplier: f32,
}

impl MeshBuilder {
    /// `height_multiplier` scales normalized heights into world units.
    pub fn new(height_multiplier: f32) -> Self {
        Self { height_multiplier }
    }

    pub fn height_multiplier(&self) -> f32 {
        self.height_multiplier
    }

    /// One vertex per lattice point, two triangles per cell.
    ///
    /// Positions are `(x, height * multiplier, y)` and UVs `(x / width,
    /// y / height)`. Triangles are `(top_left, bottom_left, top_right)` and
    /// `(top_right, bottom_left, bottom_right)`, which faces +Y on flat ground.
    pub fn build(&self, field: &HeightField) -> Result<TerrainMesh> {
        if !self.height_multiplier.is_finite() {
            return Err(TerrainError::Configuration(format!(
                "height multiplier must be finite, got {}",
                self.height_multiplier
            )));
        }

        let (width, height) = (field.width(), field.height());
        let vertex_count = (width + 1) * (height + 1);
        if u32::try_from(vertex_count).is_err() {
            return Err(TerrainError::DegenerateInput(format!(
                "{vertex_count} vertices exceed the u32 index range"
            )));
        }

        let mut positions = Vec::with_capacity(vertex_count);
        let mut uvs = Vec::with_capacity(vertex_count);
        for y in 0..=height {
            for x in 0..=width {
                let h = field.at(x, y)? * self.height_multiplier;
                positions.push([x as f32, h, y as f32]);
                uvs.push([x as f32 / width as f32, y as f32 / height as f32]);
            }
        }

        let mut indices = Vec::with_capacity(width * height * 6);
        for y in 0..height {
            for x in 0..width {
                indices.extend_from_slice(&CellCorners::of(width, x, y).triangles());
            }
        }

        debug!(
            vertices = positions.len(),
            triangles = indices.len() / 3,
            "Built terrain mesh"
        );

        Ok(TerrainMesh {
            width,
            height,
            positions,
            uvs,
            indices,
        })
    }
}
