//! Coherent noise sources for heightfield generation.

use noise::{NoiseFn, Perlin};

/// A 2D coherent-noise field.
///
/// Implementations must be deterministic and continuous in their inputs, and
/// must return values in `[0, 1]`. Coordinates arrive already divided by the
/// terrain scale; samplers never see the scale themselves.
pub trait NoiseSampler {
    fn sample(&self, x: f64, y: f64) -> f64;
}

impl<F> NoiseSampler for F
where
    F: Fn(f64, f64) -> f64,
{
    fn sample(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// Single-frequency Perlin noise remapped to `[0, 1]`.
#[derive(Debug, Clone)]
pub struct PerlinSampler {
    perlin: Perlin,
    seed: u32,
}

impl PerlinSampler {
    /// Creates a sampler whose field is fully determined by `seed`.
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl NoiseSampler for PerlinSampler {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let raw = self.perlin.get([x, y]); // Range: -1 to 1
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

/// Returns the same height everywhere. Produces perfectly flat terrain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSampler(f64);

impl ConstantSampler {
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl NoiseSampler for ConstantSampler {
    fn sample(&self, _x: f64, _y: f64) -> f64 {
        self.0
    }
}
