//! Coherent noise for the small-wave octaves.
//!
//! The wave model only needs "bounded continuous 3D noise", so it talks to
//! the [`CoherentNoise`] trait. The default generator wraps seeded Perlin
//! noise from the `noise` crate.

use noise::{NoiseFn, Perlin};

/// Smooth, deterministic pseudo-random function of a 3D position
///
/// Implementations must be continuous and return values in [-1, 1].
pub trait CoherentNoise {
    fn sample(&self, x: f32, y: f32, z: f32) -> f32;
}

/// Noise generator for ocean ripples
#[derive(Clone, Debug)]
pub struct NoiseGenerator {
    perlin: Perlin,
}

impl NoiseGenerator {
    /// Create new noise generator with seed
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }
}

impl Default for NoiseGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

impl CoherentNoise for NoiseGenerator {
    /// Sample 3D Perlin noise at position
    ///
    /// Returns value in range [-1, 1]
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        let value = self.perlin.get([x as f64, y as f64, z as f64]) as f32;
        // Perlin can overshoot its nominal range by a hair near lattice diagonals
        value.clamp(-1.0, 1.0)
    }
}

impl<N: CoherentNoise + ?Sized> CoherentNoise for &N {
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        (**self).sample(x, y, z)
    }
}
