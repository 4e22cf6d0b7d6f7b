//! Ocean grid geometry.

/// Tessellated surface the wave model is evaluated on
#[derive(Debug, Clone)]
pub struct OceanGeometry {
    /// Edge length of the square plane (surface units)
    pub size_m: f32,

    /// Quads per side (e.g., 512 = 263,169 vertices)
    pub segments: usize,

    /// Seed for the ripple noise
    pub noise_seed: u32,
}

impl Default for OceanGeometry {
    fn default() -> Self {
        Self {
            size_m: 2.0,
            segments: 512,
            noise_seed: 0,
        }
    }
}

impl OceanGeometry {
    /// Distance between neighbouring vertices
    pub fn spacing(&self) -> f32 {
        self.size_m / self.segments.max(1) as f32
    }
}
