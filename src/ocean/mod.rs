//! Ocean surface: tessellated grid displaced by the wave model every frame.

mod mesh;
mod system;

// Re-export public types
pub use mesh::{OceanGrid, Vertex};
pub use system::OceanSystem;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::OceanGeometry;

    #[test]
    fn test_ocean_grid_creation() {
        let geometry = OceanGeometry {
            segments: 16,
            ..Default::default()
        };
        let grid = OceanGrid::new(&geometry);

        // Check vertex count: (segments + 1)^2
        assert_eq!(grid.vertices.len(), (geometry.segments + 1).pow(2));

        // Check triangle count: segments^2 * 2 triangles * 3 indices
        assert_eq!(grid.indices.len(), geometry.segments.pow(2) * 6);
    }
}
