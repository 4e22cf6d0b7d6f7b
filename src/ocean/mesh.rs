//! Ocean grid mesh: a flat XZ plane centred on the origin.

use bytemuck::{Pod, Zeroable};

use crate::params::OceanGeometry;

/// Vertex data for ocean mesh (position + RGBA color)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Ocean grid mesh
///
/// X and Z of every vertex are fixed at creation; only Y and color change.
pub struct OceanGrid {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    segments: usize,
    spacing: f32,
}

impl OceanGrid {
    /// Create a new ocean grid with specified geometry
    pub fn new(geometry: &OceanGeometry) -> Self {
        let segments = geometry.segments.max(1);
        let spacing = geometry.spacing();
        let half_size = geometry.size_m / 2.0;
        let row = segments + 1;

        let mut vertices = Vec::with_capacity(row * row);
        let mut indices = Vec::with_capacity(segments * segments * 6);

        // Generate flat XZ plane grid
        for z in 0..=segments {
            for x in 0..=segments {
                let x_pos = x as f32 * spacing - half_size;
                let z_pos = z as f32 * spacing - half_size;

                vertices.push(Vertex {
                    position: [x_pos, 0.0, z_pos],
                    color: [0.0, 0.0, 0.0, 1.0],
                });
            }
        }

        // Generate triangle indices (counter-clockwise winding seen from +Y)
        for z in 0..segments {
            for x in 0..segments {
                let top_left = (z * row + x) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((z + 1) * row + x) as u32;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Self {
            vertices,
            indices,
            segments,
            spacing,
        }
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Vertex at grid coordinates (column, row)
    pub fn vertex(&self, column: usize, row: usize) -> Option<&Vertex> {
        if column > self.segments || row > self.segments {
            return None;
        }
        self.vertices.get(row * (self.segments + 1) + column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_is_centred() {
        let grid = OceanGrid::new(&OceanGeometry {
            size_m: 2.0,
            segments: 4,
            noise_seed: 0,
        });

        let first = grid.vertex(0, 0).unwrap();
        let last = grid.vertex(4, 4).unwrap();
        assert_eq!(first.position, [-1.0, 0.0, -1.0]);
        assert_eq!(last.position, [1.0, 0.0, 1.0]);
        assert_eq!(grid.spacing(), 0.5);
        assert!(grid.vertex(5, 0).is_none());
    }

    #[test]
    fn test_indices_in_bounds() {
        let grid = OceanGrid::new(&OceanGeometry {
            segments: 8,
            ..Default::default()
        });

        let count = grid.vertices.len() as u32;
        assert!(grid.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn test_zero_segments_still_builds_a_quad() {
        let grid = OceanGrid::new(&OceanGeometry {
            segments: 0,
            ..Default::default()
        });

        assert_eq!(grid.vertices.len(), 4);
        assert_eq!(grid.indices.len(), 6);
    }
}
