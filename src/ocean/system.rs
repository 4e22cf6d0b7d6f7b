//! High-level ocean system: evaluates the wave model over the grid.

use rayon::prelude::*;

use super::mesh::OceanGrid;
use crate::params::{OceanGeometry, WaveParams};
use crate::wave::WaveModel;

/// Ocean grid plus the wave model that displaces it
pub struct OceanSystem {
    pub grid: OceanGrid,
    model: WaveModel,
}

impl OceanSystem {
    /// Create new ocean system with specified geometry
    pub fn new(geometry: &OceanGeometry) -> Self {
        Self {
            grid: OceanGrid::new(geometry),
            model: WaveModel::with_seed(geometry.noise_seed),
        }
    }

    pub fn model(&self) -> &WaveModel {
        &self.model
    }

    /// Recompute every vertex for this frame
    ///
    /// Vertices are independent, so the pass runs data-parallel. `params`
    /// must be a snapshot that stays fixed for the whole pass.
    ///
    /// # Arguments
    /// * `time_s` - Elapsed time in seconds
    /// * `params` - Wave parameters for this frame
    pub fn update(&mut self, time_s: f32, params: &WaveParams) {
        let model = &self.model;
        let opacity = params.color.opacity;

        self.grid.vertices.par_iter_mut().for_each(|vertex| {
            let sample = model.evaluate(vertex.position[0], vertex.position[2], time_s, params);
            vertex.position[1] = sample.displacement;
            vertex.color = sample.color.with_alpha(opacity);
        });

        log::trace!(
            "ocean updated: {} vertices at t={:.3}s",
            self.grid.vertices.len(),
            time_s
        );
    }
}
