//! Camera presets: fixed view or automatic orbit.

use glam::{Mat4, Vec3};

use crate::params::{CameraPreset, FixedCamera, OrbitCamera, RenderConfig};

/// Camera system driven by a preset and the frame time
pub struct CameraSystem {
    preset: CameraPreset,
}

impl CameraSystem {
    /// Create new camera system with specified preset
    pub fn new(preset: CameraPreset) -> Self {
        Self { preset }
    }

    /// Compute camera position and look-at target for given time
    ///
    /// # Returns
    /// Tuple of (eye_position, target_position)
    pub fn compute_position_and_target(&self, time_s: f32) -> (Vec3, Vec3) {
        match &self.preset {
            CameraPreset::Fixed(params) => Self::compute_fixed(params),
            CameraPreset::Orbit(params) => Self::compute_orbit(params, time_s),
        }
    }

    fn compute_fixed(p: &FixedCamera) -> (Vec3, Vec3) {
        (Vec3::from_array(p.position), Vec3::from_array(p.target))
    }

    /// Circle around the target, starting on the +X/+Z diagonal like the fixed view
    fn compute_orbit(p: &OrbitCamera, time_s: f32) -> (Vec3, Vec3) {
        let target = Vec3::from_array(p.target);
        let angle = std::f32::consts::FRAC_PI_4 + time_s * p.angular_speed;

        let eye = target + Vec3::new(angle.cos() * p.radius, p.height, angle.sin() * p.radius);
        (eye, target)
    }

    /// Create view-projection matrix for rendering
    ///
    /// # Returns
    /// Tuple of (view_proj_matrix, camera_position)
    pub fn create_view_proj_matrix(
        &self,
        time_s: f32,
        render_config: &RenderConfig,
    ) -> (Mat4, Vec3) {
        let (eye, target) = self.compute_position_and_target(time_s);

        let view = Mat4::look_at_rh(eye, target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane_m,
            render_config.far_plane_m,
        );

        (proj * view, eye)
    }
}
