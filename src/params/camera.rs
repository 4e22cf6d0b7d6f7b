//! Camera configuration and presets.

/// Stationary camera (default starting view)
#[derive(Debug, Clone)]
pub struct FixedCamera {
    /// Camera position
    pub position: [f32; 3],

    /// Look-at target
    pub target: [f32; 3],
}

impl Default for FixedCamera {
    fn default() -> Self {
        Self {
            position: [1.0, 1.0, 1.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Camera circling the target at constant height
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Horizontal distance from target
    pub radius: f32,

    /// Height above target
    pub height: f32,

    /// Angular speed (radians per second)
    pub angular_speed: f32,

    /// Look-at target
    pub target: [f32; 3],
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            radius: 1.414, // Same distance as the fixed view
            height: 1.0,
            angular_speed: 0.1,
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Camera preset selection
#[derive(Debug, Clone)]
pub enum CameraPreset {
    /// Fixed preset: stationary view at (1, 1, 1)
    Fixed(FixedCamera),

    /// Orbit preset: slow automatic turn around the origin
    Orbit(OrbitCamera),
}

impl Default for CameraPreset {
    fn default() -> Self {
        Self::Fixed(FixedCamera::default())
    }
}
