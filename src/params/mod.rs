//! Parameter definitions with units and documented semantics.
//!
//! Defaults describe the stock raging-sea scene:
//! - Wave field and color ramp (tunable at runtime)
//! - Grid geometry and noise seed (fixed at startup)
//! - Camera presets, window, projection and recording settings

mod camera;
mod ocean;
mod render;
mod wave;

// Re-export all types
pub use camera::{CameraPreset, FixedCamera, OrbitCamera};
pub use ocean::OceanGeometry;
pub use render::{RecordingConfig, RenderConfig, SnapshotConfig};
pub use wave::{BigWave, ColorRamp, OctaveShape, SmallWave, WaveParams, MAX_ITERATIONS};
