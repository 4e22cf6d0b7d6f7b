//! Rendering, recording and snapshot configuration.

use std::path::PathBuf;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane
    pub near_plane_m: f32,

    /// Far clipping plane
    pub far_plane_m: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 75.0,
            near_plane_m: 0.1,
            far_plane_m: 100.0,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }
}

/// Recording mode configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds)
    pub duration_secs: f32,

    /// Output directory for frames
    pub output_dir: PathBuf,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl RecordingConfig {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            output_dir: PathBuf::from("recording"),
            fps: 60,
        }
    }

    /// Total number of frames to capture
    pub fn total_frames(&self) -> usize {
        (self.duration_secs.max(0.0) * self.fps as f32).ceil() as usize
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> PathBuf {
        self.output_dir.join("frames")
    }

    /// Path of a single captured frame
    pub fn frame_path(&self, frame_num: usize) -> PathBuf {
        self.frames_dir().join(format!("frame_{:05}.png", frame_num))
    }
}

/// Headless top-down render of the surface
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// Output PNG
    pub output: PathBuf,

    /// Image width and height (pixels)
    pub size_px: u32,

    /// Surface extent covered by the image (centred on the origin)
    pub extent_m: f32,

    /// Elapsed time to evaluate at (seconds)
    pub time_s: f32,

    /// Grayscale displacement instead of the color ramp
    pub heightmap: bool,
}

impl SnapshotConfig {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            size_px: 512,
            extent_m: 2.0,
            time_s: 0.0,
            heightmap: false,
        }
    }
}
