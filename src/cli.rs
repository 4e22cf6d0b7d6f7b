//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::color::Rgb;
use crate::control::ParamOverrides;
use crate::error::Result;
use crate::params::{
    CameraPreset, FixedCamera, OceanGeometry, OrbitCamera, RecordingConfig, SnapshotConfig,
    WaveParams,
};

/// Camera preset names accepted on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CameraChoice {
    /// Stationary view from (1, 1, 1)
    Fixed,
    /// Slow automatic orbit
    Orbit,
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "ragingsea")]
#[command(about = "Procedural raging-sea ocean surface", long_about = None)]
pub struct Args {
    /// JSON parameter preset (missing fields use defaults)
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Reload the preset file whenever it changes
    #[arg(long, requires = "params")]
    pub watch: bool,

    /// Write the effective parameters as JSON and exit
    #[arg(long, value_name = "FILE")]
    pub write_params: Option<PathBuf>,

    /// Camera preset
    #[arg(long, value_enum, default_value_t = CameraChoice::Fixed)]
    pub camera: CameraChoice,

    /// Grid quads per side
    #[arg(long, value_name = "N", default_value_t = 512)]
    pub segments: usize,

    /// Ripple noise seed
    #[arg(long, default_value_t = 0)]
    pub seed: u32,

    /// Override small-wave octave count
    #[arg(long, value_name = "N")]
    pub iterations: Option<u32>,

    /// Override trough color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    pub depth_color: Option<Rgb>,

    /// Override crest color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    pub surface_color: Option<Rgb>,

    /// Record frames to PNG (duration in seconds), then exit
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,

    /// Render a top-down PNG without opening a window, then exit
    #[arg(long, value_name = "PNG")]
    pub snapshot: Option<PathBuf>,

    /// Snapshot time (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 0.0)]
    pub time: f32,

    /// Snapshot size (pixels per side)
    #[arg(long, value_name = "PX", default_value_t = 512)]
    pub size: u32,

    /// Snapshot displacement as grayscale instead of color
    #[arg(long)]
    pub heightmap: bool,
}

impl Args {
    /// Defaults, then the preset file, then command-line overrides
    pub fn build_wave_params(&self) -> Result<WaveParams> {
        let mut params = match &self.params {
            Some(path) => {
                log::info!("Loading parameters from {}", path.display());
                WaveParams::load(path)?
            }
            None => WaveParams::default(),
        };

        self.overrides().apply(&mut params);

        params.validate()?;
        Ok(params)
    }

    /// Values that win over the preset file, including on every reload
    pub fn overrides(&self) -> ParamOverrides {
        ParamOverrides {
            iterations: self.iterations,
            depth_color: self.depth_color,
            surface_color: self.surface_color,
        }
    }

    pub fn ocean_geometry(&self) -> OceanGeometry {
        OceanGeometry {
            segments: self.segments,
            noise_seed: self.seed,
            ..Default::default()
        }
    }

    pub fn camera_preset(&self) -> CameraPreset {
        match self.camera {
            CameraChoice::Fixed => CameraPreset::Fixed(FixedCamera::default()),
            CameraChoice::Orbit => CameraPreset::Orbit(OrbitCamera::default()),
        }
    }

    /// Recording configuration if recording mode is enabled
    pub fn recording_config(&self) -> Result<Option<RecordingConfig>> {
        let Some(duration) = self.record else {
            return Ok(None);
        };

        let config = RecordingConfig::new(duration);
        std::fs::create_dir_all(config.frames_dir())?;
        Ok(Some(config))
    }

    /// Snapshot configuration if snapshot mode is enabled
    pub fn snapshot_config(&self) -> Option<SnapshotConfig> {
        self.snapshot.as_ref().map(|output| SnapshotConfig {
            size_px: self.size,
            time_s: self.time,
            heightmap: self.heightmap,
            ..SnapshotConfig::new(output.clone())
        })
    }
}
