//! Headless top-down renders of the wave field.
//!
//! Evaluates the model on a pixel grid without touching the GPU, which makes
//! it handy for inspecting presets and for tests.

use image::{GrayImage, Luma, Rgb as Pixel, RgbImage};
use rayon::prelude::*;

use crate::error::Result;
use crate::noise::CoherentNoise;
use crate::params::{SnapshotConfig, WaveParams};
use crate::wave::{SurfaceSample, WaveModel};

/// Surface position at the centre of pixel (px, py)
fn pixel_to_surface(px: u32, py: u32, config: &SnapshotConfig) -> (f32, f32) {
    let size = config.size_px.max(1) as f32;
    let half = config.extent_m / 2.0;
    let x = (px as f32 + 0.5) / size * config.extent_m - half;
    let z = (py as f32 + 0.5) / size * config.extent_m - half;
    (x, z)
}

/// Row-major index of pixel (px, py), computed in `usize`
fn pixel_index(px: u32, py: u32, size: u32) -> usize {
    py as usize * size as usize + px as usize
}

/// Evaluate every pixel, rows in parallel, row-major order
fn sample_grid<N>(
    model: &WaveModel<N>,
    params: &WaveParams,
    config: &SnapshotConfig,
) -> Vec<SurfaceSample>
where
    N: CoherentNoise + Sync,
{
    let size = config.size_px;

    (0..size)
        .into_par_iter()
        .flat_map_iter(|py| {
            (0..size).map(move |px| {
                let (x, z) = pixel_to_surface(px, py, config);
                model.evaluate(x, z, config.time_s, params)
            })
        })
        .collect()
}

/// RGB image of the color ramp
pub fn render_color_map<N>(
    model: &WaveModel<N>,
    params: &WaveParams,
    config: &SnapshotConfig,
) -> RgbImage
where
    N: CoherentNoise + Sync,
{
    let samples = sample_grid(model, params, config);
    let size = config.size_px;

    RgbImage::from_fn(size, size, |px, py| {
        Pixel(samples[pixel_index(px, py, size)].color.to_u8())
    })
}

/// Grayscale image of displacement, normalized to the sampled range
///
/// A flat field renders uniform mid-gray.
pub fn render_height_map<N>(
    model: &WaveModel<N>,
    params: &WaveParams,
    config: &SnapshotConfig,
) -> GrayImage
where
    N: CoherentNoise + Sync,
{
    let samples = sample_grid(model, params, config);
    let size = config.size_px;

    let (min, max) = samples
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), s| {
            (lo.min(s.displacement), hi.max(s.displacement))
        });
    let range = max - min;

    GrayImage::from_fn(size, size, |px, py| {
        let d = samples[pixel_index(px, py, size)].displacement;
        let level = if range > f32::EPSILON {
            (d - min) / range
        } else {
            0.5
        };
        Luma([(level.clamp(0.0, 1.0) * 255.0).round() as u8])
    })
}

/// Render according to `config` and write the PNG
pub fn write_snapshot<N>(
    model: &WaveModel<N>,
    params: &WaveParams,
    config: &SnapshotConfig,
) -> Result<()>
where
    N: CoherentNoise + Sync,
{
    if config.heightmap {
        render_height_map(model, params, config).save(&config.output)?;
    } else {
        render_color_map(model, params, config).save(&config.output)?;
    }

    log::info!(
        "Wrote {}x{} {} snapshot at t={}s to {}",
        config.size_px,
        config.size_px,
        if config.heightmap { "height" } else { "color" },
        config.time_s,
        config.output.display()
    );
    Ok(())
}
