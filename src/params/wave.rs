//! Wave field parameters: the tunable set handed to the model every frame.
//!
//! Defaults give the stock raging-sea look. All fields are plain data so a
//! whole set can be copied as one snapshot per frame.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{Error, Result};

/// Upper bound on small-wave octaves accepted by [`WaveParams::validate`]
pub const MAX_ITERATIONS: u32 = 16;

/// Large-scale swell: product of two orthogonal traveling sines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BigWave {
    /// Swell height (surface units)
    pub elevation: f32,

    /// Spatial frequency along X (radians per unit)
    pub frequency_x: f32,

    /// Spatial frequency along Z (radians per unit)
    /// Second axis of the plane, hence `_y`
    pub frequency_y: f32,

    /// Phase speed (radians per second)
    pub speed: f32,
}

impl Default for BigWave {
    fn default() -> Self {
        Self {
            elevation: 0.2,
            frequency_x: 4.0,
            frequency_y: 1.5,
            speed: 0.75,
        }
    }
}

/// Small-scale chop: absolute-value octave sum of coherent noise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmallWave {
    /// Base ripple height (surface units)
    pub elevation: f32,

    /// Base noise frequency (cycles per unit)
    pub frequency: f32,

    /// Noise time scale (per second)
    pub speed: f32,

    /// Number of octaves summed (0 = no chop)
    pub iterations: u32,
}

impl Default for SmallWave {
    fn default() -> Self {
        Self {
            elevation: 0.15,
            frequency: 3.0,
            speed: 0.2,
            iterations: 4,
        }
    }
}

/// Per-octave scaling of the small-wave sum
///
/// For octave `i`: frequency × `lacunarity^i`, time × `(1 + i * time_step)`,
/// amplitude ÷ `(i + 1)^falloff`. Defaults give `2^i`, `(i + 1)` and `1 / (i + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OctaveShape {
    pub lacunarity: f32,
    pub time_step: f32,
    pub falloff: f32,
}

impl Default for OctaveShape {
    fn default() -> Self {
        Self {
            lacunarity: 2.0,
            time_step: 1.0,
            falloff: 1.0,
        }
    }
}

/// Displacement → color ramp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorRamp {
    /// Color of troughs
    pub depth_color: Rgb,

    /// Color of crests
    pub surface_color: Rgb,

    /// Displacement at which the ramp starts
    pub offset: f32,

    /// Ramp steepness: mix reaches 1 at `offset + 1 / multiplier`
    pub multiplier: f32,

    /// Surface alpha (applied by the renderer, not part of the ramp)
    pub opacity: f32,
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self {
            depth_color: Rgb::from_u8(0x18, 0x66, 0x91),
            surface_color: Rgb::from_u8(0x9b, 0xd8, 0xff),
            offset: 0.08,
            multiplier: 5.0,
            opacity: 1.0,
        }
    }
}

impl ColorRamp {
    /// Normalized blend weight in [0, 1]
    pub fn mix_factor(&self, displacement: f32) -> f32 {
        let raw = (displacement - self.offset) * self.multiplier;
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, 1.0)
    }

    /// Color for a given displacement
    pub fn shade(&self, displacement: f32) -> Rgb {
        let mix = self.mix_factor(displacement);
        self.depth_color.lerp(self.surface_color, mix)
    }
}

/// Complete parameter set for one evaluation pass
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveParams {
    pub big_wave: BigWave,
    pub small_wave: SmallWave,
    pub octave_shape: OctaveShape,
    pub color: ColorRamp,
}

impl WaveParams {
    /// Parameters with no motion at all (both elevations zero)
    pub fn calm() -> Self {
        let mut params = Self::default();
        params.big_wave.elevation = 0.0;
        params.small_wave.elevation = 0.0;
        params
    }

    /// Check the documented invariants
    ///
    /// Finite everywhere; elevations, frequencies, speeds and scaling factors
    /// non-negative; opacity in [0, 1]; iterations at most [`MAX_ITERATIONS`].
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("big_wave.elevation", self.big_wave.elevation),
            ("big_wave.frequency_x", self.big_wave.frequency_x),
            ("big_wave.frequency_y", self.big_wave.frequency_y),
            ("big_wave.speed", self.big_wave.speed),
            ("small_wave.elevation", self.small_wave.elevation),
            ("small_wave.frequency", self.small_wave.frequency),
            ("small_wave.speed", self.small_wave.speed),
            ("octave_shape.lacunarity", self.octave_shape.lacunarity),
            ("octave_shape.time_step", self.octave_shape.time_step),
            ("octave_shape.falloff", self.octave_shape.falloff),
            ("color.multiplier", self.color.multiplier),
        ];

        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "{} must be finite and >= 0, got {}",
                    name, value
                )));
            }
        }

        if !self.color.offset.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "color.offset must be finite, got {}",
                self.color.offset
            )));
        }

        if !(0.0..=1.0).contains(&self.color.opacity) {
            return Err(Error::InvalidParameter(format!(
                "color.opacity must be in [0, 1], got {}",
                self.color.opacity
            )));
        }

        for (name, c) in [
            ("color.depth_color", self.color.depth_color),
            ("color.surface_color", self.color.surface_color),
        ] {
            if !c.to_array().iter().all(|v| v.is_finite()) {
                return Err(Error::InvalidParameter(format!("{} is not finite", name)));
            }
        }

        if self.small_wave.iterations > MAX_ITERATIONS {
            return Err(Error::InvalidParameter(format!(
                "small_wave.iterations must be <= {}, got {}",
                MAX_ITERATIONS, self.small_wave.iterations
            )));
        }

        Ok(())
    }

    /// Parse a JSON preset; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let params: WaveParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Load and validate a JSON preset file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Write the set as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
