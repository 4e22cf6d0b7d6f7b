//! Wave field model: displacement and color for one surface position.
//!
//! Pure function of (x, z, elapsed time, parameters). No internal state, so
//! every vertex of a frame can be evaluated independently and in any order.

use crate::color::Rgb;
use crate::noise::{CoherentNoise, NoiseGenerator};
use crate::params::{BigWave, OctaveShape, SmallWave, WaveParams};

/// Result of evaluating one surface position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSample {
    /// Vertical offset
    pub displacement: f32,

    /// Ramp color for that offset
    pub color: Rgb,
}

/// Large swell: product of two orthogonal traveling sines
pub fn big_wave_term(x: f32, z: f32, time_s: f32, wave: &BigWave) -> f32 {
    let phase = time_s * wave.speed;
    wave.elevation * (x * wave.frequency_x + phase).sin() * (z * wave.frequency_y + phase).sin()
}

/// Wave field model over a coherent noise source
#[derive(Clone, Debug, Default)]
pub struct WaveModel<N = NoiseGenerator> {
    noise: N,
}

impl WaveModel<NoiseGenerator> {
    /// Model over seeded Perlin noise
    pub fn with_seed(seed: u32) -> Self {
        Self::new(NoiseGenerator::new(seed))
    }
}

impl<N: CoherentNoise> WaveModel<N> {
    pub fn new(noise: N) -> Self {
        Self { noise }
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }

    /// Evaluate displacement and color at (x, z)
    pub fn evaluate(&self, x: f32, z: f32, time_s: f32, params: &WaveParams) -> SurfaceSample {
        let displacement = self.displacement(x, z, time_s, params);
        SurfaceSample {
            displacement,
            color: params.color.shade(displacement),
        }
    }

    /// Total vertical offset: big swell plus small chop
    pub fn displacement(&self, x: f32, z: f32, time_s: f32, params: &WaveParams) -> f32 {
        big_wave_term(x, z, time_s, &params.big_wave)
            + self.small_wave_term(x, z, time_s, &params.small_wave, &params.octave_shape)
    }

    /// Sum of `|noise|` octaves
    ///
    /// Taking the absolute value folds smooth noise into sharp crest ridges.
    /// Zero iterations contribute exactly zero.
    pub fn small_wave_term(
        &self,
        x: f32,
        z: f32,
        time_s: f32,
        wave: &SmallWave,
        shape: &OctaveShape,
    ) -> f32 {
        (0..wave.iterations)
            .map(|i| {
                let octave = i as f32;
                let frequency = wave.frequency * shape.lacunarity.powi(i as i32);
                let time = time_s * wave.speed * (1.0 + octave * shape.time_step);
                let attenuation = (1.0 + octave).powf(shape.falloff);

                let n = self.noise.sample(x * frequency, z * frequency, time);
                n.abs() * wave.elevation / attenuation
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ColorRamp;
    use approx::assert_relative_eq;
    use std::cell::RefCell;

    /// Records every sample position and returns a fixed value
    struct FixedNoise {
        value: f32,
        calls: RefCell<Vec<[f32; 3]>>,
    }

    impl FixedNoise {
        fn new(value: f32) -> Self {
            Self {
                value,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CoherentNoise for FixedNoise {
        fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
            self.calls.borrow_mut().push([x, y, z]);
            self.value
        }
    }

    fn demo_params() -> WaveParams {
        WaveParams {
            big_wave: BigWave {
                elevation: 0.2,
                frequency_x: 4.0,
                frequency_y: 1.5,
                speed: 0.75,
            },
            small_wave: SmallWave {
                elevation: 0.0,
                frequency: 3.0,
                speed: 0.2,
                iterations: 0,
            },
            octave_shape: OctaveShape::default(),
            color: ColorRamp {
                depth_color: Rgb::from_u8(0x18, 0x66, 0x91),
                surface_color: Rgb::from_u8(0x9b, 0xd8, 0xff),
                offset: 0.08,
                multiplier: 5.0,
                opacity: 1.0,
            },
        }
    }

    #[test]
    fn test_origin_at_time_zero_is_flat_depth_color() {
        let model = WaveModel::with_seed(0);
        let params = demo_params();

        let sample = model.evaluate(0.0, 0.0, 0.0, &params);

        assert_eq!(sample.displacement, 0.0);
        assert_eq!(params.color.mix_factor(sample.displacement), 0.0);
        assert_eq!(sample.color, params.color.depth_color);
    }

    #[test]
    fn test_big_wave_matches_formula() {
        let wave = BigWave::default();
        let (x, z, t) = (0.3, -0.7, 2.1);

        let expected = wave.elevation
            * (x * wave.frequency_x + t * wave.speed).sin()
            * (z * wave.frequency_y + t * wave.speed).sin();

        assert_relative_eq!(big_wave_term(x, z, t, &wave), expected);
    }

    #[test]
    fn test_octaves_double_frequency_and_step_time() {
        let model = WaveModel::new(FixedNoise::new(0.5));
        let wave = SmallWave {
            elevation: 1.0,
            frequency: 3.0,
            speed: 0.2,
            iterations: 3,
        };

        let total = model.small_wave_term(1.0, 2.0, 10.0, &wave, &OctaveShape::default());

        let calls = model.noise().calls.borrow();
        assert_eq!(calls.len(), 3);
        for (i, call) in calls.iter().enumerate() {
            let freq = 3.0 * 2f32.powi(i as i32);
            assert_relative_eq!(call[0], 1.0 * freq);
            assert_relative_eq!(call[1], 2.0 * freq);
            assert_relative_eq!(call[2], 10.0 * 0.2 * (i as f32 + 1.0), epsilon = 1e-5);
        }

        // 0.5 * (1 + 1/2 + 1/3)
        assert_relative_eq!(total, 0.5 * (1.0 + 0.5 + 1.0 / 3.0), epsilon = 1e-6);
    }

    #[test]
    fn test_negative_noise_folds_upward() {
        let model = WaveModel::new(FixedNoise::new(-0.8));
        let wave = SmallWave {
            elevation: 0.5,
            iterations: 1,
            ..Default::default()
        };

        let term = model.small_wave_term(0.0, 0.0, 0.0, &wave, &OctaveShape::default());
        assert_relative_eq!(term, 0.4);
    }

    #[test]
    fn test_zero_iterations_never_samples_noise() {
        let model = WaveModel::new(FixedNoise::new(1.0));
        let mut params = WaveParams::default();
        params.small_wave.iterations = 0;

        let d = model.displacement(0.4, 0.9, 3.0, &params);

        assert!(model.noise().calls.borrow().is_empty());
        assert_eq!(d, big_wave_term(0.4, 0.9, 3.0, &params.big_wave));
    }

    #[test]
    fn test_custom_octave_shape() {
        let model = WaveModel::new(FixedNoise::new(1.0));
        let wave = SmallWave {
            elevation: 1.0,
            frequency: 1.0,
            speed: 1.0,
            iterations: 2,
        };
        let shape = OctaveShape {
            lacunarity: 3.0,
            time_step: 0.0,
            falloff: 0.0,
        };

        let total = model.small_wave_term(1.0, 1.0, 2.0, &wave, &shape);

        let calls = model.noise().calls.borrow();
        assert_eq!(calls[1], [3.0, 3.0, 2.0]);
        assert_relative_eq!(total, 2.0);
    }

    #[test]
    fn test_calm_sea_is_flat() {
        let model = WaveModel::with_seed(11);
        let params = WaveParams::calm();

        for i in 0..100 {
            let p = i as f32 * 0.05 - 2.5;
            let sample = model.evaluate(p, -p * 0.7, i as f32 * 0.3, &params);
            assert_eq!(sample.displacement, 0.0);
        }
    }
}
