//! Behavioural properties of the wave field model over many inputs.

use approx::assert_relative_eq;
use ragingsea::color::Rgb;
use ragingsea::params::{BigWave, ColorRamp, OctaveShape, SmallWave, WaveParams};
use ragingsea::wave::{big_wave_term, WaveModel};

/// Spread of sample positions and times covering both signs
fn sample_points() -> impl Iterator<Item = (f32, f32, f32)> {
    (0..400).map(|i| {
        let i = i as f32;
        let x = (i * 0.618).sin() * 3.0;
        let z = (i * 0.382).cos() * 3.0;
        let t = i * 0.137;
        (x, z, t)
    })
}

#[test]
fn evaluation_is_deterministic() {
    let a = WaveModel::with_seed(5);
    let b = WaveModel::with_seed(5);
    let params = WaveParams::default();

    for (x, z, t) in sample_points() {
        let first = a.evaluate(x, z, t, &params);
        assert_eq!(first, a.evaluate(x, z, t, &params));
        assert_eq!(first, b.evaluate(x, z, t, &params));
    }
}

#[test]
fn zero_octaves_leave_only_the_big_wave() {
    let model = WaveModel::with_seed(0);
    let mut params = WaveParams::default();
    params.small_wave.iterations = 0;

    for (x, z, t) in sample_points() {
        assert_eq!(
            model.displacement(x, z, t, &params),
            big_wave_term(x, z, t, &params.big_wave)
        );
    }
}

#[test]
fn zero_elevations_give_a_flat_surface() {
    let model = WaveModel::with_seed(0);
    let mut params = WaveParams::default();
    params.big_wave.elevation = 0.0;
    params.small_wave.elevation = 0.0;

    for (x, z, t) in sample_points() {
        assert_eq!(model.displacement(x, z, t, &params), 0.0);
    }
}

#[test]
fn small_waves_only_raise_the_surface() {
    let model = WaveModel::with_seed(9);
    let params = WaveParams::default();

    for (x, z, t) in sample_points() {
        let small = model.small_wave_term(x, z, t, &params.small_wave, &params.octave_shape);
        assert!(small >= 0.0);

        // Each octave is at most elevation / (i + 1)
        let bound: f32 = (0..params.small_wave.iterations)
            .map(|i| params.small_wave.elevation / (i as f32 + 1.0))
            .sum();
        assert!(small <= bound + 1e-6);
    }
}

#[test]
fn color_saturates_at_both_ends_of_the_ramp() {
    let ramp = ColorRamp::default();

    // Far below the offset
    assert_eq!(ramp.shade(ramp.offset - 10.0), ramp.depth_color);

    // Past offset + 1 / multiplier
    let top = ramp.shade(ramp.offset + 1.0 / ramp.multiplier + 10.0);
    assert_relative_eq!(top.r, ramp.surface_color.r, epsilon = 1e-6);
    assert_relative_eq!(top.g, ramp.surface_color.g, epsilon = 1e-6);
    assert_relative_eq!(top.b, ramp.surface_color.b, epsilon = 1e-6);
}

#[test]
fn mix_factor_stays_in_unit_range() {
    let model = WaveModel::with_seed(2);
    let mut params = WaveParams::default();
    params.big_wave.elevation = 1.0;
    params.color.multiplier = 10.0;

    for (x, z, t) in sample_points() {
        let d = model.displacement(x, z, t, &params);
        let mix = params.color.mix_factor(d);
        assert!((0.0..=1.0).contains(&mix), "mix {} for displacement {}", mix, d);

        // Resulting channels stay between the two ramp colors
        let c = model.evaluate(x, z, t, &params).color;
        let (lo, hi) = (params.color.depth_color, params.color.surface_color);
        assert!(c.r >= lo.r.min(hi.r) - 1e-6 && c.r <= lo.r.max(hi.r) + 1e-6);
        assert!(c.b >= lo.b.min(hi.b) - 1e-6 && c.b <= lo.b.max(hi.b) + 1e-6);
    }
}

#[test]
fn displacement_is_continuous_in_time() {
    let model = WaveModel::with_seed(4);
    let params = WaveParams::default();
    let dt = 1e-3;

    for &(x, z) in &[(0.0, 0.0), (0.37, -0.81), (-0.9, 0.45)] {
        let mut previous = model.displacement(x, z, 0.0, &params);
        for step in 1..5000 {
            let current = model.displacement(x, z, step as f32 * dt, &params);
            assert!(current.is_finite());
            assert!(
                (current - previous).abs() < 0.01,
                "jump of {} at ({}, {}) step {}",
                current - previous,
                x,
                z,
                step
            );
            previous = current;
        }
    }
}

#[test]
fn big_wave_is_anisotropic() {
    let model = WaveModel::with_seed(0);
    let params = WaveParams {
        big_wave: BigWave {
            elevation: 0.2,
            frequency_x: 4.0,
            frequency_y: 1.5,
            speed: 0.75,
        },
        small_wave: SmallWave {
            iterations: 0,
            ..Default::default()
        },
        ..Default::default()
    };

    let t = 0.9;
    let mut differing = 0;
    for i in 1..50 {
        let p = i as f32 * 0.07;
        let along_x = model.displacement(p, 0.0, t, &params);
        let along_z = model.displacement(0.0, p, t, &params);
        if (along_x - along_z).abs() > 1e-4 {
            differing += 1;
        }
    }
    assert!(differing > 35);
}

#[test]
fn worked_example_at_origin() {
    let model = WaveModel::with_seed(0);
    let params = WaveParams {
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
    };

    let sample = model.evaluate(0.0, 0.0, 0.0, &params);

    assert_eq!(sample.displacement, 0.0);
    assert_eq!(params.color.mix_factor(sample.displacement), 0.0);
    assert_eq!(sample.color, Rgb::from_u8(0x18, 0x66, 0x91));
}
