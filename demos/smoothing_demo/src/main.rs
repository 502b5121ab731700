use std::error::Error;

use log::info;
use nalgebra::{ UnitQuaternion, Vector3 };
use qsmooth::{ BiQuad, Filter, FilterParams, OnePole, OnePoleQuaternion, QFilter };
use rand::{ rngs::StdRng, SeedableRng };
use rand_distr::{ Distribution, Normal };

const FS: f64 = 100.0;
const FC: f64 = 2.0;
const N_SAMPLES: usize = 500;

fn rms(a: &[f64], b: &[f64]) -> f64 {
    let sum = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>();
    (sum / a.len() as f64).sqrt()
}

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::init_with_level(log::Level::Debug)?;

    let mut rng = StdRng::seed_from_u64(42);
    let noise = Normal::new(0.0, 0.2)?;

    // slow sine buried in gaussian noise
    let clean = (0..N_SAMPLES)
        .map(|n| (2.0 * std::f64::consts::PI * 0.2 * n as f64 / FS).sin())
        .collect::<Vec<f64>>();
    let noisy = clean
        .iter()
        .map(|s| s + noise.sample(&mut rng))
        .collect::<Vec<f64>>();

    let mut onepole = OnePole::<f64>::try_with_fc(FC, FS)?;
    let mut biquad = BiQuad::<f64>::try_with_fc(FC, FS, None)?;
    let smooth_onepole = onepole.filt_frame(&noisy);
    let smooth_biquad = biquad.filt_frame(&noisy);

    info!("[SCALAR] rms error raw: {:.4}", rms(&noisy, &clean));
    info!("[SCALAR] rms error one-pole: {:.4}", rms(&smooth_onepole, &clean));
    info!("[SCALAR] rms error bi-quad: {:.4}", rms(&smooth_biquad, &clean));

    // accelerometer-like vector through the runtime factory
    let qfilter = QFilter::new(FS);
    let mut accel = qfilter.get_designed_filter::<Vector3<f64>>(FilterParams::BiquadParams(FC, Some(0.7)))?;
    let gravity = Vector3::new(0.0, 0.0, -9.81);
    accel.set_value(gravity);
    for _ in 0..N_SAMPLES {
        let jitter = Vector3::new(noise.sample(&mut rng), noise.sample(&mut rng), noise.sample(&mut rng));
        accel.process(&(gravity + jitter));
    }
    info!("[VECTOR] filtered accel: {:?}, error {:.4}", accel.value(), (accel.value() - gravity).norm());

    // orientation jitter around a fixed heading
    let heading = UnitQuaternion::from_euler_angles(0.0, 0.0, 0.8);
    let mut orientation = OnePoleQuaternion::try_with_fc(FC, FS)?;
    for _ in 0..N_SAMPLES {
        let wobble = UnitQuaternion::from_euler_angles(
            noise.sample(&mut rng) * 0.1,
            noise.sample(&mut rng) * 0.1,
            noise.sample(&mut rng) * 0.1
        );
        orientation.process(&(heading * wobble));
    }
    info!(
        "[ROTATION] filtered heading error: {:.4} rad, norm {:.6}",
        orientation.value().angle_to(&heading),
        orientation.value().quaternion().norm()
    );

    Ok(())
}
