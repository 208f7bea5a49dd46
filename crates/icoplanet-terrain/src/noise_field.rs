//! Continuous scalar fields sampled by the height strategies.
//!
//! Any `noise::NoiseFn<f64, 3>` is a [`NoiseField`], so the generators from
//! the `noise` crate (`Perlin`, `Simplex`, `Constant`, combinators) plug in
//! directly. The field is evaluated in `f32` to match mesh precision.

use glam::Vec3;
use noise::NoiseFn;

/// A pure, bounded scalar function over 3D space.
///
/// Implementations must be deterministic: the same point always yields the
/// same value. The output range is implementation defined (typically about
/// `[-1, 1]`); callers apply their own clamping.
pub trait NoiseField: Send + Sync {
    /// Sample the field at `(x, y, z)`.
    fn sample3(&self, x: f32, y: f32, z: f32) -> f32;

    /// Sample the field at a vector position.
    fn sample(&self, point: Vec3) -> f32 {
        self.sample3(point.x, point.y, point.z)
    }

    /// Fractal Brownian motion over this field.
    ///
    /// Sums `octaves` samples, starting at amplitude 0.5 and halving it while
    /// the frequency doubles each octave. Zero octaves yield `0.0`.
    fn sample_fbm(&self, point: Vec3, octaves: u32) -> f32 {
        let mut total = 0.0;
        let mut position = point;
        let mut amplitude = 0.5;

        for _ in 0..octaves {
            total += amplitude * self.sample(position);
            position *= 2.0;
            amplitude *= 0.5;
        }

        total
    }
}

impl<T> NoiseField for T
where
    T: NoiseFn<f64, 3> + Send + Sync,
{
    fn sample3(&self, x: f32, y: f32, z: f32) -> f32 {
        self.get([x as f64, y as f64, z as f64]) as f32
    }
}
