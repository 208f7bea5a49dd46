//! Radial height displacement driven by summed noise octaves.
//!
//! A [`HeightModel`] turns a point on the unit sphere into a displaced point
//! along the same direction:
//!
//! 1. sample the noise field at `point + seed_offset` scaled by 1x, 2x, 4x
//!    with weights 1.0, 0.5, 0.25 (three-octave turbulence)
//! 2. raise the sum to the redistribution exponent
//! 3. clamp to `[min_height, max_height]`
//! 4. return `point * (1 + height)`

use glam::Vec3;

use crate::noise_field::NoiseField;
use crate::strategy::HeightStrategy;

/// Turbulence octaves as `(frequency, weight, fbm_octaves)`.
///
/// `fbm_octaves` is only consulted by [`HeightStrategy::Fbm`].
pub const OCTAVES: [(f32, f32, u32); 3] = [(1.0, 1.0, 1), (2.0, 0.5, 2), (4.0, 0.25, 3)];

/// Errors raised while configuring a height model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HeightModelError {
    /// `max_height` is below `min_height`, or either bound is not finite.
    #[error("invalid height range [{min}, {max}]")]
    InvalidHeightRange {
        /// Configured lower bound.
        min: f32,
        /// Configured upper bound.
        max: f32,
    },

    /// The redistribution exponent must be finite.
    #[error("redistribution exponent must be finite, got {0}")]
    NonFiniteRedistribution(f32),

    /// No strategy is registered under this name.
    #[error("unknown height strategy: {0:?}")]
    UnknownStrategy(String),
}

/// Shaping parameters shared by every strategy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightParams {
    /// Upper clamp for the shaped height.
    pub max_height: f32,
    /// Lower clamp for the shaped height. May be negative (inward displacement).
    pub min_height: f32,
    /// Exponent applied to the summed noise before clamping.
    pub redistribution: f32,
}

impl Default for HeightParams {
    fn default() -> Self {
        Self {
            max_height: 1.0,
            min_height: 0.0,
            redistribution: 2.0,
        }
    }
}

impl HeightParams {
    /// Check that the bounds are finite with `min <= max` and that the
    /// exponent is finite.
    ///
    /// Zero and negative exponents are accepted: `x^0` is `1`, and the
    /// infinities or NaN a negative exponent can produce are absorbed by
    /// [`shape`](Self::shape).
    pub fn validate(&self) -> Result<(), HeightModelError> {
        if !self.min_height.is_finite()
            || !self.max_height.is_finite()
            || self.max_height < self.min_height
        {
            return Err(HeightModelError::InvalidHeightRange {
                min: self.min_height,
                max: self.max_height,
            });
        }
        if !self.redistribution.is_finite() {
            return Err(HeightModelError::NonFiniteRedistribution(
                self.redistribution,
            ));
        }
        Ok(())
    }

    /// Apply redistribution and clamping to a raw turbulence sum.
    ///
    /// A negative sum raised to a fractional exponent has no real value; it
    /// is treated as below the floor and maps to `min_height`.
    pub fn shape(&self, raw: f32) -> f32 {
        let height = raw.powf(self.redistribution);
        if height.is_nan() {
            return self.min_height;
        }
        height.clamp(self.min_height, self.max_height)
    }
}

/// Displaces sphere points with one strategy over one noise field.
///
/// Holds only shared references, so a model can be used from many threads
/// at once.
#[derive(Clone, Copy)]
pub struct HeightModel<'a> {
    strategy: HeightStrategy,
    params: HeightParams,
    noise: &'a dyn NoiseField,
}

impl<'a> HeightModel<'a> {
    /// Create a model, rejecting invalid parameters.
    pub fn new(
        strategy: HeightStrategy,
        params: HeightParams,
        noise: &'a dyn NoiseField,
    ) -> Result<Self, HeightModelError> {
        params.validate()?;
        Ok(Self {
            strategy,
            params,
            noise,
        })
    }

    /// The active strategy.
    pub fn strategy(&self) -> HeightStrategy {
        self.strategy
    }

    /// The shaping parameters.
    pub fn params(&self) -> &HeightParams {
        &self.params
    }

    /// Three-octave turbulence sum at an already-offset sample position.
    pub fn turbulence(&self, nx: Vec3) -> f32 {
        match self.strategy {
            HeightStrategy::Perlin => OCTAVES
                .iter()
                .map(|&(freq, weight, _)| weight * self.noise.sample(nx * freq))
                .sum(),
            HeightStrategy::Fbm => OCTAVES
                .iter()
                .map(|&(freq, weight, octaves)| weight * self.noise.sample_fbm(nx * freq, octaves))
                .sum(),
            HeightStrategy::Simplex => OCTAVES
                .iter()
                .map(|&(freq, weight, _)| {
                    weight * self.noise.sample3(freq * nx.x, freq * nx.y, freq * nx.z)
                })
                .sum(),
        }
    }

    /// Shaped, clamped height for `point` under `seed_offset`.
    pub fn height(&self, point: Vec3, seed_offset: Vec3) -> f32 {
        self.params.shape(self.turbulence(point + seed_offset))
    }

    /// Displace `point` radially: `point * (1 + height)`.
    pub fn displace(&self, point: Vec3, seed_offset: Vec3) -> Vec3 {
        point * (1.0 + self.height(point, seed_offset))
    }
}

impl std::fmt::Debug for HeightModel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeightModel")
            .field("strategy", &self.strategy)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
