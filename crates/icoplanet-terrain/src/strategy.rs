//! The closed registry of height strategies.

use std::fmt;
use std::str::FromStr;

use noise::{Perlin, Simplex};
use serde::{Deserialize, Serialize};

use crate::height_model::HeightModelError;
use crate::noise_field::NoiseField;

/// Selects how summed noise is sampled when displacing the sphere.
///
/// Serialized by variant name (`Perlin`, `Fbm`, `Simplex`). Parsing from a
/// string is case-insensitive, so `"FBM"` selects [`HeightStrategy::Fbm`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeightStrategy {
    /// Three-octave turbulence over vector noise samples.
    #[default]
    Perlin,
    /// Turbulence where each term is itself an fBm with 1, 2, 3 octaves.
    #[serde(alias = "FBM")]
    Fbm,
    /// Three-octave turbulence over scalar `(x, y, z)` simplex samples.
    Simplex,
}

impl HeightStrategy {
    /// Every registered strategy.
    pub const ALL: [HeightStrategy; 3] = [Self::Perlin, Self::Fbm, Self::Simplex];

    /// Canonical name, as written in config files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Perlin => "Perlin",
            Self::Fbm => "Fbm",
            Self::Simplex => "Simplex",
        }
    }

    /// The noise field this strategy samples by default.
    ///
    /// Perlin and Fbm share classic gradient noise; Simplex uses simplex noise.
    pub fn default_noise(self, seed: u32) -> Box<dyn NoiseField> {
        match self {
            Self::Perlin | Self::Fbm => Box::new(Perlin::new(seed)),
            Self::Simplex => Box::new(Simplex::new(seed)),
        }
    }
}

impl fmt::Display for HeightStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeightStrategy {
    type Err = HeightModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| HeightModelError::UnknownStrategy(name.to_string()))
    }
}
