//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use glam::Vec3;
use icoplanet_mesh::Gradient;
use icoplanet_terrain::{HeightParams, HeightStrategy};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name used inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Deepest subdivision accepted from configuration.
pub const MAX_SUBDIVISIONS: i32 = 8;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Planet generation settings.
    pub planet: PlanetConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Everything that shapes a generated planet.
///
/// Any change to these values requires a full regeneration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    /// Subdivision passes applied to the icosahedron (0..=8).
    pub subdivisions: i32,
    /// Upper clamp for the shaped height.
    pub max_height: f32,
    /// Lower clamp for the shaped height.
    pub min_height: f32,
    /// Exponent applied to summed noise.
    pub redistribution: f32,
    /// Extra high-frequency displacement passes after the primary shape.
    pub roughness_passes: u32,
    /// Which height strategy samples the noise.
    pub height_strategy: HeightStrategy,
    /// Offset added to every sample position; acts as the terrain seed.
    pub seed_offset: [f32; 3],
    /// Seed for the underlying noise permutation table.
    pub noise_seed: u32,
    /// When `false`, the bare sphere is emitted in the neutral color.
    pub generate: bool,
    /// Ramp mapping normalized displacement to color.
    pub gradient: Gradient,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for PlanetConfig {
    fn default() -> Self {
        let height = HeightParams::default();
        Self {
            subdivisions: 3,
            max_height: height.max_height,
            min_height: height.min_height,
            redistribution: height.redistribution,
            roughness_passes: 1,
            height_strategy: HeightStrategy::Perlin,
            seed_offset: [0.0; 3],
            noise_seed: 0,
            generate: true,
            gradient: Gradient::earth(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Validation ---

impl PlanetConfig {
    /// Reject settings that cannot produce a mesh.
    ///
    /// Height, offset and gradient settings only shape a displaced planet,
    /// so they are checked only while `generate` is set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.depth()?;
        if !self.generate {
            return Ok(());
        }
        self.height_params().validate()?;
        if self.seed_offset.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::InvalidSeedOffset(self.seed_offset.to_vec()));
        }
        if self.gradient.is_empty() {
            return Err(ConfigError::EmptyGradient);
        }
        Ok(())
    }

    /// Subdivision depth as an unsigned pass count.
    pub fn depth(&self) -> Result<u32, ConfigError> {
        if (0..=MAX_SUBDIVISIONS).contains(&self.subdivisions) {
            Ok(self.subdivisions as u32)
        } else {
            Err(ConfigError::InvalidSubdivisions {
                value: self.subdivisions,
                max: MAX_SUBDIVISIONS,
            })
        }
    }

    /// Height shaping parameters.
    pub fn height_params(&self) -> HeightParams {
        HeightParams {
            max_height: self.max_height,
            min_height: self.min_height,
            redistribution: self.redistribution,
        }
    }

    /// Seed offset as a vector.
    pub fn seed_offset(&self) -> Vec3 {
        Vec3::from_array(self.seed_offset)
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Platform config directory for this application, if one exists.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("icoplanet"))
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(config_path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
