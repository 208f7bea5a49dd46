//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use icoplanet_terrain::HeightStrategy;

use crate::Config;
use crate::error::ConfigError;

/// icoplanet command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "icoplanet", about = "Procedural icosphere planet generator")]
pub struct CliArgs {
    /// Subdivision passes (0-8).
    #[arg(long, allow_negative_numbers = true)]
    pub subdivisions: Option<i32>,

    /// Maximum displacement height.
    #[arg(long, allow_negative_numbers = true)]
    pub max_height: Option<f32>,

    /// Minimum displacement height.
    #[arg(long, allow_negative_numbers = true)]
    pub min_height: Option<f32>,

    /// Redistribution exponent applied to summed noise.
    #[arg(long)]
    pub redistribution: Option<f32>,

    /// Number of roughness passes.
    #[arg(long)]
    pub roughness_passes: Option<u32>,

    /// Height strategy (Perlin, Fbm, Simplex).
    #[arg(long)]
    pub strategy: Option<String>,

    /// Seed offset as `x,y,z`.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub seed_offset: Option<Vec<f32>>,

    /// Noise permutation seed.
    #[arg(long)]
    pub noise_seed: Option<u32>,

    /// Emit the bare sphere without displacement.
    #[arg(long)]
    pub no_generate: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep running and regenerate whenever `config.ron` changes.
    #[arg(long)]
    pub watch: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    ///
    /// Fails on an unregistered strategy name or a malformed seed offset;
    /// the config is left untouched in that case.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) -> Result<(), ConfigError> {
        let strategy = args
            .strategy
            .as_deref()
            .map(str::parse::<HeightStrategy>)
            .transpose()?;
        let seed_offset = args
            .seed_offset
            .as_deref()
            .map(|v| <[f32; 3]>::try_from(v).map_err(|_| ConfigError::InvalidSeedOffset(v.to_vec())))
            .transpose()?;

        let planet = &mut self.planet;
        if let Some(depth) = args.subdivisions {
            planet.subdivisions = depth;
        }
        if let Some(max) = args.max_height {
            planet.max_height = max;
        }
        if let Some(min) = args.min_height {
            planet.min_height = min;
        }
        if let Some(exp) = args.redistribution {
            planet.redistribution = exp;
        }
        if let Some(passes) = args.roughness_passes {
            planet.roughness_passes = passes;
        }
        if let Some(strategy) = strategy {
            planet.height_strategy = strategy;
        }
        if let Some(offset) = seed_offset {
            planet.seed_offset = offset;
        }
        if let Some(seed) = args.noise_seed {
            planet.noise_seed = seed;
        }
        if args.no_generate {
            planet.generate = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        Ok(())
    }
}
